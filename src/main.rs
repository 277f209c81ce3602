use std::process::ExitCode;
use std::time::Instant;

use log::{error, info};

use wordfreq::config::{CommandLineOptions, OutputFormat};
use wordfreq::prelude::*;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let (config, args) = PipelineConfig::from_args()?;
    let pipeline = Pipeline::new(config)?;
    let source = text_source(&args)?;

    let mut sinks: Vec<Box<dyn Sink>> = Vec::new();
    let stdout = std::io::stdout();
    match args.format {
        OutputFormat::Text => sinks.push(Box::new(ConsoleSink::new(stdout))),
        OutputFormat::Json => sinks.push(Box::new(JsonSink::new(stdout).pretty())),
        OutputFormat::Csv => sinks.push(Box::new(CsvSink::new(stdout))),
    }
    if let Some(path) = &args.chart {
        sinks.push(Box::new(PieChartSink::create(path)));
    }

    let start = Instant::now();
    let ranked = pipeline.run_source(source.as_ref(), &mut sinks)?;
    info!(
        "Ranked {} words from {} in {:?}",
        ranked.len(),
        source.name(),
        start.elapsed()
    );
    Ok(())
}

fn text_source(args: &CommandLineOptions) -> Result<Box<dyn TextSource>> {
    if let Some(path) = &args.file {
        return Ok(Box::new(FileSource::new(path)));
    }
    #[cfg(feature = "http")]
    {
        let url = args
            .url
            .clone()
            .unwrap_or_else(|| wordfreq::config::DEFAULT_URL.to_string());
        Ok(Box::new(HttpSource::new(url)))
    }
    #[cfg(not(feature = "http"))]
    {
        Err(Error::Config(
            "built without the `http` feature, pass the text with --file".into(),
        ))
    }
}
