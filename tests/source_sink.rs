use std::io::Write;
use std::sync::Arc;

use wordfreq::operator::sink::{CollectVecSink, ConsoleSink, JsonSink, PieChartSink, Sink};
use wordfreq::operator::source::{FileSource, StringSource, TextSource};
use wordfreq::operator::{RankedEntry, Stage};
use wordfreq::reporter::{RecordingReporter, StageEvent};
use wordfreq::worker::WorkerPool;
use wordfreq::{Error, Pipeline, PipelineConfig};
use utils::TestHelper;

mod utils;

const BOOK: &str = "Grape, grape! Apple; grape... apple: banana?\nThe end.";

#[test]
fn file_to_console() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(BOOK.as_bytes()).unwrap();
    TestHelper::with_workers(|config| {
        let pipeline = Pipeline::new(PipelineConfig { top_n: 2, ..config }).unwrap();
        let mut sink = ConsoleSink::new(Vec::new());
        pipeline
            .run_source(&FileSource::new(file.path()), &mut sink)
            .unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "Top 2 words by frequency:\ngrape: 2\nGrape: 1\n");
    });
}

#[test]
fn closure_source_to_json() {
    let source = || -> wordfreq::Result<String> { Ok("kiwi kiwi lemon".to_string()) };
    let pipeline = Pipeline::new(PipelineConfig::local(2)).unwrap();
    let mut sink = JsonSink::new(Vec::new());
    pipeline.run_source(&source, &mut sink).unwrap();
    let ranked: Vec<RankedEntry> = serde_json::from_slice(&sink.into_inner()).unwrap();
    assert_eq!(
        ranked,
        vec![RankedEntry::new("kiwi", 2), RankedEntry::new("lemon", 1)]
    );
}

#[test]
fn unavailable_text_stops_everything() {
    let source = || -> wordfreq::Result<String> {
        Err(Error::Acquisition {
            source_name: "https://example.invalid/book.txt".into(),
            reason: "dns error".into(),
        })
    };
    let reporter = Arc::new(RecordingReporter::new());
    let pipeline = Pipeline::new(PipelineConfig::local(2))
        .unwrap()
        .with_reporter(reporter.clone());
    let (mut sink, output) = CollectVecSink::new();
    let err = pipeline.run_source(&source, &mut sink).unwrap_err();
    assert!(err.is_acquisition());
    assert!(reporter.events().is_empty());
    assert_eq!(output.get(), None);
}

#[test]
fn missing_file_is_an_acquisition_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = FileSource::new(dir.path().join("nope.txt"));
    assert!(source.name().ends_with("nope.txt"));
    let (mut sink, output) = CollectVecSink::new();
    let err = Pipeline::new(PipelineConfig::local(1))
        .unwrap()
        .run_source(&source, &mut sink)
        .unwrap_err();
    assert!(matches!(err, Error::Acquisition { .. }));
    assert_eq!(output.get(), None);
}

#[test]
fn chart_and_listing_together() {
    let dir = tempfile::tempdir().unwrap();
    let chart = dir.path().join("top.svg");
    let mut sinks: Vec<Box<dyn Sink>> = vec![
        Box::new(PieChartSink::create(&chart)),
        Box::new(ConsoleSink::new(Vec::new())),
    ];
    let ranked = Pipeline::new(PipelineConfig::local(2))
        .unwrap()
        .run_source(&StringSource::new(BOOK), &mut sinks)
        .unwrap();
    drop(sinks);
    // Grape, grape, Apple, apple, banana
    assert_eq!(ranked.len(), 5);
    let svg = std::fs::read_to_string(chart).unwrap();
    assert!(svg.contains("Top 5 words by frequency"));
    assert_eq!(svg.matches("<path").count(), 5);
}

#[test]
fn failing_job_aborts_the_stage() {
    TestHelper::with_workers(|config| {
        let pool = WorkerPool::new(config.workers);
        let res = pool.try_execute(Stage::Reduce, (0..64u32).collect(), |x| {
            if x % 17 == 16 {
                Err(format!("cannot reduce {x}"))
            } else {
                Ok(x)
            }
        });
        match res {
            Err(Error::StageFailure { stage, reason }) => {
                assert_eq!(stage, Stage::Reduce);
                assert!(reason.starts_with("cannot reduce"), "{reason}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    });
}

#[test]
fn reporter_events_in_order() {
    let reporter = Arc::new(RecordingReporter::new());
    let pipeline = Pipeline::new(PipelineConfig::local(2))
        .unwrap()
        .with_reporter(reporter.clone());
    pipeline.run("grape grape café").unwrap();
    let events = reporter.events();
    assert_eq!(events.len(), 10);
    // characters, not bytes
    assert_eq!(
        events[0],
        StageEvent::Started {
            stage: Stage::Tokenize,
            items: 16
        }
    );
    assert_eq!(
        events[9],
        StageEvent::Finished {
            stage: Stage::Rank,
            items: 2
        }
    );
}
