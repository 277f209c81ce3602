use std::path::Path;

#[cfg(feature = "clap")]
use std::path::PathBuf;

#[cfg(feature = "clap")]
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tokenizer::DEFAULT_MIN_LENGTH;

/// Environment variable that may contain a TOML document with the pipeline configuration.
pub const CONFIG_ENV_VAR: &str = "WORDFREQ_CONFIG";

/// Number of ranked words returned when nothing else is asked.
pub const DEFAULT_TOP_N: usize = 15;

/// Text analyzed by the command line tool when no input is given.
pub const DEFAULT_URL: &str = "https://gutenberg.net.au/ebooks01/0100021.txt";

/// Number of hardware threads, falling back to 4 when it cannot be queried.
pub fn available_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(4)
}

/// Configuration of a word count pipeline.
///
/// Every field has a default, so a TOML document only needs the keys it overrides:
///
/// ```
/// # use wordfreq::PipelineConfig;
/// let config = PipelineConfig::from_toml_str("top_n = 5").unwrap();
/// assert_eq!(config.top_n, 5);
/// assert_eq!(config.min_length, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Tokens shorter than this many characters are discarded.
    pub min_length: usize,
    /// Number of entries of the ranked result.
    pub top_n: usize,
    /// Size of the worker pool used by the map and reduce stages.
    pub workers: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            top_n: DEFAULT_TOP_N,
            workers: available_parallelism(),
        }
    }
}

impl PipelineConfig {
    /// Default configuration running on `workers` threads.
    pub fn local(workers: usize) -> Self {
        Self {
            workers,
            ..Default::default()
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::Config(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Read the configuration from [`CONFIG_ENV_VAR`], if set.
    pub fn from_env() -> Result<Option<Self>> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(content) => {
                debug!("Reading configuration from ${}", CONFIG_ENV_VAR);
                Self::from_toml_str(&content).map(Some)
            }
            Err(_) => Ok(None),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.workers == 0 {
            return Err(Error::Config("the worker pool needs at least one worker".into()));
        }
        Ok(())
    }

    /// Build the configuration from the command line.
    ///
    /// The base configuration comes from `--config`, then from [`CONFIG_ENV_VAR`], then from the
    /// defaults. The explicit flags override it. The parsed options are returned as well since
    /// they also describe where the text comes from and where the result goes.
    #[cfg(feature = "clap")]
    pub fn from_args() -> Result<(PipelineConfig, CommandLineOptions)> {
        let args = CommandLineOptions::parse();
        let config = args.to_config()?;
        Ok((config, args))
    }
}

/// How the ranked words are printed on the standard output.
#[cfg(feature = "clap")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

#[cfg(feature = "clap")]
#[derive(Debug, Clone, Parser)]
#[command(
    name = "wordfreq",
    about = "Count the most frequent words of a text with a parallel map/shuffle/reduce pipeline",
    version
)]
pub struct CommandLineOptions {
    /// Fetch the text from this URL.
    #[arg(long, conflicts_with = "file")]
    pub url: Option<String>,

    /// Read the text from this file.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Path to a TOML file with the pipeline configuration.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Minimum number of characters of a word.
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Number of words in the result.
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,

    /// Number of worker threads of the map and reduce stages.
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Also draw the result as an SVG pie chart in this file.
    #[arg(long)]
    pub chart: Option<PathBuf>,

    /// Format of the result printed on stdout.
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,
}

#[cfg(feature = "clap")]
impl CommandLineOptions {
    pub fn to_config(&self) -> Result<PipelineConfig> {
        let mut config = match &self.config {
            Some(path) => PipelineConfig::from_file(path)?,
            None => PipelineConfig::from_env()?.unwrap_or_default(),
        };
        if let Some(min_length) = self.min_length {
            config.min_length = min_length;
        }
        if let Some(top_n) = self.top_n {
            config.top_n = top_n;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        config.validate()?;
        Ok(config)
    }
}
