//! Re-exports of the most used items.
//!
//! ```
//! use wordfreq::prelude::*;
//! ```
pub use crate::config::PipelineConfig;
pub use crate::error::{Error, Result};
pub use crate::operator::sink::{
    CollectVecSink, ConsoleSink, CsvSink, JsonSink, PieChartSink, Sink,
};
#[cfg(feature = "http")]
pub use crate::operator::source::HttpSource;
pub use crate::operator::source::{FileSource, StringSource, TextSource};
pub use crate::operator::{RankedEntry, Stage, WordCounts};
pub use crate::pipeline::{count_words, Pipeline};
pub use crate::reporter::{LogReporter, Reporter};
pub use crate::tokenizer::Tokenizer;
