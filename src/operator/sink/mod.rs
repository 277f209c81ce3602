//! Consumers of the ranked words.

use std::sync::Arc;

use parking_lot::Mutex;

pub use console::*;
pub use self::csv::*;
pub use json::*;
pub use pie_chart::*;

use crate::error::Result;
use crate::operator::RankedEntry;

mod console;
mod csv;
mod json;
mod pie_chart;

/// Receives the final ranking of a run.
///
/// A sink is invoked only when every stage succeeded, with the entries already sorted.
pub trait Sink {
    fn consume(&mut self, ranked: &[RankedEntry]) -> Result<()>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn consume(&mut self, ranked: &[RankedEntry]) -> Result<()> {
        (**self).consume(ranked)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn consume(&mut self, ranked: &[RankedEntry]) -> Result<()> {
        (**self).consume(ranked)
    }
}

/// Every sink of the list receives the ranking, in order. The first failure stops the others.
impl<S: Sink> Sink for Vec<S> {
    fn consume(&mut self, ranked: &[RankedEntry]) -> Result<()> {
        for sink in self.iter_mut() {
            sink.consume(ranked)?;
        }
        Ok(())
    }
}

pub type StreamOutputRef<Out> = Arc<Mutex<Option<Out>>>;

/// Handle to the result stored by a [`CollectVecSink`].
#[derive(Debug)]
pub struct StreamOutput<Out> {
    result: StreamOutputRef<Out>,
}

impl<Out> StreamOutput<Out> {
    /// Take the collected value, `None` if the sink was never invoked.
    pub fn get(self) -> Option<Out> {
        self.result.lock().take()
    }
}

/// Keep the ranking in memory.
///
/// ```
/// # use wordfreq::operator::sink::{CollectVecSink, Sink};
/// # use wordfreq::operator::RankedEntry;
/// let (mut sink, output) = CollectVecSink::new();
/// sink.consume(&[RankedEntry::new("grape", 3)]).unwrap();
/// assert_eq!(output.get(), Some(vec![RankedEntry::new("grape", 3)]));
/// ```
#[derive(Debug, Clone)]
pub struct CollectVecSink {
    output: StreamOutputRef<Vec<RankedEntry>>,
}

impl CollectVecSink {
    pub fn new() -> (Self, StreamOutput<Vec<RankedEntry>>) {
        let output: StreamOutputRef<_> = Default::default();
        (
            Self {
                output: output.clone(),
            },
            StreamOutput { result: output },
        )
    }
}

impl Sink for CollectVecSink {
    fn consume(&mut self, ranked: &[RankedEntry]) -> Result<()> {
        *self.output.lock() = Some(ranked.to_vec());
        Ok(())
    }
}
