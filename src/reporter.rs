//! Per-run observation of the pipeline.

use std::time::Duration;

use parking_lot::Mutex;

use crate::error::Error;
use crate::operator::Stage;

/// Receives the progress of a pipeline run.
///
/// A reporter is handed to the [`Pipeline`](crate::Pipeline) that owns it, it only observes the
/// runs of that pipeline. All methods have an empty default implementation.
pub trait Reporter: Send + Sync {
    /// `stage` is about to process `items` elements: the characters of the text for the tokenize
    /// stage, the records produced by the previous stage for the others.
    fn stage_started(&self, _stage: Stage, _items: usize) {}

    /// `stage` completed producing `items` elements.
    fn stage_finished(&self, _stage: Stage, _items: usize, _elapsed: Duration) {}

    /// `stage` failed and the run is aborted.
    fn stage_failed(&self, _stage: Stage, _error: &Error) {}
}

/// Forward the events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn stage_started(&self, stage: Stage, items: usize) {
        debug!("{} stage started with {} items", stage, items);
    }

    fn stage_finished(&self, stage: Stage, items: usize, elapsed: Duration) {
        info!(
            "{} stage produced {} items in {:?}",
            stage, items, elapsed
        );
    }

    fn stage_failed(&self, stage: Stage, error: &Error) {
        error!("{} stage failed: {}", stage, error);
    }
}

/// Ignore every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl Reporter for SilentReporter {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StageEvent {
    Started { stage: Stage, items: usize },
    Finished { stage: Stage, items: usize },
    Failed { stage: Stage, reason: String },
}

/// Keep every event in memory, without the timings.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<StageEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn events(&self) -> Vec<StageEvent> {
        self.events.lock().clone()
    }
}

impl Reporter for RecordingReporter {
    fn stage_started(&self, stage: Stage, items: usize) {
        self.events.lock().push(StageEvent::Started { stage, items });
    }

    fn stage_finished(&self, stage: Stage, items: usize, _elapsed: Duration) {
        self.events.lock().push(StageEvent::Finished { stage, items });
    }

    fn stage_failed(&self, stage: Stage, error: &Error) {
        self.events.lock().push(StageEvent::Failed {
            stage,
            reason: error.to_string(),
        });
    }
}
