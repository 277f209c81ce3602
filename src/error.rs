use thiserror::Error;

use crate::operator::Stage;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop a word count run.
#[derive(Debug, Error)]
pub enum Error {
    /// The input text could not be obtained, the pipeline was not started.
    #[error("text unavailable from {source_name}: {reason}")]
    Acquisition { source_name: String, reason: String },

    /// A job of a parallel stage returned an error or panicked. The whole run is aborted.
    #[error("{stage} stage failed: {reason}")]
    StageFailure { stage: Stage, reason: String },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn acquisition(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::Acquisition {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn stage(stage: Stage, reason: impl Into<String>) -> Self {
        Self::StageFailure {
            stage,
            reason: reason.into(),
        }
    }

    /// True if the error happened before any stage of the pipeline was run.
    pub fn is_acquisition(&self) -> bool {
        matches!(self, Self::Acquisition { .. })
    }
}
