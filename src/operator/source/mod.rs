//! Where the text to analyze comes from.

pub use file::*;
#[cfg(feature = "http")]
pub use http::*;

use crate::error::Result;

mod file;
#[cfg(feature = "http")]
mod http;

/// Provider of the whole text to analyze.
///
/// Failures must be reported as [`Error::Acquisition`](crate::Error::Acquisition): the pipeline
/// does not start when the text is not available.
///
/// Any `Fn() -> Result<String>` is a source:
///
/// ```
/// # use wordfreq::operator::source::TextSource;
/// let source = || -> wordfreq::Result<String> { Ok("some text".to_string()) };
/// assert_eq!(source.fetch().unwrap(), "some text");
/// ```
pub trait TextSource {
    /// Human readable description of the origin of the text.
    fn name(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }

    fn fetch(&self) -> Result<String>;
}

impl<F> TextSource for F
where
    F: Fn() -> Result<String>,
{
    fn fetch(&self) -> Result<String> {
        self()
    }
}

/// Source with the text already in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringSource {
    text: String,
}

impl StringSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl TextSource for StringSource {
    fn name(&self) -> String {
        "in-memory text".to_string()
    }

    fn fetch(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}
