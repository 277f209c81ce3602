use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::operator::source::TextSource;

/// Source that reads a whole UTF-8 text file.
///
/// ## Example
///
/// ```no_run
/// # use wordfreq::operator::source::{FileSource, TextSource};
/// let source = FileSource::new("/datasets/book.txt");
/// let text = source.fetch().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self { path: path.into() }
    }
}

impl TextSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> Result<String> {
        debug!("Reading text from {}", self.path.display());
        std::fs::read_to_string(&self.path).map_err(|e| Error::acquisition(self.name(), e))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "apple apple\nbanana").unwrap();
        let source = FileSource::new(file.path());
        assert_eq!(source.fetch().unwrap(), "apple apple\nbanana");
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.txt"));
        let err = source.fetch().unwrap_err();
        assert!(err.is_acquisition(), "{err}");
        assert!(err.to_string().contains("missing.txt"));
    }
}
