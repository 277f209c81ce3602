use std::io::Write;

use crate::error::Result;
use crate::operator::sink::Sink;
use crate::operator::RankedEntry;

/// Write the ranking as CSV with a `word,total` header.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::WriterBuilder::default()
                .has_headers(true)
                .from_writer(writer),
        }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| std::io::Error::new(e.error().kind(), e.error().to_string()).into())
    }
}

impl<W: Write> Sink for CsvSink<W> {
    fn consume(&mut self, ranked: &[RankedEntry]) -> Result<()> {
        for entry in ranked {
            self.writer.serialize(entry)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
