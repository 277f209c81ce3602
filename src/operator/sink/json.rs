use std::io::Write;

use crate::error::Result;
use crate::operator::sink::Sink;
use crate::operator::RankedEntry;

/// Write the ranking as a JSON array of `{"word": .., "total": ..}` objects.
#[derive(Debug)]
pub struct JsonSink<W: Write> {
    writer: W,
    pretty: bool,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pretty: false,
        }
    }

    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for JsonSink<W> {
    fn consume(&mut self, ranked: &[RankedEntry]) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, ranked)?;
        } else {
            serde_json::to_writer(&mut self.writer, ranked)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
