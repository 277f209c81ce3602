use std::io::{Stdout, Write};

use crate::error::Result;
use crate::operator::sink::Sink;
use crate::operator::RankedEntry;

/// Print the ranking as a human readable list.
///
/// ```text
/// Top 2 words by frequency:
/// grape: 3
/// apple: 2
/// ```
#[derive(Debug)]
pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl ConsoleSink<Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Sink for ConsoleSink<W> {
    fn consume(&mut self, ranked: &[RankedEntry]) -> Result<()> {
        writeln!(self.writer, "Top {} words by frequency:", ranked.len())?;
        for entry in ranked {
            writeln!(self.writer, "{}: {}", entry.word, entry.total)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.consume(&[RankedEntry::new("grape", 3), RankedEntry::new("apple", 2)])
            .unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "Top 2 words by frequency:\ngrape: 3\napple: 2\n");
    }

    #[test]
    fn empty_listing() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.consume(&[]).unwrap();
        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "Top 0 words by frequency:\n");
    }
}
