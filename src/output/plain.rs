//! Plain text output: one link per line

use crate::collector::ScanSummary;
use crate::output::traits::{DocumentLinks, OutputHandler, OutputResult};
use std::io::Write;

/// Writes every collected link on its own line, in order
#[derive(Debug)]
pub struct PlainTextOutput<W: Write> {
    writer: W,
}

impl<W: Write> PlainTextOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> OutputHandler for PlainTextOutput<W> {
    fn write_document(&mut self, document: &DocumentLinks) -> OutputResult<()> {
        for link in &document.links {
            writeln!(self.writer, "{}", link)?;
        }
        Ok(())
    }

    fn finish(&mut self, _summary: &ScanSummary) -> OutputResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}
