//! Output sinks for the I/O instructions.
//!
//! Implementations of [`OutputSink`] for in-memory buffers, writers and
//! runs where output does not matter.

use std::io::{self, Write};
use crate::core::{OutputItem, OutputSink};

/// Appends the text of each item.
impl OutputSink for String {
    fn emit(&mut self, item: OutputItem) {
        match item {
            OutputItem::Char(c) => self.push(c),
            OutputItem::Int(v) => self.push_str(&v.to_string()),
        }
    }
}

/// Records items as-is.
impl OutputSink for Vec<OutputItem> {
    fn emit(&mut self, item: OutputItem) {
        self.push(item);
    }
}

/// Discards everything. Used when only control flow matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl OutputSink for NullSink {
    fn emit(&mut self, _item: OutputItem) {}
}

/// Writes item text straight to an `io::Write`.
///
/// The writer is flushed once, in [`WriterSink::into_result`].
///
/// Emission cannot fail from the engine's point of view, so the first write
/// error is stored and later output is dropped. Check it with
/// [`WriterSink::into_result`] once the run is over.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    error: Option<io::Error>,
    items_written: u64,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
            items_written: 0,
        }
    }

    pub fn items_written(&self) -> u64 {
        self.items_written
    }

    /// Flush and return the writer, or the first error seen.
    pub fn into_result(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> OutputSink for WriterSink<W> {
    fn emit(&mut self, item: OutputItem) {
        if self.error.is_some() {
            return;
        }
        match write!(self.writer, "{}", item) {
            Ok(()) => self.items_written += 1,
            Err(err) => self.error = Some(err),
        }
    }
}
