//! Items produced by the I/O instructions and the sink that receives them.

use std::fmt;
use serde::Serialize;

/// One unit of program output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OutputItem {
    /// Emitted by print-char.
    Char(char),
    /// Emitted by print-int.
    Int(i32),
}

impl OutputItem {
    /// Build a `Char` item from a stack value.
    ///
    /// The value is truncated to 16 bits and read as a UTF-16 code unit; lone
    /// surrogates become U+FFFD.
    pub fn char_from_value(value: i32) -> Self {
        let unit = value as u16;
        let ch = char::decode_utf16([unit])
            .next()
            .and_then(Result::ok)
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        OutputItem::Char(ch)
    }
}

impl fmt::Display for OutputItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputItem::Char(c) => write!(f, "{}", c),
            OutputItem::Int(v) => write!(f, "{}", v),
        }
    }
}

/// Append-only consumer of program output.
///
/// The engine hands every item to the sink during the step that produced it,
/// so sinks observe output in program order.
pub trait OutputSink {
    fn emit(&mut self, item: OutputItem);
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn emit(&mut self, item: OutputItem) {
        (**self).emit(item);
    }
}
