//! Memory tape for the Mycelium machine.
//!
//! A growable sequence of signed integers that starts as `[1]`. Any access at
//! an index past the end first extends the tape with zeros up to and including
//! that index. The tape never shrinks.

use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    cells: Vec<i32>,
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Memory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Memory{:?}", self.cells)
    }
}

impl Memory {
    /// Create a fresh tape containing the single value 1.
    pub fn new() -> Self {
        Self { cells: vec![1] }
    }

    /// Grow the tape so that `index` is addressable.
    #[inline]
    pub fn ensure(&mut self, index: usize) {
        if index >= self.cells.len() {
            self.cells.resize(index + 1, 0);
        }
    }

    /// Read the value at `index`, extending the tape if needed.
    pub fn read(&mut self, index: usize) -> i32 {
        self.ensure(index);
        self.cells[index]
    }

    /// Write `value` at `index`, extending the tape if needed.
    pub fn write(&mut self, index: usize, value: i32) {
        self.ensure(index);
        self.cells[index] = value;
    }

    /// Get the current tape length.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: the tape starts with one cell and never shrinks.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.cells
    }
}
