//! Error types for the surfaces around the engine.
//!
//! The step engine itself never fails: underflow, division by zero and
//! negative memory pointers all degrade to defined defaults. Errors only arise
//! where the outside world is involved: building grids, loading and saving
//! program files, editing, and serializing state.
//!
//! # Error Categories
//!
//! - **Grid**: a grid that cannot exist (empty, oversized, wrong cell count)
//! - **Format**: malformed program text
//! - **Editor**: edits addressed outside the grid
//! - **Io**: filesystem and serialization failures

use std::fmt;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type MyceliumResult<T> = Result<T, MyceliumError>;

/// Everything that can go wrong outside the step engine.
#[derive(Debug, Error)]
pub enum MyceliumError {
    /// A grid needs at least one row and one column.
    #[error("program grid must be at least 1x1")]
    EmptyGrid,

    /// A size whose cell count cannot be addressed or allocated.
    #[error("a {width}x{height} grid is too large")]
    GridTooLarge { width: usize, height: usize },

    /// Flat cell buffer does not match `width * height`.
    #[error("expected {expected} cells, found {found}")]
    CellCount { expected: usize, found: usize },

    /// A row whose width differs from the first row.
    #[error("line {line}: row has {found} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A token that is not a six-digit hex color.
    #[error("line {line}, column {column}: invalid cell '{token}' (expected RRGGBB)")]
    InvalidCell {
        line: usize,
        column: usize,
        token: String,
    },

    /// An editor access outside the grid.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Broad classification, mostly for audit records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Grid,
    Format,
    Editor,
    Io,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Grid => "grid",
            ErrorCategory::Format => "format",
            ErrorCategory::Editor => "editor",
            ErrorCategory::Io => "io",
        };
        f.write_str(name)
    }
}

impl MyceliumError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            MyceliumError::EmptyGrid
            | MyceliumError::GridTooLarge { .. }
            | MyceliumError::CellCount { .. } => ErrorCategory::Grid,
            MyceliumError::RaggedRow { .. } | MyceliumError::InvalidCell { .. } => {
                ErrorCategory::Format
            }
            MyceliumError::OutOfBounds { .. } => ErrorCategory::Editor,
            MyceliumError::Io(_) | MyceliumError::Json(_) => ErrorCategory::Io,
        }
    }
}
