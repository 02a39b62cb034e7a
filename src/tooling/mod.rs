//! Tooling layer for Mycelium.
//!
//! - **Editor**: the paintable grid behind the canvas, snapshotted into
//!   programs for execution
//! - **Inspect**: per-cell descriptions for info mode and program listings

pub mod editor;
pub mod inspect;

pub use editor::{EditorGrid, DEFAULT_HEIGHT, DEFAULT_WIDTH};
pub use inspect::{describe_cell, inspect_all, listing, CellInfo};
