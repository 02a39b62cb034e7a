//! Mycelium: an esoteric language whose programs are grids of colored cells.
//!
//! Each cell's red channel selects an instruction family and its green and
//! blue channels carry operands. An instruction pointer walks the grid,
//! driving a data stack, a growable memory tape and a call stack, until it
//! steps off the edge.
//!
//! ```ignore
//! use mycelium::{parser, Runner};
//!
//! let program = parser::parse("#080041 #0c0000")?;
//! let mut out = String::new();
//! let report = Runner::default().run(&program, &mut out);
//! assert_eq!(out, "A");
//! assert!(report.halted());
//! ```

// ═══════════════════════════════════════════════════════════════════════════
// Layer 0: Core (No internal dependencies)
// ═══════════════════════════════════════════════════════════════════════════
pub mod core;

// ═══════════════════════════════════════════════════════════════════════════
// Layer 1: Instruction set & program text (depends on core)
// ═══════════════════════════════════════════════════════════════════════════
pub mod isa;
pub mod parser;

// ═══════════════════════════════════════════════════════════════════════════
// Layer 2: VM (depends on core, isa)
// ═══════════════════════════════════════════════════════════════════════════
pub mod vm;

// ═══════════════════════════════════════════════════════════════════════════
// Layer 3: Runtime (depends on core, vm)
// ═══════════════════════════════════════════════════════════════════════════
pub mod runtime;

// ═══════════════════════════════════════════════════════════════════════════
// Layer 4: Tooling (depends on all)
// ═══════════════════════════════════════════════════════════════════════════
pub mod tooling;

// ═══════════════════════════════════════════════════════════════════════════
// Cross-cutting
// ═══════════════════════════════════════════════════════════════════════════
pub mod audit;

pub use crate::core::{
    CallStack, Cell, Direction, ErrorCategory, Frame, Memory, MyceliumError, MyceliumResult,
    OutputItem, OutputSink, Program, Stack,
};
pub use isa::{decode, Instruction};
pub use vm::{step, Machine, MachineSnapshot, StepOutcome};
pub use runtime::{NullSink, RunConfig, RunReport, RunStatus, Runner, WriterSink};
pub use tooling::{describe_cell, CellInfo, EditorGrid};
