//! Virtual machine for Mycelium programs.
//!
//! - `state`: the [`Machine`] (stack, memory tape, call stack, instruction
//!   pointer, heading, halted flag) and its serializable [`MachineSnapshot`]
//! - `engine`: the single-step interpreter, [`step`]
//! - `arith`: family 11 integer semantics
//!
//! A machine is built per run and owned by its driver. The program grid is
//! borrowed read-only for each step, so a visualizer may read the same grid
//! while a run is in progress.

pub mod arith;
pub mod engine;
pub mod state;

pub use engine::{run_to_halt, step, StepOutcome};
pub use state::{Machine, MachineSnapshot};
