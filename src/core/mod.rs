//! Core types for the Mycelium machine.
//!
//! This module defines the fundamental data types every other layer builds on:
//!
//! - **Cell / Direction**: color triples and instruction-pointer headings
//! - **Program**: the immutable grid a run executes
//! - **Stack**: LIFO of 32-bit integers, pop-on-empty yields 0
//! - **Memory**: zero-filling, never-shrinking tape
//! - **CallStack**: frames for call/return, empty pop yields the origin
//! - **OutputItem / OutputSink**: what the I/O instructions emit, and where
//! - **Error**: failures of the surfaces around the engine
//!
//! # Layer 0 - No Internal Dependencies

pub mod cell;
pub mod program;
pub mod stack;
pub mod memory;
pub mod call_stack;
pub mod value;
pub mod error;

pub use cell::{Cell, Direction};
pub use program::Program;
pub use stack::Stack;
pub use memory::Memory;
pub use call_stack::{CallStack, Frame};
pub use value::{OutputItem, OutputSink};
pub use error::{MyceliumError, MyceliumResult, ErrorCategory};
