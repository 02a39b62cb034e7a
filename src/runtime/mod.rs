//! Runtime layer: where output goes and who drives the machine.
//!
//! - **IO**: output sinks receiving characters and integers as they are emitted
//! - **Runner**: run-to-completion, cycle counting and tracing drivers

pub mod io;
pub mod runner;

pub use io::{NullSink, WriterSink};
pub use runner::{RunConfig, RunReport, RunStatus, Runner};
