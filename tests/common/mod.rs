//! Shared test utilities for Mycelium integration tests.
//!
//! This module provides:
//! - Program builders from text rows or cell tuples
//! - Run helpers returning output and report
//! - Assertion helpers for machine state
//!
//! ## AAA Pattern
//!
//! All tests follow the Arrange-Act-Assert pattern:
//! - Arrange: Set up the program and configuration
//! - Act: Execute the operation under test
//! - Assert: Verify the expected outcome

#![allow(dead_code)]

use mycelium::*;

// =============================================================================
// Program Builders
// =============================================================================

/// Parse program text.
///
/// # Panics
/// Panics if parsing fails, which is appropriate for test code.
pub fn grid(source: &str) -> Program {
    parser::parse(source).expect("Failed to parse program")
}

/// A single-row program from `(r, g, b)` triples.
pub fn row(cells: &[(u8, u8, u8)]) -> Program {
    Program::from_row(cells.iter().map(|&c| Cell::from(c)).collect())
        .expect("Failed to build program")
}

// =============================================================================
// Execution Helpers
// =============================================================================

/// Default cap so a broken test cannot hang the suite.
pub const TEST_CYCLE_CAP: u64 = 100_000;

/// Run to completion (or the test cap), collecting text output.
pub fn run(program: &Program) -> (String, RunReport) {
    let mut out = String::new();
    let report = Runner::new(RunConfig::bounded(TEST_CYCLE_CAP)).run(program, &mut out);
    (out, report)
}

/// Run program text and return only its output.
pub fn output_of(source: &str) -> String {
    run(&grid(source)).0
}

/// Step a fresh machine `n` times.
pub fn step_n(program: &Program, n: usize) -> Machine {
    let mut machine = Machine::new();
    for _ in 0..n {
        machine.step(program, &mut NullSink);
    }
    machine
}

// =============================================================================
// Assertions
// =============================================================================

pub fn assert_halted(report: &RunReport) {
    assert_eq!(
        report.status,
        RunStatus::Halted,
        "Expected program to halt, stopped after {} cycles",
        report.cycles
    );
}

pub fn assert_stack(machine: &Machine, expected: &[i32]) {
    assert_eq!(machine.stack().as_slice(), expected, "stack mismatch");
}
