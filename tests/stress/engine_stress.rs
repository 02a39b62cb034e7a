//! Long-running engine tests.
//!
//! These tests are ignored by default. Run with:
//! `cargo test --release -- --ignored`

use mycelium::*;

// ═══════════════════════════════════════════════════════════════════════════
// Looping Stress Tests
// ═══════════════════════════════════════════════════════════════════════════

/// Stress test: count down from 50,000 printing nothing.
///
/// Same loop shape as the countdown demo without the print, checking that
/// a long run halts with the expected cycle count.
#[test]
#[ignore]
fn stress_countdown_50k() {
    // x0 push 50000; x1..x5 body; x6..x7 goto back to x1; x8 exit pad
    let program = parser::parse(
        "08c350 080001 0a0002 0b0001 0a0001 030002 090000 040000 000000",
    )
    .unwrap();

    let report = Runner::default().run(&program, &mut NullSink);

    assert_eq!(report.status, RunStatus::Halted);
    // 7 per non-final iteration, 5 plus the exit pad for the last
    assert_eq!(report.cycles, 1 + 7 * 49_999 + 6);
    assert_eq!(report.machine.stack().as_slice(), &[0]);
}

/// Stress test: a million calls without returns grow the call stack.
#[test]
#[ignore]
fn stress_unbalanced_calls() {
    // push (0, 0) and call it, forever: resumes at x1 which is the call
    let program = parser::parse("090000 040001").unwrap();

    let report = Runner::new(RunConfig::bounded(2_000_000)).run(&program, &mut NullSink);

    assert_eq!(report.status, RunStatus::CycleLimit);
    assert_eq!(report.machine.call_stack().depth(), 1_999_999);
}

/// Stress test: walk the memory pointer a million cells to the right.
#[test]
#[ignore]
fn stress_tape_growth() {
    // ptr++, then goto (-1, 0) so the pointer resumes on x0
    let program = parser::parse("050004 080000 0b0008 080000 040000").unwrap();

    let report = Runner::new(RunConfig::bounded(1_000_000)).run(&program, &mut NullSink);

    let machine = &report.machine;
    assert_eq!(machine.mem_ptr(), 200_000);
    assert_eq!(machine.memory().len(), 200_001);
    assert!(machine.memory().as_slice().iter().copied().enumerate().filter(|&(_, v)| v != 0).all(|(i, v)| i == 0 && v == 1));
}
