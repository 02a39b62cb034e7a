//! Drivers that own a machine and step it.
//!
//! The engine has no notion of a time limit; a [`Runner`] adds the optional
//! cycle cap, audit entries, and the replay/trace patterns used by the
//! visualizer.

use std::time::Instant;

use crate::audit::{audit, audit_warn, AuditEntry};
use crate::core::{OutputSink, Program};
use crate::vm::{Machine, MachineSnapshot};
use super::io::NullSink;

/// Driver configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunConfig {
    /// Stop after this many taken steps. `None` runs until the program halts.
    pub max_cycles: Option<u64>,
}

impl RunConfig {
    /// Run without a cycle cap.
    pub fn unbounded() -> Self {
        Self { max_cycles: None }
    }

    /// Run at most `max_cycles` steps.
    pub fn bounded(max_cycles: u64) -> Self {
        Self { max_cycles: Some(max_cycles) }
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// The instruction pointer left the grid.
    Halted,
    /// The cycle cap was reached first.
    CycleLimit,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Halted => "halted",
            RunStatus::CycleLimit => "cycle-limit",
        }
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of [`Runner::run`].
#[derive(Debug, Clone)]
pub struct RunReport {
    pub status: RunStatus,
    /// Steps taken.
    pub cycles: u64,
    /// Final machine state.
    pub machine: Machine,
}

impl RunReport {
    pub fn halted(&self) -> bool {
        self.status == RunStatus::Halted
    }
}

/// Runs programs on fresh machines.
#[derive(Debug, Clone)]
pub struct Runner {
    config: RunConfig,
    /// Name used to identify the program in audit entries.
    label: String,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(RunConfig::default())
    }
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            label: String::from("<memory>"),
        }
    }

    /// Set the program name reported in audit entries.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Run `program` on a fresh machine to completion or the cycle cap.
    pub fn run<S: OutputSink + ?Sized>(&self, program: &Program, out: &mut S) -> RunReport {
        self.drive(program, out, |_| {})
    }

    /// Count the steps `program` takes before halting, discarding output.
    ///
    /// `None` when the cycle cap is hit first. The animated replay uses this
    /// to size its timeline before stepping for real.
    pub fn count_cycles(&self, program: &Program) -> Option<u64> {
        let report = self.run(program, &mut NullSink);
        report.halted().then_some(report.cycles)
    }

    /// Like [`run`](Self::run), calling `on_step` with a snapshot after
    /// every taken step.
    pub fn trace<S, F>(&self, program: &Program, out: &mut S, on_step: F) -> RunReport
    where
        S: OutputSink + ?Sized,
        F: FnMut(&MachineSnapshot),
    {
        let mut on_step = on_step;
        self.drive(program, out, |machine| on_step(&machine.snapshot()))
    }

    fn drive<S, F>(&self, program: &Program, out: &mut S, mut after_step: F) -> RunReport
    where
        S: OutputSink + ?Sized,
        F: FnMut(&Machine),
    {
        audit(AuditEntry::run_started(&self.label, program.width(), program.height()));
        let started = Instant::now();

        let mut machine = Machine::new();
        let status = loop {
            if machine.is_halted() {
                break RunStatus::Halted;
            }
            if self.config.max_cycles.map_or(false, |cap| machine.cycles() >= cap) {
                break RunStatus::CycleLimit;
            }
            if !machine.step(program, out).is_stepped() {
                break RunStatus::Halted;
            }
            after_step(&machine);
        };

        let elapsed = started.elapsed().as_micros() as u64;
        match status {
            RunStatus::Halted => audit(
                AuditEntry::halted(&self.label, machine.cycles(), machine.ip())
                    .with_duration_us(elapsed),
            ),
            RunStatus::CycleLimit => audit_warn(
                "CYCLE_LIMIT",
                "Program",
                &self.label,
                &format!("Stopped after {} cycles without halting", machine.cycles()),
            ),
        }

        RunReport {
            status,
            cycles: machine.cycles(),
            machine,
        }
    }
}
