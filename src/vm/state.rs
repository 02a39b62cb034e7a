//! Execution state of one Mycelium run.

use serde::Serialize;
use crate::core::{CallStack, Direction, Memory, Stack};

/// The mutable machine: containers and registers for a single run.
///
/// A machine is built fresh for every run and owned by whoever drives it.
/// It holds no reference to the program; the grid is passed to each
/// [`step`](crate::vm::engine::step) call instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Machine {
    pub(crate) stack: Stack,
    pub(crate) memory: Memory,
    pub(crate) calls: CallStack,
    pub(crate) ip_x: i32,
    pub(crate) ip_y: i32,
    pub(crate) direction: Direction,
    pub(crate) mem_ptr: usize,
    pub(crate) halted: bool,
    /// Steps taken so far.
    pub(crate) cycles: u64,
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}

impl Machine {
    /// A machine at the origin heading east, with an empty stack and the
    /// memory tape `[1]`.
    pub fn new() -> Self {
        Self {
            stack: Stack::new(),
            memory: Memory::new(),
            calls: CallStack::new(),
            ip_x: 0,
            ip_y: 0,
            direction: Direction::East,
            mem_ptr: 0,
            halted: false,
            cycles: 0,
        }
    }

    pub fn stack(&self) -> &Stack {
        &self.stack
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn call_stack(&self) -> &CallStack {
        &self.calls
    }

    /// Current instruction pointer `(x, y)`. May lie outside the grid once halted.
    pub fn ip(&self) -> (i32, i32) {
        (self.ip_x, self.ip_y)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn mem_ptr(&self) -> usize {
        self.mem_ptr
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Move the instruction pointer `steps` cells along the current heading.
    #[inline]
    pub(crate) fn advance(&mut self, steps: i32) {
        let (dx, dy) = self.direction.delta();
        self.ip_x = self.ip_x.wrapping_add(dx.wrapping_mul(steps));
        self.ip_y = self.ip_y.wrapping_add(dy.wrapping_mul(steps));
    }

    /// Jump straight to `(x, y)` without moving along the heading.
    #[inline]
    pub(crate) fn translocate(&mut self, x: i32, y: i32) {
        self.ip_x = x;
        self.ip_y = y;
    }

    /// Capture a serializable copy of the state for display.
    pub fn snapshot(&self) -> MachineSnapshot {
        MachineSnapshot {
            stack: self.stack.as_slice().to_vec(),
            memory: self.memory.as_slice().to_vec(),
            call_depth: self.calls.depth(),
            ip: self.ip(),
            direction: self.direction,
            mem_ptr: self.mem_ptr,
            halted: self.halted,
            cycles: self.cycles,
        }
    }
}

/// Point-in-time view of a machine for visualizers and trace output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MachineSnapshot {
    /// Bottom to top.
    pub stack: Vec<i32>,
    pub memory: Vec<i32>,
    pub call_depth: usize,
    pub ip: (i32, i32),
    pub direction: Direction,
    pub mem_ptr: usize,
    pub halted: bool,
    pub cycles: u64,
}
