//! Single-step execution.
//!
//! [`step`] advances a [`Machine`] by exactly one cycle against a borrowed
//! [`Program`]:
//!
//! 1. decode the cell under the instruction pointer
//! 2. run its handler, which may touch the stack, memory, call stack,
//!    memory pointer or heading, and may emit output
//! 3. move the instruction pointer one cell along the heading
//! 4. halt if the new position is off the grid
//!
//! Step 3 happens after every instruction, including jumps and
//! translocations that already repositioned the pointer. A jump of `d`
//! therefore lands `d + 1` cells away, and a translocation to `(x, y)`
//! resumes at the cell after `(x, y)`.
//!
//! The engine never faults. Underflow reads as 0, division by zero gives 0,
//! and the memory pointer is clamped at 0.

use crate::audit::{audit, audit_enabled, AuditEntry, Severity};
use crate::core::{Cell, Frame, OutputItem, OutputSink, Program};
use crate::isa::{self, Instruction, IoOp, MathOp, MemoryOp, StackOp, TranslocateOp};
use super::arith;
use super::state::Machine;

/// What a call to [`step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// One instruction executed. The machine may have just halted.
    Stepped,
    /// The machine was already halted; nothing changed.
    Idle,
}

impl StepOutcome {
    #[inline]
    pub fn is_stepped(self) -> bool {
        self == StepOutcome::Stepped
    }
}

/// Execute one cycle.
pub fn step<S: OutputSink + ?Sized>(
    machine: &mut Machine,
    program: &Program,
    out: &mut S,
) -> StepOutcome {
    if machine.halted {
        return StepOutcome::Idle;
    }

    // A machine pointed off this grid (e.g. reused with a smaller program)
    // has nothing to execute.
    let cell = match program.get(machine.ip_x, machine.ip_y) {
        Some(cell) => cell,
        None => {
            machine.halted = true;
            return StepOutcome::Idle;
        }
    };

    let instr = isa::decode(cell);
    if instr.is_unimplemented() || matches!(instr, Instruction::Io(IoOp::ReadChar)) {
        note_unimplemented(machine, instr, cell);
    }
    execute(machine, instr, out);

    machine.advance(1);
    machine.cycles += 1;
    if !program.contains(machine.ip_x, machine.ip_y) {
        machine.halted = true;
    }
    StepOutcome::Stepped
}

/// Step until the machine halts, returning the number of cycles taken.
///
/// Unbounded: a program that never leaves the grid never returns. Use
/// [`Runner`](crate::runtime::Runner) with a cycle cap for untrusted input.
pub fn run_to_halt<S: OutputSink + ?Sized>(
    machine: &mut Machine,
    program: &Program,
    out: &mut S,
) -> u64 {
    let start = machine.cycles;
    while step(machine, program, out).is_stepped() {}
    machine.cycles - start
}

fn execute<S: OutputSink + ?Sized>(m: &mut Machine, instr: Instruction, out: &mut S) {
    match instr {
        Instruction::Nop => {}

        Instruction::SetDirection(dir) => m.direction = dir,

        Instruction::Jump(delta) => m.advance(i32::from(delta)),

        Instruction::JumpIfZero(delta) => {
            if m.stack.pop_or_zero() == 0 {
                m.advance(i32::from(delta));
            }
        }

        Instruction::Translocate(op) => translocate(m, op),

        Instruction::Memory(op) => memory(m, op),

        Instruction::PushConstant(v) => m.stack.push(i32::from(v)),

        Instruction::PushPair(g, b) => {
            m.stack.push(i32::from(g));
            m.stack.push(i32::from(b));
        }

        Instruction::Stack(op) => match op {
            StackOp::Pop => {
                m.stack.pop_or_zero();
            }
            StackOp::Dup => m.stack.dup(),
            StackOp::Swap => m.stack.swap(),
            StackOp::DupPair => m.stack.dup_pair(),
        },

        Instruction::Math(op) => math(m, op),

        Instruction::Io(op) => match op {
            IoOp::PrintChar => {
                let v = m.stack.pop_or_zero();
                out.emit(OutputItem::char_from_value(v));
            }
            IoOp::PrintInt => {
                let v = m.stack.pop_or_zero();
                out.emit(OutputItem::Int(v));
            }
            IoOp::ReadChar | IoOp::Unassigned => {}
        },

        Instruction::Reserved(_) => {}
    }
}

fn translocate(m: &mut Machine, op: TranslocateOp) {
    match op {
        TranslocateOp::Goto => goto_popped(m),
        TranslocateOp::Call => {
            m.calls.push(Frame::new(m.ip_x, m.ip_y, m.direction));
            goto_popped(m);
        }
        TranslocateOp::Return => {
            let frame = m.calls.pop_or_origin();
            m.translocate(frame.x, frame.y);
            m.direction = frame.direction;
        }
        TranslocateOp::Unassigned => {}
    }
}

/// Pop `y`, then `x`, and move there.
fn goto_popped(m: &mut Machine) {
    let y = m.stack.pop_or_zero();
    let x = m.stack.pop_or_zero();
    m.translocate(x, y);
}

fn memory(m: &mut Machine, op: MemoryOp) {
    match op {
        MemoryOp::Store => {
            let v = m.stack.pop_or_zero();
            m.memory.write(m.mem_ptr, v);
        }
        MemoryOp::Load => {
            let v = m.memory.read(m.mem_ptr);
            m.stack.push(v);
        }
        MemoryOp::SetPointer => {
            let target = m.stack.pop_or_zero().max(0);
            m.mem_ptr = target as usize;
            m.memory.ensure(m.mem_ptr);
        }
        MemoryOp::PushPointer => {
            // The pointer is only ever set from a non-negative i32.
            let ptr = i32::try_from(m.mem_ptr).unwrap_or(i32::MAX);
            m.stack.push(ptr);
        }
        MemoryOp::Increment => {
            m.mem_ptr = m.mem_ptr.saturating_add(1);
            m.memory.ensure(m.mem_ptr);
        }
        MemoryOp::Decrement => m.mem_ptr = m.mem_ptr.saturating_sub(1),
        MemoryOp::Unassigned(_) => {}
    }
}

fn math(m: &mut Machine, op: MathOp) {
    let x = m.stack.pop_or_zero();
    let y = if op.is_unary() { 0 } else { m.stack.pop_or_zero() };
    if let Some(result) = arith::apply(op, x, y) {
        m.stack.push(result);
    }
}

fn note_unimplemented(m: &Machine, instr: Instruction, cell: Cell) {
    if audit_enabled(Severity::Debug) {
        audit(AuditEntry::unimplemented_opcode(
            m.ip_x,
            m.ip_y,
            cell,
            &instr.to_string(),
        ));
    }
}

impl Machine {
    /// Execute one cycle of `program`. See [`step`].
    pub fn step<S: OutputSink + ?Sized>(&mut self, program: &Program, out: &mut S) -> StepOutcome {
        step(self, program, out)
    }

    /// Run `program` until the instruction pointer leaves the grid.
    pub fn run_to_halt<S: OutputSink + ?Sized>(&mut self, program: &Program, out: &mut S) -> u64 {
        run_to_halt(self, program, out)
    }
}
