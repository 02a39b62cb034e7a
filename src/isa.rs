//! Instruction set and opcode decoder.
//!
//! Every cell decodes to exactly one [`Instruction`]. The family comes from
//! `r mod 16`; each family then picks its operation from the blue channel
//! (`b mod 4`, `b mod 8` or `b mod 32`) or uses `g`/`b` as a literal operand.
//! Decoding is total: codes with no assigned meaning decode to variants that
//! execute as no-ops.
//!
//! | family | instruction |
//! |---|---|
//! | 0 | no-op |
//! | 1 | set direction (`b mod 4`) |
//! | 2 | jump `256*g+b` |
//! | 3 | pop, jump `256*g+b` if zero |
//! | 4 | translocate (`b mod 4`) |
//! | 5 | memory (`b mod 8`) |
//! | 8 | push `256*g+b` |
//! | 9 | push `g`, push `b` |
//! | 10 | stack (`b mod 4`) |
//! | 11 | math (`b mod 32`) |
//! | 12 | I/O (`b mod 4`) |
//! | 6, 7, 13-15 | reserved |

use std::fmt;
use crate::core::{Cell, Direction};

/// A fully decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Family 0.
    Nop,
    /// Family 1: change the instruction pointer's heading.
    SetDirection(Direction),
    /// Family 2: move the instruction pointer along its heading.
    Jump(u16),
    /// Family 3: pop; jump if the popped value is zero.
    JumpIfZero(u16),
    /// Family 4.
    Translocate(TranslocateOp),
    /// Family 5.
    Memory(MemoryOp),
    /// Family 8: push a 16-bit constant.
    PushConstant(u16),
    /// Family 9: push `g`, then push `b`.
    PushPair(u8, u8),
    /// Family 10.
    Stack(StackOp),
    /// Family 11: pop `x`, pop `y` (unless unary), push `x OP y`.
    Math(MathOp),
    /// Family 12.
    Io(IoOp),
    /// Families 6, 7 and 13-15 have no assigned meaning.
    Reserved(u8),
}

/// Family 4 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslocateOp {
    /// Pop `y`, pop `x`, move the instruction pointer to `(x, y)`.
    Goto,
    /// Save a return frame, then `Goto`.
    Call,
    /// Restore position and heading from the newest frame.
    Return,
    /// `b mod 4 == 3`.
    Unassigned,
}

/// Family 5 operations on the memory tape and its pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryOp {
    /// `mem[ptr] = pop()`
    Store,
    /// `push(mem[ptr])`
    Load,
    /// `ptr = max(pop(), 0)`
    SetPointer,
    /// `push(ptr)`
    PushPointer,
    /// `ptr += 1`
    Increment,
    /// `ptr -= 1`, never below zero.
    Decrement,
    /// `b mod 8` in `6..=7`.
    Unassigned(u8),
}

/// Family 10 stack shuffles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackOp {
    Pop,
    Dup,
    Swap,
    DupPair,
}

/// Family 11 operations, selected by `b mod 32`.
///
/// Binary operations compute `x OP y` where `x` is the first value popped
/// (the old top) and `y` the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    BitOr,
    BitAnd,
    BitXor,
    BitNot,
    Shr,
    UShr,
    Shl,
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    LogicalAnd,
    LogicalOr,
    LogicalNot,
    /// Subcodes 21-31: both operands are consumed, nothing is pushed.
    Unassigned(u8),
}

/// Family 12 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IoOp {
    PrintChar,
    /// Input is not supported; executes as a no-op.
    ReadChar,
    PrintInt,
    /// `b mod 4 == 3`.
    Unassigned,
}

/// Decode a cell into its instruction.
pub fn decode(cell: Cell) -> Instruction {
    let Cell { g, b, .. } = cell;
    match cell.family() {
        0 => Instruction::Nop,
        1 => Instruction::SetDirection(Direction::from_code(b)),
        2 => Instruction::Jump(cell.wide_operand()),
        3 => Instruction::JumpIfZero(cell.wide_operand()),
        4 => Instruction::Translocate(TranslocateOp::from_code(b)),
        5 => Instruction::Memory(MemoryOp::from_code(b)),
        8 => Instruction::PushConstant(cell.wide_operand()),
        9 => Instruction::PushPair(g, b),
        10 => Instruction::Stack(StackOp::from_code(b)),
        11 => Instruction::Math(MathOp::from_code(b)),
        12 => Instruction::Io(IoOp::from_code(b)),
        family => Instruction::Reserved(family),
    }
}

impl TranslocateOp {
    pub fn from_code(b: u8) -> Self {
        match b % 4 {
            0 => TranslocateOp::Goto,
            1 => TranslocateOp::Call,
            2 => TranslocateOp::Return,
            _ => TranslocateOp::Unassigned,
        }
    }
}

impl MemoryOp {
    pub fn from_code(b: u8) -> Self {
        match b % 8 {
            0 => MemoryOp::Store,
            1 => MemoryOp::Load,
            2 => MemoryOp::SetPointer,
            3 => MemoryOp::PushPointer,
            4 => MemoryOp::Increment,
            5 => MemoryOp::Decrement,
            code => MemoryOp::Unassigned(code),
        }
    }
}

impl StackOp {
    pub fn from_code(b: u8) -> Self {
        match b % 4 {
            0 => StackOp::Pop,
            1 => StackOp::Dup,
            2 => StackOp::Swap,
            _ => StackOp::DupPair,
        }
    }
}

impl MathOp {
    pub fn from_code(b: u8) -> Self {
        match b % 32 {
            0 => MathOp::Add,
            1 => MathOp::Sub,
            2 => MathOp::Mul,
            3 => MathOp::Div,
            4 => MathOp::Rem,
            5 => MathOp::BitOr,
            6 => MathOp::BitAnd,
            7 => MathOp::BitXor,
            8 => MathOp::BitNot,
            9 => MathOp::Shr,
            10 => MathOp::UShr,
            11 => MathOp::Shl,
            12 => MathOp::Eq,
            13 => MathOp::Ne,
            14 => MathOp::Gt,
            15 => MathOp::Lt,
            16 => MathOp::Ge,
            17 => MathOp::Le,
            18 => MathOp::LogicalAnd,
            19 => MathOp::LogicalOr,
            20 => MathOp::LogicalNot,
            code => MathOp::Unassigned(code),
        }
    }

    /// Whether the operation consumes only `x`.
    pub fn is_unary(&self) -> bool {
        matches!(self, MathOp::BitNot | MathOp::LogicalNot)
    }

    /// Operator symbol as shown in the editor.
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            MathOp::Add => "+",
            MathOp::Sub => "-",
            MathOp::Mul => "*",
            MathOp::Div => "/",
            MathOp::Rem => "%",
            MathOp::BitOr => "|",
            MathOp::BitAnd => "&",
            MathOp::BitXor => "^",
            MathOp::BitNot => "~",
            MathOp::Shr => ">>",
            MathOp::UShr => ">>>",
            MathOp::Shl => "<<",
            MathOp::Eq => "==",
            MathOp::Ne => "!=",
            MathOp::Gt => ">",
            MathOp::Lt => "<",
            MathOp::Ge => ">=",
            MathOp::Le => "<=",
            MathOp::LogicalAnd => "&&",
            MathOp::LogicalOr => "||",
            MathOp::LogicalNot => "!",
            MathOp::Unassigned(_) => return None,
        };
        Some(symbol)
    }
}

impl IoOp {
    pub fn from_code(b: u8) -> Self {
        match b % 4 {
            0 => IoOp::PrintChar,
            1 => IoOp::ReadChar,
            2 => IoOp::PrintInt,
            _ => IoOp::Unassigned,
        }
    }
}

impl Instruction {
    /// The 0-15 family this instruction was decoded from.
    pub fn family(&self) -> u8 {
        match self {
            Instruction::Nop => 0,
            Instruction::SetDirection(_) => 1,
            Instruction::Jump(_) => 2,
            Instruction::JumpIfZero(_) => 3,
            Instruction::Translocate(_) => 4,
            Instruction::Memory(_) => 5,
            Instruction::PushConstant(_) => 8,
            Instruction::PushPair(..) => 9,
            Instruction::Stack(_) => 10,
            Instruction::Math(_) => 11,
            Instruction::Io(_) => 12,
            Instruction::Reserved(family) => *family,
        }
    }

    /// True for reserved families and unassigned subcodes.
    ///
    /// These still execute (possibly consuming stack values, see
    /// [`MathOp::Unassigned`]) but have no documented effect.
    pub fn is_unimplemented(&self) -> bool {
        matches!(
            self,
            Instruction::Reserved(_)
                | Instruction::Translocate(TranslocateOp::Unassigned)
                | Instruction::Memory(MemoryOp::Unassigned(_))
                | Instruction::Math(MathOp::Unassigned(_))
                | Instruction::Io(IoOp::Unassigned)
        )
    }
}

/// A UTF-16 code unit as a `char`, for constant descriptions.
fn as_char(value: u16) -> char {
    char::decode_utf16([value])
        .next()
        .and_then(Result::ok)
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const UNIMPLEMENTED: &str = "Un-implemented";
        match self {
            Instruction::Nop => f.write_str("NO-OP"),
            Instruction::SetDirection(dir) => write!(f, "Direction: {}", dir),
            Instruction::Jump(delta) => write!(f, "Jump: {}", delta),
            Instruction::JumpIfZero(delta) => write!(f, "Conditional jump: {}", delta),
            Instruction::Translocate(op) => match op {
                TranslocateOp::Goto => f.write_str("Move: stack location"),
                TranslocateOp::Call => f.write_str("Move: function call"),
                TranslocateOp::Return => f.write_str("Move: return"),
                TranslocateOp::Unassigned => f.write_str(UNIMPLEMENTED),
            },
            Instruction::Memory(op) => match op {
                MemoryOp::Store => f.write_str("Memory: *MP = pop(stack)"),
                MemoryOp::Load => f.write_str("Memory: stack.add(*MP)"),
                MemoryOp::SetPointer => f.write_str("Memory: MP = pop(stack)"),
                MemoryOp::PushPointer => f.write_str("Memory: stack.add(MP)"),
                MemoryOp::Increment => f.write_str("Memory: MP++"),
                MemoryOp::Decrement => f.write_str("Memory: MP--"),
                MemoryOp::Unassigned(_) => f.write_str(UNIMPLEMENTED),
            },
            Instruction::PushConstant(n) => write!(f, "Constant: {} ({})", n, as_char(*n)),
            Instruction::PushPair(g, b) => write!(
                f,
                "Constants: {} ({}) and {} ({})",
                g,
                as_char(*g as u16),
                b,
                as_char(*b as u16)
            ),
            Instruction::Stack(op) => {
                let what = match op {
                    StackOp::Pop => "pop",
                    StackOp::Dup => "duplicate top",
                    StackOp::Swap => "swap two",
                    StackOp::DupPair => "duplicate two",
                };
                write!(f, "Stack: {}", what)
            }
            Instruction::Math(op) => match op.symbol() {
                Some(symbol) => write!(f, "Math: {}", symbol),
                None => f.write_str(UNIMPLEMENTED),
            },
            Instruction::Io(op) => match op {
                IoOp::PrintChar => f.write_str("I/O: print char"),
                IoOp::ReadChar => f.write_str("I/O: read char"),
                IoOp::PrintInt => f.write_str("I/O: print int"),
                IoOp::Unassigned => f.write_str(UNIMPLEMENTED),
            },
            Instruction::Reserved(_) => f.write_str(UNIMPLEMENTED),
        }
    }
}
