//! Family 11 arithmetic, comparison and logic on 32-bit integers.
//!
//! All operations wrap on overflow. Division and remainder by zero yield 0.
//! Shift counts use only their low five bits. Comparisons and logical
//! operations produce 1 or 0, and any non-zero input counts as true.

use crate::isa::MathOp;

#[inline]
fn truth(b: bool) -> i32 {
    b as i32
}

#[inline]
fn is_true(v: i32) -> bool {
    v != 0
}

/// `x / y`, truncating toward zero; 0 when `y == 0`.
#[inline]
pub fn value_div(x: i32, y: i32) -> i32 {
    if y == 0 { 0 } else { x.wrapping_div(y) }
}

/// `x % y` with the sign of `x`; 0 when `y == 0`.
#[inline]
pub fn value_rem(x: i32, y: i32) -> i32 {
    if y == 0 { 0 } else { x.wrapping_rem(y) }
}

/// Logical (zero-filling) right shift.
#[inline]
pub fn value_ushr(x: i32, y: i32) -> i32 {
    (x as u32).wrapping_shr(y as u32) as i32
}

/// Evaluate `x OP y`. Unary operations ignore `y`.
///
/// Returns `None` for unassigned subcodes, which push nothing.
pub fn apply(op: MathOp, x: i32, y: i32) -> Option<i32> {
    let result = match op {
        MathOp::Add => x.wrapping_add(y),
        MathOp::Sub => x.wrapping_sub(y),
        MathOp::Mul => x.wrapping_mul(y),
        MathOp::Div => value_div(x, y),
        MathOp::Rem => value_rem(x, y),
        MathOp::BitOr => x | y,
        MathOp::BitAnd => x & y,
        MathOp::BitXor => x ^ y,
        MathOp::BitNot => !x,
        MathOp::Shr => x.wrapping_shr(y as u32),
        MathOp::UShr => value_ushr(x, y),
        MathOp::Shl => x.wrapping_shl(y as u32),
        MathOp::Eq => truth(x == y),
        MathOp::Ne => truth(x != y),
        MathOp::Gt => truth(x > y),
        MathOp::Lt => truth(x < y),
        MathOp::Ge => truth(x >= y),
        MathOp::Le => truth(x <= y),
        MathOp::LogicalAnd => truth(is_true(x) && is_true(y)),
        MathOp::LogicalOr => truth(is_true(x) || is_true(y)),
        MathOp::LogicalNot => truth(!is_true(x)),
        MathOp::Unassigned(_) => return None,
    };
    Some(result)
}
