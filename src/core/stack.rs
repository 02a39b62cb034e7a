//! Data stack for the Mycelium machine.
//!
//! Unbounded LIFO of signed 32-bit integers. Popping an empty stack never
//! fails: it yields 0 and the stack stays empty.

use std::fmt;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Stack {
    elements: Vec<i32>,
}

impl Stack {
    /// Create a new empty stack.
    pub fn new() -> Self {
        Self { elements: Vec::new() }
    }

    /// Get the current depth of the stack.
    #[inline]
    pub fn depth(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn push(&mut self, value: i32) {
        self.elements.push(value);
    }

    /// Pop a value, returning zero if empty.
    #[inline]
    pub fn pop_or_zero(&mut self) -> i32 {
        self.elements.pop().unwrap_or(0)
    }

    /// DUP: ( a -- a a ). An empty stack duplicates an implicit 0.
    pub fn dup(&mut self) {
        let top = self.pop_or_zero();
        self.push(top);
        self.push(top);
    }

    /// SWAP: ( b a -- a b ). Missing operands read as 0.
    pub fn swap(&mut self) {
        let old_top = self.pop_or_zero();
        let old_below = self.pop_or_zero();
        self.push(old_top);
        self.push(old_below);
    }

    /// Duplicate the top two values: ( y x -- x y x y ).
    ///
    /// Pops `x` then `y` and pushes `x y x y`, so the emitted pairs keep the
    /// pop order.
    pub fn dup_pair(&mut self) {
        let x = self.pop_or_zero();
        let y = self.pop_or_zero();
        self.push(x);
        self.push(y);
        self.push(x);
        self.push(y);
    }

    /// Bottom-to-top view of the elements.
    pub fn as_slice(&self) -> &[i32] {
        &self.elements
    }
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stack{:?}", self.elements)
    }
}
