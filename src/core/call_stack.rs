//! Call frames saved by translocate-call and restored by translocate-return.

use serde::Serialize;
use super::cell::Direction;

/// Where to resume after a return: the call cell's position and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Frame {
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
}

impl Frame {
    pub fn new(x: i32, y: i32, direction: Direction) -> Self {
        Self { x, y, direction }
    }
}

/// Stack of call frames.
///
/// Returning with no frame on the stack is not an error: it yields the
/// all-zero frame `(0, 0, EAST)` and execution resumes from the origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallStack {
    frames: Vec<Frame>,
}

impl CallStack {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Pop a frame, returning the all-zero frame if empty.
    pub fn pop_or_origin(&mut self) -> Frame {
        self.frames.pop().unwrap_or_default()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
}
