//! Grid cells and instruction-pointer directions.

use std::fmt;
use serde::{Deserialize, Serialize};

/// One grid position: three independent 8-bit color channels.
///
/// The red channel selects the instruction family, green and blue carry
/// operands. A cell never changes while it is part of a running program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Cell {
    /// Pure white, the editor's blank tile. Family 15, so it executes as a no-op.
    pub const WHITE: Cell = Cell { r: 255, g: 255, b: 255 };

    /// Pure black, family 0 (explicit no-op).
    pub const BLACK: Cell = Cell { r: 0, g: 0, b: 0 };

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Instruction family: `r mod 16`.
    #[inline]
    pub const fn family(&self) -> u8 {
        self.r % 16
    }

    /// The 16-bit operand `256 * g + b` used by jumps and constant pushes.
    #[inline]
    pub const fn wide_operand(&self) -> u16 {
        (self.g as u16) << 8 | self.b as u16
    }
}

impl From<(u8, u8, u8)> for Cell {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Travel direction of the instruction pointer.
///
/// Discriminants match the operand encoding (`b mod 4`) and the value stored
/// in call frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    #[default]
    East = 0,
    South = 1,
    West = 2,
    North = 3,
}

impl Direction {
    /// Decode from any integer by taking it modulo 4.
    #[inline]
    pub const fn from_code(code: u8) -> Self {
        match code % 4 {
            0 => Direction::East,
            1 => Direction::South,
            2 => Direction::West,
            _ => Direction::North,
        }
    }

    /// Unit displacement `(dx, dy)`; y grows downward.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
            Direction::North => (0, -1),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::East => "EAST",
            Direction::South => "SOUTH",
            Direction::West => "WEST",
            Direction::North => "NORTH",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
