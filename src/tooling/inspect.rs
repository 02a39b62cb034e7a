//! Cell descriptions for the editor's info mode and `describe`.

use std::fmt;

use serde::Serialize;

use crate::core::{Cell, Program};
use crate::isa::{self, Instruction};

/// Human-readable meaning of a cell, e.g. `Constant: 65 (A)`.
pub fn describe_cell(cell: Cell) -> String {
    isa::decode(cell).to_string()
}

/// One inspected cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellInfo {
    pub x: usize,
    pub y: usize,
    pub cell: Cell,
    pub description: String,
}

impl CellInfo {
    pub fn new(x: usize, y: usize, cell: Cell) -> Self {
        Self {
            x,
            y,
            cell,
            description: describe_cell(cell),
        }
    }
}

impl fmt::Display for CellInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tile@({}, {})", self.x, self.y)?;
        writeln!(f, "{}", self.cell)?;
        write!(f, "{}", self.description)
    }
}

/// Every cell of `program`, row-major.
pub fn inspect_all(program: &Program) -> Vec<CellInfo> {
    program
        .iter()
        .map(|(x, y, cell)| CellInfo::new(x, y, cell))
        .collect()
}

/// Cells that do something, row-major. Skips family 0 and the reserved
/// families, so a mostly blank canvas lists only the painted instructions.
pub fn listing(program: &Program) -> Vec<CellInfo> {
    program
        .iter()
        .filter(|&(_, _, cell)| {
            !matches!(isa::decode(cell), Instruction::Nop | Instruction::Reserved(_))
        })
        .map(|(x, y, cell)| CellInfo::new(x, y, cell))
        .collect()
}
