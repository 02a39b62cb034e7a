//! Mutable grid behind the editor canvas.
//!
//! The editor owns its cells; a run always works on an immutable
//! [`Program`] taken with [`EditorGrid::snapshot`], so painting while an
//! animation replays cannot change the program being executed.

use crate::core::{Cell, MyceliumError, MyceliumResult, Program};

/// Default canvas width in cells.
pub const DEFAULT_WIDTH: usize = 30;
/// Default canvas height in cells.
pub const DEFAULT_HEIGHT: usize = 25;

/// An editable `width x height` grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl EditorGrid {
    /// A grid of white cells.
    pub fn new(width: usize, height: usize) -> MyceliumResult<Self> {
        let count = Program::cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::WHITE; count],
        })
    }

    /// Seed the editor with a loaded program.
    pub fn from_program(program: &Program) -> Self {
        Self {
            width: program.width(),
            height: program.height(),
            cells: program.cells().to_vec(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> MyceliumResult<usize> {
        if x < self.width && y < self.height {
            Ok(y * self.width + x)
        } else {
            Err(MyceliumError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    pub fn get(&self, x: usize, y: usize) -> MyceliumResult<Cell> {
        let i = self.index(x, y)?;
        Ok(self.cells[i])
    }

    /// Paint one cell.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> MyceliumResult<()> {
        let i = self.index(x, y)?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Reset every cell to white.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::WHITE);
    }

    /// Copy the current cells into an independent program.
    pub fn snapshot(&self) -> Program {
        Program::from_parts(self.width, self.height, self.cells.clone())
    }
}

impl Default for EditorGrid {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cells: vec![Cell::WHITE; DEFAULT_WIDTH * DEFAULT_HEIGHT],
        }
    }
}
