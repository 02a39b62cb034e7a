//! The program grid handed to the step engine.
//!
//! A `Program` is an immutable snapshot: once built it exposes no mutation, so
//! a run can borrow it while a visualizer reads the same grid. Editing happens
//! on a separately owned [`EditorGrid`](crate::tooling::editor::EditorGrid)
//! which produces fresh snapshots.

use std::{fmt, mem};
use super::cell::Cell;
use super::error::{MyceliumError, MyceliumResult};

/// A fixed-size `width x height` grid of cells, indexed `(x, y)`.
#[derive(Clone, PartialEq, Eq)]
pub struct Program {
    width: usize,
    height: usize,
    /// Row-major: index = `y * width + x`.
    cells: Vec<Cell>,
}

impl Program {
    /// Build a program from row-major cells.
    ///
    /// Rejects empty grids and a cell count that does not match the size.
    pub fn new(width: usize, height: usize, cells: Vec<Cell>) -> MyceliumResult<Self> {
        let expected = Self::cell_count(width, height)?;
        if cells.len() != expected {
            return Err(MyceliumError::CellCount {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self { width, height, cells })
    }

    /// Number of cells in a `width x height` grid.
    ///
    /// Both sides must be non-zero and fit the `i32` instruction pointer, and
    /// the cell buffer must be allocatable.
    pub(crate) fn cell_count(width: usize, height: usize) -> MyceliumResult<usize> {
        if width == 0 || height == 0 {
            return Err(MyceliumError::EmptyGrid);
        }
        let max_side = i32::MAX as usize;
        let max_cells = isize::MAX as usize / mem::size_of::<Cell>();
        width
            .checked_mul(height)
            .filter(|&n| width <= max_side && height <= max_side && n <= max_cells)
            .ok_or(MyceliumError::GridTooLarge { width, height })
    }

    /// Assemble from parts the caller has already validated.
    pub(crate) fn from_parts(width: usize, height: usize, cells: Vec<Cell>) -> Self {
        debug_assert!(width > 0 && height > 0 && cells.len() == width * height);
        Self { width, height, cells }
    }

    /// A grid where every cell has the same color.
    pub fn filled(width: usize, height: usize, cell: Cell) -> MyceliumResult<Self> {
        let count = Self::cell_count(width, height)?;
        Self::new(width, height, vec![cell; count])
    }

    /// Build from rows (outer = y, inner = x). All rows must share one width.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> MyceliumResult<Self> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let mut cells = Vec::with_capacity(Self::cell_count(width, height)?);
        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(MyceliumError::RaggedRow {
                    line: y + 1,
                    expected: width,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Self::new(width, height, cells)
    }

    /// A single row, handy for straight-line programs.
    pub fn from_row(row: Vec<Cell>) -> MyceliumResult<Self> {
        Self::from_rows(vec![row])
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `(x, y)` lies inside `[0, width) x [0, height)`.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// The cell at `(x, y)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if self.contains(x, y) {
            Some(self.cells[y as usize * self.width + x as usize])
        } else {
            None
        }
    }

    /// Iterate `(x, y, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i % width, i / width, *cell))
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Program{{{}x{}}}", self.width, self.height)
    }
}
