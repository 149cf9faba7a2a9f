//! Grid module - manages the puzzle grid
//!
//! The grid is a fixed N x N matrix where each cell is empty or filled with
//! a color tag. Uses flat row-major storage. Coordinates are (row, col) with
//! row 0 at the top; anchors are signed so off-grid positions coming from a
//! drag are representable and simply fail the fit test.

use arrayvec::ArrayVec;
use gridfill_types::{Cell, ColorTag, MAX_GRID_SIZE};

use crate::shapes::Shape;

/// Lines emptied by one clearing pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClearedLines {
    /// Indices of rows cleared, ascending
    pub rows: ArrayVec<u8, MAX_GRID_SIZE>,
    /// Indices of columns cleared, ascending
    pub cols: ArrayVec<u8, MAX_GRID_SIZE>,
}

impl ClearedLines {
    /// Total number of lines cleared (rows plus columns)
    pub fn total(&self) -> usize {
        self.rows.len() + self.cols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() && self.cols.is_empty()
    }
}

/// The puzzle grid - N x N cells, flat row-major storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: u8,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid.
    ///
    /// Panics if `size` is zero or exceeds [`MAX_GRID_SIZE`]; dimensions
    /// never change afterwards.
    pub fn new(size: u8) -> Self {
        assert!(
            size >= 1 && (size as usize) <= MAX_GRID_SIZE,
            "grid size must be in 1..={}",
            MAX_GRID_SIZE
        );
        Self {
            size,
            cells: vec![None; size as usize * size as usize],
        }
    }

    /// Side length in cells
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= self.size as i8 || col < 0 || col >= self.size as i8 {
            return None;
        }
        Some((row as usize) * (self.size as usize) + (col as usize))
    }

    /// Get cell at (row, col); None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col); returns false if out of bounds.
    ///
    /// Setup escape hatch for tests and hosts building fixtures. Regular
    /// play mutates cells through `commit` and `clear_full_lines` only.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and empty
    pub fn is_valid(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(None))
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Check whether a shape fits with its top-left corner at the anchor.
    ///
    /// True only if every occupied shape cell maps to an in-bounds, empty
    /// grid cell. Unoccupied shape cells impose no constraint; they may
    /// overlay filled cells or hang off the edge. Pure predicate.
    pub fn can_place(&self, shape: &Shape, anchor_row: i8, anchor_col: i8) -> bool {
        shape
            .cells()
            .iter()
            .all(|&(r, c)| self.is_valid(anchor_row + r, anchor_col + c))
    }

    /// Write a shape's occupied cells as `Filled(color)`.
    ///
    /// Precondition: `can_place` returned true for the same arguments. The
    /// commit itself does not re-validate; the session's single-mutator
    /// model makes check-then-commit safe.
    pub fn commit(&mut self, shape: &Shape, color: ColorTag, anchor_row: i8, anchor_col: i8) {
        debug_assert!(
            self.can_place(shape, anchor_row, anchor_col),
            "commit without a passing fit check"
        );
        for &(r, c) in shape.cells() {
            self.set(anchor_row + r, anchor_col + c, Some(color));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: u8) -> bool {
        if row >= self.size {
            return false;
        }
        let start = (row as usize) * (self.size as usize);
        let end = start + self.size as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Check if a column is completely filled
    pub fn is_col_full(&self, col: u8) -> bool {
        if col >= self.size {
            return false;
        }
        (0..self.size as usize).all(|row| self.cells[row * self.size as usize + col as usize].is_some())
    }

    /// Empty every full row and every full column, in one pass.
    ///
    /// All rows and columns are evaluated against the pre-clear state before
    /// anything is emptied, so a row and a column sharing a cell each count
    /// independently and the shared cell ends up empty either way. A fully
    /// filled grid clears every line at once.
    pub fn clear_full_lines(&mut self) -> ClearedLines {
        let mut cleared = ClearedLines::default();

        for row in 0..self.size {
            if self.is_row_full(row) {
                cleared.rows.push(row);
            }
        }
        for col in 0..self.size {
            if self.is_col_full(col) {
                cleared.cols.push(col);
            }
        }

        let size = self.size as usize;
        for &row in &cleared.rows {
            let start = (row as usize) * size;
            for cell in &mut self.cells[start..start + size] {
                *cell = None;
            }
        }
        for &col in &cleared.cols {
            for row in 0..size {
                self.cells[row * size + col as usize] = None;
            }
        }

        cleared
    }

    /// Read-only view of the cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// True when no cell is filled
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
