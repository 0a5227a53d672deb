//! The mutable cell grid.
//!
//! A [`CellGrid`] is a row-major `columns x rows` array of [`Cell`]s,
//! zero-initialized on allocation. Callers mutate it freely between
//! flushes; the terminal context owns the allocation and replaces it
//! wholesale on resize.

use crate::cell::Cell;
use crate::color::Rgb;

/// A rectangular, row-major array of display cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    columns: u32,
    rows: u32,
    cells: Vec<Cell>,
}

impl CellGrid {
    /// Allocate a zero-initialized grid.
    #[must_use]
    pub fn new(columns: u32, rows: u32) -> Self {
        let size = (columns as usize).saturating_mul(rows as usize);
        Self {
            columns,
            rows,
            cells: vec![Cell::default(); size],
        }
    }

    /// Width in columns.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Height in rows.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Total cell count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.columns || y >= self.rows {
            return None;
        }
        let row_offset = (y as usize).checked_mul(self.columns as usize)?;
        Some(row_offset + x as usize)
    }

    /// Get the cell at (x, y), or `None` out of bounds.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Get a mutable reference to the cell at (x, y).
    pub fn get_mut(&mut self, x: u32, y: u32) -> Option<&mut Cell> {
        self.index(x, y).map(move |i| &mut self.cells[i])
    }

    /// Write a cell at (x, y). Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Fill the whole grid with one cell value.
    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Reset every cell to the zero value.
    pub fn clear(&mut self) {
        self.fill(Cell::default());
    }

    /// Write an ASCII string starting at (x, y), clipped at the row end.
    pub fn print(&mut self, x: u32, y: u32, text: &str, fg: Rgb, bg: Rgb) {
        for (i, ch) in text.chars().enumerate() {
            let cx = x.saturating_add(i as u32);
            if cx >= self.columns {
                break;
            }
            self.set(cx, y, Cell::ascii(ch, fg, bg));
        }
    }

    /// The raw row-major cell slice.
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The raw row-major cell slice, mutable.
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }
}
