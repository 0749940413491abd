//! Worksheet type

use crate::cell::Cell;

/// A worksheet (single sheet in a workbook)
///
/// Cells are stored row-major. Rows may have different lengths; nothing here
/// assumes a rectangular grid. Once rows are pushed, only the contents of
/// existing cells can change.
#[derive(Debug, Clone, PartialEq)]
pub struct Worksheet {
    name: String,
    rows: Vec<Vec<Cell>>,
}

impl Worksheet {
    /// Create a new worksheet with no rows
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Create a worksheet from pre-built rows
    pub fn from_rows<S: Into<String>>(name: S, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    // === Rows ===

    /// Append a row
    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the sheet has no rows (no used range in the source)
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Iterate over rows
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Length of the longest row
    pub fn max_column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    // === Cell Access ===

    /// Get a cell by row and column indices (0-based)
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    /// Get a mutable cell by row and column indices (0-based)
    pub fn cell_at_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.rows.get_mut(row).and_then(|r| r.get_mut(col))
    }

    /// Iterate over all cells in row-major order with their positions
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (row, col, cell))
        })
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Number of cells holding a formula
    pub fn formula_count(&self) -> usize {
        self.cells().filter(|(_, _, cell)| cell.has_formula()).count()
    }
}
