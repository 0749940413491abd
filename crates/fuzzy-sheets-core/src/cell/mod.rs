//! Cell-related types
//!
//! This module contains:
//! - [`CellValue`] - The value stored in a cell
//! - [`Cell`] - Value, formula and format of a single grid position

mod serial;
mod value;

pub use serial::{from_excel_serial, to_excel_serial};
pub use value::{CellError, CellValue, SharedString, StringPool};

use crate::style::CellFormat;

/// A single cell as materialized by a parser
///
/// The formula is kept as raw text next to the value; an empty string means
/// the cell holds a literal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Cell {
    /// Current value
    pub value: CellValue,
    /// Raw formula text (empty for literals)
    pub formula: String,
    /// Display formatting
    pub format: CellFormat,
}

impl Cell {
    /// Create a literal cell with the default format
    pub fn new<V: Into<CellValue>>(value: V) -> Self {
        Self {
            value: value.into(),
            formula: String::new(),
            format: CellFormat::default(),
        }
    }

    /// Create an empty cell
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set the formula text
    pub fn with_formula<S: Into<String>>(mut self, formula: S) -> Self {
        self.formula = formula.into();
        self
    }

    /// Set the format
    pub fn with_format(mut self, format: CellFormat) -> Self {
        self.format = format;
        self
    }

    /// Check if the cell carries a formula
    pub fn has_formula(&self) -> bool {
        !self.formula.is_empty()
    }

    /// Overwrite value, formula and format with those of `other`
    pub fn overwrite_with(&mut self, other: Cell) {
        self.value = other.value;
        self.formula = other.formula;
        self.format = other.format;
    }
}
