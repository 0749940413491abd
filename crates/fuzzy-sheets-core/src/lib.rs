//! # fuzzy-sheets-core
//!
//! Core data structures for the fuzzy-sheets mutation toolkit.
//!
//! This crate provides the in-memory spreadsheet model that parsers produce
//! and the mutation engine rewrites:
//! - [`CellValue`] - A cell's typed value (number, date, text, boolean, error, empty)
//! - [`Cell`] - Value, formula text and [`CellFormat`]
//! - [`Workbook`], [`Worksheet`] - The document structures
//!
//! ## Example
//!
//! ```rust
//! use fuzzy_sheets_core::{Cell, CellValue, Workbook, Worksheet};
//!
//! let mut sheet = Worksheet::new("Data");
//! sheet.push_row(vec![Cell::new("name"), Cell::new(42.0)]);
//!
//! let mut workbook = Workbook::new();
//! workbook.add_worksheet(sheet).unwrap();
//!
//! let cell = workbook.worksheet(0).unwrap().cell_at(0, 1).unwrap();
//! assert_eq!(cell.value, CellValue::Number(42.0));
//! ```

pub mod cell;
pub mod error;
pub mod style;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::{
    from_excel_serial, to_excel_serial, Cell, CellError, CellValue, SharedString, StringPool,
};
pub use error::{Error, Result};
pub use style::{CellFormat, NumberFormat};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
