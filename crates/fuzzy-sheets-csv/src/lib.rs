//! # fuzzy-sheets-csv
//!
//! CSV reader and writer for fuzzy-sheets.
//!
//! CSV has no types, so the reader infers them per field: numbers, ISO dates,
//! `TRUE`/`FALSE`, Excel error literals and `=` formulas; everything else is
//! text. A CSV file becomes a workbook with a single worksheet.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
