//! # fuzzy-sheets-xlsx
//!
//! XLSX (Office Open XML) reader and writer for fuzzy-sheets.
//!
//! The reader materializes every worksheet as a dense grid over its used
//! range, with values, formulas, number formats and font settings. The
//! writer produces a minimal package (workbook, styles, one part per sheet)
//! that the reader and Excel both accept.

pub mod error;
pub mod reader;
pub mod writer;

mod reference;
mod styles;
mod xml;

pub use error::{XlsxError, XlsxResult};
pub use reader::XlsxReader;
pub use writer::XlsxWriter;
