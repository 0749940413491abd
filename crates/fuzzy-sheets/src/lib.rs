//! # fuzzy-sheets
//!
//! Takes a well-formed workbook and deliberately corrupts a configurable share
//! of its cells, so spreadsheet import code can be tested against the kind of
//! data real users export.
//!
//! ## Features
//!
//! - Five corruption axes: number formatting, date formatting, text encoding,
//!   decimal precision and missing values
//! - Per-axis share of cells and strength, filtered by value kind
//! - Reproducible runs from a seed
//! - JSON configuration
//! - Read and write CSV and XLSX files
//!
//! ## Example
//!
//! ```rust
//! use fuzzy_sheets::prelude::*;
//!
//! let mut sheet = Worksheet::new("Sales");
//! sheet.push_row(vec![Cell::new(1234.5), Cell::new("North")]);
//! let mut workbook = Workbook::new();
//! workbook.add_worksheet(sheet).unwrap();
//!
//! let config = MutationConfig::new().with_axis(
//!     Axis::NumberFormat,
//!     MutationDetail::enabled_for(1.0)
//!         .with_strength(0.5)
//!         .targeting(ValueKind::Numeric),
//! );
//! workbook.apply_mutations_seeded(&config, 42).unwrap();
//!
//! let cell = workbook.worksheet(0).unwrap().cell_at(0, 0).unwrap();
//! assert_eq!(cell.value.as_text(), Some("1,234.5"));
//!
//! // Save to file
//! // workbook.save("mutated.xlsx").unwrap();
//! ```

pub mod mutation;
pub mod prelude;

pub use mutation::WorkbookMutationExt;

// Re-export core types
pub use fuzzy_sheets_core::{
    // Cell types
    Cell,
    CellError,
    // Style types
    CellFormat,
    CellValue,
    // Error types
    Error,
    NumberFormat,
    Result,
    SharedString,
    StringPool,
    // Main types
    Workbook,
    Worksheet,

    MAX_SHEET_NAME_LEN,
};

// Re-export mutation types
pub use fuzzy_sheets_mutation::{
    classify, classify_value, Axis, DateFormatRule, DecimalPrecisionRule, EmptyValuesRule,
    EncodingRule, MutationConfig, MutationDetail, MutationEngine, MutationError,
    MutationResult, MutationRule, MutationStats, NumberFormatRule, RuleRegistry, Sampler,
    ValueKind,
};

// Re-export I/O types
pub use fuzzy_sheets_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter, LineTerminator,
};
pub use fuzzy_sheets_xlsx::{XlsxError, XlsxReader, XlsxWriter};

use std::path::Path;

/// Extension trait for Workbook to add file I/O
pub trait WorkbookExt {
    /// Open a workbook from a file
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook>;

    /// Save the workbook to a file
    ///
    /// XLSX keeps every worksheet; CSV holds one sheet, so only the first
    /// worksheet is written.
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
}

impl WorkbookExt for Workbook {
    fn open<P: AsRef<Path>>(path: P) -> Result<Workbook> {
        let path = path.as_ref();

        match extension(path).as_deref() {
            Some("csv") => {
                let options = CsvReadOptions {
                    sheet_name: sheet_name_for(path),
                    ..Default::default()
                };
                CsvReader::read_file(path, &options).map_err(|e| Error::other(e.to_string()))
            }
            Some("xlsx") | Some("xlsm") => {
                XlsxReader::read_file(path).map_err(|e| Error::other(e.to_string()))
            }
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        match extension(path).as_deref() {
            Some("csv") => {
                if let Some(sheet) = self.worksheet(0) {
                    CsvWriter::write_file(sheet, path, &CsvWriteOptions::default())
                        .map_err(|e| Error::other(e.to_string()))
                } else {
                    Err(Error::other("No worksheets to save"))
                }
            }
            Some("xlsx") => {
                XlsxWriter::write_file(self, path).map_err(|e| Error::other(e.to_string()))
            }
            _ => Err(Error::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Sheet name for a CSV file: its stem, cut to the sheet name limit
fn sheet_name_for(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.chars().filter(|c| !INVALID_SHEET_CHARS.contains(c)).collect::<String>())
        .unwrap_or_default();

    if stem.is_empty() {
        CsvReadOptions::default().sheet_name
    } else {
        stem.chars().take(MAX_SHEET_NAME_LEN).collect()
    }
}

const INVALID_SHEET_CHARS: &[char] = &['[', ']', '*', '?', '/', '\\', ':'];
