//! Prelude module - common imports for fuzzy-sheets users
//!
//! ```rust
//! use fuzzy_sheets::prelude::*;
//! ```

pub use crate::{
    // Mutation types
    Axis,
    // Cell types
    Cell,
    CellError,
    CellFormat,
    CellValue,

    CsvReader,
    CsvWriter,

    // Error types
    Error,
    MutationConfig,
    MutationDetail,
    MutationEngine,
    MutationError,
    MutationStats,
    NumberFormat,
    Result,
    ValueKind,
    // Main types
    Workbook,
    // Extension traits
    WorkbookExt,
    WorkbookMutationExt,
    Worksheet,
    XlsxReader,
    XlsxWriter,
};
