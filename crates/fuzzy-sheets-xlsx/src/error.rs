//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors raised while reading or writing an XLSX package
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The container is not a readable ZIP archive
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A part is not well-formed XML
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The archive is not an XLSX package
    #[error("Invalid XLSX format: {0}")]
    InvalidFormat(String),

    /// A part the workbook needs is absent
    #[error("Missing required part: {0}")]
    MissingPart(String),

    /// A cell carries an `r` attribute that is not an A1 reference
    #[error("Invalid cell reference: {0}")]
    InvalidCellReference(String),

    /// A cell value does not match its declared type
    #[error("Parse error: {0}")]
    Parse(String),

    /// The workbook model rejected the content (e.g. a bad sheet name)
    #[error("Core error: {0}")]
    Core(#[from] fuzzy_sheets_core::Error),
}
