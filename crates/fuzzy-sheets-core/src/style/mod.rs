//! Cell formatting types
//!
//! Formatting is cosmetic: mutation rules carry it through and only change it
//! when the corruption they model calls for a different display format.

mod number_format;

pub use number_format::NumberFormat;

/// Default font family
pub const DEFAULT_FONT_NAME: &str = "Calibri";

/// Default font size in points
pub const DEFAULT_FONT_SIZE: f64 = 11.0;

/// Display format of a cell
#[derive(Debug, Clone, PartialEq)]
pub struct CellFormat {
    /// Number format
    pub number_format: NumberFormat,
    /// Font family name (e.g., "Calibri", "Arial")
    pub font_name: String,
    /// Font size in points
    pub font_size: f64,
    /// Bold
    pub bold: bool,
}

impl Default for CellFormat {
    fn default() -> Self {
        Self {
            number_format: NumberFormat::General,
            font_name: DEFAULT_FONT_NAME.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            bold: false,
        }
    }
}

impl CellFormat {
    /// Create a new default format
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number format
    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }

    /// Set font name
    pub fn with_font_name<S: Into<String>>(mut self, name: S) -> Self {
        self.font_name = name.into();
        self
    }

    /// Set font size
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set bold
    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}
