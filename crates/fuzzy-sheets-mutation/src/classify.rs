//! Cell classification
//!
//! Every value belongs to exactly one [`ValueKind`]. Only the value is
//! inspected; format and formula text play no part.

use std::fmt;

use fuzzy_sheets_core::{Cell, CellValue};

/// Semantic type of a cell value, as seen by the mutation axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Integer, floating-point or fixed-point numbers
    Numeric,
    /// Calendar timestamps
    Date,
    /// Strings
    Text,
    /// Empty, boolean, error; never targeted by any axis
    Other,
}

impl ValueKind {
    /// Kinds an axis can filter on, in pool collection order
    pub const TARGETABLE: [ValueKind; 3] = [ValueKind::Numeric, ValueKind::Date, ValueKind::Text];

    /// Lowercase name for reports
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Numeric => "numeric",
            ValueKind::Date => "date",
            ValueKind::Text => "text",
            ValueKind::Other => "other",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a value
pub fn classify_value(value: &CellValue) -> ValueKind {
    match value {
        CellValue::Number(_) => ValueKind::Numeric,
        CellValue::Date(_) => ValueKind::Date,
        CellValue::Text(_) => ValueKind::Text,
        CellValue::Empty | CellValue::Boolean(_) | CellValue::Error(_) => ValueKind::Other,
    }
}

/// Classify a cell by its current value
pub fn classify(cell: &Cell) -> ValueKind {
    classify_value(&cell.value)
}
