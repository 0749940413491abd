//! Missing-value corruption

use fuzzy_sheets_core::{Cell, CellValue, NumberFormat};

use super::{tier, MutationRule};
use crate::config::Axis;

/// Replaces a value with one of the ways exports spell "missing"
///
/// | strength | replacement |
/// |----------|-------------|
/// | `[0, 0.25)` | truly empty cell |
/// | `[0.25, 0.5)` | a single space |
/// | `[0.5, 0.75)` | `N/A` |
/// | `[0.75, 1]` | `NULL` |
///
/// Applies to any value; the axis filters decide which cells get here.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyValuesRule;

impl MutationRule for EmptyValuesRule {
    fn axis(&self) -> Axis {
        Axis::EmptyValues
    }

    fn mutate(&self, cell: &Cell, strength: f64) -> Cell {
        let value = match tier(strength, 4) {
            0 => CellValue::Empty,
            1 => CellValue::text(" "),
            2 => CellValue::text("N/A"),
            _ => CellValue::text("NULL"),
        };

        Cell {
            value,
            formula: String::new(),
            format: cell
                .format
                .clone()
                .with_number_format(NumberFormat::General),
        }
    }
}
