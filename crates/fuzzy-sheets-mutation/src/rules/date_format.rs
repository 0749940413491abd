//! Alternate date representations

use fuzzy_sheets_core::{to_excel_serial, Cell, CellValue, NumberFormat};

use super::{tier, MutationRule};
use crate::config::Axis;

/// Rewrites date cells in representations importers tend to misread
///
/// - `[0, 1/3)`: day-first text, `dd/mm/yyyy`
/// - `[1/3, 2/3)`: month-first text with a two-digit year, `mm-dd-yy`
/// - `[2/3, 1]`: the bare Excel serial number with the General format
///
/// Text forms drop the time of day.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateFormatRule;

impl MutationRule for DateFormatRule {
    fn axis(&self) -> Axis {
        Axis::DateFormat
    }

    fn mutate(&self, cell: &Cell, strength: f64) -> Cell {
        let CellValue::Date(date) = cell.value else {
            return cell.clone();
        };

        let (value, number_format) = match tier(strength, 3) {
            0 => (
                CellValue::text(date.format("%d/%m/%Y").to_string()),
                NumberFormat::text(),
            ),
            1 => (
                CellValue::text(date.format("%m-%d-%y").to_string()),
                NumberFormat::text(),
            ),
            _ => (CellValue::Number(to_excel_serial(date)), NumberFormat::General),
        };

        Cell {
            value,
            formula: String::new(),
            format: cell.format.clone().with_number_format(number_format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn stamp(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_tiers() {
        let cell = Cell::new(stamp(2024, 3, 7, 9, 30));

        let out = DateFormatRule.mutate(&cell, 0.1);
        assert_eq!(out.value.as_text(), Some("07/03/2024"));
        assert_eq!(out.format.number_format, NumberFormat::text());

        let out = DateFormatRule.mutate(&cell, 0.4);
        assert_eq!(out.value.as_text(), Some("03-07-24"));

        let out = DateFormatRule.mutate(&cell, 0.9);
        let serial = out.value.as_number().unwrap();
        assert!((serial - (45358.0 + 9.5 / 24.0)).abs() < 1e-9);
        assert_eq!(out.format.number_format, NumberFormat::General);
    }

    #[test]
    fn test_clears_formula_keeps_font() {
        let mut cell = Cell::new(stamp(2001, 1, 2, 0, 0)).with_formula("=DATE(2001,1,2)");
        cell.format.font_name = "Courier New".into();

        let out = DateFormatRule.mutate(&cell, 0.0);
        assert!(out.formula.is_empty());
        assert_eq!(out.format.font_name, "Courier New");
    }

    #[test]
    fn test_non_date_untouched() {
        let cell = Cell::new(45000.0);
        assert_eq!(DateFormatRule.mutate(&cell, 1.0), cell);
    }
}
