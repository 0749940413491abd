//! Numbers stored as text

use fuzzy_sheets_core::{Cell, CellValue, NumberFormat};

use super::{tier, MutationRule};
use crate::config::Axis;

/// Rewrites numeric cells as text, the way a locale-confused export would
///
/// | strength | output for `1234567.5` |
/// |----------|------------------------|
/// | `[0, 1/3)` | `1234567.5` |
/// | `[1/3, 2/3)` | `1,234,567.5` |
/// | `[2/3, 1]` | `1.234.567,5` |
///
/// The cell gets the text format (`@`) and loses any formula.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberFormatRule;

impl MutationRule for NumberFormatRule {
    fn axis(&self) -> Axis {
        Axis::NumberFormat
    }

    fn mutate(&self, cell: &Cell, strength: f64) -> Cell {
        let CellValue::Number(n) = cell.value else {
            return cell.clone();
        };

        let text = match tier(strength, 3) {
            0 => render(n, None, '.'),
            1 => render(n, Some(','), '.'),
            _ => render(n, Some('.'), ','),
        };

        Cell {
            value: CellValue::text(text),
            formula: String::new(),
            format: cell
                .format
                .clone()
                .with_number_format(NumberFormat::text()),
        }
    }
}

fn render(n: f64, group_sep: Option<char>, decimal_sep: char) -> String {
    if !n.is_finite() {
        return n.to_string();
    }

    // f64 Display never switches to exponent notation
    let plain = n.abs().to_string();
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (plain.as_str(), None),
    };

    let mut out = String::with_capacity(plain.len() + plain.len() / 3 + 1);
    if n.is_sign_negative() && n != 0.0 {
        out.push('-');
    }
    match group_sep {
        Some(sep) => out.push_str(&group_thousands(int_part, sep)),
        None => out.push_str(int_part),
    }
    if let Some(frac_part) = frac_part {
        out.push(decimal_sep);
        out.push_str(frac_part);
    }
    out
}

fn group_thousands(digits: &str, sep: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzy_sheets_core::CellFormat;
    use pretty_assertions::assert_eq;

    fn text_of(cell: &Cell) -> &str {
        cell.value.as_text().unwrap()
    }

    #[test]
    fn test_tiers() {
        let cell = Cell::new(1234567.5);
        assert_eq!(text_of(&NumberFormatRule.mutate(&cell, 0.0)), "1234567.5");
        assert_eq!(text_of(&NumberFormatRule.mutate(&cell, 0.5)), "1,234,567.5");
        assert_eq!(text_of(&NumberFormatRule.mutate(&cell, 1.0)), "1.234.567,5");
    }

    #[test]
    fn test_integers_and_negatives() {
        assert_eq!(text_of(&NumberFormatRule.mutate(&Cell::new(3.0), 0.0)), "3");
        assert_eq!(text_of(&NumberFormatRule.mutate(&Cell::new(-1000.0), 0.5)), "-1,000");
        assert_eq!(text_of(&NumberFormatRule.mutate(&Cell::new(-0.25), 0.9)), "-0,25");
        assert_eq!(text_of(&NumberFormatRule.mutate(&Cell::new(999.0), 0.9)), "999");
        assert_eq!(text_of(&NumberFormatRule.mutate(&Cell::new(-0.0), 0.0)), "0");
    }

    #[test]
    fn test_sets_text_format_and_clears_formula() {
        let format = CellFormat::new().with_font_name("Arial").with_bold(true);
        let cell = Cell::new(42.0)
            .with_formula("=6*7")
            .with_format(format.clone());

        let out = NumberFormatRule.mutate(&cell, 0.0);
        assert_eq!(out.formula, "");
        assert_eq!(out.format, format.with_number_format(NumberFormat::text()));
    }

    #[test]
    fn test_non_numeric_untouched() {
        let cell = Cell::new("12").with_formula("=\"12\"");
        assert_eq!(NumberFormatRule.mutate(&cell, 1.0), cell);
        assert_eq!(NumberFormatRule.mutate(&Cell::empty(), 1.0), Cell::empty());
    }
}
