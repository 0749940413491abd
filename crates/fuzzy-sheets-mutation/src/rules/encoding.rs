//! Character-set corruption

use fuzzy_sheets_core::{Cell, CellValue};

use super::{tier, MutationRule};
use crate::config::Axis;

const BYTE_ORDER_MARK: char = '\u{FEFF}';
const NO_BREAK_SPACE: char = '\u{00A0}';

/// Re-decodes text as if its UTF-8 bytes were ISO-8859-1 (mojibake)
///
/// `"café"` becomes `"cafÃ©"`. From strength 1/3 a byte-order mark is
/// prepended; from 2/3 ASCII spaces also become no-break spaces. Pure-ASCII
/// text only changes through those two extras.
#[derive(Debug, Clone, Copy, Default)]
pub struct EncodingRule;

impl MutationRule for EncodingRule {
    fn axis(&self) -> Axis {
        Axis::Encoding
    }

    fn mutate(&self, cell: &Cell, strength: f64) -> Cell {
        let CellValue::Text(text) = &cell.value else {
            return cell.clone();
        };

        let level = tier(strength, 3);
        let mut out = String::with_capacity(text.len() * 2 + BYTE_ORDER_MARK.len_utf8());
        if level >= 1 {
            out.push(BYTE_ORDER_MARK);
        }
        for &byte in text.as_str().as_bytes() {
            match char::from(byte) {
                ' ' if level >= 2 => out.push(NO_BREAK_SPACE),
                ch => out.push(ch),
            }
        }

        Cell {
            value: CellValue::text(out),
            formula: String::new(),
            format: cell.format.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mutate_text(text: &str, strength: f64) -> String {
        EncodingRule
            .mutate(&Cell::new(text), strength)
            .value
            .as_text()
            .unwrap()
            .to_string()
    }

    #[test]
    fn test_mojibake() {
        assert_eq!(mutate_text("café", 0.0), "cafÃ©");
        assert_eq!(mutate_text("Zürich – Genève", 0.0), "ZÃ¼rich â\u{80}\u{93} GenÃ¨ve");
        assert_eq!(mutate_text("plain ascii", 0.0), "plain ascii");
    }

    #[test]
    fn test_byte_order_mark_and_spaces() {
        assert_eq!(mutate_text("a b", 0.5), "\u{FEFF}a b");
        assert_eq!(mutate_text("a b", 1.0), "\u{FEFF}a\u{00A0}b");
    }

    #[test]
    fn test_empty_text_still_gets_mark() {
        assert_eq!(mutate_text("", 0.0), "");
        assert_eq!(mutate_text("", 0.7), "\u{FEFF}");
    }

    #[test]
    fn test_non_text_untouched() {
        let cell = Cell::new(12.5);
        assert_eq!(EncodingRule.mutate(&cell, 1.0), cell);
    }

    #[test]
    fn test_clears_formula() {
        let cell = Cell::new("x").with_formula("=LOWER(\"X\")");
        assert_eq!(EncodingRule.mutate(&cell, 0.0).formula, "");
    }
}
