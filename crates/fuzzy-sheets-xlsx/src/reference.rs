//! A1-style cell references

use crate::error::{XlsxError, XlsxResult};

/// Last column Excel addresses (XFD)
const MAX_COLUMN: u32 = 16_383;

/// Parse an A1 reference like `"C7"` into a 0-based `(row, col)` pair
///
/// `$` markers are accepted and ignored.
pub(crate) fn parse(reference: &str) -> XlsxResult<(u32, u32)> {
    let invalid = || XlsxError::InvalidCellReference(reference.to_string());

    let trimmed = reference.trim().replace('$', "");
    let split = trimmed
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(invalid)?;
    let (letters, digits) = trimmed.split_at(split);

    if letters.is_empty() || !letters.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(invalid());
    }

    let mut col: u32 = 0;
    for c in letters.chars() {
        let digit = (c.to_ascii_uppercase() as u32) - ('A' as u32) + 1;
        col = col
            .checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(invalid)?;
    }
    let col = col - 1;
    if col > MAX_COLUMN {
        return Err(invalid());
    }

    let row: u32 = digits.parse().map_err(|_| invalid())?;
    if row == 0 {
        return Err(invalid());
    }

    Ok((row - 1, col))
}

/// Column letters for a 0-based column index (0 -> "A", 26 -> "AA")
pub(crate) fn column_letters(col: u32) -> String {
    let mut letters = Vec::new();
    let mut n = col + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8_lossy(&letters).into_owned()
}

/// A1 reference for a 0-based `(row, col)` pair
pub(crate) fn format(row: u32, col: u32) -> String {
    format!("{}{}", column_letters(col), row + 1)
}
