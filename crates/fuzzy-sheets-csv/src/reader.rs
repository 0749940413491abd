//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use fuzzy_sheets_core::{Cell, CellError, CellValue, StringPool, Workbook, Worksheet};

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read a CSV file into a single-sheet workbook
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Workbook> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a single-sheet workbook
    ///
    /// Every record becomes a row; records may have different lengths. Empty
    /// input yields a worksheet with no rows.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Workbook> {
        let worksheet = Self::read_worksheet(reader, options)?;
        let mut workbook = Workbook::new();
        workbook.add_worksheet(worksheet)?;
        Ok(workbook)
    }

    /// Read CSV from a reader into a worksheet
    pub fn read_worksheet<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Worksheet> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut worksheet = Worksheet::new(options.sheet_name.as_str());
        let mut strings = StringPool::new();

        for result in csv_reader.records() {
            let record = result?;

            let row = record
                .iter()
                .map(|field| {
                    if options.auto_detect_types {
                        Self::detect_cell(field, &mut strings)
                    } else {
                        Cell::new(CellValue::Text(strings.intern(field)))
                    }
                })
                .collect();

            worksheet.push_row(row);
        }

        debug!(
            "Read {} rows ({} cells, {} distinct strings) into '{}'",
            worksheet.row_count(),
            worksheet.cell_count(),
            strings.len(),
            worksheet.name()
        );
        Ok(worksheet)
    }

    /// Build a typed cell from a raw field
    fn detect_cell(field: &str, strings: &mut StringPool) -> Cell {
        if field.starts_with('=') {
            return Cell::empty().with_formula(field);
        }
        Cell::new(Self::detect_type(field, strings))
    }

    /// Detect the type of a field value
    fn detect_type(field: &str, strings: &mut StringPool) -> CellValue {
        let trimmed = field.trim();

        if trimmed.is_empty() {
            return CellValue::Empty;
        }

        if trimmed.eq_ignore_ascii_case("true") {
            return CellValue::Boolean(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return CellValue::Boolean(false);
        }

        if let Some(error) = CellError::parse(trimmed) {
            return CellValue::Error(error);
        }

        // `f64::from_str` also accepts "inf" and "NaN"; those stay text
        if let Ok(n) = trimmed.parse::<f64>() {
            if n.is_finite() {
                return CellValue::Number(n);
            }
        }

        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return CellValue::Date(date.and_time(NaiveTime::MIN));
        }
        for format in DATETIME_FORMATS {
            if let Ok(stamp) = NaiveDateTime::parse_from_str(trimmed, format) {
                return CellValue::Date(stamp);
            }
        }

        // Text keeps its surrounding whitespace
        CellValue::Text(strings.intern(field))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn read_str(input: &str) -> Worksheet {
        CsvReader::read_worksheet(input.as_bytes(), &CsvReadOptions::default()).unwrap()
    }

    #[test]
    fn test_detects_types() {
        let sheet = read_str("1,2.5,-3e2,hello,TRUE,false,#N/A,2024-02-29,2024-02-29 08:15:00,,inf\n");
        let values: Vec<_> = sheet.row(0).unwrap().iter().map(|c| c.value.clone()).collect();

        let day = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(
            values,
            vec![
                CellValue::Number(1.0),
                CellValue::Number(2.5),
                CellValue::Number(-300.0),
                CellValue::text("hello"),
                CellValue::Boolean(true),
                CellValue::Boolean(false),
                CellValue::Error(CellError::Na),
                CellValue::from(day),
                CellValue::Date(day.and_hms_opt(8, 15, 0).unwrap()),
                CellValue::Empty,
                CellValue::text("inf"),
            ]
        );
    }

    #[test]
    fn test_formula_fields() {
        let sheet = read_str("10,\"=A1*2\"\n");
        let cell = sheet.cell_at(0, 1).unwrap();
        assert_eq!(cell.formula, "=A1*2");
        assert_eq!(cell.value, CellValue::Empty);
    }

    #[test]
    fn test_ragged_rows() {
        let sheet = read_str("a,b,c\nd\ne,f\n");
        let lengths: Vec<_> = sheet.rows().map(|r| r.len()).collect();
        assert_eq!(lengths, vec![3, 1, 2]);
    }

    #[test]
    fn test_empty_input_gives_sheet_without_rows() {
        let workbook = CsvReader::read("".as_bytes(), &CsvReadOptions::default()).unwrap();
        assert_eq!(workbook.sheet_count(), 1);
        assert!(workbook.worksheet(0).unwrap().is_empty());
    }

    #[test]
    fn test_text_keeps_whitespace() {
        let sheet = read_str("\"  padded \",\" 42 \"\n");
        assert_eq!(sheet.cell_at(0, 0).unwrap().value.as_text(), Some("  padded "));
        assert_eq!(sheet.cell_at(0, 1).unwrap().value, CellValue::Number(42.0));
    }

    #[test]
    fn test_without_type_detection() {
        let options = CsvReadOptions {
            auto_detect_types: false,
            sheet_name: "Raw".into(),
            ..Default::default()
        };
        let workbook = CsvReader::read("1,TRUE\n".as_bytes(), &options).unwrap();
        let sheet = workbook.worksheet(0).unwrap();

        assert_eq!(sheet.name(), "Raw");
        assert_eq!(sheet.cell_at(0, 0).unwrap().value.as_text(), Some("1"));
        assert_eq!(sheet.cell_at(0, 1).unwrap().value.as_text(), Some("TRUE"));
    }

    #[test]
    fn test_semicolon_delimiter() {
        let options = CsvReadOptions {
            delimiter: b';',
            ..Default::default()
        };
        let sheet = CsvReader::read_worksheet("1,5;x\n".as_bytes(), &options).unwrap();
        assert_eq!(sheet.cell_at(0, 0).unwrap().value.as_text(), Some("1,5"));
        assert_eq!(sheet.cell_at(0, 1).unwrap().value.as_text(), Some("x"));
    }
}
