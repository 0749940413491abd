//! XLSX reader

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::{debug, warn};
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{XlsxError, XlsxResult};
use crate::reference;
use crate::styles::read_styles_xml;
use crate::xml::{attr, decode_excel_escapes};
use fuzzy_sheets_core::{
    from_excel_serial, Cell, CellError, CellFormat, CellValue, SharedString, StringPool, Workbook,
    Worksheet,
};

/// A `<c>` element collected while scanning sheetData
#[derive(Debug, Default)]
struct RawCell {
    row: u32,
    col: u32,
    cell_type: Option<String>,
    style: u32,
    value: Option<String>,
    formula: Option<String>,
    inline_text: Option<String>,
}

/// XLSX file reader
///
/// Every worksheet becomes a dense grid over its used range: the first row
/// and column holding a `<c>` element map to index 0, and positions the file
/// does not mention are empty cells with the default format.
pub struct XlsxReader;

impl XlsxReader {
    /// Read a workbook from a file path
    pub fn read_file<P: AsRef<Path>>(path: P) -> XlsxResult<Workbook> {
        let file = File::open(path)?;
        Self::read(file)
    }

    /// Read a workbook from a reader
    pub fn read<R: Read + Seek>(reader: R) -> XlsxResult<Workbook> {
        let mut archive = zip::ZipArchive::new(reader)?;

        if archive.by_name("[Content_Types].xml").is_err() {
            return Err(XlsxError::InvalidFormat(
                "Missing [Content_Types].xml".into(),
            ));
        }

        let mut strings = StringPool::new();
        let shared_strings = Self::read_shared_strings(&mut archive, &mut strings)?;
        let formats = Self::read_styles(&mut archive)?;
        let sheet_info = Self::read_workbook_xml(&mut archive)?;
        let sheet_paths = Self::read_workbook_rels(&mut archive)?;

        let mut workbook = Workbook::new();
        for (name, r_id) in sheet_info {
            let Some(path) = sheet_paths.get(&r_id) else {
                warn!("Sheet '{}' has no worksheet relationship '{}', skipping", name, r_id);
                continue;
            };

            let worksheet = Self::read_worksheet(
                &mut archive,
                path,
                &name,
                &shared_strings,
                &formats,
                &mut strings,
            )?;
            workbook.add_worksheet(worksheet)?;
        }

        debug!(
            "Read {} sheets ({} cells, {} styles, {} distinct strings)",
            workbook.sheet_count(),
            workbook.cell_count(),
            formats.len(),
            strings.len()
        );
        Ok(workbook)
    }

    /// Read the shared strings table
    fn read_shared_strings<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
        strings: &mut StringPool,
    ) -> XlsxResult<Vec<SharedString>> {
        let mut table = Vec::new();

        let file = match archive.by_name("xl/sharedStrings.xml") {
            Ok(f) => f,
            Err(_) => return Ok(table),
        };

        // Whitespace inside <t> is content
        let mut xml_reader = Reader::from_reader(BufReader::new(file));
        xml_reader.trim_text(false);

        let mut buf = Vec::new();
        let mut current = String::new();
        let mut in_si = false;
        let mut in_t = false;
        // Phonetic runs repeat the text in another script
        let mut in_phonetic = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"si" => {
                        in_si = true;
                        current.clear();
                    }
                    b"rPh" => in_phonetic = true,
                    b"t" if in_si && !in_phonetic => in_t = true,
                    _ => {}
                },
                Ok(Event::Empty(e)) if e.name().as_ref() == b"si" => {
                    table.push(strings.intern(""));
                }
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"si" => {
                        table.push(strings.intern(decode_excel_escapes(&current)));
                        in_si = false;
                    }
                    b"rPh" => in_phonetic = false,
                    b"t" => in_t = false,
                    _ => {}
                },
                Ok(Event::Text(e)) if in_t => {
                    current.push_str(&e.unescape()?);
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(table)
    }

    fn read_styles<R: Read + Seek>(archive: &mut zip::ZipArchive<R>) -> XlsxResult<Vec<CellFormat>> {
        match archive.by_name("xl/styles.xml") {
            Ok(file) => read_styles_xml(file),
            Err(_) => Ok(vec![CellFormat::default()]),
        }
    }

    /// Read workbook.xml to get sheet names and rIds, in tab order
    fn read_workbook_xml<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<Vec<(String, String)>> {
        let file = archive
            .by_name("xl/workbook.xml")
            .map_err(|_| XlsxError::MissingPart("xl/workbook.xml".into()))?;

        let mut xml_reader = Reader::from_reader(BufReader::new(file));
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut sheets = Vec::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e)) if e.name().as_ref() == b"sheet" => {
                    if let (Some(name), Some(r_id)) = (attr(&e, b"name"), attr(&e, b"r:id")) {
                        sheets.push((name, r_id));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(sheets)
    }

    /// Read workbook.xml.rels to map worksheet rIds to part paths
    fn read_workbook_rels<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
    ) -> XlsxResult<HashMap<String, String>> {
        let file = archive
            .by_name("xl/_rels/workbook.xml.rels")
            .map_err(|_| XlsxError::MissingPart("xl/_rels/workbook.xml.rels".into()))?;

        let mut xml_reader = Reader::from_reader(BufReader::new(file));
        xml_reader.trim_text(true);

        let mut buf = Vec::new();
        let mut rels = HashMap::new();

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Empty(e)) | Ok(Event::Start(e))
                    if e.name().as_ref() == b"Relationship" =>
                {
                    let is_worksheet = attr(&e, b"Type")
                        .map_or(false, |t| t.ends_with("/worksheet"));
                    if let (true, Some(id), Some(target)) =
                        (is_worksheet, attr(&e, b"Id"), attr(&e, b"Target"))
                    {
                        // Relative targets are relative to xl/
                        let path = match target.strip_prefix('/') {
                            Some(absolute) => absolute.to_string(),
                            None => format!("xl/{}", target),
                        };
                        rels.insert(id, path);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(rels)
    }

    /// Read one worksheet part into a dense worksheet
    fn read_worksheet<R: Read + Seek>(
        archive: &mut zip::ZipArchive<R>,
        path: &str,
        name: &str,
        shared_strings: &[SharedString],
        formats: &[CellFormat],
        strings: &mut StringPool,
    ) -> XlsxResult<Worksheet> {
        let file = archive
            .by_name(path)
            .map_err(|_| XlsxError::MissingPart(path.to_string()))?;

        let mut xml_reader = Reader::from_reader(BufReader::new(file));
        xml_reader.trim_text(false);

        let mut buf = Vec::new();
        let mut cells: Vec<(u32, u32, Cell)> = Vec::new();

        // Position fallbacks for rows and cells without an `r` attribute
        let mut current_row: u32 = 0;
        let mut next_row: u32 = 0;
        let mut next_col: u32 = 0;

        let mut current: Option<RawCell> = None;
        let mut in_value = false;
        let mut in_formula = false;
        let mut in_inline_text = false;

        loop {
            match xml_reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"row" => {
                        current_row = Self::row_index(&e, next_row);
                        next_row = current_row + 1;
                        next_col = 0;
                    }
                    b"c" => {
                        let raw = Self::start_cell(&e, current_row, next_col)?;
                        next_col = raw.col + 1;
                        current = Some(raw);
                    }
                    b"v" => in_value = true,
                    b"f" => {
                        in_formula = true;
                        if let Some(raw) = current.as_mut() {
                            raw.formula = Some(String::new());
                        }
                    }
                    b"t" => {
                        if let Some(raw) = current.as_mut() {
                            in_inline_text = true;
                            raw.inline_text.get_or_insert_with(String::new);
                        }
                    }
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.name().as_ref() {
                    b"row" => {
                        current_row = Self::row_index(&e, next_row);
                        next_row = current_row + 1;
                        next_col = 0;
                    }
                    b"c" => {
                        let raw = Self::start_cell(&e, current_row, next_col)?;
                        next_col = raw.col + 1;
                        cells.push(Self::finish_cell(raw, shared_strings, formats, strings)?);
                    }
                    _ => {}
                },
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"c" => {
                        if let Some(raw) = current.take() {
                            cells.push(Self::finish_cell(raw, shared_strings, formats, strings)?);
                        }
                    }
                    b"v" => in_value = false,
                    b"f" => in_formula = false,
                    b"t" => in_inline_text = false,
                    _ => {}
                },
                Ok(Event::Text(e)) if in_value || in_formula || in_inline_text => {
                    let text = e.unescape()?;
                    if let Some(raw) = current.as_mut() {
                        let target = if in_value {
                            raw.value.get_or_insert_with(String::new)
                        } else if in_formula {
                            raw.formula.get_or_insert_with(String::new)
                        } else {
                            raw.inline_text.get_or_insert_with(String::new)
                        };
                        target.push_str(&text);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(XlsxError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        let rows = Self::into_rows(cells);
        debug!("Read {} rows from '{}' ({})", rows.len(), name, path);
        Ok(Worksheet::from_rows(name, rows))
    }

    fn row_index(e: &BytesStart<'_>, fallback: u32) -> u32 {
        attr(e, b"r")
            .and_then(|r| r.parse::<u32>().ok())
            .and_then(|r| r.checked_sub(1))
            .unwrap_or(fallback)
    }

    fn start_cell(e: &BytesStart<'_>, row: u32, col: u32) -> XlsxResult<RawCell> {
        let (row, col) = match attr(e, b"r") {
            Some(r) => reference::parse(&r)?,
            None => (row, col),
        };

        Ok(RawCell {
            row,
            col,
            cell_type: attr(e, b"t"),
            style: attr(e, b"s").and_then(|s| s.parse().ok()).unwrap_or(0),
            ..Default::default()
        })
    }

    fn finish_cell(
        raw: RawCell,
        shared_strings: &[SharedString],
        formats: &[CellFormat],
        strings: &mut StringPool,
    ) -> XlsxResult<(u32, u32, Cell)> {
        let format = formats.get(raw.style as usize).cloned().ok_or_else(|| {
            XlsxError::Parse(format!("Style index {} out of bounds", raw.style))
        })?;

        let value = match (raw.cell_type.as_deref(), raw.value.as_deref()) {
            (Some("inlineStr"), _) => match raw.inline_text.as_deref() {
                Some(text) => CellValue::Text(strings.intern(decode_excel_escapes(text))),
                None => CellValue::Empty,
            },
            (_, None) => CellValue::Empty,

            (Some("s"), Some(v)) => {
                let idx: usize = v.trim().parse().map_err(|_| {
                    XlsxError::Parse(format!("Invalid shared string index: {}", v))
                })?;
                let s = shared_strings.get(idx).ok_or_else(|| {
                    XlsxError::Parse(format!("Shared string index {} out of bounds", idx))
                })?;
                CellValue::Text(s.clone())
            }

            (Some("b"), Some(v)) => {
                let v = v.trim();
                CellValue::Boolean(v == "1" || v.eq_ignore_ascii_case("true"))
            }

            (Some("e"), Some(v)) => match CellError::parse(v.trim()) {
                Some(error) => CellValue::Error(error),
                None => CellValue::Text(strings.intern(v)),
            },

            (Some("str"), Some(v)) => CellValue::Text(strings.intern(decode_excel_escapes(v))),

            // ISO 8601 dates (strict OOXML)
            (Some("d"), Some(v)) => match Self::parse_iso_date(v.trim()) {
                Some(stamp) => CellValue::Date(stamp),
                None => CellValue::Text(strings.intern(v)),
            },

            (None | Some("n"), Some(v)) => match v.trim().parse::<f64>() {
                Ok(n) if format.number_format.is_date_format() => match from_excel_serial(n) {
                    Some(stamp) => CellValue::Date(stamp),
                    None => CellValue::Number(n),
                },
                Ok(n) => CellValue::Number(n),
                Err(_) => CellValue::Text(strings.intern(v)),
            },

            (Some(_), Some(v)) => CellValue::Text(strings.intern(v)),
        };

        // Shared-formula followers carry an empty <f/>; they keep only their value
        let formula = match raw.formula {
            Some(f) if f.starts_with('=') => f,
            Some(f) if !f.is_empty() => format!("={}", f),
            _ => String::new(),
        };

        Ok((
            raw.row,
            raw.col,
            Cell {
                value,
                formula,
                format,
            },
        ))
    }

    fn parse_iso_date(s: &str) -> Option<NaiveDateTime> {
        if let Ok(stamp) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(stamp);
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .ok()
            .map(|d| d.and_time(NaiveTime::MIN))
    }

    /// Lay collected cells out over their bounding rectangle
    fn into_rows(cells: Vec<(u32, u32, Cell)>) -> Vec<Vec<Cell>> {
        let (Some(min_row), Some(max_row)) = (
            cells.iter().map(|(r, _, _)| *r).min(),
            cells.iter().map(|(r, _, _)| *r).max(),
        ) else {
            return Vec::new();
        };
        let min_col = cells.iter().map(|(_, c, _)| *c).min().unwrap_or(0);
        let max_col = cells.iter().map(|(_, c, _)| *c).max().unwrap_or(0);

        let height = (max_row - min_row + 1) as usize;
        let width = (max_col - min_col + 1) as usize;
        let mut rows = vec![vec![Cell::empty(); width]; height];

        for (row, col, cell) in cells {
            rows[(row - min_row) as usize][(col - min_col) as usize] = cell;
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzy_sheets_core::NumberFormat;
    use pretty_assertions::assert_eq;
    use std::io::{Cursor, Write};

    const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#;

    const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="/xl/worksheets/other.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

    const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
  <sheets>
    <sheet name="Sales &amp; Costs" sheetId="1" r:id="rId1"/>
    <sheet name="Blank" sheetId="2" r:id="rId2"/>
  </sheets>
</workbook>"#;

    const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <numFmts count="1"><numFmt numFmtId="164" formatCode="yyyy-mm-dd"/></numFmts>
  <fonts count="2">
    <font><sz val="11"/><name val="Calibri"/></font>
    <font><b/><sz val="12"/><name val="Arial"/></font>
  </fonts>
  <cellXfs count="3">
    <xf numFmtId="0" fontId="0"/>
    <xf numFmtId="164" fontId="0" applyNumberFormat="1"/>
    <xf numFmtId="4" fontId="1" applyFont="1"/>
  </cellXfs>
</styleSheet>"#;

    const SHARED_STRINGS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" count="3" uniqueCount="3">
  <si><t>Region</t></si>
  <si><r><t>North</t></r><r><rPr><b/></rPr><t xml:space="preserve"> East</t></r></si>
  <si><t>Kyoto</t><rPh sb="0" eb="2"><t>キョウト</t></rPh></si>
</sst>"#;

    const SHEET1: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <sheetData>
    <row r="2">
      <c r="B2" t="s"><v>0</v></c>
      <c r="C2" s="2"><v>1234.5</v></c>
      <c r="D2" s="1"><v>45306</v></c>
    </row>
    <row r="3">
      <c r="B3" t="s"><v>1</v></c>
      <c r="C3"><f>C2*2</f><v>2469</v></c>
      <c r="D3" t="inlineStr"><is><t xml:space="preserve">  two_x000D_lines </t></is></c>
    </row>
    <row r="4">
      <c r="B4" t="s"><v>2</v></c>
      <c r="C4" t="b"><v>1</v></c>
      <c r="E4" t="e"><v>#DIV/0!</v></c>
    </row>
    <row r="5">
      <c r="C5" t="str"><f>"x" &amp; "y"</f><v>xy</v></c>
      <c r="D5" s="2"/>
    </row>
  </sheetData>
</worksheet>"#;

    const EMPTY_SHEET: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData/></worksheet>"#;

    fn package(parts: &[(&str, &str)]) -> Cursor<Vec<u8>> {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in parts {
            zip.start_file(*name, zip::write::SimpleFileOptions::default())
                .unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        let mut cursor = zip.finish().unwrap();
        cursor.set_position(0);
        cursor
    }

    fn sample() -> Workbook {
        XlsxReader::read(package(&[
            ("[Content_Types].xml", CONTENT_TYPES),
            ("xl/workbook.xml", WORKBOOK),
            ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
            ("xl/styles.xml", STYLES),
            ("xl/sharedStrings.xml", SHARED_STRINGS),
            ("xl/worksheets/sheet1.xml", SHEET1),
            ("xl/worksheets/other.xml", EMPTY_SHEET),
        ]))
        .unwrap()
    }

    #[test]
    fn test_reads_all_sheets_in_order() {
        let workbook = sample();
        let names: Vec<_> = workbook.worksheets().map(|s| s.name().to_string()).collect();
        assert_eq!(names, vec!["Sales & Costs", "Blank"]);
        assert!(workbook.worksheet(1).unwrap().is_empty());
    }

    #[test]
    fn test_dense_grid_over_used_range() {
        let workbook = sample();
        let sheet = workbook.worksheet(0).unwrap();

        // B2:E5 -> 4 rows x 4 columns
        assert_eq!(sheet.row_count(), 4);
        assert!(sheet.rows().all(|row| row.len() == 4));
        assert_eq!(sheet.cell_at(0, 0).unwrap().value.as_text(), Some("Region"));
        assert_eq!(sheet.cell_at(0, 3).unwrap(), &Cell::empty());
    }

    #[test]
    fn test_cell_values() {
        let workbook = sample();
        let sheet = workbook.worksheet(0).unwrap();
        let value = |r, c| sheet.cell_at(r, c).unwrap().value.clone();

        assert_eq!(value(0, 1), CellValue::Number(1234.5));
        assert_eq!(
            value(0, 2),
            CellValue::from(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
        assert_eq!(value(1, 0), CellValue::text("North East"));
        assert_eq!(value(1, 2), CellValue::text("  two\rlines "));
        assert_eq!(value(2, 0), CellValue::text("Kyoto"));
        assert_eq!(value(2, 1), CellValue::Boolean(true));
        assert_eq!(value(2, 3), CellValue::Error(CellError::Div0));
        assert_eq!(value(3, 1), CellValue::text("xy"));
    }

    #[test]
    fn test_formulas_keep_cached_value() {
        let workbook = sample();
        let sheet = workbook.worksheet(0).unwrap();

        let doubled = sheet.cell_at(1, 1).unwrap();
        assert_eq!(doubled.formula, "=C2*2");
        assert_eq!(doubled.value, CellValue::Number(2469.0));

        assert_eq!(sheet.cell_at(3, 1).unwrap().formula, r#"="x" & "y""#);
        assert_eq!(sheet.formula_count(), 2);
    }

    #[test]
    fn test_cell_formats() {
        let workbook = sample();
        let sheet = workbook.worksheet(0).unwrap();

        let amount = &sheet.cell_at(0, 1).unwrap().format;
        assert_eq!(amount.number_format, NumberFormat::BuiltIn(4));
        assert_eq!(amount.font_name, "Arial");
        assert_eq!(amount.font_size, 12.0);
        assert!(amount.bold);

        let date = &sheet.cell_at(0, 2).unwrap().format;
        assert_eq!(date.number_format, NumberFormat::Custom("yyyy-mm-dd".into()));
        assert!(!date.bold);

        // Style-only cells keep their format
        let styled = sheet.cell_at(3, 2).unwrap();
        assert_eq!(styled.value, CellValue::Empty);
        assert_eq!(styled.format, *amount);
    }

    #[test]
    fn test_cells_without_references() {
        let sheet = r#"<worksheet><sheetData>
            <row><c><v>1</v></c><c><v>2</v></c></row>
            <row><c r="B2"><v>3</v></c><c><v>4</v></c></row>
        </sheetData></worksheet>"#;
        let workbook = XlsxReader::read(package(&[
            ("[Content_Types].xml", CONTENT_TYPES),
            ("xl/workbook.xml", WORKBOOK),
            ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
            ("xl/worksheets/sheet1.xml", sheet),
            ("xl/worksheets/other.xml", EMPTY_SHEET),
        ]))
        .unwrap();

        let numbers: Vec<Vec<Option<f64>>> = workbook
            .worksheet(0)
            .unwrap()
            .rows()
            .map(|row| row.iter().map(|c| c.value.as_number()).collect())
            .collect();
        assert_eq!(
            numbers,
            vec![
                vec![Some(1.0), Some(2.0), None],
                vec![None, Some(3.0), Some(4.0)]
            ]
        );
    }

    #[test]
    fn test_missing_content_types() {
        let result = XlsxReader::read(package(&[("xl/workbook.xml", WORKBOOK)]));
        assert!(matches!(result, Err(XlsxError::InvalidFormat(_))));
    }

    #[test]
    fn test_missing_workbook_part() {
        let result = XlsxReader::read(package(&[("[Content_Types].xml", CONTENT_TYPES)]));
        assert!(matches!(result, Err(XlsxError::MissingPart(_))));
    }

    #[test]
    fn test_bad_cell_reference() {
        let sheet = r#"<worksheet><sheetData><row r="1"><c r="1A"><v>1</v></c></row></sheetData></worksheet>"#;
        let result = XlsxReader::read(package(&[
            ("[Content_Types].xml", CONTENT_TYPES),
            ("xl/workbook.xml", WORKBOOK),
            ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
            ("xl/worksheets/sheet1.xml", sheet),
            ("xl/worksheets/other.xml", EMPTY_SHEET),
        ]));
        assert!(matches!(result, Err(XlsxError::InvalidCellReference(_))));
    }

    #[test]
    fn test_not_a_zip() {
        let result = XlsxReader::read(Cursor::new(b"a,b,c\n".to_vec()));
        assert!(matches!(result, Err(XlsxError::Zip(_))));
    }
}
