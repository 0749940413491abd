//! XLSX styles (styles.xml) read/write helpers
//!
//! Only the parts a [`CellFormat`] carries are modelled: the number format and
//! the font name, size and weight.

use std::borrow::Cow;
use std::collections::HashMap;
use std::io::{BufReader, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::{XlsxError, XlsxResult};
use crate::xml::{attr, escape, flag};
use fuzzy_sheets_core::style::{DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE};
use fuzzy_sheets_core::{Cell, CellFormat, CellValue, NumberFormat, Workbook};

/// First id Excel leaves free for custom number formats
const FIRST_CUSTOM_NUMFMT_ID: u32 = 164;

/// Code used when a timestamp with a time of day is stored without a date format
const DATETIME_FORMAT_CODE: &str = "yyyy-mm-dd hh:mm:ss";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FontKey {
    name: String,
    size_bits: u64,
    bold: bool,
}

impl FontKey {
    fn of(format: &CellFormat) -> Self {
        Self {
            name: format.font_name.clone(),
            size_bits: format.font_size.to_bits(),
            bold: format.bold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct FormatKey {
    number_format: NumberFormat,
    font: FontKey,
}

impl FormatKey {
    fn of(format: &CellFormat) -> Self {
        Self {
            number_format: format.number_format.clone(),
            font: FontKey::of(format),
        }
    }
}

/// Format a cell is stored with
///
/// Dates are stored as serial numbers, so a date cell without a date number
/// format gets one; otherwise it would read back as a plain number.
pub(crate) fn stored_format(cell: &Cell) -> Cow<'_, CellFormat> {
    match cell.value {
        CellValue::Date(stamp) if !cell.format.number_format.is_date_format() => {
            let number_format = if stamp.time() == chrono::NaiveTime::MIN {
                NumberFormat::date_short()
            } else {
                NumberFormat::from_string(DATETIME_FORMAT_CODE)
            };
            Cow::Owned(cell.format.clone().with_number_format(number_format))
        }
        _ => Cow::Borrowed(&cell.format),
    }
}

// === Writing ===

#[derive(Debug)]
pub(crate) struct XlsxStyleTable {
    /// Deduplicated formats; the index is the cellXfs index (xfId)
    formats: Vec<CellFormat>,
    xf_ids: HashMap<FormatKey, u32>,
}

impl XlsxStyleTable {
    pub(crate) fn build(workbook: &Workbook) -> Self {
        let default = CellFormat::default();
        let mut xf_ids = HashMap::new();
        xf_ids.insert(FormatKey::of(&default), 0);
        let mut formats = vec![default];

        for sheet in workbook.worksheets() {
            for (_, _, cell) in sheet.cells() {
                let format = stored_format(cell);
                let key = FormatKey::of(&format);
                if !xf_ids.contains_key(&key) {
                    xf_ids.insert(key, formats.len() as u32);
                    formats.push(format.into_owned());
                }
            }
        }

        Self { formats, xf_ids }
    }

    /// cellXfs index for a format; unknown formats fall back to the default
    pub(crate) fn xf_id_for(&self, format: &CellFormat) -> u32 {
        self.xf_ids
            .get(&FormatKey::of(format))
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn len(&self) -> usize {
        self.formats.len()
    }

    pub(crate) fn to_styles_xml(&self) -> String {
        let mut font_ids: HashMap<FontKey, u32> = HashMap::new();
        let mut fonts: Vec<&CellFormat> = Vec::new();

        let mut numfmt_ids: HashMap<&str, u32> = HashMap::new();
        let mut numfmts: Vec<(u32, &str)> = Vec::new();

        // (numFmtId, fontId) per xf
        let mut resolved: Vec<(u32, u32)> = Vec::with_capacity(self.formats.len());

        for format in &self.formats {
            let font_id = *font_ids.entry(FontKey::of(format)).or_insert_with(|| {
                fonts.push(format);
                (fonts.len() - 1) as u32
            });

            let num_fmt_id = match &format.number_format {
                NumberFormat::General => 0,
                NumberFormat::BuiltIn(id) => *id,
                NumberFormat::Custom(code) => {
                    *numfmt_ids.entry(code.as_str()).or_insert_with(|| {
                        let id = FIRST_CUSTOM_NUMFMT_ID + numfmts.len() as u32;
                        numfmts.push((id, code.as_str()));
                        id
                    })
                }
            };

            resolved.push((num_fmt_id, font_id));
        }

        let mut xml = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
        );

        if !numfmts.is_empty() {
            xml.push_str(&format!("\n  <numFmts count=\"{}\">", numfmts.len()));
            for (id, code) in &numfmts {
                xml.push_str(&format!(
                    "\n    <numFmt numFmtId=\"{}\" formatCode=\"{}\"/>",
                    id,
                    escape(code)
                ));
            }
            xml.push_str("\n  </numFmts>");
        }

        xml.push_str(&format!("\n  <fonts count=\"{}\">", fonts.len()));
        for font in &fonts {
            xml.push_str("\n    ");
            xml.push_str(&write_font(font));
        }
        xml.push_str("\n  </fonts>");

        // Excel requires the first two fills to be none and gray125
        xml.push_str(
            r#"
  <fills count="2">
    <fill><patternFill patternType="none"/></fill>
    <fill><patternFill patternType="gray125"/></fill>
  </fills>
  <borders count="1">
    <border><left/><right/><top/><bottom/><diagonal/></border>
  </borders>
  <cellStyleXfs count="1">
    <xf numFmtId="0" fontId="0" fillId="0" borderId="0"/>
  </cellStyleXfs>"#,
        );

        xml.push_str(&format!("\n  <cellXfs count=\"{}\">", resolved.len()));
        for (num_fmt_id, font_id) in &resolved {
            let mut xf = format!(
                "\n    <xf numFmtId=\"{}\" fontId=\"{}\" fillId=\"0\" borderId=\"0\" xfId=\"0\"",
                num_fmt_id, font_id
            );
            if *num_fmt_id != 0 {
                xf.push_str(" applyNumberFormat=\"1\"");
            }
            if *font_id != 0 {
                xf.push_str(" applyFont=\"1\"");
            }
            xf.push_str("/>");
            xml.push_str(&xf);
        }
        xml.push_str("\n  </cellXfs>");

        xml.push_str(
            r#"
  <cellStyles count="1">
    <cellStyle name="Normal" xfId="0" builtinId="0"/>
  </cellStyles>
  <dxfs count="0"/>
  <tableStyles count="0" defaultTableStyle="TableStyleMedium9" defaultPivotStyle="PivotStyleLight16"/>
</styleSheet>"#,
        );
        xml
    }
}

fn write_font(format: &CellFormat) -> String {
    let mut s = String::from("<font>");
    if format.bold {
        s.push_str("<b/>");
    }
    s.push_str(&format!("<sz val=\"{}\"/>", format.font_size));
    s.push_str(&format!("<name val=\"{}\"/>", escape(&format.font_name)));
    s.push_str("</font>");
    s
}

// === Reading ===

#[derive(Debug, Clone)]
struct FontEntry {
    name: String,
    size: f64,
    bold: bool,
}

impl Default for FontEntry {
    fn default() -> Self {
        Self {
            name: DEFAULT_FONT_NAME.to_string(),
            size: DEFAULT_FONT_SIZE,
            bold: false,
        }
    }
}

/// Parser state for styles.xml
#[derive(Default)]
struct StylesParser {
    numfmts: HashMap<u32, String>,
    fonts: Vec<FontEntry>,
    /// (numFmtId, fontId) per cellXfs entry
    cell_xfs: Vec<(u32, u32)>,
    in_fonts: bool,
    in_cell_xfs: bool,
    current_font: Option<FontEntry>,
}

impl StylesParser {
    fn open(&mut self, e: &BytesStart<'_>, self_closing: bool) {
        match e.name().as_ref() {
            b"numFmt" => {
                let id = attr(e, b"numFmtId").and_then(|v| v.parse::<u32>().ok());
                if let (Some(id), Some(code)) = (id, attr(e, b"formatCode")) {
                    self.numfmts.insert(id, code);
                }
            }
            b"fonts" if !self_closing => self.in_fonts = true,
            b"font" if self.in_fonts => {
                if self_closing {
                    self.fonts.push(FontEntry::default());
                } else {
                    self.current_font = Some(FontEntry::default());
                }
            }
            b"b" => {
                if let Some(font) = self.current_font.as_mut() {
                    font.bold = flag(e, b"val");
                }
            }
            b"sz" => {
                let size = attr(e, b"val").and_then(|v| v.parse::<f64>().ok());
                if let (Some(font), Some(size)) = (self.current_font.as_mut(), size) {
                    font.size = size;
                }
            }
            b"name" => {
                if let (Some(font), Some(name)) = (self.current_font.as_mut(), attr(e, b"val")) {
                    font.name = name;
                }
            }
            b"cellXfs" if !self_closing => self.in_cell_xfs = true,
            b"xf" if self.in_cell_xfs => {
                let num_fmt_id = attr(e, b"numFmtId")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0);
                let font_id = attr(e, b"fontId")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(0);
                self.cell_xfs.push((num_fmt_id, font_id));
            }
            _ => {}
        }
    }

    fn close(&mut self, name: &[u8]) {
        match name {
            b"fonts" => self.in_fonts = false,
            b"font" => {
                if let Some(font) = self.current_font.take() {
                    self.fonts.push(font);
                }
            }
            b"cellXfs" => self.in_cell_xfs = false,
            _ => {}
        }
    }

    fn number_format(&self, id: u32) -> NumberFormat {
        match self.numfmts.get(&id) {
            Some(code) => NumberFormat::from_string(code.as_str()),
            None if id == 0 => NumberFormat::General,
            None => NumberFormat::BuiltIn(id),
        }
    }

    fn finish(self) -> Vec<CellFormat> {
        if self.cell_xfs.is_empty() {
            return vec![CellFormat::default()];
        }

        self.cell_xfs
            .iter()
            .map(|&(num_fmt_id, font_id)| {
                let font = self
                    .fonts
                    .get(font_id as usize)
                    .cloned()
                    .unwrap_or_default();
                CellFormat {
                    number_format: self.number_format(num_fmt_id),
                    font_name: font.name,
                    font_size: font.size,
                    bold: font.bold,
                }
            })
            .collect()
    }
}

/// Read styles.xml into one [`CellFormat`] per cellXfs entry
pub(crate) fn read_styles_xml<R: Read>(reader: R) -> XlsxResult<Vec<CellFormat>> {
    let mut xml_reader = Reader::from_reader(BufReader::new(reader));
    xml_reader.trim_text(true);

    let mut buf = Vec::new();
    let mut parser = StylesParser::default();

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => parser.open(&e, false),
            Ok(Event::Empty(e)) => parser.open(&e, true),
            Ok(Event::End(e)) => parser.close(e.name().as_ref()),
            Ok(Event::Eof) => break,
            Err(e) => return Err(XlsxError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(parser.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fuzzy_sheets_core::Worksheet;
    use pretty_assertions::assert_eq;

    const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
  <numFmts count="1"><numFmt numFmtId="164" formatCode="0.000"/></numFmts>
  <fonts count="2">
    <font><sz val="11"/><name val="Calibri"/></font>
    <font><b/><sz val="14.5"/><color theme="1"/><name val="Arial"/></font>
  </fonts>
  <cellStyleXfs count="1"><xf numFmtId="3" fontId="1"/></cellStyleXfs>
  <cellXfs count="4">
    <xf numFmtId="0" fontId="0"/>
    <xf numFmtId="164" fontId="1" applyNumberFormat="1"/>
    <xf numFmtId="14" fontId="0"><alignment horizontal="left"/></xf>
    <xf numFmtId="49" fontId="7"/>
  </cellXfs>
  <dxfs count="1"><dxf><font><b val="0"/><name val="Wingdings"/></font></dxf></dxfs>
</styleSheet>"#;

    #[test]
    fn test_read_styles() {
        let formats = read_styles_xml(STYLES.as_bytes()).unwrap();

        assert_eq!(formats.len(), 4);
        assert_eq!(formats[0], CellFormat::default());
        assert_eq!(
            formats[1],
            CellFormat::default()
                .with_number_format(NumberFormat::Custom("0.000".into()))
                .with_font_name("Arial")
                .with_font_size(14.5)
                .with_bold(true)
        );
        assert_eq!(formats[2].number_format, NumberFormat::BuiltIn(14));
        assert!(formats[2].number_format.is_date_format());
        // Out-of-range font ids fall back to the default font
        assert_eq!(formats[3].number_format, NumberFormat::text());
        assert_eq!(formats[3].font_name, DEFAULT_FONT_NAME);
    }

    #[test]
    fn test_missing_cell_xfs_gives_default() {
        let formats = read_styles_xml(r#"<styleSheet/>"#.as_bytes()).unwrap();
        assert_eq!(formats, vec![CellFormat::default()]);
    }

    #[test]
    fn test_style_table_dedupes_and_round_trips() {
        let bold = CellFormat::default().with_bold(true);
        let custom = CellFormat::default()
            .with_number_format(NumberFormat::fixed_decimals(3))
            .with_font_name("Courier New")
            .with_font_size(9.0);

        let sheet = Worksheet::from_rows(
            "S",
            vec![
                vec![Cell::new(1.0), Cell::new(2.0).with_format(bold.clone())],
                vec![
                    Cell::new(3.0).with_format(custom.clone()),
                    Cell::new(4.0).with_format(bold.clone()),
                ],
            ],
        );
        let mut workbook = Workbook::new();
        workbook.add_worksheet(sheet).unwrap();

        let table = XlsxStyleTable::build(&workbook);
        assert_eq!(table.len(), 3);
        assert_eq!(table.xf_id_for(&CellFormat::default()), 0);
        assert_eq!(table.xf_id_for(&bold), 1);
        assert_eq!(table.xf_id_for(&custom), 2);

        let formats = read_styles_xml(table.to_styles_xml().as_bytes()).unwrap();
        assert_eq!(formats, vec![CellFormat::default(), bold, custom]);
    }

    #[test]
    fn test_stored_format_gives_dates_a_date_format() {
        let day = chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        let midnight = Cell::new(day.and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(
            stored_format(&midnight).number_format,
            NumberFormat::date_short()
        );

        let afternoon = Cell::new(day.and_hms_opt(15, 30, 0).unwrap());
        assert_eq!(
            stored_format(&afternoon).number_format.format_string(),
            DATETIME_FORMAT_CODE
        );

        let styled = Cell::new(day.and_hms_opt(0, 0, 0).unwrap())
            .with_format(CellFormat::default().with_number_format(NumberFormat::BuiltIn(15)));
        assert!(matches!(stored_format(&styled), Cow::Borrowed(_)));

        let number = Cell::new(3.5);
        assert!(matches!(stored_format(&number), Cow::Borrowed(_)));
    }
}
