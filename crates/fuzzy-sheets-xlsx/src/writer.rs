//! XLSX writer

use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use log::debug;

use crate::error::{XlsxError, XlsxResult};
use crate::reference;
use crate::styles::{stored_format, XlsxStyleTable};
use crate::xml::{encode_excel_escapes, escape};
use fuzzy_sheets_core::{to_excel_serial, Cell, CellError, CellValue, Workbook, Worksheet};

/// XLSX file writer
///
/// Writes every worksheet in order, one `<c>` per stored cell starting at A1,
/// with inline strings and a deduplicated style table.
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write a workbook to a file path
    pub fn write_file<P: AsRef<Path>>(workbook: &Workbook, path: P) -> XlsxResult<()> {
        Self::ensure_worksheets(workbook)?;
        let file = File::create(path)?;
        Self::write(workbook, file)
    }

    /// Write a workbook to a writer
    ///
    /// A workbook without worksheets is rejected since Excel requires at
    /// least one sheet.
    pub fn write<W: Write + Seek>(workbook: &Workbook, writer: W) -> XlsxResult<()> {
        Self::ensure_worksheets(workbook)?;

        let mut zip = zip::ZipWriter::new(writer);
        let style_table = XlsxStyleTable::build(workbook);

        Self::write_content_types(&mut zip, workbook)?;
        Self::write_root_rels(&mut zip)?;
        Self::write_workbook_xml(&mut zip, workbook)?;
        Self::write_workbook_rels(&mut zip, workbook)?;
        Self::write_styles_xml(&mut zip, &style_table)?;

        for (i, sheet) in workbook.worksheets().enumerate() {
            Self::write_worksheet(&mut zip, i, sheet, &style_table)?;
        }

        zip.finish()?;
        debug!(
            "Wrote {} sheets ({} cells, {} styles)",
            workbook.sheet_count(),
            workbook.cell_count(),
            style_table.len()
        );
        Ok(())
    }

    fn ensure_worksheets(workbook: &Workbook) -> XlsxResult<()> {
        if workbook.is_empty() {
            return Err(XlsxError::InvalidFormat(
                "Workbook has no worksheets".into(),
            ));
        }
        Ok(())
    }

    fn write_content_types<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("[Content_Types].xml", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="xml" ContentType="application/xml"/>
    <Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
    <Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
        );

        for i in 0..workbook.sheet_count() {
            content.push_str(&format!(
                r#"
    <Override PartName="/xl/worksheets/sheet{}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
                i + 1
            ));
        }

        content.push_str("\n</Types>");
        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_root_rels<W: Write + Seek>(zip: &mut zip::ZipWriter<W>) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("_rels/.rels", options)?;

        let content = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_xml<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/workbook.xml", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
    <sheets>"#,
        );

        for (i, sheet) in workbook.worksheets().enumerate() {
            content.push_str(&format!(
                r#"
        <sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
                escape(sheet.name()),
                i + 1,
                i + 1
            ));
        }

        content.push_str(
            r#"
    </sheets>
</workbook>"#,
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_workbook_rels<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        workbook: &Workbook,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/_rels/workbook.xml.rels", options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
        );

        for i in 0..workbook.sheet_count() {
            content.push_str(&format!(
                r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{}.xml"/>"#,
                i + 1,
                i + 1
            ));
        }

        content.push_str(&format!(
            r#"
    <Relationship Id="rId{}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#,
            workbook.sheet_count() + 1
        ));

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_styles_xml<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        style_table: &XlsxStyleTable,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file("xl/styles.xml", options)?;
        zip.write_all(style_table.to_styles_xml().as_bytes())?;
        Ok(())
    }

    fn write_worksheet<W: Write + Seek>(
        zip: &mut zip::ZipWriter<W>,
        index: usize,
        sheet: &Worksheet,
        style_table: &XlsxStyleTable,
    ) -> XlsxResult<()> {
        let options = zip::write::SimpleFileOptions::default();
        zip.start_file(format!("xl/worksheets/sheet{}.xml", index + 1), options)?;

        let mut content = String::from(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
    <sheetData>"#,
        );

        // Every stored cell is written, including unstyled blanks, so the
        // used range survives a read
        for (r, row) in sheet.rows().enumerate() {
            if row.is_empty() {
                continue;
            }
            content.push_str(&format!("\n        <row r=\"{}\">", r + 1));
            for (c, cell) in row.iter().enumerate() {
                let xf_id = style_table.xf_id_for(&stored_format(cell));
                content.push_str("\n            ");
                content.push_str(&Self::cell_xml(
                    &reference::format(r as u32, c as u32),
                    cell,
                    xf_id,
                ));
            }
            content.push_str("\n        </row>");
        }

        content.push_str("\n    </sheetData>\n</worksheet>");
        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Markup for one `<c>` element
    fn cell_xml(cell_ref: &str, cell: &Cell, xf_id: u32) -> String {
        let style_attr = if xf_id != 0 {
            format!(" s=\"{}\"", xf_id)
        } else {
            String::new()
        };

        let formula = if cell.has_formula() {
            let text = cell.formula.strip_prefix('=').unwrap_or(&cell.formula);
            format!("<f>{}</f>", escape(text))
        } else {
            String::new()
        };

        let text_xml = |s: &str| escape(&encode_excel_escapes(s));

        let (type_attr, value) = match &cell.value {
            CellValue::Empty => ("", String::new()),
            CellValue::Number(n) if n.is_finite() => ("", format!("<v>{}</v>", n)),
            CellValue::Number(_) => (" t=\"e\"", format!("<v>{}</v>", CellError::Num.as_str())),
            CellValue::Date(stamp) => ("", format!("<v>{}</v>", to_excel_serial(*stamp))),
            // A formula's cached string goes in <v>; literals are inline strings
            CellValue::Text(s) if cell.has_formula() => {
                (" t=\"str\"", format!("<v>{}</v>", text_xml(s.as_str())))
            }
            CellValue::Text(s) => (
                " t=\"inlineStr\"",
                format!("<is><t xml:space=\"preserve\">{}</t></is>", text_xml(s.as_str())),
            ),
            CellValue::Boolean(b) => (" t=\"b\"", format!("<v>{}</v>", u8::from(*b))),
            CellValue::Error(e) => (" t=\"e\"", format!("<v>{}</v>", escape(e.as_str()))),
        };

        if formula.is_empty() && value.is_empty() {
            format!("<c r=\"{}\"{}/>", cell_ref, style_attr)
        } else {
            format!(
                "<c r=\"{}\"{}{}>{}{}</c>",
                cell_ref, style_attr, type_attr, formula, value
            )
        }
    }
}
