//! CSV writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};
use fuzzy_sheets_core::{Cell, Worksheet};

/// CSV file writer
pub struct CsvWriter;

impl CsvWriter {
    /// Write a worksheet to a CSV file
    pub fn write_file<P: AsRef<Path>>(
        worksheet: &Worksheet,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(worksheet, file, options)
    }

    /// Write a worksheet to a writer
    ///
    /// Rows are written as they are stored, so ragged rows stay ragged.
    pub fn write<W: Write>(
        worksheet: &Worksheet,
        writer: W,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let terminator = match options.line_terminator {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
        };

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .terminator(terminator)
            .flexible(true)
            .from_writer(writer);

        for row in worksheet.rows() {
            csv_writer.write_record(row.iter().map(Self::field))?;
        }

        csv_writer.flush()?;
        debug!(
            "Wrote {} rows from '{}'",
            worksheet.row_count(),
            worksheet.name()
        );
        Ok(())
    }

    /// Text written for a cell: its formula if it has one, else its value
    fn field(cell: &Cell) -> String {
        if cell.has_formula() {
            cell.formula.clone()
        } else {
            cell.value.to_string()
        }
    }
}
