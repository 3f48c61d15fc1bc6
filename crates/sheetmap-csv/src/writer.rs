//! Delimited text writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::{CsvWriteOptions, LineTerminator};
use sheetmap_core::OutputDataset;

/// Writes output datasets as delimited text
pub struct CsvWriter;

impl CsvWriter {
    /// Write an output dataset to a file
    pub fn write_file<P: AsRef<Path>>(
        output: &OutputDataset,
        path: P,
        options: &CsvWriteOptions,
    ) -> CsvResult<()> {
        let file = File::create(path)?;
        Self::write(output, file, options)
    }

    /// Write an output dataset to a writer
    ///
    /// Columns are laid out from position 1 to the highest occupied one;
    /// unoccupied positions and cells past a column's end are written empty.
    pub fn write<W: Write>(
        output: &OutputDataset,
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
            .from_writer(writer);

        let width = output.max_position().unwrap_or(0);

        if options.write_header && width > 0 {
            let header: Vec<&str> = (1..=width)
                .map(|pos| output.get(pos).map_or("", |c| c.title.as_str()))
                .collect();
            csv_writer.write_record(&header)?;
        }

        for row in 0..output.row_count() {
            let record: Vec<String> = (1..=width)
                .map(|pos| {
                    output
                        .get(pos)
                        .and_then(|c| c.values.get(row))
                        .map(ToString::to_string)
                        .unwrap_or_default()
                })
                .collect();
            csv_writer.write_record(&record)?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}
