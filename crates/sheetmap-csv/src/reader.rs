//! CSV reader

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use sheetmap_core::{index_to_letters, CellValue, Dataset};

/// CSV file reader
pub struct CsvReader;

impl CsvReader {
    /// Read CSV file into a dataset
    pub fn read_file<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Dataset> {
        let file = File::open(path)?;
        Self::read(file, options)
    }

    /// Read CSV from a reader into a dataset
    ///
    /// Records before `header_row` are skipped. Without a header, columns
    /// are named by their letters (A, B, ...). Short records are padded
    /// with empty cells.
    pub fn read<R: Read>(reader: R, options: &CsvReadOptions) -> CsvResult<Dataset> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(options.delimiter)
            .quote(options.quote)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);
        let mut records = csv_reader.records();

        for _ in 0..options.header_row {
            match records.next() {
                Some(record) => {
                    record?;
                }
                None => break,
            }
        }

        let mut header: Vec<String> = Vec::new();
        if options.has_header {
            if let Some(record) = records.next() {
                header = record?.iter().map(|name| name.trim().to_string()).collect();
            }
        }

        let mut rows = Vec::new();
        let mut width = header.len();
        for result in records {
            let record = result?;
            width = width.max(record.len());

            let row: Vec<CellValue> = record
                .iter()
                .map(|field| {
                    if options.auto_detect_types {
                        Self::detect_type(field)
                    } else {
                        CellValue::string(field)
                    }
                })
                .collect();
            rows.push(row);
        }

        if !options.has_header {
            header = (1..=width).map(index_to_letters).collect();
        } else if width > header.len() {
            tracing::warn!(
                columns = header.len(),
                widest = width,
                "records wider than the header, extra fields dropped"
            );
        }

        tracing::debug!(columns = header.len(), rows = rows.len(), "read csv");
        Ok(Dataset::from_rows(header, rows))
    }

    /// Detect the type of a field value
    fn detect_type(field: &str) -> CellValue {
        let field = field.trim();

        if field.is_empty() {
            return CellValue::Empty;
        }

        // Try boolean
        match field.to_lowercase().as_str() {
            "true" => return CellValue::Boolean(true),
            "false" => return CellValue::Boolean(false),
            _ => {}
        }

        // Try number
        if let Ok(n) = field.parse::<f64>() {
            return CellValue::Number(n);
        }

        // Default to string
        CellValue::string(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetmap_core::TabularSource;

    #[test]
    fn test_read_with_type_detection() {
        let data = "Time,Temp,Ok\n2023-01-01 10:00:00,21.5,true\n2023-01-01 10:00:05,,FALSE\n";
        let ds = CsvReader::read(data.as_bytes(), &CsvReadOptions::default()).unwrap();

        assert_eq!(ds.column_names(), vec!["Time", "Temp", "Ok"]);
        assert_eq!(ds.row_count(), 2);
        assert_eq!(
            ds.column("Time").unwrap()[1],
            CellValue::string("2023-01-01 10:00:05")
        );
        assert_eq!(
            ds.column("Temp").unwrap(),
            &[CellValue::Number(21.5), CellValue::Empty]
        );
        assert_eq!(
            ds.column("Ok").unwrap(),
            &[CellValue::Boolean(true), CellValue::Boolean(false)]
        );
    }

    #[test]
    fn test_read_config_keeps_text() {
        let data = "Input,Output\n3,A\n";
        let ds = CsvReader::read(data.as_bytes(), &CsvReadOptions::config()).unwrap();
        assert_eq!(ds.column("Input").unwrap(), &[CellValue::string("3")]);
    }

    #[test]
    fn test_header_row_skips_preamble() {
        let data = "Logger 7\nexported 2023-01-01\nA,B\n1,2\n3,4\n";
        let options = CsvReadOptions::default().with_header_row(2);
        let ds = CsvReader::read(data.as_bytes(), &options).unwrap();

        assert_eq!(ds.column_names(), vec!["A", "B"]);
        assert_eq!(
            ds.column("B").unwrap(),
            &[CellValue::Number(2.0), CellValue::Number(4.0)]
        );
    }

    #[test]
    fn test_ragged_records() {
        let data = "a,b,c\n1\n1,2,3,4\n";
        let ds = CsvReader::read(data.as_bytes(), &CsvReadOptions::default()).unwrap();
        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.column("c").unwrap(), &[CellValue::Empty, CellValue::Number(3.0)]);
    }

    #[test]
    fn test_no_header_names_columns_by_letter() {
        let options = CsvReadOptions {
            has_header: false,
            ..Default::default()
        };
        let ds = CsvReader::read("1,2\n3,4\n".as_bytes(), &options).unwrap();
        assert_eq!(ds.column_names(), vec!["A", "B"]);
        assert_eq!(ds.row_count(), 2);
    }

    #[test]
    fn test_semicolon_delimiter() {
        let options = CsvReadOptions::default().with_delimiter(b';');
        let ds = CsvReader::read("x;y\n1;2\n".as_bytes(), &options).unwrap();
        assert_eq!(ds.column("y").unwrap(), &[CellValue::Number(2.0)]);
    }
}
