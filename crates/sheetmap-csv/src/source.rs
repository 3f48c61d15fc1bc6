//! CSV-backed tabular source

use std::io::Read;
use std::path::Path;

use sheetmap_core::{CellValue, Dataset, TabularSource};

use crate::error::CsvResult;
use crate::options::CsvReadOptions;
use crate::reader::CsvReader;

/// A dataset read from CSV, remembering where it came from
#[derive(Debug, Clone)]
pub struct CsvSource {
    name: String,
    dataset: Dataset,
}

impl CsvSource {
    /// Read a CSV file
    pub fn open<P: AsRef<Path>>(path: P, options: &CsvReadOptions) -> CsvResult<Self> {
        let path = path.as_ref();
        let dataset = CsvReader::read_file(path, options)?;
        Ok(Self {
            name: path.display().to_string(),
            dataset,
        })
    }

    /// Read CSV from any reader
    pub fn from_reader<S: Into<String>, R: Read>(
        name: S,
        reader: R,
        options: &CsvReadOptions,
    ) -> CsvResult<Self> {
        Ok(Self {
            name: name.into(),
            dataset: CsvReader::read(reader, options)?,
        })
    }

    /// Where the data was read from
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl TabularSource for CsvSource {
    fn column_names(&self) -> Vec<&str> {
        self.dataset.column_names()
    }

    fn row_count(&self) -> usize {
        self.dataset.row_count()
    }

    fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.dataset.column(name)
    }

    fn column_at(&self, index: usize) -> Option<&[CellValue]> {
        self.dataset.column_at(index)
    }
}
