//! # sheetmap-csv
//!
//! CSV sources and delimited-text export for sheetmap.

mod error;
mod options;
mod reader;
mod source;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use source::CsvSource;
pub use writer::CsvWriter;
