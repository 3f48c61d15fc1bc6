//! Tabular datasets
//!
//! A [`Dataset`] is an ordered list of named columns that all share one row
//! count. Anything that can hand out named columns implements
//! [`TabularSource`], which is all the mapping engine needs from its input.

use crate::cell::CellValue;
use crate::column::Column;

/// A source of named, equal-length columns
pub trait TabularSource {
    /// Column names in source order
    fn column_names(&self) -> Vec<&str>;

    /// Number of data rows (excluding the header)
    fn row_count(&self) -> usize;

    /// Values of the first column with the given name
    fn column(&self, name: &str) -> Option<&[CellValue]>;

    /// Values of the column at a 1-based position
    ///
    /// Headers may repeat or be blank, so positions are the only
    /// unambiguous way to address a column.
    fn column_at(&self, index: usize) -> Option<&[CellValue]>;

    /// Find a column name ignoring ASCII case and surrounding whitespace
    fn find_column_name(&self, name: &str) -> Option<&str> {
        let name = name.trim();
        self.column_names()
            .into_iter()
            .find(|candidate| candidate.trim().eq_ignore_ascii_case(name))
    }
}

/// In-memory table of named columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    rows: usize,
}

impl Dataset {
    /// Build a dataset from a header and row-major records
    ///
    /// Short records are padded with empty cells; cells past the header's
    /// width are dropped.
    pub fn from_rows<S: Into<String>>(header: Vec<S>, rows: Vec<Vec<CellValue>>) -> Self {
        let mut columns: Vec<Column> = header
            .into_iter()
            .map(|name| Column::with_capacity(name, rows.len()))
            .collect();

        for mut row in rows {
            row.resize(columns.len(), CellValue::Empty);
            for (column, value) in columns.iter_mut().zip(row) {
                column.values.push(value);
            }
        }

        let rows = columns.first().map_or(0, Column::len);
        Self { columns, rows }
    }
}

impl TabularSource for Dataset {
    fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    fn row_count(&self) -> usize {
        self.rows
    }

    fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    fn column_at(&self, index: usize) -> Option<&[CellValue]> {
        index
            .checked_sub(1)
            .and_then(|i| self.columns.get(i))
            .map(|c| c.values.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Dataset {
        Dataset::from_rows(
            vec!["T", "V"],
            vec![
                vec!["2023-01-01 10:00:00".into(), 1.0.into()],
                vec!["2023-01-01 10:00:05".into()],
            ],
        )
    }

    #[test]
    fn test_from_rows_pads_short_records() {
        let ds = sample();
        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.column_names(), vec!["T", "V"]);
        assert_eq!(
            ds.column("V").unwrap(),
            &[CellValue::Number(1.0), CellValue::Empty]
        );
    }

    #[test]
    fn test_column_at_addresses_repeated_headers() {
        let ds = Dataset::from_rows(
            vec!["Value", "Value", ""],
            vec![vec![1.0.into(), 100.0.into(), "x".into()]],
        );
        assert_eq!(ds.column("Value").unwrap(), &[CellValue::Number(1.0)]);
        assert_eq!(ds.column_at(2).unwrap(), &[CellValue::Number(100.0)]);
        assert_eq!(ds.column_at(3).unwrap(), &[CellValue::string("x")]);
        assert!(ds.column_at(0).is_none());
        assert!(ds.column_at(4).is_none());
    }

    #[test]
    fn test_find_column_name() {
        let ds = sample();
        assert_eq!(ds.find_column_name(" v "), Some("V"));
        assert_eq!(ds.find_column_name("missing"), None);
        assert!(ds.column("v").is_none());
    }
}
