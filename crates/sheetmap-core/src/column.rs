//! Column types

use std::collections::BTreeMap;

use crate::cell::{index_to_letters, CellValue};

/// A named column of values
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name (the header cell)
    pub name: String,
    /// Values below the header
    pub values: Vec<CellValue>,
}

impl Column {
    /// Create a new column
    pub fn new<S: Into<String>>(name: S, values: Vec<CellValue>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Create an empty column with room for `capacity` values
    pub fn with_capacity<S: Into<String>>(name: S, capacity: usize) -> Self {
        Self::new(name, Vec::with_capacity(capacity))
    }

    /// Number of values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the column has no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A column placed at a 1-based position of the output sheet
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OutputColumn {
    /// 1-based output position (A = 1)
    pub position: usize,
    /// Header title
    pub title: String,
    /// Render the header in bold
    pub bold_header: bool,
    /// Values, written from the first data row down
    pub values: Vec<CellValue>,
}

impl OutputColumn {
    /// Create an output column with a bold header
    pub fn new<S: Into<String>>(position: usize, title: S, values: Vec<CellValue>) -> Self {
        Self {
            position,
            title: title.into(),
            bold_header: true,
            values,
        }
    }

    /// Column letters of the output position
    pub fn letters(&self) -> String {
        index_to_letters(self.position)
    }
}

/// Output dataset with sparse column positions
///
/// Positions that no rule targets are absent, not zero-filled, and columns
/// may differ in length.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OutputDataset {
    columns: BTreeMap<usize, OutputColumn>,
}

impl OutputDataset {
    /// Create an empty output dataset
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a column at its position, returning any column it replaced
    pub fn insert(&mut self, column: OutputColumn) -> Option<OutputColumn> {
        self.columns.insert(column.position, column)
    }

    /// Column at a 1-based position
    pub fn get(&self, position: usize) -> Option<&OutputColumn> {
        self.columns.get(&position)
    }

    /// First column with the given header title
    pub fn by_title(&self, title: &str) -> Option<&OutputColumn> {
        self.columns.values().find(|c| c.title == title)
    }

    /// Columns in ascending position order
    pub fn columns(&self) -> impl Iterator<Item = &OutputColumn> {
        self.columns.values()
    }

    /// Number of placed columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if no column has been placed
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Highest occupied position
    pub fn max_position(&self) -> Option<usize> {
        self.columns.keys().next_back().copied()
    }

    /// Length of the longest column
    pub fn row_count(&self) -> usize {
        self.columns.values().map(|c| c.values.len()).max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_output_dataset_is_sparse() {
        let mut out = OutputDataset::new();
        out.insert(OutputColumn::new(4, "Value", vec![1.0.into(), 2.0.into()]));
        out.insert(OutputColumn::new(1, "Time", vec![0.0.into()]));

        assert_eq!(out.len(), 2);
        assert!(out.get(2).is_none());
        assert_eq!(out.max_position(), Some(4));
        assert_eq!(out.row_count(), 2);

        let positions: Vec<_> = out.columns().map(|c| c.position).collect();
        assert_eq!(positions, vec![1, 4]);
        assert_eq!(out.by_title("Value").unwrap().letters(), "D");
    }

    #[test]
    fn test_insert_returns_replaced() {
        let mut out = OutputDataset::new();
        assert!(out.insert(OutputColumn::new(2, "A", vec![])).is_none());
        let replaced = out.insert(OutputColumn::new(2, "B", vec![])).unwrap();
        assert_eq!(replaced.title, "A");
    }
}
