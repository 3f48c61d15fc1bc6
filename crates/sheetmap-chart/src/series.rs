//! Data series types

use sheetmap_core::index_to_letters;

/// An output column plotted as a series
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SeriesRef {
    /// Header title of the output column
    pub title: String,
    /// 1-based output column position
    pub position: usize,
    /// Number of values in the column
    pub rows: usize,
}

impl SeriesRef {
    /// Create a series reference
    pub fn new<S: Into<String>>(title: S, position: usize, rows: usize) -> Self {
        Self {
            title: title.into(),
            position,
            rows,
        }
    }

    /// Absolute A1 reference to the values on `sheet`, below the header row
    ///
    /// ```
    /// use sheetmap_chart::SeriesRef;
    ///
    /// let series = SeriesRef::new("Temp", 2, 5);
    /// assert_eq!(series.reference("Output Data"), "'Output Data'!$B$2:$B$6");
    /// ```
    pub fn reference(&self, sheet: &str) -> String {
        let col = index_to_letters(self.position);
        let last_row = 1 + self.rows.max(1);
        format!(
            "'{}'!${col}$2:${col}${last_row}",
            sheet.replace('\'', "''")
        )
    }
}

/// Data series for a chart
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DataSeries {
    /// Series name
    pub name: Option<String>,
    /// Values (Y data)
    pub values: DataReference,
    /// Categories (X data)
    pub categories: Option<DataReference>,
}

impl DataSeries {
    /// Create a new data series
    pub fn new(values: DataReference) -> Self {
        Self {
            name: None,
            values,
            categories: None,
        }
    }

    /// Set series name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set categories
    pub fn with_categories(mut self, categories: DataReference) -> Self {
        self.categories = Some(categories);
        self
    }
}

/// Reference to chart data
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DataReference {
    /// Formula reference (e.g., "'Output Data'!$A$2:$A$10")
    Formula(String),
}

impl DataReference {
    /// Create a formula reference
    pub fn formula<S: Into<String>>(formula: S) -> Self {
        DataReference::Formula(formula.into())
    }
}
