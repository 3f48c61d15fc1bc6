//! Chart types

use crate::axis::Axis;
use crate::legend::Legend;
use crate::series::DataSeries;

/// Scatter chart definition handed to a renderer
///
/// Series are plotted as markers against the category axis.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Chart {
    /// Chart title
    pub title: Option<String>,
    /// Data series
    pub series: Vec<DataSeries>,
    /// Category axis (X)
    pub category_axis: Option<Axis>,
    /// Value axis (Y)
    pub value_axis: Option<Axis>,
    /// Legend
    pub legend: Option<Legend>,
}

impl Chart {
    /// Create an empty chart
    pub fn new() -> Self {
        Self {
            title: None,
            series: Vec::new(),
            category_axis: None,
            value_axis: None,
            legend: None,
        }
    }

    /// Set chart title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a data series
    pub fn add_series(&mut self, series: DataSeries) {
        self.series.push(series);
    }
}
