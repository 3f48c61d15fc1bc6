//! Axis types

/// Chart axis
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Axis {
    /// Axis title
    pub title: Option<String>,
    /// Minimum value; `None` auto-scales
    pub minimum: Option<f64>,
    /// Maximum value; `None` auto-scales
    pub maximum: Option<f64>,
    /// Where tick labels are drawn
    pub tick_labels: TickLabelPosition,
}

impl Axis {
    /// Create a new axis
    pub fn new() -> Self {
        Self::default()
    }

    /// Set axis title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set axis bounds, leaving absent ones to auto-scale
    pub fn with_bounds(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.minimum = min;
        self.maximum = max;
        self
    }

    /// Set tick label position
    pub fn with_tick_labels(mut self, position: TickLabelPosition) -> Self {
        self.tick_labels = position;
        self
    }
}

/// Tick label position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TickLabelPosition {
    /// Next to the axis line
    #[default]
    NextTo,
    /// Below the plot area, clear of negative values
    Low,
}
