//! Chart planning
//!
//! A chart is requested when one mapping rule declares the x axis. Every
//! y-axis rule becomes a series, in configuration order.

use sheetmap_core::OutputDataset;
use sheetmap_mapping::{AxisBounds, AxisRole, GeneralSettings, MappingRule};

use crate::axis::{Axis, TickLabelPosition};
use crate::chart::Chart;
use crate::legend::Legend;
use crate::series::{DataReference, DataSeries, SeriesRef};

/// Resolved chart directives for one report
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartPlan {
    /// Explicit or synthesized chart title
    pub title: String,
    /// The x-axis series
    pub x: SeriesRef,
    /// The y-axis series, in configuration order
    pub y: Vec<SeriesRef>,
    /// X axis, titled with the x series
    pub x_axis: Axis,
    /// Y axis, titled only when the legend is suppressed
    pub y_axis: Axis,
    /// Legend, `None` when suppressed
    pub legend: Option<Legend>,
}

impl ChartPlan {
    /// True when there is exactly one y series and no legend
    pub fn legend_suppressed(&self) -> bool {
        self.legend.is_none()
    }

    /// Scatter chart whose series reference the output sheet
    pub fn to_chart(&self, sheet: &str) -> Chart {
        let mut chart = Chart::new().with_title(&self.title);
        let categories = DataReference::formula(self.x.reference(sheet));

        for series in &self.y {
            chart.add_series(
                DataSeries::new(DataReference::formula(series.reference(sheet)))
                    .with_name(&series.title)
                    .with_categories(categories.clone()),
            );
        }

        chart.category_axis = Some(self.x_axis.clone());
        chart.value_axis = Some(self.y_axis.clone());
        chart.legend = self.legend.clone();
        chart
    }
}

/// Join y titles the way a sentence lists them: "A, B, C vs X"
pub fn synthesize_title<S: AsRef<str>>(y_titles: &[S], x_title: &str) -> String {
    let ys: Vec<&str> = y_titles.iter().map(AsRef::as_ref).collect();
    format!("{} vs {}", ys.join(", "), x_title)
}

/// Decides whether and how to chart a mapped report
#[derive(Debug, Clone, Default)]
pub struct ChartPlanner {
    title: Option<String>,
    bounds: AxisBounds,
}

impl ChartPlanner {
    /// Create a planner with no explicit title and auto-scaled axes
    pub fn new() -> Self {
        Self::default()
    }

    /// Planner configured from the general settings
    pub fn from_settings(settings: &GeneralSettings) -> Self {
        Self {
            title: settings.graph_title.clone(),
            bounds: settings.bounds,
        }
    }

    /// Use an explicit chart title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Use axis bounds
    pub fn with_bounds(mut self, bounds: AxisBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Plan the chart, or `None` when no rule declares the x axis
    ///
    /// Rules are expected to be normalized, so at most one declares x.
    pub fn plan(&self, rules: &[MappingRule], output: &OutputDataset) -> Option<ChartPlan> {
        let series = |rule: &MappingRule| {
            let rows = output.get(rule.output()).map_or(0, |c| c.values.len());
            SeriesRef::new(rule.title(), rule.output(), rows)
        };

        let x = rules
            .iter()
            .find(|r| r.axis() == Some(AxisRole::X))
            .map(series)?;
        let y: Vec<SeriesRef> = rules
            .iter()
            .filter(|r| r.axis() == Some(AxisRole::Y))
            .map(series)
            .collect();

        if y.is_empty() {
            tracing::warn!(x = %x.title, "x axis declared without any y series, skipping chart");
            return None;
        }

        let title = match self.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => synthesize_title(&y.iter().map(|s| s.title.as_str()).collect::<Vec<_>>(), &x.title),
        };

        let x_axis = Axis::new()
            .with_title(&x.title)
            .with_bounds(self.bounds.x_min, self.bounds.x_max)
            .with_tick_labels(TickLabelPosition::Low);

        let mut y_axis = Axis::new().with_bounds(self.bounds.y_min, self.bounds.y_max);
        let legend = match y.as_slice() {
            [only] => {
                y_axis = y_axis.with_title(&only.title);
                None
            }
            _ => Some(Legend::new(y.iter().map(|s| s.title.as_str()))),
        };

        tracing::info!(title = %title, series = y.len(), "planned chart");
        Some(ChartPlan {
            title,
            x,
            y,
            x_axis,
            y_axis,
            legend,
        })
    }
}
