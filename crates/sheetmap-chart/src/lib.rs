//! # sheetmap-chart
//!
//! Chart planning for sheetmap reports.
//!
//! [`ChartPlanner`] inspects the axis roles of normalized mapping rules and
//! produces a [`ChartPlan`]; [`ChartPlan::to_chart`] turns the plan into a
//! scatter [`Chart`] directive referencing the output sheet.

mod axis;
mod chart;
mod legend;
mod plan;
mod series;

pub use axis::{Axis, TickLabelPosition};
pub use chart::Chart;
pub use legend::Legend;
pub use plan::{synthesize_title, ChartPlan, ChartPlanner};
pub use series::{DataReference, DataSeries, SeriesRef};
