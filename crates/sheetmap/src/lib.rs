//! # sheetmap
//!
//! Turn raw instrument CSV exports into formatted reports, driven by a
//! column-mapping configuration instead of code.
//!
//! A configuration is two tables:
//! - the *mapped* table, one rule per output column (`Input`, `Output`,
//!   `Title`, `Range`, `Axis`, `Time Unit`)
//! - the *general* table, one row of report settings (`Graph Title`, axis
//!   bounds, output format toggles, `Transpose`, `Start Line`)
//!
//! ## Example
//!
//! ```rust
//! use sheetmap::prelude::*;
//!
//! let source = Dataset::from_rows(
//!     vec!["Stamp", "Temp", "Pressure"],
//!     vec![
//!         vec!["2023-01-01 10:00:00".into(), 20.5.into(), 101.2.into()],
//!         vec!["2023-01-01 10:00:05".into(), 20.9.into(), 101.1.into()],
//!     ],
//! );
//!
//! let config = ReportConfig {
//!     rules: vec![
//!         RawRule::new(1, "A", "A").with_title("Elapsed").with_axis("x").with_time_unit("s"),
//!         RawRule::new(2, "B", "B").with_axis("y"),
//!         RawRule::new(3, "C", "C").with_axis("y"),
//!     ],
//!     settings: GeneralSettings::default(),
//! };
//!
//! let report = Report::build(&source, &config).unwrap();
//! assert_eq!(report.chart.unwrap().title, "Temp, Pressure vs Elapsed");
//! ```

pub mod prelude;
pub mod report;
pub mod sink;

pub use report::{Report, ReportConfig, OUTPUT_SHEET};
pub use sink::{ReportSink, SinkRegistry, TextSink};

// Re-export core types
pub use sheetmap_core::{
    index_to_letters, index_to_title, letters_to_index, range, CellValue, Column, ColumnRef,
    Dataset, Error, OutputColumn, OutputDataset, Result, RowSpan, TabularSource, MAX_COLS,
};

// Re-export mapping types
pub use sheetmap_mapping::{
    elapsed, table, AxisBounds, AxisRole, ColumnMapper, ConfigNormalizer, GeneralSettings,
    InputAddressing, MappingRule, OutputFormat, OutputFormats, RawRule, TimeUnit,
};

// Re-export chart types
pub use sheetmap_chart::{
    Axis, Chart, ChartPlan, ChartPlanner, DataReference, DataSeries, Legend, SeriesRef,
    TickLabelPosition,
};

// Re-export I/O types
pub use sheetmap_csv::{
    CsvError, CsvReadOptions, CsvReader, CsvSource, CsvWriteOptions, CsvWriter, LineTerminator,
};
