//! Prelude module - common imports for sheetmap users
//!
//! ```rust
//! use sheetmap::prelude::*;
//! ```

pub use crate::{
    // Cell and dataset types
    CellValue,
    // Chart types
    ChartPlan,
    ChartPlanner,
    ColumnMapper,
    ConfigNormalizer,
    CsvReadOptions,
    CsvSource,
    Dataset,
    // Error types
    Error,
    GeneralSettings,
    MappingRule,
    OutputDataset,
    OutputFormat,
    // Mapping types
    RawRule,
    // Pipeline
    Report,
    ReportConfig,
    ReportSink,
    Result,
    SinkRegistry,
    TabularSource,
    TextSink,
};
