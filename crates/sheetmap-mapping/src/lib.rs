//! # sheetmap-mapping
//!
//! Configuration-driven column mapping.
//!
//! The pipeline runs in three steps:
//! 1. [`table::read_rules`] / [`table::read_settings`] read the configuration tables
//! 2. [`ConfigNormalizer`] resolves raw rules against the source's column names
//! 3. [`ColumnMapper`] copies the selected slices into a sparse [`OutputDataset`]
//!
//! ## Example
//!
//! ```rust
//! use sheetmap_core::{CellValue, Dataset, TabularSource};
//! use sheetmap_mapping::{ColumnMapper, ConfigNormalizer, RawRule};
//!
//! let source = Dataset::from_rows(
//!     vec!["T", "V"],
//!     vec![
//!         vec!["2023-01-01 10:00:00".into(), 1.0.into()],
//!         vec!["2023-01-01 10:00:05".into(), 2.0.into()],
//!     ],
//! );
//! let raw = vec![RawRule::new(1, "B", "A").with_title("Value")];
//!
//! let rules = ConfigNormalizer::default()
//!     .normalize(&raw, &source.column_names())
//!     .unwrap();
//! let output = ColumnMapper::map(&source, &rules).unwrap();
//!
//! assert_eq!(output.get(1).unwrap().values, vec![CellValue::Number(1.0), CellValue::Number(2.0)]);
//! ```
//!
//! [`OutputDataset`]: sheetmap_core::OutputDataset

pub mod elapsed;
mod mapper;
mod normalize;
pub mod rule;
pub mod settings;
pub mod table;

pub use mapper::ColumnMapper;
pub use normalize::ConfigNormalizer;
pub use rule::{AxisRole, InputAddressing, MappingRule, RawRule, TimeUnit};
pub use settings::{AxisBounds, GeneralSettings, OutputFormat, OutputFormats};
