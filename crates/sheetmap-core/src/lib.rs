//! # sheetmap-core
//!
//! Core data structures for the sheetmap report engine.
//!
//! This crate provides the fundamental types used throughout sheetmap:
//! - [`CellValue`] - Values held by dataset cells
//! - [`ColumnRef`] and the letter/index conversions - Column addressing
//! - [`range`] - Resolution of configured row ranges
//! - [`Dataset`], [`TabularSource`] - Input tables
//! - [`OutputDataset`] - Sparse, positioned output columns
//!
//! ## Example
//!
//! ```rust
//! use sheetmap_core::{letters_to_index, index_to_letters, range};
//!
//! assert_eq!(letters_to_index("AA").unwrap(), 27);
//! assert_eq!(index_to_letters(52), "AZ");
//!
//! let span = range::resolve(Some("2:4"), 5).unwrap();
//! assert_eq!((span.start, span.end), (0, 2));
//! ```

pub mod cell;
pub mod column;
pub mod dataset;
pub mod error;
pub mod range;

// Re-exports for convenience
pub use cell::{index_to_letters, index_to_title, letters_to_index, CellValue, ColumnRef};
pub use column::{Column, OutputColumn, OutputDataset};
pub use dataset::{Dataset, TabularSource};
pub use error::{Error, Result};
pub use range::RowSpan;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: usize = 16_384;
