//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellValue`] - The value stored in a cell
//! - [`ColumnRef`] - A column address, by letters (e.g. "AB") or 1-based number

mod address;
mod value;

pub use address::{index_to_letters, index_to_title, letters_to_index, ColumnRef};
pub use value::CellValue;
