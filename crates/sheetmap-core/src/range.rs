//! Row range resolution
//!
//! A configured range such as `"2:6"` names spreadsheet rows of the output
//! sheet, where row 1 holds the header and row 2 the first value. Resolving
//! it yields 0-based, inclusive offsets into a column's values.

use std::num::IntErrorKind;

use crate::error::{Error, Result};

/// First spreadsheet row that holds data (row 1 is the header)
pub const FIRST_DATA_ROW: i64 = 2;

/// An inclusive span of 0-based row offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    /// First offset
    pub start: usize,
    /// Last offset (inclusive)
    pub end: usize,
}

impl RowSpan {
    /// Create a span from inclusive offsets
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// The whole of a column with `total_rows` values
    ///
    /// An empty column yields an empty span.
    pub fn full(total_rows: usize) -> Self {
        match total_rows {
            0 => Self::empty(),
            n => Self { start: 0, end: n - 1 },
        }
    }

    /// A span covering no rows
    pub fn empty() -> Self {
        Self { start: 1, end: 0 }
    }

    /// Number of offsets in the span
    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            self.end - self.start + 1
        }
    }

    /// Check if the span covers no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the values covered by this span
    ///
    /// Offsets past the end of `values` are dropped, so an end beyond the
    /// data reads up to the last value and a start beyond it reads nothing.
    pub fn slice<'a, T>(&self, values: &'a [T]) -> &'a [T] {
        if self.start >= values.len() || self.end < self.start {
            return &[];
        }
        let end = self.end.min(values.len() - 1);
        &values[self.start..=end]
    }
}

/// Resolve a configured range against a column of `total_rows` values
///
/// - A missing or blank range is the full column.
/// - `"start:end"` with a start row below 2 (or without a colon) falls back
///   to the full column.
/// - A colon with a non-integer side is [`Error::MalformedRange`].
///
/// # Examples
/// ```
/// use sheetmap_core::range::{resolve, RowSpan};
///
/// assert_eq!(resolve(None, 10).unwrap(), RowSpan::new(0, 9));
/// assert_eq!(resolve(Some("3:5"), 10).unwrap(), RowSpan::new(1, 3));
/// assert_eq!(resolve(Some("1:5"), 10).unwrap(), RowSpan::new(0, 9));
/// ```
pub fn resolve(range: Option<&str>, total_rows: usize) -> Result<RowSpan> {
    let text = match range.map(str::trim) {
        None | Some("") => return Ok(RowSpan::full(total_rows)),
        Some(text) => text,
    };

    let Some((start, end)) = text.split_once(':') else {
        tracing::warn!(range = text, "range has no ':', using the full column");
        return Ok(RowSpan::full(total_rows));
    };

    // integers past i64 saturate, so they clamp like any other far row
    let parse = |side: &str| match side.trim().parse::<i64>() {
        Ok(row) => Ok(row.saturating_sub(FIRST_DATA_ROW)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(Error::MalformedRange(text.to_string())),
        },
    };
    let start = parse(start)?;
    let end = parse(end)?;

    if start < 0 {
        tracing::warn!(
            range = text,
            "range starts above the first data row, using the full column"
        );
        return Ok(RowSpan::full(total_rows));
    }
    if end < start {
        tracing::warn!(range = text, "range ends before it starts, column will be empty");
        return Ok(RowSpan::empty());
    }

    let start = usize::try_from(start).unwrap_or(usize::MAX);
    let end = usize::try_from(end).unwrap_or(usize::MAX);
    if end >= total_rows {
        tracing::warn!(
            range = text,
            rows = total_rows,
            "range ends past the data, clamping to the last row"
        );
    }

    Ok(RowSpan::new(start, end))
}
