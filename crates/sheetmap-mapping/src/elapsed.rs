//! Elapsed-time conversion
//!
//! Rewrites `<date> <time>` timestamps as the time of day elapsed since the
//! first timestamp. Differences that cross midnight wrap around the clock.

use chrono::NaiveTime;
use sheetmap_core::{CellValue, Error, Result};

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

/// Parse the time-of-day part of a `<date> <time>` timestamp
///
/// `row` is the 1-based position reported on failure.
pub fn parse_time_of_day(row: usize, timestamp: &str) -> Result<NaiveTime> {
    let malformed = || Error::MalformedTimestamp {
        row,
        value: timestamp.to_string(),
    };

    let mut parts = timestamp.split_whitespace();
    let (Some(_date), Some(time), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(malformed());
    };

    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(time, format).ok())
        .ok_or_else(malformed)
}

/// Convert timestamps to elapsed time since the first entry
///
/// The first entry always maps to `00:00:00`.
///
/// # Examples
/// ```
/// use chrono::NaiveTime;
/// use sheetmap_mapping::elapsed;
///
/// let elapsed = elapsed::convert(&["2023-01-01 10:00:00", "2023-01-01 10:00:05"]).unwrap();
/// assert_eq!(elapsed[1], NaiveTime::from_hms_opt(0, 0, 5).unwrap());
/// ```
pub fn convert<S: AsRef<str>>(timestamps: &[S]) -> Result<Vec<NaiveTime>> {
    convert_rows(1, timestamps)
}

/// Like [`convert`], numbering rows in errors from `first_row`
pub fn convert_rows<S: AsRef<str>>(first_row: usize, timestamps: &[S]) -> Result<Vec<NaiveTime>> {
    let times = timestamps
        .iter()
        .enumerate()
        .map(|(i, ts)| parse_time_of_day(first_row + i, ts.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    let Some(&start) = times.first() else {
        return Ok(Vec::new());
    };

    let mut wrapped = 0usize;
    let elapsed = times
        .into_iter()
        .map(|time| {
            let (elapsed, overflow) =
                NaiveTime::MIN.overflowing_add_signed(time.signed_duration_since(start));
            if overflow != 0 {
                wrapped += 1;
            }
            elapsed
        })
        .collect();

    if wrapped > 0 {
        tracing::warn!(
            rows = wrapped,
            %start,
            "timestamps earlier than the start time wrapped past midnight"
        );
    }
    Ok(elapsed)
}

/// Convert a column of cells holding timestamps
///
/// `first_row` is the spreadsheet row of the first cell.
pub fn convert_values(first_row: usize, values: &[CellValue]) -> Result<Vec<NaiveTime>> {
    let text: Vec<String> = values.iter().map(CellValue::to_string).collect();
    convert_rows(first_row, &text)
}
