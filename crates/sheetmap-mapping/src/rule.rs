//! Mapping rules
//!
//! A [`RawRule`] is one row of the mapped configuration table exactly as
//! written. [`ConfigNormalizer`](crate::ConfigNormalizer) turns raw rules
//! into [`MappingRule`]s with resolved titles and positions; mapping rules
//! cannot be built or normalized any other way.

use std::fmt;

use chrono::{NaiveTime, Timelike};
use sheetmap_core::{CellValue, ColumnRef, Error, Result};

/// Chart axis a mapped column is plotted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AxisRole {
    /// The single x-axis series
    X,
    /// One of the y-axis series
    Y,
}

impl AxisRole {
    /// Parse an `Axis` cell; blank means no role
    pub fn parse(s: Option<&str>) -> Result<Option<Self>> {
        match s.map(str::trim) {
            None | Some("") => Ok(None),
            Some(role) if role.eq_ignore_ascii_case("x") => Ok(Some(AxisRole::X)),
            Some(role) if role.eq_ignore_ascii_case("y") => Ok(Some(AxisRole::Y)),
            Some(other) => Err(Error::InvalidConfig(format!(
                "axis must be 'x' or 'y', got '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for AxisRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisRole::X => write!(f, "x"),
            AxisRole::Y => write!(f, "y"),
        }
    }
}

/// How an elapsed-time column is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TimeUnit {
    /// Time of day (00:00:05)
    Clock,
    /// Elapsed seconds as a number
    Seconds,
    /// Elapsed minutes as a number
    Minutes,
    /// Elapsed hours as a number
    Hours,
}

impl TimeUnit {
    /// Parse a `Time Unit` cell; blank means no elapsed-time conversion
    ///
    /// Unrecognized units fall back to [`TimeUnit::Clock`].
    pub fn parse(s: Option<&str>) -> Option<Self> {
        let unit = s.map(str::trim).filter(|s| !s.is_empty())?;
        let parsed = match unit.to_ascii_lowercase().as_str() {
            "s" | "sec" | "secs" | "second" | "seconds" => TimeUnit::Seconds,
            "m" | "min" | "mins" | "minute" | "minutes" => TimeUnit::Minutes,
            "h" | "hr" | "hrs" | "hour" | "hours" => TimeUnit::Hours,
            "clock" | "time" | "hh:mm:ss" => TimeUnit::Clock,
            _ => {
                tracing::warn!(unit, "unknown time unit, rendering elapsed time as a clock");
                TimeUnit::Clock
            }
        };
        Some(parsed)
    }

    /// Render an elapsed time in this unit
    pub fn render(&self, elapsed: NaiveTime) -> CellValue {
        let seconds = elapsed.num_seconds_from_midnight() as f64
            + elapsed.nanosecond() as f64 / 1_000_000_000.0;
        match self {
            TimeUnit::Clock => CellValue::Time(elapsed),
            TimeUnit::Seconds => CellValue::Number(seconds),
            TimeUnit::Minutes => CellValue::Number(seconds / 60.0),
            TimeUnit::Hours => CellValue::Number(seconds / 3600.0),
        }
    }
}

/// How `Input` cells address source columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputAddressing {
    /// Column letters (A, B, ..., AA)
    #[default]
    Letters,
    /// 1-based column numbers (transposed configurations)
    Numeric,
}

impl InputAddressing {
    /// Parse an `Input` cell under this addressing scheme
    pub fn parse(&self, s: &str) -> Result<ColumnRef> {
        match self {
            InputAddressing::Letters => ColumnRef::letters(s),
            InputAddressing::Numeric => ColumnRef::number(s),
        }
    }
}

/// One row of the mapped configuration table, as written
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawRule {
    /// 1-based row of the mapped table, not counting the header
    pub row: usize,
    /// Source column address
    pub input: String,
    /// Output column letters
    pub output: String,
    /// Display title; blank means the source column name
    pub title: Option<String>,
    /// `"start:end"` spreadsheet rows
    pub range: Option<String>,
    /// `x` or `y`
    pub axis: Option<String>,
    /// Present when the column holds timestamps to convert
    pub time_unit: Option<String>,
}

impl RawRule {
    /// Create a rule mapping `input` to `output`
    pub fn new<I: Into<String>, O: Into<String>>(row: usize, input: I, output: O) -> Self {
        Self {
            row,
            input: input.into(),
            output: output.into(),
            ..Default::default()
        }
    }

    /// Set the display title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the row range
    pub fn with_range<S: Into<String>>(mut self, range: S) -> Self {
        self.range = Some(range.into());
        self
    }

    /// Set the axis role
    pub fn with_axis<S: Into<String>>(mut self, axis: S) -> Self {
        self.axis = Some(axis.into());
        self
    }

    /// Set the time unit
    pub fn with_time_unit<S: Into<String>>(mut self, unit: S) -> Self {
        self.time_unit = Some(unit.into());
        self
    }
}

/// A normalized, read-only mapping rule
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MappingRule {
    pub(crate) row: usize,
    pub(crate) input: ColumnRef,
    pub(crate) source_index: usize,
    pub(crate) source_title: String,
    pub(crate) output: usize,
    pub(crate) title: String,
    pub(crate) range: Option<String>,
    pub(crate) axis: Option<AxisRole>,
    pub(crate) time_unit: Option<TimeUnit>,
}

impl MappingRule {
    /// 1-based row of the mapped table this rule came from
    pub fn row(&self) -> usize {
        self.row
    }

    /// Source column address as configured
    pub fn input(&self) -> &ColumnRef {
        &self.input
    }

    /// 1-based position of the source column the input resolved to
    pub fn source_index(&self) -> usize {
        self.source_index
    }

    /// Name of the source column the input resolved to
    pub fn source_title(&self) -> &str {
        &self.source_title
    }

    /// 1-based output column position
    pub fn output(&self) -> usize {
        self.output
    }

    /// Header title of the output column, never blank
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Configured row range
    pub fn range(&self) -> Option<&str> {
        self.range.as_deref()
    }

    /// Chart axis role
    pub fn axis(&self) -> Option<AxisRole> {
        self.axis
    }

    /// Elapsed-time unit, when the column is converted
    pub fn time_unit(&self) -> Option<TimeUnit> {
        self.time_unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_role_parse() {
        assert_eq!(AxisRole::parse(None).unwrap(), None);
        assert_eq!(AxisRole::parse(Some(" ")).unwrap(), None);
        assert_eq!(AxisRole::parse(Some("X")).unwrap(), Some(AxisRole::X));
        assert_eq!(AxisRole::parse(Some("y ")).unwrap(), Some(AxisRole::Y));
        assert!(matches!(
            AxisRole::parse(Some("z")),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_time_unit_parse() {
        assert_eq!(TimeUnit::parse(None), None);
        assert_eq!(TimeUnit::parse(Some("")), None);
        assert_eq!(TimeUnit::parse(Some("Seconds")), Some(TimeUnit::Seconds));
        assert_eq!(TimeUnit::parse(Some("min")), Some(TimeUnit::Minutes));
        assert_eq!(TimeUnit::parse(Some("HRS")), Some(TimeUnit::Hours));
        assert_eq!(TimeUnit::parse(Some("hh:mm:ss")), Some(TimeUnit::Clock));
        assert_eq!(TimeUnit::parse(Some("fortnights")), Some(TimeUnit::Clock));
    }

    #[test]
    fn test_time_unit_render() {
        let t = NaiveTime::from_hms_milli_opt(0, 1, 30, 500).unwrap();
        assert_eq!(TimeUnit::Clock.render(t), CellValue::Time(t));
        assert_eq!(TimeUnit::Seconds.render(t), CellValue::Number(90.5));
        let t = NaiveTime::from_hms_opt(1, 30, 0).unwrap();
        assert_eq!(TimeUnit::Minutes.render(t), CellValue::Number(90.0));
        assert_eq!(TimeUnit::Hours.render(t), CellValue::Number(1.5));
    }

    #[test]
    fn test_input_addressing() {
        assert_eq!(
            InputAddressing::Letters.parse("b").unwrap(),
            ColumnRef::Letters("B".into())
        );
        assert_eq!(
            InputAddressing::Numeric.parse("2").unwrap(),
            ColumnRef::Number(2)
        );
        assert!(InputAddressing::Numeric.parse("B").is_err());
        assert!(InputAddressing::Letters.parse("2").is_err());
    }
}
