//! Configuration tables
//!
//! Both configuration sheets are plain tables read through
//! [`TabularSource`]; headers are matched ignoring case and surrounding
//! whitespace.

use sheetmap_core::{CellValue, Error, Result, TabularSource};

use crate::rule::RawRule;
use crate::settings::{parse_toggle, AxisBounds, GeneralSettings, OutputFormats};

pub const INPUT: &str = "Input";
pub const OUTPUT: &str = "Output";
pub const TITLE: &str = "Title";
pub const RANGE: &str = "Range";
pub const AXIS: &str = "Axis";
pub const TIME_UNIT: &str = "Time Unit";

pub const GRAPH_TITLE: &str = "Graph Title";
pub const X_MIN: &str = "X Min";
pub const X_MAX: &str = "X Max";
pub const Y_MIN: &str = "Y Min";
pub const Y_MAX: &str = "Y Max";
pub const EXCEL: &str = "Excel";
pub const JPEG: &str = "JPEG";
pub const PDF: &str = "PDF";
pub const TXT: &str = "TXT";
pub const TRANSPOSE: &str = "Transpose";
pub const START_LINE: &str = "Start Line";

/// Column lookup tolerant of header spelling
struct Table<'a, T: TabularSource + ?Sized> {
    source: &'a T,
}

impl<'a, T: TabularSource + ?Sized> Table<'a, T> {
    fn optional(&self, header: &str) -> Option<&'a [CellValue]> {
        let name = self.source.find_column_name(header)?;
        self.source.column(name)
    }

    fn required(&self, header: &str) -> Result<&'a [CellValue]> {
        self.optional(header)
            .ok_or_else(|| Error::MissingConfigColumn(header.to_string()))
    }

    fn text(&self, header: &str, row: usize) -> Option<String> {
        self.optional(header)
            .and_then(|values| values.get(row))
            .and_then(CellValue::text)
    }

    fn number(&self, header: &str, row: usize) -> Result<Option<f64>> {
        self.text(header, row)
            .map(|s| {
                s.parse::<f64>().map_err(|_| {
                    Error::InvalidConfig(format!("'{}' must be a number, got '{}'", header, s))
                })
            })
            .transpose()
    }
}

/// Read the mapped configuration table into raw rules
///
/// `Input` and `Output` columns are required. Rows where every cell is
/// blank are skipped.
pub fn read_rules<T: TabularSource + ?Sized>(source: &T) -> Result<Vec<RawRule>> {
    let table = Table { source };
    let inputs = table.required(INPUT)?;
    let outputs = table.required(OUTPUT)?;

    let mut rules = Vec::new();
    for row in 0..source.row_count() {
        let rule = row + 1;
        let title = table.text(TITLE, row);
        let range = table.text(RANGE, row);
        let axis = table.text(AXIS, row);
        let time_unit = table.text(TIME_UNIT, row);

        let input = inputs.get(row).and_then(CellValue::text);
        let output = outputs.get(row).and_then(CellValue::text);

        let (input, output) = match (input, output) {
            (Some(input), Some(output)) => (input, output),
            (None, None)
                if title.is_none() && range.is_none() && axis.is_none() && time_unit.is_none() =>
            {
                continue;
            }
            (None, _) => {
                return Err(Error::InvalidConfig("rule has no input column".into()).in_rule(rule))
            }
            (_, None) => {
                return Err(Error::InvalidConfig("rule has no output column".into()).in_rule(rule))
            }
        };

        rules.push(RawRule {
            row: rule,
            input,
            output,
            title,
            range,
            axis,
            time_unit,
        });
    }

    tracing::debug!(rules = rules.len(), "read mapped configuration");
    Ok(rules)
}

/// Read the first row of the general configuration table
///
/// Every column is optional; an empty table gives default settings.
pub fn read_settings<T: TabularSource + ?Sized>(source: &T) -> Result<GeneralSettings> {
    let table = Table { source };
    if source.row_count() == 0 {
        return Ok(GeneralSettings::default());
    }

    let start_line = table
        .number(START_LINE, 0)?
        .map(|n| {
            if n < 0.0 || n.fract() != 0.0 {
                Err(Error::InvalidConfig(format!(
                    "'{}' must be a non-negative whole number, got {}",
                    START_LINE, n
                )))
            } else {
                Ok(n as usize)
            }
        })
        .transpose()?;

    let settings = GeneralSettings {
        graph_title: table.text(GRAPH_TITLE, 0),
        bounds: AxisBounds {
            x_min: table.number(X_MIN, 0)?,
            x_max: table.number(X_MAX, 0)?,
            y_min: table.number(Y_MIN, 0)?,
            y_max: table.number(Y_MAX, 0)?,
        },
        formats: OutputFormats {
            excel: parse_toggle(table.text(EXCEL, 0).as_deref()),
            jpeg: parse_toggle(table.text(JPEG, 0).as_deref()),
            pdf: parse_toggle(table.text(PDF, 0).as_deref()),
            txt: parse_toggle(table.text(TXT, 0).as_deref()),
        },
        transpose: parse_toggle(table.text(TRANSPOSE, 0).as_deref()),
        start_line,
    };

    tracing::debug!(?settings, "read general configuration");
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sheetmap_core::Dataset;

    fn table(header: &[&str], rows: &[&[&str]]) -> Dataset {
        Dataset::from_rows(
            header.to_vec(),
            rows.iter()
                .map(|r| r.iter().map(|s| CellValue::from(*s)).collect())
                .collect(),
        )
    }

    #[test]
    fn test_read_rules() {
        let mapped = table(
            &["Input", "Output", "Title", "Range", "Axis", "Time Unit"],
            &[
                &["A", "A", "", "", "x", "s"],
                &["", "", "", "", "", ""],
                &["c", "B", "Temp", "2:10", "Y", ""],
            ],
        );

        let rules = read_rules(&mapped).unwrap();
        assert_eq!(
            rules,
            vec![
                RawRule::new(1, "A", "A").with_axis("x").with_time_unit("s"),
                RawRule::new(3, "c", "B")
                    .with_title("Temp")
                    .with_range("2:10")
                    .with_axis("Y"),
            ]
        );
    }

    #[test]
    fn test_read_rules_optional_columns_and_header_case() {
        let mapped = table(&[" input ", "OUTPUT"], &[&["B", "D"]]);
        let rules = read_rules(&mapped).unwrap();
        assert_eq!(rules, vec![RawRule::new(1, "B", "D")]);
    }

    #[test]
    fn test_read_rules_missing_required_column() {
        let mapped = table(&["Input", "Title"], &[&["B", "x"]]);
        assert!(matches!(
            read_rules(&mapped),
            Err(Error::MissingConfigColumn(c)) if c == "Output"
        ));
    }

    #[test]
    fn test_read_rules_half_blank_row() {
        let mapped = table(&["Input", "Output", "Title"], &[&["A", "A", ""], &["", "", "Orphan"]]);
        let err = read_rules(&mapped).unwrap_err();
        assert!(matches!(err, Error::Rule { rule: 2, .. }));
    }

    #[test]
    fn test_read_settings() {
        let general = table(
            &[
                "Graph Title", "X Min", "X Max", "Y Min", "Y Max", "Excel", "JPEG", "PDF", "TXT",
                "Transpose", "Start Line",
            ],
            &[&["Run 4", "0", "", "-1.5", "", "yes", "no", "", "YES", "no", "2"]],
        );

        let settings = read_settings(&general).unwrap();
        assert_eq!(
            settings,
            GeneralSettings {
                graph_title: Some("Run 4".into()),
                bounds: AxisBounds {
                    x_min: Some(0.0),
                    x_max: None,
                    y_min: Some(-1.5),
                    y_max: None,
                },
                formats: OutputFormats {
                    excel: true,
                    jpeg: false,
                    pdf: false,
                    txt: true,
                },
                transpose: false,
                start_line: Some(2),
            }
        );
    }

    #[test]
    fn test_read_settings_invalid_bound() {
        let general = table(&["X Min"], &[&["low"]]);
        assert!(matches!(read_settings(&general), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_read_settings_empty_table() {
        let general = table(&["Graph Title"], &[]);
        assert_eq!(read_settings(&general).unwrap(), GeneralSettings::default());
    }
}
