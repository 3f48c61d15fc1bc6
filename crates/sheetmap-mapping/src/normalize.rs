//! Configuration normalization
//!
//! Turns raw rules into mapping rules in a single pass: input addresses are
//! resolved to source column titles, output letters to 1-based positions,
//! and blank titles default to the source column title. Normalization
//! consumes [`RawRule`]s and produces [`MappingRule`]s, so it can never be
//! applied to its own output.

use sheetmap_core::{index_to_letters, index_to_title, ColumnRef, Error, Result};

use crate::rule::{AxisRole, InputAddressing, MappingRule, RawRule, TimeUnit};

/// Normalizes raw configuration rules against a source's column names
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigNormalizer {
    addressing: InputAddressing,
}

impl ConfigNormalizer {
    /// Create a normalizer with the given input addressing scheme
    pub fn new(addressing: InputAddressing) -> Self {
        Self { addressing }
    }

    /// Normalize every rule, then validate axis roles
    ///
    /// Fails with [`Error::AmbiguousAxis`] when more than one rule declares
    /// the x axis. Per-rule failures are attributed with [`Error::Rule`].
    pub fn normalize<S: AsRef<str>>(
        &self,
        raw: &[RawRule],
        column_names: &[S],
    ) -> Result<Vec<MappingRule>> {
        let rules = raw
            .iter()
            .map(|rule| {
                self.normalize_rule(rule, column_names)
                    .map_err(|e| e.in_rule(rule.row))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut x_rule: Option<usize> = None;
        for rule in rules.iter().filter(|r| r.axis == Some(AxisRole::X)) {
            if let Some(first) = x_rule {
                return Err(Error::AmbiguousAxis {
                    first,
                    second: rule.row,
                });
            }
            x_rule = Some(rule.row);
        }

        Ok(rules)
    }

    fn normalize_rule<S: AsRef<str>>(
        &self,
        raw: &RawRule,
        column_names: &[S],
    ) -> Result<MappingRule> {
        let input = self.addressing.parse(&raw.input)?;
        let index = input.index()?;
        let source_title = index_to_title(index, column_names)?.to_string();
        let output = ColumnRef::letters(&raw.output)?.index()?;

        // an unnamed source column is titled by its letters
        let title = match raw.title.as_deref().map(str::trim) {
            Some(title) if !title.is_empty() => title.to_string(),
            _ if source_title.trim().is_empty() => index_to_letters(index),
            _ => source_title.clone(),
        };

        let rule = MappingRule {
            row: raw.row,
            input,
            source_index: index,
            source_title,
            output,
            title,
            range: raw
                .range
                .as_deref()
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string),
            axis: AxisRole::parse(raw.axis.as_deref())?,
            time_unit: TimeUnit::parse(raw.time_unit.as_deref()),
        };

        tracing::debug!(
            rule = rule.row,
            input = %rule.input,
            source = %rule.source_title,
            output = rule.output,
            title = %rule.title,
            "normalized rule"
        );
        Ok(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const NAMES: [&str; 4] = ["Timestamp", "Temp", "Pressure", "Humidity"];

    #[test]
    fn test_letters_resolve_to_titles_and_positions() {
        let raw = vec![
            RawRule::new(1, "a", "B").with_axis("x").with_time_unit("s"),
            RawRule::new(2, "C", "d").with_title("Pressure (kPa)").with_axis("y"),
        ];
        let rules = ConfigNormalizer::default().normalize(&raw, &NAMES).unwrap();

        assert_eq!(rules[0].input(), &ColumnRef::Letters("A".into()));
        assert_eq!(rules[0].source_title(), "Timestamp");
        assert_eq!(rules[0].output(), 2);
        assert_eq!(rules[0].title(), "Timestamp");
        assert_eq!(rules[0].axis(), Some(AxisRole::X));
        assert_eq!(rules[0].time_unit(), Some(TimeUnit::Seconds));

        assert_eq!(rules[1].source_title(), "Pressure");
        assert_eq!(rules[1].output(), 4);
        assert_eq!(rules[1].title(), "Pressure (kPa)");
        assert_eq!(rules[1].time_unit(), None);
    }

    #[test]
    fn test_titles_are_never_blank() {
        let raw = vec![
            RawRule::new(1, "B", "A"),
            RawRule::new(2, "C", "B").with_title(""),
            RawRule::new(3, "D", "C").with_title("   "),
        ];
        let rules = ConfigNormalizer::default().normalize(&raw, &NAMES).unwrap();
        let titles: Vec<_> = rules.iter().map(MappingRule::title).collect();
        assert_eq!(titles, vec!["Temp", "Pressure", "Humidity"]);
    }

    #[test]
    fn test_numeric_addressing() {
        let raw = vec![RawRule::new(1, "3", "A")];
        let rules = ConfigNormalizer::new(InputAddressing::Numeric)
            .normalize(&raw, &NAMES)
            .unwrap();
        assert_eq!(rules[0].input(), &ColumnRef::Number(3));
        assert_eq!(rules[0].source_title(), "Pressure");
    }

    #[test]
    fn test_two_x_axes_are_ambiguous() {
        let raw = vec![
            RawRule::new(1, "A", "A").with_axis("x"),
            RawRule::new(2, "B", "B").with_axis("y"),
            RawRule::new(3, "C", "C").with_axis("X"),
        ];
        let err = ConfigNormalizer::default().normalize(&raw, &NAMES).unwrap_err();
        assert!(matches!(err, Error::AmbiguousAxis { first: 1, second: 3 }));
    }

    #[test]
    fn test_invalid_address_names_rule() {
        let raw = vec![RawRule::new(1, "A", "A"), RawRule::new(2, "B2", "B")];
        let err = ConfigNormalizer::default().normalize(&raw, &NAMES).unwrap_err();
        assert!(matches!(err, Error::Rule { rule: 2, .. }));
        assert!(matches!(err.root(), Error::InvalidAddress(_)));
    }

    #[test]
    fn test_input_past_last_column() {
        let raw = vec![RawRule::new(5, "E", "A")];
        let err = ConfigNormalizer::default().normalize(&raw, &NAMES).unwrap_err();
        assert!(matches!(err, Error::Rule { rule: 5, .. }));
        assert!(matches!(err.root(), Error::OutOfRange { index: 5, len: 4 }));
    }

    #[test]
    fn test_blank_range_is_dropped() {
        let raw = vec![
            RawRule::new(1, "A", "A").with_range("  "),
            RawRule::new(2, "B", "B").with_range(" 2:5 "),
        ];
        let rules = ConfigNormalizer::default().normalize(&raw, &NAMES).unwrap();
        assert_eq!(rules[0].range(), None);
        assert_eq!(rules[1].range(), Some("2:5"));
    }

    #[test]
    fn test_unnamed_source_column_is_titled_by_letters() {
        let names = ["Time", "", "Pressure"];
        let rules = ConfigNormalizer::default()
            .normalize(&[RawRule::new(1, "B", "A")], &names)
            .unwrap();
        assert_eq!(rules[0].source_title(), "");
        assert_eq!(rules[0].title(), "B");
    }

    proptest! {
        #[test]
        fn prop_titles_are_never_blank(
            input in 1usize..=4,
            output in 1usize..=30,
            title in proptest::option::of("[ a-z]{0,4}"),
        ) {
            let mut raw = RawRule::new(1, index_to_letters(input), index_to_letters(output));
            raw.title = title;
            let rules = ConfigNormalizer::default().normalize(&[raw], &NAMES).unwrap();
            prop_assert!(!rules[0].title().trim().is_empty());
            prop_assert_eq!(rules[0].output(), output);
        }
    }
}
