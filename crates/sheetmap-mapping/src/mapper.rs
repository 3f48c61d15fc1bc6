//! Column mapping
//!
//! Copies each rule's source column slice into its output position, titled
//! by the rule and optionally converted to elapsed time.

use std::collections::HashMap;

use sheetmap_core::range::{self, RowSpan, FIRST_DATA_ROW};
use sheetmap_core::{
    index_to_letters, CellValue, Error, OutputColumn, OutputDataset, Result, TabularSource,
};

use crate::elapsed;
use crate::rule::MappingRule;

/// Applies normalized rules to a source dataset
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnMapper;

impl ColumnMapper {
    /// Build the output dataset
    ///
    /// Rules are checked for overlapping output positions before anything is
    /// copied; two rules writing one position is [`Error::DuplicateOutput`].
    /// Positions no rule targets stay absent.
    pub fn map<T: TabularSource + ?Sized>(
        source: &T,
        rules: &[MappingRule],
    ) -> Result<OutputDataset> {
        Self::check_disjoint(rules)?;

        let mut output = OutputDataset::new();
        for rule in rules {
            let column = Self::map_rule(source, rule).map_err(|e| e.in_rule(rule.row()))?;
            tracing::debug!(
                rule = rule.row(),
                column = %column.letters(),
                title = %column.title,
                rows = column.values.len(),
                "mapped column"
            );
            output.insert(column);
        }

        Ok(output)
    }

    fn check_disjoint(rules: &[MappingRule]) -> Result<()> {
        let mut seen: HashMap<usize, usize> = HashMap::new();
        for rule in rules {
            if let Some(&first) = seen.get(&rule.output()) {
                return Err(Error::DuplicateOutput {
                    column: index_to_letters(rule.output()),
                    first,
                    second: rule.row(),
                });
            }
            seen.insert(rule.output(), rule.row());
        }
        Ok(())
    }

    fn map_rule<T: TabularSource + ?Sized>(source: &T, rule: &MappingRule) -> Result<OutputColumn> {
        let values = source
            .column_at(rule.source_index())
            .ok_or_else(|| Error::MissingColumn(rule.source_title().to_string()))?;

        let span = range::resolve(rule.range(), values.len())?;
        let slice = span.slice(values);

        let values: Vec<CellValue> = match rule.time_unit() {
            Some(unit) => elapsed::convert_values(first_row(&span), slice)?
                .into_iter()
                .map(|t| unit.render(t))
                .collect(),
            None => slice.to_vec(),
        };

        Ok(OutputColumn::new(rule.output(), rule.title(), values))
    }
}

/// Spreadsheet row holding the first value of a span
fn first_row(span: &RowSpan) -> usize {
    FIRST_DATA_ROW as usize + span.start
}
