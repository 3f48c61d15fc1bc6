//! Report pipeline
//!
//! A report run reads the two configuration tables, normalizes the mapping
//! rules against the input's column names, maps the columns and plans the
//! chart. Any failure aborts the run without producing a report.

use std::path::Path;

use sheetmap_chart::{ChartPlan, ChartPlanner};
use sheetmap_core::{OutputDataset, Result, TabularSource};
use sheetmap_csv::{CsvReadOptions, CsvSource};
use sheetmap_mapping::{
    table, ColumnMapper, ConfigNormalizer, GeneralSettings, MappingRule, RawRule,
};

/// Name of the output sheet chart series refer to
pub const OUTPUT_SHEET: &str = "Output Data";

/// Both configuration tables, parsed but not yet normalized
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportConfig {
    /// Rows of the mapped table
    pub rules: Vec<RawRule>,
    /// First row of the general table
    pub settings: GeneralSettings,
}

impl ReportConfig {
    /// Read the configuration from any tabular sources
    pub fn from_tables<M, G>(mapped: &M, general: &G) -> Result<Self>
    where
        M: TabularSource + ?Sized,
        G: TabularSource + ?Sized,
    {
        Ok(Self {
            rules: table::read_rules(mapped)?,
            settings: table::read_settings(general)?,
        })
    }

    /// Read the configuration from two CSV files
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(mapped: P, general: Q) -> Result<Self> {
        let options = CsvReadOptions::config();
        let mapped = CsvSource::open(mapped, &options)?;
        let general = CsvSource::open(general, &options)?;
        Self::from_tables(&mapped, &general)
    }

    /// CSV options for reading the input this configuration describes
    pub fn read_options(&self) -> CsvReadOptions {
        CsvReadOptions::default().with_header_row(self.settings.start_line.unwrap_or(0))
    }
}

/// The result of applying a configuration to a source
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Normalized rules, in configuration order
    pub rules: Vec<MappingRule>,
    /// Sparse output columns
    pub output: OutputDataset,
    /// Chart directives, when an x axis is declared
    pub chart: Option<ChartPlan>,
    /// Report-wide settings
    pub settings: GeneralSettings,
}

impl Report {
    /// Normalize, map and plan
    pub fn build<T: TabularSource + ?Sized>(source: &T, config: &ReportConfig) -> Result<Self> {
        let normalizer = ConfigNormalizer::new(config.settings.addressing());
        let rules = normalizer.normalize(&config.rules, &source.column_names())?;
        let output = ColumnMapper::map(source, &rules)?;
        let chart = ChartPlanner::from_settings(&config.settings).plan(&rules, &output);

        tracing::info!(
            columns = output.len(),
            rows = output.row_count(),
            chart = chart.is_some(),
            "built report"
        );

        Ok(Self {
            rules,
            output,
            chart,
            settings: config.settings.clone(),
        })
    }

    /// Read the input CSV with the configuration's options, then build
    pub fn from_csv<P: AsRef<Path>>(input: P, config: &ReportConfig) -> Result<Self> {
        let source = CsvSource::open(input, &config.read_options())?;
        tracing::debug!(
            source = source.name(),
            columns = source.column_names().len(),
            rows = source.row_count(),
            "read input"
        );
        Self::build(&source, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetmap_core::{CellValue, Dataset, Error};

    fn source() -> Dataset {
        Dataset::from_rows(
            vec!["Stamp", "Temp"],
            vec![
                vec!["2023-01-01 10:00:00".into(), 20.0.into()],
                vec!["2023-01-01 10:00:05".into(), 21.0.into()],
            ],
        )
    }

    #[test]
    fn test_build() {
        let config = ReportConfig {
            rules: vec![
                RawRule::new(1, "A", "A")
                    .with_title("Elapsed")
                    .with_axis("x")
                    .with_time_unit("s"),
                RawRule::new(2, "B", "B").with_axis("y"),
            ],
            settings: GeneralSettings::default(),
        };
        let report = Report::build(&source(), &config).unwrap();

        assert_eq!(report.rules.len(), 2);
        assert_eq!(
            report.output.get(1).unwrap().values,
            vec![CellValue::Number(0.0), CellValue::Number(5.0)]
        );
        let chart = report.chart.unwrap();
        assert_eq!(chart.title, "Temp vs Elapsed");
        assert!(chart.legend_suppressed());
    }

    #[test]
    fn test_build_transposed() {
        let mut config = ReportConfig {
            rules: vec![RawRule::new(1, "2", "C")],
            ..Default::default()
        };
        config.settings.transpose = true;
        let report = Report::build(&source(), &config).unwrap();
        assert_eq!(report.output.get(3).unwrap().title, "Temp");
    }

    #[test]
    fn test_failure_produces_no_report() {
        let config = ReportConfig {
            rules: vec![RawRule::new(1, "A", "A"), RawRule::new(2, "B", "A")],
            ..Default::default()
        };
        assert!(matches!(
            Report::build(&source(), &config),
            Err(Error::DuplicateOutput { .. })
        ));
    }

    #[test]
    fn test_read_options_follow_start_line() {
        let mut config = ReportConfig::default();
        assert_eq!(config.read_options().header_row, 0);
        config.settings.start_line = Some(3);
        assert_eq!(config.read_options().header_row, 3);
    }
}
