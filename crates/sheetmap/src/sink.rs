//! Report sinks
//!
//! A sink renders a finished [`Report`] into some artifact. Sinks are
//! registered per [`OutputFormat`]; rendering visits the formats the
//! report's settings enable.

use std::path::{Path, PathBuf};

use sheetmap_core::Result;
use sheetmap_csv::{CsvWriteOptions, CsvWriter};
use sheetmap_mapping::OutputFormat;

use crate::report::Report;

/// Renders a report into a persisted artifact
pub trait ReportSink {
    /// Render the report
    fn render(&mut self, report: &Report) -> Result<()>;
}

/// Writes the output dataset as delimited text
#[derive(Debug, Clone)]
pub struct TextSink {
    path: PathBuf,
}

impl TextSink {
    /// Tab-delimited text at `path`
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Target path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for TextSink {
    fn render(&mut self, report: &Report) -> Result<()> {
        CsvWriter::write_file(&report.output, &self.path, &CsvWriteOptions::text())?;
        tracing::info!(path = %self.path.display(), "wrote text export");
        Ok(())
    }
}

/// Sinks keyed by the format they produce
#[derive(Default)]
pub struct SinkRegistry {
    sinks: Vec<(OutputFormat, Box<dyn ReportSink>)>,
}

impl SinkRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a sink for a format
    pub fn register<S: ReportSink + 'static>(&mut self, format: OutputFormat, sink: S) {
        self.sinks.push((format, Box::new(sink)));
    }

    /// Render every format the report enables
    ///
    /// Enabled formats with no registered sink are skipped with a warning.
    /// Returns the formats that were rendered.
    pub fn render(&mut self, report: &Report) -> Result<Vec<OutputFormat>> {
        let mut rendered = Vec::new();
        for format in report.settings.formats.enabled() {
            let mut found = false;
            for (_, sink) in self.sinks.iter_mut().filter(|(f, _)| *f == format) {
                sink.render(report)?;
                found = true;
            }

            if found {
                rendered.push(format);
            } else {
                tracing::warn!(%format, "no renderer available for enabled output format, skipping");
            }
        }
        Ok(rendered)
    }
}
