//! General settings
//!
//! The general configuration table carries one row of report-wide options:
//! chart title and axis bounds, which output formats to produce, and how to
//! read the input CSV.

use std::fmt;

use crate::rule::InputAddressing;

/// Optional chart axis bounds; `None` means auto-scale
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AxisBounds {
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
}

/// Output format toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OutputFormats {
    pub excel: bool,
    pub jpeg: bool,
    pub pdf: bool,
    pub txt: bool,
}

/// An artifact a report can be rendered to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OutputFormat {
    Excel,
    Jpeg,
    Pdf,
    Txt,
}

impl OutputFormat {
    /// Conventional file extension
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Excel => "xlsx",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Txt => "txt",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Excel => write!(f, "Excel"),
            OutputFormat::Jpeg => write!(f, "JPEG"),
            OutputFormat::Pdf => write!(f, "PDF"),
            OutputFormat::Txt => write!(f, "TXT"),
        }
    }
}

impl OutputFormats {
    /// Enabled formats
    pub fn enabled(&self) -> Vec<OutputFormat> {
        [
            (OutputFormat::Excel, self.excel),
            (OutputFormat::Jpeg, self.jpeg),
            (OutputFormat::Pdf, self.pdf),
            (OutputFormat::Txt, self.txt),
        ]
        .into_iter()
        .filter_map(|(format, on)| on.then_some(format))
        .collect()
    }
}

/// Report-wide settings from the general configuration table
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GeneralSettings {
    /// Explicit chart title
    pub graph_title: Option<String>,
    /// Chart axis bounds
    pub bounds: AxisBounds,
    /// Which artifacts to produce
    pub formats: OutputFormats,
    /// `Input` cells hold column numbers instead of letters
    pub transpose: bool,
    /// 0-based line of the input CSV that holds the header
    pub start_line: Option<usize>,
}

impl GeneralSettings {
    /// Addressing scheme for `Input` cells
    pub fn addressing(&self) -> InputAddressing {
        if self.transpose {
            InputAddressing::Numeric
        } else {
            InputAddressing::Letters
        }
    }
}

/// Read a toggle cell (yes/y/true/1/x)
pub fn parse_toggle(s: Option<&str>) -> bool {
    s.map(|s| s.trim().to_ascii_lowercase())
        .is_some_and(|s| matches!(s.as_str(), "yes" | "y" | "true" | "1" | "x"))
}
