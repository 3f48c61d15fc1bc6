//! Legend types

/// Chart legend, listing series in plotting order
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Legend {
    /// Series names, in configuration order
    pub entries: Vec<String>,
}

impl Legend {
    /// Create a legend from series names
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }
}
