//! Error types for sheetmap-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while interpreting a mapping configuration
/// or applying it to a dataset
#[derive(Debug, Error)]
pub enum Error {
    /// Column address is empty, contains non-letters, or lies past the last column
    #[error("Invalid column address: {0}")]
    InvalidAddress(String),

    /// 1-based column index outside the available columns
    #[error("Column index {index} out of range (columns: {len})")]
    OutOfRange { index: usize, len: usize },

    /// Range has a colon but a side that is not an integer
    #[error("Malformed range '{0}': expected \"start:end\" row numbers")]
    MalformedRange(String),

    /// More than one rule declares the x axis
    #[error("Ambiguous x axis: rules {first} and {second} both declare axis 'x'")]
    AmbiguousAxis { first: usize, second: usize },

    /// Timestamp without a `<date> <time>` shape or with an unparseable time
    #[error("Malformed timestamp at row {row}: '{value}'")]
    MalformedTimestamp { row: usize, value: String },

    /// Two rules target the same output column
    #[error("Duplicate output column {column}: rules {first} and {second} both write to it")]
    DuplicateOutput {
        column: String,
        first: usize,
        second: usize,
    },

    /// Resolved source column title is not present in the dataset
    #[error("Column not found: {0}")]
    MissingColumn(String),

    /// Configuration table lacks a required header
    #[error("Configuration table is missing the '{0}' column")]
    MissingConfigColumn(String),

    /// Unparseable configuration cell
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Failure attributed to one configuration rule (1-based)
    #[error("Rule {rule}: {source}")]
    Rule {
        rule: usize,
        #[source]
        source: Box<Error>,
    },

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Attribute this error to a configuration rule
    pub fn in_rule(self, rule: usize) -> Self {
        match self {
            // already attributed, or naming its own rules
            Error::Rule { .. } | Error::AmbiguousAxis { .. } | Error::DuplicateOutput { .. } => {
                self
            }
            other => Error::Rule {
                rule,
                source: Box::new(other),
            },
        }
    }

    /// The innermost error, looking through rule attribution
    pub fn root(&self) -> &Error {
        match self {
            Error::Rule { source, .. } => source.root(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_rule_wraps_once() {
        let err = Error::InvalidAddress("A1".into()).in_rule(3).in_rule(7);
        match &err {
            Error::Rule { rule, .. } => assert_eq!(*rule, 3),
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(err.root(), Error::InvalidAddress(_)));
        assert_eq!(err.to_string(), "Rule 3: Invalid column address: A1");
    }

    #[test]
    fn test_in_rule_keeps_multi_rule_errors() {
        let err = Error::AmbiguousAxis { first: 1, second: 4 }.in_rule(4);
        assert!(matches!(err, Error::AmbiguousAxis { first: 1, second: 4 }));
    }
}
