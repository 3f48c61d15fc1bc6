//! Configuration errors surface with the offending rule identified

use sheetmap::prelude::*;

fn source() -> Dataset {
    Dataset::from_rows(
        vec!["Time", "Temp", "Pressure"],
        vec![
            vec!["2023-01-01 10:00:00".into(), 20.0.into(), 101.0.into()],
            vec!["2023-01-01 10:00:05".into(), 21.0.into(), 100.5.into()],
        ],
    )
}

fn build(rules: Vec<RawRule>) -> Result<Report> {
    let config = ReportConfig {
        rules,
        ..Default::default()
    };
    Report::build(&source(), &config)
}

/// Two x axes cannot be charted
#[test]
fn test_ambiguous_axis() {
    let err = build(vec![
        RawRule::new(1, "A", "A").with_axis("x"),
        RawRule::new(2, "B", "B").with_axis("x"),
    ])
    .unwrap_err();
    assert!(matches!(err, Error::AmbiguousAxis { first: 1, second: 2 }));
}

/// Two rules writing one output column
#[test]
fn test_duplicate_output() {
    let err = build(vec![
        RawRule::new(1, "A", "B"),
        RawRule::new(2, "C", "B"),
    ])
    .unwrap_err();
    assert!(matches!(err, Error::DuplicateOutput { first: 1, second: 2, .. }));
    assert_eq!(
        err.to_string(),
        "Duplicate output column B: rules 1 and 2 both write to it"
    );
}

/// Letters that are not a column address
#[test]
fn test_invalid_address() {
    let err = build(vec![RawRule::new(4, "A", "1B")]).unwrap_err();
    assert!(matches!(err, Error::Rule { rule: 4, .. }));
    assert!(matches!(err.root(), Error::InvalidAddress(_)));
}

/// Input beyond the source's columns
#[test]
fn test_input_out_of_range() {
    let err = build(vec![RawRule::new(1, "D", "A")]).unwrap_err();
    assert!(matches!(err.root(), Error::OutOfRange { index: 4, len: 3 }));
}

/// Ranges starting above the data fall back to the full column
#[test]
fn test_permissive_range_fallback() {
    let report = build(vec![RawRule::new(1, "B", "A").with_range("1:1")]).unwrap();
    assert_eq!(report.output.get(1).unwrap().values.len(), 2);
}

/// Ranges with non-integer sides abort the run
#[test]
fn test_malformed_range() {
    let err = build(vec![RawRule::new(2, "B", "A").with_range("x:4")]).unwrap_err();
    assert!(matches!(err, Error::Rule { rule: 2, .. }));
    assert!(matches!(err.root(), Error::MalformedRange(_)));
}

/// Non-timestamp data in an elapsed-time column aborts the run
#[test]
fn test_malformed_timestamp() {
    let err = build(vec![RawRule::new(1, "C", "A").with_time_unit("s")]).unwrap_err();
    assert!(matches!(err.root(), Error::MalformedTimestamp { row: 2, .. }));
}
