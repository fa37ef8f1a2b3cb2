use crate::prelude::FilteredRecord;
use std::path::PathBuf;

/// Builds path to given solution file, within the test resources
pub fn pos_resource(name: &str) -> PathBuf {
    PathBuf::new()
        .join(env!("CARGO_MANIFEST_DIR"))
        .join("test_resources")
        .join("POS")
        .join(name)
}

/// Builds a serie of [FilteredRecord]s, from (timestamp, longitude, altitude) tuples
pub fn records(content: &[(&str, f64, f64)]) -> Vec<FilteredRecord> {
    content
        .iter()
        .map(|(t, lon, alt)| FilteredRecord::new(t, *lon, *alt))
        .collect()
}

/// Panics if both values differ by more than tolerance
pub fn assert_close(value: f64, expected: f64, tolerance: f64) {
    let err = (value - expected).abs();
    assert!(
        err <= tolerance,
        "{} != {} (tolerance {})",
        value,
        expected,
        tolerance
    );
}
