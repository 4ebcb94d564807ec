//! Parse-or-default helpers for attribute values.
//!
//! CI tools emit JUnit XML with all sorts of gaps: missing counts, empty
//! `time` attributes, localized numbers. Every attribute the parser reads
//! goes through one of these functions so that a bad value degrades to a
//! zero instead of aborting the whole report.

/// Parse a non-negative base-10 count, or 0.
pub fn lenient_count(value: Option<&str>) -> u64 {
    value
        .map(str::trim)
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0)
}

/// Parse a duration in seconds, or 0.0.
///
/// Negative and non-finite values are rejected so that sums and sort
/// order stay well defined.
pub fn lenient_seconds(value: Option<&str>) -> f64 {
    value
        .map(str::trim)
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .unwrap_or(0.0)
}

/// Verbatim attribute value, or an empty string.
pub fn attr_or_empty(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}
