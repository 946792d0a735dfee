//! Shared helpers for comma-separated query parameters.
//!
//! Per-day trip overrides arrive on the wire as comma-separated strings
//! (e.g. "10,12.5,8"). `parse_csv_param` turns them into numeric sequences.
//! Empty segments (doubled or trailing commas) are skipped rather than
//! rejected, so "10,,12," parses to [10.0, 12.0].

/// Parse a comma-separated query parameter into a list of numbers.
///
/// Whitespace around segments is tolerated and empty segments are skipped.
/// Returns the offending segment for anything that does not parse.
pub(crate) fn parse_csv_param(param: &str) -> Result<Vec<f64>, String> {
    param
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<f64>()
                .map_err(|_| format!("'{}' is not a number", s))
        })
        .collect()
}
