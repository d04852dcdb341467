//! Text formatting helpers shared by commands.

/// Render an optional count, `-` when the group has no data.
pub fn opt_count(value: Option<u64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Render an optional percentage, `-` when the group has no data.
///
/// "No data" and "0.00%" are different answers and must render
/// differently.
pub fn opt_rate(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.2}%"))
}
