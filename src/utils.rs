/// Utility helpers for the player

/// Placeholder shown before anything has elapsed or while metadata is missing.
pub const EMPTY_TIME: &str = "00:00";

/// Format a position in seconds for the time labels.
///
/// Minutes are never padded while seconds always are, so 65 seconds reads
/// `1:05` and an hour reads `60:00`. NaN (no metadata yet), non-finite,
/// negative and sub-second values all render as [`EMPTY_TIME`].
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return EMPTY_TIME.to_string();
    }

    let whole = seconds.max(0.0).floor() as u64;
    if whole == 0 {
        return EMPTY_TIME.to_string();
    }

    let mins = whole / 60;
    let secs = whole % 60;
    format!("{}:{:02}", mins, secs)
}

/// Format an optional duration; unknown renders like NaN.
pub fn format_duration(duration: Option<f64>) -> String {
    format_time(duration.unwrap_or(f64::NAN))
}
