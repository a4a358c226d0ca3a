//! Clock-style time rendering for track positions and durations

/// Format a time in seconds as `m:ss`
///
/// Non-finite, negative, and zero inputs all render as "0:00", so a
/// not-yet-known duration displays the same as the start of a track.
pub fn format_clock(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }

    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
