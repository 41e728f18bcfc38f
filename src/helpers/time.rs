use chrono::Utc;

/// Current wall-clock time in milliseconds since the epoch.
///
/// Expiry and cache-freshness comparisons run at millisecond resolution.
/// Callers sample once per decision and pass the value down, so a single
/// check never observes two different clocks.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
