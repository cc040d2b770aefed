use chrono::{DateTime, Utc};

#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%Y-%m-%d %H:%M UTC").to_string()
}

/// Wall time between two instants as `"Xm YYs"`; negative spans read as zero.
#[must_use]
pub fn format_elapsed(started_at: DateTime<Utc>, completed_at: DateTime<Utc>) -> String {
    let secs = (completed_at - started_at).num_seconds().max(0);
    format!("{}m {:02}s", secs / 60, secs % 60)
}
