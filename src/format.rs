//! Display Formatting

use chrono::{DateTime, Utc};

/// Compact age like `5m ago`. Future times read as `0s ago`.
pub fn relative_time(now: DateTime<Utc>, then: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds().max(0);
    let mins = seconds / 60;
    let hours = mins / 60;
    let days = hours / 24;

    if seconds < 60 {
        format!("{seconds}s ago")
    } else if mins < 60 {
        format!("{mins}m ago")
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if days < 7 {
        format!("{days}d ago")
    } else if days / 7 < 4 {
        format!("{}w ago", days / 7)
    } else if days / 30 < 12 {
        format!("{}mo ago", (days / 30).max(1))
    } else {
        format!("{}y ago", (days / 365).max(1))
    }
}

/// Full local timestamp for hover titles
pub fn full_time(then: DateTime<Utc>) -> String {
    then.with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}
