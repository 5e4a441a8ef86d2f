//! Date formatting helpers for pages.

use chrono::{DateTime, Utc};

/// Formats a timestamp as human readable relative time.
///
/// Produces strings like "5 min ago" or "2 weeks ago" relative to `now`.
/// Future timestamps are treated as "just now".
pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    // Clock skew between the post files and the server
    let secs = (now - at).num_seconds().max(0);
    let minutes = secs / 60;
    let hours = secs / 3600;
    let days = secs / 86400;

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} hr ago", hours)
    } else if days < 7 {
        format!("{} days ago", days)
    } else if days < 30 {
        format!("{} weeks ago", days / 7)
    } else if days < 365 {
        format!("{} months ago", days / 30)
    } else {
        format!("{} years ago", days / 365)
    }
}

/// Formats a timestamp as a calendar date, e.g. "March 3, 2025".
pub fn format_date(at: DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// Machine readable date for `<time datetime=..>`.
pub fn iso_date(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d").to_string()
}
