//! Timestamp formatting for list and detail rendering.

use chrono::{DateTime, Local, TimeZone, Utc};

const LIST_DATE_FORMAT: &str = "%x";
const UPDATED_FORMAT: &str = "%Y-%m-%d %H:%M";
const INVALID_TIMESTAMP: &str = "unknown date";

/// Short localized date for sidebar entries.
pub fn list_date(epoch_ms: i64) -> String {
    format_in(&Local, epoch_ms, LIST_DATE_FORMAT)
}

/// Human-readable "updated" stamp for the detail pane.
pub fn updated_label(epoch_ms: i64) -> String {
    format_in(&Local, epoch_ms, UPDATED_FORMAT)
}

fn format_in<Tz>(tz: &Tz, epoch_ms: i64, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::<Utc>::from_timestamp_millis(epoch_ms) {
        Some(utc) => utc.with_timezone(tz).format(pattern).to_string(),
        None => INVALID_TIMESTAMP.to_string(),
    }
}
