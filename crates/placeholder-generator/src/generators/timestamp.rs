//! Timestamp value generators.
//!
//! These are NOT random: they render the instant captured for the message
//! being built.

use chrono::{DateTime, FixedOffset};

/// Render as `YYYY-MM-DDTHH:MM:SS`.
pub fn format_timestamp(now: &DateTime<FixedOffset>) -> String {
    now.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Render as `YYYY-MM-DDTHH:MM:SS.mmm`, truncating to milliseconds.
pub fn format_timestamp_millis(now: &DateTime<FixedOffset>) -> String {
    now.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}

/// Render the calendar date as `YYYY-MM-DD`.
pub fn format_date(now: &DateTime<FixedOffset>) -> String {
    now.format("%Y-%m-%d").to_string()
}

/// Render the time of day as `HH:MM:SS`.
pub fn format_time(now: &DateTime<FixedOffset>) -> String {
    now.format("%H:%M:%S").to_string()
}

/// Render Unix time in whole seconds.
pub fn format_epoch(now: &DateTime<FixedOffset>) -> String {
    now.timestamp().to_string()
}
