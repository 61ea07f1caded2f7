//! Duration parsing utilities.

use anyhow::Context;
use std::time::Duration;

/// Parse a duration string like "1h", "30m", "2s", "500ms", "0.5" into a `Duration`.
/// Supports:
/// - Plain numbers (interpreted as seconds, fractions allowed): "300", "0.5"
/// - Milliseconds suffix: "500ms"
/// - Seconds suffix: "2s", "1.5s"
/// - Minutes suffix: "30m"
/// - Hours suffix: "1h"
pub fn parse_duration(s: &str) -> anyhow::Result<Duration> {
    let s = s.trim();
    if s.is_empty() {
        anyhow::bail!("Empty duration string");
    }

    // "ms" must be checked before "m" and "s"
    if let Some(num_str) = s.strip_suffix("ms") {
        let millis: u64 = num_str
            .trim()
            .parse()
            .with_context(|| format!("Invalid milliseconds value: {num_str}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(num_str) = s.strip_suffix('h') {
        return secs_value(num_str, 3600.0, "hours");
    }
    if let Some(num_str) = s.strip_suffix('m') {
        return secs_value(num_str, 60.0, "minutes");
    }
    if let Some(num_str) = s.strip_suffix('s') {
        return secs_value(num_str, 1.0, "seconds");
    }

    // No suffix - treat as seconds
    secs_value(s, 1.0, "duration")
}

fn secs_value(num_str: &str, scale: f64, unit: &str) -> anyhow::Result<Duration> {
    let value: f64 = num_str
        .trim()
        .parse()
        .with_context(|| format!("Invalid {unit} value: {num_str}"))?;
    Duration::try_from_secs_f64(value * scale)
        .with_context(|| format!("Duration out of range: {num_str}"))
}
