//! Run statistics and the end-of-run summary.

use crate::inject::SendOutcome;
use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

const SEPARATOR: &str = "==================================================";

/// Failure counts by category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureBreakdown {
    /// Endpoint answered with a non-200 status
    pub http_status: u64,
    /// No response within the timeout
    pub timeout: u64,
    /// Endpoint unreachable
    pub connection: u64,
    /// Any other client error
    pub other: u64,
}

impl FailureBreakdown {
    pub fn total(&self) -> u64 {
        self.http_status + self.timeout + self.connection + self.other
    }
}

/// Counters for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStats {
    /// Target endpoint
    pub endpoint: String,
    /// Start time
    pub started_at: DateTime<Utc>,
    /// Completion time (set by `finish`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    /// Messages sent
    pub attempts: u64,
    /// Messages answered with 200
    pub successes: u64,
    /// Messages that failed for any reason
    pub failures: u64,
    /// Failures by category
    pub failure_breakdown: FailureBreakdown,
    /// Response bytes received on successful sends
    pub bytes_received: u64,
    /// Wall-clock duration of the run in milliseconds
    pub elapsed_ms: u64,
}

impl RunStats {
    /// Start a new run against `endpoint`.
    pub fn start(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            started_at: Utc::now(),
            completed_at: None,
            attempts: 0,
            successes: 0,
            failures: 0,
            failure_breakdown: FailureBreakdown::default(),
            bytes_received: 0,
            elapsed_ms: 0,
        }
    }

    /// Count one send.
    pub fn record(&mut self, outcome: &SendOutcome) {
        self.attempts += 1;
        match outcome {
            SendOutcome::Success { bytes, .. } => {
                self.successes += 1;
                self.bytes_received += bytes;
            }
            SendOutcome::HttpStatus { .. } => {
                self.failures += 1;
                self.failure_breakdown.http_status += 1;
            }
            SendOutcome::Timeout => {
                self.failures += 1;
                self.failure_breakdown.timeout += 1;
            }
            SendOutcome::Connection(_) => {
                self.failures += 1;
                self.failure_breakdown.connection += 1;
            }
            SendOutcome::Other(_) => {
                self.failures += 1;
                self.failure_breakdown.other += 1;
            }
        }
    }

    /// Mark the run complete.
    pub fn finish(&mut self, elapsed: Duration) {
        self.completed_at = Some(Utc::now());
        self.elapsed_ms = elapsed.as_millis() as u64;
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms)
    }

    /// Percentage of attempts that succeeded.
    pub fn success_rate(&self) -> f64 {
        if self.attempts > 0 {
            self.successes as f64 / self.attempts as f64 * 100.0
        } else {
            0.0
        }
    }

    /// True when at least one message was sent and none failed.
    pub fn all_succeeded(&self) -> bool {
        self.attempts > 0 && self.failures == 0
    }

    /// Generate the summary block.
    pub fn summary(&self) -> String {
        let breakdown = &self.failure_breakdown;
        format!(
            "{SEPARATOR}\n\
             Injection finished in {:.2}s\n\
             Successes: {}/{} ({:.1}%)\n\
             Failures: {}/{}\n\
             \x20 HTTP status: {}, timeout: {}, connection: {}, other: {}\n\
             {SEPARATOR}",
            self.elapsed().as_secs_f64(),
            self.successes,
            self.attempts,
            self.success_rate(),
            self.failures,
            self.attempts,
            breakdown.http_status,
            breakdown.timeout,
            breakdown.connection,
            breakdown.other,
        )
    }

    /// Emit the summary block, one log line per summary line.
    pub fn log_summary(&self) {
        for line in self.summary().lines() {
            tracing::info!("{line}");
        }
    }

    /// Write the stats as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> anyhow::Result<()> {
        let json =
            serde_json::to_string_pretty(self).context("Failed to serialize run statistics")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        tracing::info!("Wrote run report to {}", path.display());
        Ok(())
    }
}
