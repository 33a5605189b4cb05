// record.rs - Formatted, timestamped log line

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// Format of the bracketed timestamp inside each persisted line.
/// Local wall-clock time, ISO-8601-like, no zone offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// LogRecord pairs a severity and message with the capture time.
///
/// Records are ephemeral; the only durable form is the formatted line
/// produced by [`format_line`](Self::format_line).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogRecord {
    pub severity: Severity,
    pub timestamp: DateTime<Local>,
    pub message: String,
}

impl LogRecord {
    /// Capture a record at the current wall-clock time.
    pub fn new(message: &str, severity: Severity) -> Self {
        Self {
            severity,
            timestamp: Local::now(),
            message: message.to_string(),
        }
    }

    /// Render the persisted line: `<SEVERITY> [<timestamp>]: <message>`.
    pub fn format_line(&self) -> String {
        format!(
            "{} [{}]: {}",
            self.severity,
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.message
        )
    }
}
