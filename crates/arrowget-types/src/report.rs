//! Transfer summary reporting.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Summary of a single transfer: what was decoded and how long it took.
///
/// The [`Display`](fmt::Display) impl renders the two report lines:
///
/// ```
/// use arrowget_types::TransferReport;
/// use std::time::Duration;
///
/// let report = TransferReport::new("http://localhost:8000", chrono::Utc::now())
///     .with_batches(3, 300)
///     .with_elapsed(Duration::from_millis(1250));
/// assert_eq!(
///     report.to_string(),
///     "3 record batches received\n1.25 seconds elapsed"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferReport {
    /// Source the stream was read from (URL or file path).
    pub source: String,
    /// When the transfer started (UTC).
    pub started_at: DateTime<Utc>,
    /// Number of record batches decoded.
    pub record_batches: usize,
    /// Total number of rows across decoded batches.
    pub rows: usize,
    /// Number of body bytes received.
    pub bytes: u64,
    /// Number of body chunks received.
    pub chunks: u64,
    /// HTTP status of the response, if one arrived.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub status: Option<u16>,
    /// Wall-clock duration of the transfer in seconds.
    pub elapsed_secs: f64,
    /// Failure message, if the transfer did not complete cleanly.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl TransferReport {
    /// Creates an empty report for the given source.
    #[must_use]
    pub fn new(source: impl Into<String>, started_at: DateTime<Utc>) -> Self {
        Self {
            source: source.into(),
            started_at,
            record_batches: 0,
            rows: 0,
            bytes: 0,
            chunks: 0,
            status: None,
            elapsed_secs: 0.0,
            error: None,
        }
    }

    /// Sets the decoded batch and row counts.
    #[must_use]
    pub const fn with_batches(mut self, record_batches: usize, rows: usize) -> Self {
        self.record_batches = record_batches;
        self.rows = rows;
        self
    }

    /// Sets the number of body bytes received.
    #[must_use]
    pub const fn with_bytes(mut self, bytes: u64) -> Self {
        self.bytes = bytes;
        self
    }

    /// Sets the chunk count and response status.
    #[must_use]
    pub const fn with_transfer(mut self, chunks: u64, status: Option<u16>) -> Self {
        self.chunks = chunks;
        self.status = status;
        self
    }

    /// Sets the elapsed wall-clock time.
    #[must_use]
    pub const fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed_secs = elapsed.as_secs_f64();
        self
    }

    /// Records a failure message.
    #[must_use]
    pub fn with_error(mut self, error: impl fmt::Display) -> Self {
        self.error = Some(error.to_string());
        self
    }

    /// Returns true if the transfer completed without error.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

impl fmt::Display for TransferReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} record batches received", self.record_batches)?;
        write!(f, "{:.2} seconds elapsed", self.elapsed_secs)
    }
}
