//! Fetch-and-decode pipeline for Arrow IPC streams.

use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use arrowget_decode::{CollectListener, IpcStreamDecoder};
use arrowget_types::{ArrowgetError, TransferReport};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};
use tracing::info;

use crate::{FetchError, FetchSession, TransferStats};

impl From<FetchError> for ArrowgetError {
    fn from(error: FetchError) -> Self {
        match error {
            FetchError::Http(e) => Self::Http(e.to_string()),
            FetchError::Timeout(after) => Self::Timeout(after),
            FetchError::Status { status } => Self::Status { status },
            FetchError::InvalidUrl(msg) => Self::InvalidUrl(msg),
            FetchError::Sink { source, .. } => Self::Decode(source.to_string()),
            e @ FetchError::ShortWrite { .. } => Self::Decode(e.to_string()),
        }
    }
}

/// Everything decoded from one transfer, successful or not.
#[derive(Debug)]
pub struct FetchedStream {
    /// URL the stream was fetched from.
    pub source: String,
    /// When the request was issued (UTC).
    pub started_at: DateTime<Utc>,
    /// Stream schema, if its message arrived.
    pub schema: Option<SchemaRef>,
    /// Record batches decoded, in stream order.
    pub batches: Vec<RecordBatch>,
    /// Response status and the bytes and chunks the decoder accepted.
    pub stats: TransferStats,
    /// Wall-clock duration of the transfer.
    pub elapsed: Duration,
    /// Why the transfer stopped early, if it did.
    pub error: Option<ArrowgetError>,
}

impl FetchedStream {
    /// Returns the number of decoded record batches.
    #[must_use]
    pub fn num_record_batches(&self) -> usize {
        self.batches.len()
    }

    /// Returns the total number of decoded rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.batches.iter().map(RecordBatch::num_rows).sum()
    }

    /// Returns true if the transfer and decode completed cleanly.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// Builds the summary report for this transfer.
    #[must_use]
    pub fn report(&self) -> TransferReport {
        let report = TransferReport::new(&self.source, self.started_at)
            .with_batches(self.num_record_batches(), self.num_rows())
            .with_bytes(self.stats.bytes)
            .with_transfer(self.stats.chunks, self.stats.status)
            .with_elapsed(self.elapsed);
        match &self.error {
            Some(e) => report.with_error(e),
            None => report,
        }
    }
}

/// Fetches an Arrow IPC stream from `url`, decoding it as it arrives.
///
/// Batches decoded before a failure are kept in the returned
/// [`FetchedStream`] alongside the error, so callers decide whether a
/// partial result is useful.
///
/// # Arguments
///
/// * `session` - The HTTP session to issue the request on
/// * `url` - Endpoint serving the IPC stream
/// * `on_chunk` - Called after each body chunk is decoded
pub async fn fetch_ipc_stream<F>(session: &FetchSession, url: &str, on_chunk: F) -> FetchedStream
where
    F: FnMut(&Bytes),
{
    let started_at = Utc::now();
    let start = Instant::now();

    let mut decoder = IpcStreamDecoder::new(CollectListener::new());
    let mut stats = TransferStats::default();
    let result = session
        .fetch_tracked(url, &mut decoder, &mut stats, on_chunk)
        .await;
    let elapsed = start.elapsed();

    let (schema, batches) = decoder.into_listener().into_parts();
    info!(
        batches = batches.len(),
        bytes = stats.bytes,
        chunks = stats.chunks,
        ?elapsed,
        ok = result.is_ok(),
        "transfer finished"
    );

    FetchedStream {
        source: url.to_string(),
        started_at,
        schema,
        batches,
        stats,
        elapsed,
        error: result.err().map(ArrowgetError::from),
    }
}
