//! HTTP session that streams a response body into a [`ByteSink`].

use bytes::Bytes;
use futures::StreamExt;
use reqwest::{Client, redirect};
use std::pin::pin;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::{ByteSink, url::parse_url};

/// Configuration for a fetch session.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Overall deadline for the whole transfer, body included. Unset by
    /// default so long-running feeds are not cut off.
    pub timeout: Option<Duration>,
    /// Longest silence tolerated between reads before the transfer is
    /// treated as stalled.
    pub read_timeout: Duration,
    /// Connection establishment timeout.
    pub connect_timeout: Duration,
    /// Whether to follow HTTP redirects.
    pub follow_redirects: bool,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: None,
            read_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            follow_redirects: false,
            user_agent: format!("arrowget/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur during a transfer.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The transfer did not complete within the configured timeout.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Server returned a non-success status.
    #[error("Server returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The endpoint URL is not usable.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The sink rejected a chunk; the transfer was aborted.
    #[error("Consumer rejected body at byte {offset}: {source}")]
    Sink {
        /// Body offset of the rejected chunk.
        offset: u64,
        /// Error reported by the sink.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The sink accepted only part of a chunk; the transfer was aborted.
    #[error("Consumer accepted {accepted} of {offered} bytes at byte {offset}")]
    ShortWrite {
        /// Body offset of the chunk.
        offset: u64,
        /// Bytes the sink took.
        accepted: usize,
        /// Bytes offered.
        offered: usize,
    },
}

/// Counters for a transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferStats {
    /// HTTP status code of the response, once headers arrived.
    pub status: Option<u16>,
    /// Body bytes forwarded to the sink.
    pub bytes: u64,
    /// Number of chunks forwarded to the sink.
    pub chunks: u64,
}

/// An HTTP client context for streaming transfers.
///
/// A session owns its connection pool; dropping it releases every
/// resource. Nothing is shared process-wide.
#[derive(Debug, Clone)]
pub struct FetchSession {
    client: Client,
    config: ClientConfig,
}

impl FetchSession {
    /// Creates a new session with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let policy = if config.follow_redirects {
            redirect::Policy::default()
        } else {
            redirect::Policy::none()
        };

        let mut builder = Client::builder()
            .read_timeout(config.read_timeout)
            .connect_timeout(config.connect_timeout)
            .tcp_nodelay(true)
            .redirect(policy)
            .user_agent(&config.user_agent);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder.build()?;
        Ok(Self { client, config })
    }

    /// Creates a session with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, FetchError> {
        Self::new(ClientConfig::default())
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Issues a GET to `url` and pushes the response body into `sink`.
    ///
    /// Chunks are forwarded strictly in arrival order. `on_chunk` runs after
    /// each chunk the sink accepted, which is where progress reporting hooks
    /// in. Once the body is complete the sink is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid, the request fails or times
    /// out, the server answers with a non-success status, or the sink
    /// rejects a chunk. Chunks accepted before the failure stay with the
    /// sink.
    pub async fn fetch_into<S, F>(
        &self,
        url: &str,
        sink: &mut S,
        on_chunk: F,
    ) -> Result<TransferStats, FetchError>
    where
        S: ByteSink + ?Sized,
        F: FnMut(&Bytes),
    {
        let mut stats = TransferStats::default();
        self.fetch_tracked(url, sink, &mut stats, on_chunk).await?;
        Ok(stats)
    }

    /// Same as [`fetch_into`](Self::fetch_into), but updates `stats` as the
    /// transfer proceeds so the counters survive a failure.
    ///
    /// # Errors
    ///
    /// See [`fetch_into`](Self::fetch_into).
    pub async fn fetch_tracked<S, F>(
        &self,
        url: &str,
        sink: &mut S,
        stats: &mut TransferStats,
        mut on_chunk: F,
    ) -> Result<(), FetchError>
    where
        S: ByteSink + ?Sized,
        F: FnMut(&Bytes),
    {
        let url = parse_url(url)?;
        debug!(%url, "sending request");
        let start = Instant::now();

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify(e, start))?;

        let status = response.status().as_u16();
        stats.status = Some(status);
        debug!(status, "received response");
        if !response.status().is_success() {
            return Err(FetchError::Status { status });
        }

        let mut body = pin!(response.bytes_stream());

        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| self.classify(e, start))?;
            let offered = chunk.len();
            let offset = stats.bytes;
            trace!(offset, len = offered, "forwarding chunk");

            let accepted = sink.accept(chunk.clone()).map_err(|e| {
                warn!(offset, error = %e, "consumer rejected chunk, aborting transfer");
                FetchError::Sink {
                    offset,
                    source: Box::new(e),
                }
            })?;
            if accepted < offered {
                warn!(offset, accepted, offered, "short write, aborting transfer");
                return Err(FetchError::ShortWrite {
                    offset,
                    accepted,
                    offered,
                });
            }

            stats.bytes += offered as u64;
            stats.chunks += 1;
            on_chunk(&chunk);
        }

        sink.close().map_err(|e| FetchError::Sink {
            offset: stats.bytes,
            source: Box::new(e),
        })?;

        debug!(bytes = stats.bytes, chunks = stats.chunks, "transfer complete");
        Ok(())
    }

    /// Maps timeouts onto [`FetchError::Timeout`], naming the limit that
    /// fired.
    fn classify(&self, error: reqwest::Error, start: Instant) -> FetchError {
        if !error.is_timeout() {
            return FetchError::Http(error);
        }
        let limit = match self.config.timeout {
            Some(total) if start.elapsed() >= total => total,
            _ if error.is_connect() => self.config.connect_timeout,
            _ => self.config.read_timeout,
        };
        FetchError::Timeout(limit)
    }
}
