//! Push-based Arrow IPC stream decoder.

use arrow::buffer::Buffer;
use arrow::datatypes::SchemaRef;
use arrow::error::ArrowError;
use arrow::ipc::reader::StreamDecoder;
use bytes::Bytes;
use thiserror::Error;
use tracing::{debug, trace};

use crate::{CollectListener, Listener};

/// Errors that can occur while decoding an IPC stream.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The stream bytes could not be decoded.
    #[error("Malformed IPC stream at byte {offset}: {source}")]
    Malformed {
        /// Offset of the chunk that failed, from the start of the stream.
        offset: u64,
        /// Underlying Arrow error.
        #[source]
        source: ArrowError,
    },

    /// The stream ended in the middle of a message.
    #[error("IPC stream truncated after {0} bytes")]
    Truncated(u64),

    /// Bytes were fed after [`IpcStreamDecoder::finish`].
    #[error("Decoder already finished")]
    Finished,

    /// The listener rejected a decoded message.
    #[error("Listener error: {0}")]
    Listener(String),
}

/// Incremental decoder for the Arrow IPC streaming format.
///
/// Bytes may be split at arbitrary boundaries; partial messages are held
/// until the rest arrives. Decoded messages go to the listener `L` in the
/// order they appear in the stream.
///
/// # Example
///
/// ```
/// use arrowget_decode::{CollectListener, IpcStreamDecoder};
///
/// let mut decoder = IpcStreamDecoder::new(CollectListener::new());
/// decoder.finish().unwrap();
/// assert_eq!(decoder.listener().num_record_batches(), 0);
/// ```
#[derive(Debug)]
pub struct IpcStreamDecoder<L = CollectListener> {
    inner: StreamDecoder,
    listener: L,
    schema: Option<SchemaRef>,
    bytes_consumed: u64,
    finished: bool,
}

impl<L: Listener> IpcStreamDecoder<L> {
    /// Creates a decoder that reports to `listener`.
    #[must_use]
    pub fn new(listener: L) -> Self {
        Self {
            inner: StreamDecoder::new(),
            listener,
            schema: None,
            bytes_consumed: 0,
            finished: false,
        }
    }

    /// Feeds one chunk of stream bytes to the decoder.
    ///
    /// Every message completed by this chunk is delivered to the listener
    /// before this returns, so batches decoded ahead of a malformed segment
    /// are still observed.
    ///
    /// Returns the number of bytes accepted, which is always the full chunk
    /// length on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes are not a valid IPC stream, if the
    /// listener fails, or if the decoder has already been finished.
    pub fn consume(&mut self, chunk: Bytes) -> Result<usize, DecodeError> {
        if self.finished {
            return Err(DecodeError::Finished);
        }

        let len = chunk.len();
        let offset = self.bytes_consumed;
        let mut buffer = Buffer::from(chunk);

        while !buffer.is_empty() {
            let decoded = self
                .inner
                .decode(&mut buffer)
                .map_err(|source| DecodeError::Malformed { offset, source })?;

            if self.schema.is_none()
                && let Some(schema) = self.inner.schema()
            {
                debug!(fields = schema.fields().len(), "decoded stream schema");
                self.listener.on_schema(&schema)?;
                self.schema = Some(schema);
            }

            if let Some(batch) = decoded {
                trace!(rows = batch.num_rows(), "decoded record batch");
                self.listener.on_record_batch(batch)?;
            }
        }

        self.bytes_consumed += len as u64;
        Ok(len)
    }

    /// Signals the end of input.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Truncated`] if the input stopped in the middle
    /// of a message. An empty stream finishes cleanly.
    pub fn finish(&mut self) -> Result<(), DecodeError> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.inner.finish().map_err(|e| {
            debug!(error = %e, "stream ended mid-message");
            DecodeError::Truncated(self.bytes_consumed)
        })
    }

    /// Returns the schema, once its message has been decoded.
    #[must_use]
    pub const fn schema(&self) -> Option<&SchemaRef> {
        self.schema.as_ref()
    }

    /// Returns the total number of bytes accepted.
    #[must_use]
    pub const fn bytes_consumed(&self) -> u64 {
        self.bytes_consumed
    }

    /// Returns true once [`finish`](Self::finish) has been called.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Returns the listener.
    #[must_use]
    pub const fn listener(&self) -> &L {
        &self.listener
    }

    /// Consumes the decoder, returning the listener.
    #[must_use]
    pub fn into_listener(self) -> L {
        self.listener
    }
}
