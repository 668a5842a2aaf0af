//! Consumers of HTTP body chunks.

use arrowget_decode::{DecodeError, IpcStreamDecoder, Listener};
use bytes::Bytes;
use std::convert::Infallible;

/// A consumer that body chunks are pushed into as they arrive.
///
/// Chunks are delivered one at a time, in the order the response body
/// yields them. Returning an error, or accepting fewer bytes than offered,
/// aborts the transfer.
pub trait ByteSink {
    /// Error produced when a chunk is rejected.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Accepts one chunk, returning the number of bytes taken.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot make use of the chunk.
    fn accept(&mut self, chunk: Bytes) -> Result<usize, Self::Error>;

    /// Called once after the last chunk of a complete body.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink considers the input incomplete.
    fn close(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    type Error = S::Error;

    fn accept(&mut self, chunk: Bytes) -> Result<usize, Self::Error> {
        (**self).accept(chunk)
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        (**self).close()
    }
}

impl<L: Listener> ByteSink for IpcStreamDecoder<L> {
    type Error = DecodeError;

    fn accept(&mut self, chunk: Bytes) -> Result<usize, Self::Error> {
        self.consume(chunk)
    }

    fn close(&mut self) -> Result<(), Self::Error> {
        self.finish()
    }
}

/// Collects the raw body verbatim.
impl ByteSink for Vec<u8> {
    type Error = Infallible;

    fn accept(&mut self, chunk: Bytes) -> Result<usize, Self::Error> {
        self.extend_from_slice(&chunk);
        Ok(chunk.len())
    }
}
