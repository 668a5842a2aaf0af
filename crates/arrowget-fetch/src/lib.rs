//! HTTP streaming transfer for arrowget.
//!
//! This crate provides the download side of the pipeline:
//!
//! - [`url::parse_url`] - Validates the endpoint URL
//! - [`FetchSession`] - HTTP client session with stall detection
//! - [`ByteSink`] - Consumer of body chunks, in arrival order
//! - [`fetch_ipc_stream`] - GET an Arrow IPC stream and decode it incrementally

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/arrowget/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod client;
mod sink;
mod stream;
pub mod url;

#[cfg(test)]
mod test_server;

pub use client::{ClientConfig, FetchError, FetchSession, TransferStats};
pub use sink::ByteSink;
pub use stream::{FetchedStream, fetch_ipc_stream};
