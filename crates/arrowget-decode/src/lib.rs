//! Incremental Arrow IPC stream decoding for arrowget.
//!
//! This crate wraps the Arrow IPC [`StreamDecoder`](arrow::ipc::reader::StreamDecoder)
//! in a push API:
//!
//! - [`IpcStreamDecoder`] - Accepts byte chunks and emits decoded messages
//! - [`Listener`] - Observer notified of the schema and each record batch
//! - [`CollectListener`] - Keeps every decoded batch plus running counts
//! - [`CountListener`] - Counts batches and rows without retaining them

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/arrowget/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod decoder;
mod listener;

pub use decoder::{DecodeError, IpcStreamDecoder};
pub use listener::{CollectListener, CountListener, Listener};
