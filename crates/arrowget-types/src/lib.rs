//! Core types for the arrowget Arrow IPC stream client.
//!
//! This crate provides the data structures shared across the workspace:
//!
//! - [`ArrowgetError`] - Umbrella error for fetch and decode failures
//! - [`TransferReport`] - Summary of a single transfer (batches, rows, timing)

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/arrowget/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod report;

pub use error::{ArrowgetError, Result};
pub use report::TransferReport;
