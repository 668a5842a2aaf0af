//! Output writers for record batches received by arrowget.
//!
//! This crate provides formatters for persisting decoded record batches:
//!
//! - [`CsvFormatter`] - CSV format
//! - [`JsonFormatter`] - JSON array or NDJSON format
//! - [`IpcFormatter`] - Arrow IPC file or stream format
//! - [`ParquetFormatter`] - Apache Parquet columnar format

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/arrowget/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod csv;
mod formatter;
mod ipc;
mod json;

#[cfg(feature = "parquet")]
mod parquet;

#[cfg(test)]
mod test_util;

pub use crate::csv::CsvFormatter;
pub use formatter::{FormatError, Formatter, OutputFormat, write_collected};
pub use ipc::{IpcFormatter, IpcLayout};
pub use json::{JsonFormatter, JsonStyle};

#[cfg(feature = "parquet")]
pub use crate::parquet::ParquetFormatter;
