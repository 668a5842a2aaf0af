//! Library for fetching and incrementally decoding Arrow IPC streams over HTTP.
//!
//! This is a facade crate that re-exports functionality from the arrowget
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```ignore
//! use arrowget_lib::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = FetchSession::with_defaults()?;
//!     let fetched = fetch_ipc_stream(&session, "http://localhost:8000", |_| {}).await;
//!
//!     println!("{}", fetched.report());
//!     if let Some(error) = fetched.error {
//!         return Err(error.into());
//!     }
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/arrowget/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export the Arrow crate so callers use the same version
pub use arrow;

// Re-export core types
pub use arrowget_types::*;

// Re-export the decoder
pub use arrowget_decode::{CollectListener, CountListener, DecodeError, IpcStreamDecoder, Listener};

// Re-export fetch functionality
#[cfg(feature = "fetch")]
pub use arrowget_fetch::{
    ByteSink, ClientConfig, FetchError, FetchSession, FetchedStream, TransferStats,
    fetch_ipc_stream, url,
};

// Re-export formatters
#[cfg(feature = "format")]
pub use arrowget_format::{
    CsvFormatter, FormatError, Formatter, IpcFormatter, IpcLayout, JsonFormatter, JsonStyle,
    OutputFormat, write_collected,
};

#[cfg(all(feature = "format", feature = "parquet"))]
pub use arrowget_format::ParquetFormatter;

/// Prelude module for convenient imports.
///
/// ```
/// use arrowget_lib::prelude::*;
/// ```
pub mod prelude {
    pub use arrowget_types::{ArrowgetError, Result, TransferReport};

    pub use arrowget_decode::{CollectListener, CountListener, IpcStreamDecoder, Listener};

    #[cfg(feature = "fetch")]
    pub use arrowget_fetch::{
        ByteSink, ClientConfig, FetchSession, FetchedStream, fetch_ipc_stream,
    };

    #[cfg(feature = "format")]
    pub use arrowget_format::{
        CsvFormatter, FormatError, Formatter, IpcFormatter, JsonFormatter, OutputFormat,
        write_collected,
    };

    #[cfg(all(feature = "format", feature = "parquet"))]
    pub use arrowget_format::ParquetFormatter;
}
