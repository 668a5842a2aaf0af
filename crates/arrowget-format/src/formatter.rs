//! Output format abstraction.

use arrow::datatypes::SchemaRef;
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use std::io::Write;
use thiserror::Error;

/// Output format identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// CSV format.
    Csv,
    /// JSON array format.
    Json,
    /// Newline-delimited JSON format.
    Ndjson,
    /// Arrow IPC file format.
    #[default]
    Arrow,
    /// Arrow IPC stream format.
    ArrowStream,
    /// Apache Parquet format.
    Parquet,
}

impl OutputFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Ndjson => "ndjson",
            Self::Arrow => "arrow",
            Self::ArrowStream => "arrows",
            Self::Parquet => "parquet",
        }
    }

    /// Returns all available formats.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Csv,
            Self::Json,
            Self::Ndjson,
            Self::Arrow,
            Self::ArrowStream,
            Self::Parquet,
        ]
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            "arrow" | "feather" | "ipc" => Ok(Self::Arrow),
            "arrows" | "stream" => Ok(Self::ArrowStream),
            "parquet" | "pq" => Ok(Self::Parquet),
            _ => Err(FormatError::UnknownFormat(s.to_string())),
        }
    }
}

/// Errors that can occur during formatting.
#[derive(Error, Debug)]
pub enum FormatError {
    /// Unknown output format.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// No schema was received, so there is nothing to describe the columns.
    #[error("No schema available to write")]
    MissingSchema,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Arrow encoding error.
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Parquet error.
    #[error("Parquet error: {0}")]
    Parquet(String),
}

/// Trait for output formatters.
pub trait Formatter: Send + Sync {
    /// Writes record batches sharing `schema` to the output.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or writing fails.
    fn write_batches<W: Write + Send>(
        &self,
        schema: &SchemaRef,
        batches: &[RecordBatch],
        writer: W,
    ) -> Result<(), FormatError>;

    /// Returns the file extension for this format.
    fn extension(&self) -> &str;
}

/// Writes the batches collected from a stream.
///
/// The destination is opened only once a schema is known, so a stream that
/// never delivered one leaves nothing behind.
///
/// # Errors
///
/// Returns [`FormatError::MissingSchema`] if `schema` is `None`, or an error
/// if opening the destination, encoding or writing fails.
pub fn write_collected<F, W, O>(
    formatter: &F,
    schema: Option<&SchemaRef>,
    batches: &[RecordBatch],
    open: O,
) -> Result<(), FormatError>
where
    F: Formatter,
    W: Write + Send,
    O: FnOnce() -> std::io::Result<W>,
{
    let schema = schema.ok_or(FormatError::MissingSchema)?;
    let writer = open()?;
    formatter.write_batches(schema, batches, writer)
}
