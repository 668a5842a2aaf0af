//! Display utilities and output formatting for the arrowget CLI.

use anyhow::{Context, Result};
use arrowget_lib::arrow::datatypes::SchemaRef;
use arrowget_lib::arrow::record_batch::RecordBatch;
use arrowget_lib::prelude::*;
use clap::ValueEnum;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Duration;

/// Output format for received batches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    Csv,
    Json,
    Ndjson,
    Arrow,
    Arrows,
    Parquet,
}

impl Format {
    /// Picks a format from the output path's extension, defaulting to Arrow IPC.
    pub(crate) fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse::<OutputFormat>().ok())
            .map_or(Self::Arrow, Self::from)
    }
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => Self::Csv,
            OutputFormat::Json => Self::Json,
            OutputFormat::Ndjson => Self::Ndjson,
            OutputFormat::Arrow => Self::Arrow,
            OutputFormat::ArrowStream => Self::Arrows,
            OutputFormat::Parquet => Self::Parquet,
        }
    }
}

/// Creates the byte counter shown while the body streams in.
pub(crate) fn transfer_spinner(url: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {bytes} received ({bytes_per_sec}) {msg}")
            .expect("Invalid progress template"),
    );
    pb.set_message(url.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Prints the transfer report: two plain lines, or one JSON document.
pub(crate) fn print_report(report: &TransferReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}

/// Prints one line per schema field.
pub(crate) fn print_schema(schema: &SchemaRef) {
    println!("Schema:");
    for field in schema.fields() {
        let nullable = if field.is_nullable() { "" } else { " not null" };
        println!("  {}: {}{}", field.name(), field.data_type(), nullable);
    }
}

/// Write record batches to a file in the specified format.
///
/// Nothing is created when the stream carried no schema.
pub(crate) fn write_batches(
    schema: Option<&SchemaRef>,
    batches: &[RecordBatch],
    output: &Path,
    format: Format,
) -> Result<()> {
    let open = || File::create(output).map(BufWriter::new);

    let written = match format {
        Format::Csv => write_collected(&CsvFormatter::new(), schema, batches, open),
        Format::Json => write_collected(&JsonFormatter::new(), schema, batches, open),
        Format::Ndjson => write_collected(&JsonFormatter::ndjson(), schema, batches, open),
        Format::Arrow => write_collected(&IpcFormatter::new(), schema, batches, open),
        Format::Arrows => write_collected(&IpcFormatter::stream(), schema, batches, open),
        #[cfg(feature = "parquet")]
        Format::Parquet => write_collected(&ParquetFormatter::new(), schema, batches, open),
        #[cfg(not(feature = "parquet"))]
        Format::Parquet => anyhow::bail!("Parquet support not compiled in"),
    };

    written.with_context(|| format!("Failed to write {}", output.display()))
}
