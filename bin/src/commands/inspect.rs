//! Inspect command implementation.
//!
//! Runs a local Arrow IPC stream file through the same incremental decoder
//! used for HTTP bodies, reading it in fixed-size steps.

use crate::display::{print_report, print_schema};
use anyhow::{Context, Result};
use arrowget_lib::prelude::*;
use bytes::Bytes;
use chrono::Utc;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

/// Decode the stream in `path` and report the record batches found.
pub(crate) fn inspect(path: &Path, chunk_size: usize, json: bool, show_schema: bool) -> Result<()> {
    let mut file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;

    let started_at = Utc::now();
    let start = Instant::now();
    let mut decoder = IpcStreamDecoder::new(CountListener::new());
    let outcome = feed(&mut file, &mut decoder, chunk_size);
    let elapsed = start.elapsed();

    let counts = decoder.listener();
    let mut report = TransferReport::new(path.display().to_string(), started_at)
        .with_batches(counts.num_record_batches(), counts.num_rows())
        .with_bytes(decoder.bytes_consumed())
        .with_elapsed(elapsed);
    if let Err(e) = &outcome {
        report = report.with_error(format!("{e:#}"));
    }

    print_report(&report, json)?;
    if show_schema
        && !json
        && let Some(schema) = decoder.schema()
    {
        print_schema(schema);
    }

    outcome.with_context(|| format!("Failed to decode {}", path.display()))
}

/// Pushes everything `reader` yields into `decoder`, then finishes it.
fn feed<R: Read, L: Listener>(
    reader: &mut R,
    decoder: &mut IpcStreamDecoder<L>,
    chunk_size: usize,
) -> Result<()> {
    let mut buf = vec![0u8; chunk_size.max(1)];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        decoder.consume(Bytes::copy_from_slice(&buf[..n]))?;
    }
    decoder.finish()?;
    Ok(())
}
