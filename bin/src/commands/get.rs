//! Get command implementation.
//!
//! Fetches an Arrow IPC stream over HTTP, decodes it as the body arrives and
//! reports how many record batches came through.

use crate::GetArgs;
use crate::display::{Format, print_report, transfer_spinner, write_batches};
use anyhow::{Context, Result};
use arrowget_lib::prelude::*;
use std::time::Duration;
use tracing::info;

/// Fetch and decode a stream from `args.url`.
///
/// The report is printed even when the transfer fails, so batches decoded
/// before the failure are still counted; the failure is then returned.
pub(crate) async fn get(args: GetArgs, quiet: bool) -> Result<()> {
    let config = ClientConfig {
        timeout: args.timeout.map(Duration::from_secs),
        read_timeout: Duration::from_secs(args.read_timeout),
        connect_timeout: Duration::from_secs(args.connect_timeout),
        follow_redirects: args.follow_redirects,
        ..Default::default()
    };
    let session = FetchSession::new(config).context("Failed to create HTTP session")?;

    let progress = transfer_spinner(&args.url, quiet);
    let fetched = fetch_ipc_stream(&session, &args.url, |chunk| {
        progress.inc(chunk.len() as u64);
    })
    .await;
    progress.finish_and_clear();
    drop(session);

    print_report(&fetched.report(), args.json)?;

    if let Some(error) = fetched.error {
        return Err(
            anyhow::Error::new(error).context(format!("Transfer from {} failed", args.url))
        );
    }

    if let Some(output) = args.output {
        let format = args.format.unwrap_or_else(|| Format::from_path(&output));
        write_batches(fetched.schema.as_ref(), &fetched.batches, &output, format)?;
        info!(path = %output.display(), "wrote {} batches", fetched.batches.len());
        if !quiet {
            eprintln!("Output written to: {}", output.display());
        }
    }

    Ok(())
}
