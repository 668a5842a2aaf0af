//! arrowget CLI - Fetch an Arrow IPC stream over HTTP and decode it incrementally.

use anyhow::Result;
use arrowget_lib::url::DEFAULT_URL;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod display;
mod logging;

use display::Format;

#[derive(Parser)]
#[command(name = "arrowget")]
#[command(about = "Fetch an Arrow IPC stream over HTTP and count the decoded record batches", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a stream and report the decoded record batches (default)
    Get(GetArgs),

    /// Decode a local Arrow IPC stream file
    Inspect {
        /// Path to an Arrow IPC stream file
        path: PathBuf,

        /// Bytes fed to the decoder per step
        #[arg(long, default_value = "65536")]
        chunk_size: usize,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,

        /// Also print the stream schema
        #[arg(long)]
        schema: bool,
    },
}

/// Arguments for the `get` command.
#[derive(Args, Clone)]
pub(crate) struct GetArgs {
    /// Endpoint serving the Arrow IPC stream
    #[arg(default_value = DEFAULT_URL)]
    pub(crate) url: String,

    /// Overall transfer deadline in seconds (unlimited if unset)
    #[arg(long)]
    pub(crate) timeout: Option<u64>,

    /// Seconds without receiving data before the transfer counts as stalled
    #[arg(long, default_value = "30")]
    pub(crate) read_timeout: u64,

    /// Connection timeout in seconds
    #[arg(long, default_value = "10")]
    pub(crate) connect_timeout: u64,

    /// Follow HTTP redirects
    #[arg(long)]
    pub(crate) follow_redirects: bool,

    /// Write the received batches to this file
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Output format (defaults to the output file extension, else arrow)
    #[arg(short, long, value_enum)]
    pub(crate) format: Option<Format>,

    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl Default for GetArgs {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout: None,
            read_timeout: 30,
            connect_timeout: 10,
            follow_redirects: false,
            output: None,
            format: None,
            json: false,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // No subcommand behaves like a plain `get` against the default endpoint
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Get(GetArgs::default()));

    match command {
        Commands::Get(args) => commands::get::get(args, cli.quiet).await,
        Commands::Inspect {
            path,
            chunk_size,
            json,
            schema,
        } => commands::inspect::inspect(&path, chunk_size, json, schema),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_get_defaults() {
        let cli = Cli::try_parse_from(["arrowget", "get"]).unwrap();
        let Some(Commands::Get(args)) = cli.command else {
            panic!("expected get");
        };
        assert_eq!(args.url, DEFAULT_URL);
        assert_eq!(args.timeout, None);
        assert_eq!(args.read_timeout, 30);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_get_with_options() {
        let cli = Cli::try_parse_from([
            "arrowget",
            "-vv",
            "get",
            "http://example.com:9000/feed",
            "--timeout",
            "5",
            "-o",
            "out.parquet",
            "--json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        let Some(Commands::Get(args)) = cli.command else {
            panic!("expected get");
        };
        assert_eq!(args.url, "http://example.com:9000/feed");
        assert_eq!(args.timeout, Some(5));
        assert_eq!(args.output, Some(PathBuf::from("out.parquet")));
        assert!(args.json);
    }

    #[test]
    fn test_no_subcommand_parses() {
        let cli = Cli::try_parse_from(["arrowget"]).unwrap();
        assert!(cli.command.is_none());
    }
}
