//! Offer review CLI
//!
//! Command-line host for the review engine: renders the pre-signing review of
//! one ledger instruction as plain text.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- --account rSOURCE --balance 250 offer.json
//! cargo run -- --account rSOURCE --balance 250 --owner-count 3 \
//!     --lines lines.csv --directory directory.csv offer.json
//! RUST_LOG=debug cargo run -- --account rSOURCE offer.json
//! ```
//!
//! The report goes to stdout, logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, undecodable instruction, instruction type
//!   without a review template, etc.)

use offer_review_engine::cli;
use offer_review_engine::runner;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();
    let request = args.to_request();
    let config = args.to_runner_config();

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to start runtime: {}", e);
            process::exit(1);
        }
    };

    let mut output = std::io::stdout();
    if let Err(e) = runtime.block_on(runner::run_review(&request, &config, &mut output)) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
