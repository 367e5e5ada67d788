//! Review runner
//!
//! Drives one complete review from files to a plain-text report, standing in
//! for the host UI.
//!
//! # Pipeline
//!
//! ```text
//! instruction.json ──► read_instruction ─┐
//! lines.csv ─────────► read_trust_lines ─┼─► AccountSnapshot ─► dispatch ─► ActiveTemplate
//! directory.csv ─────► read_directory ───┘                                      │
//!        └──► CachingEnrichment(DirectoryEnrichment) ◄── lookups ───────────────┤
//!                                                                               ▼
//!                                           settle (bounded) ─► render ─► write_review_report
//! ```
//!
//! Lookups still pending when the settle timeout expires are left unresolved
//! and render as loading.

use crate::core::{
    dispatch, CachingEnrichment, DirectoryEnrichment, EnrichmentService, ReviewTemplate,
};
use crate::io::{read_directory, read_instruction, read_trust_lines, write_review_report};
use crate::types::{AccountId, AccountSnapshot, LedgerValue, ReserveConfig, ReviewError};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Default bound on waiting for enrichment lookups
pub const DEFAULT_SETTLE_TIMEOUT: Duration = Duration::from_millis(5000);

/// Configuration of the review runner
#[derive(Clone, Debug, PartialEq)]
pub struct RunnerConfig {
    /// Reserve requirements used to derive the available native balance
    pub reserve: ReserveConfig,
    /// How long to wait for enrichment before rendering anyway
    pub settle_timeout: Duration,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            reserve: ReserveConfig::default(),
            settle_timeout: DEFAULT_SETTLE_TIMEOUT,
        }
    }
}

impl RunnerConfig {
    /// Create a RunnerConfig with custom values
    ///
    /// A zero settle timeout falls back to the default with a warning.
    pub fn new(reserve: ReserveConfig, settle_timeout: Duration) -> Self {
        let settle_timeout = if settle_timeout.is_zero() {
            warn!(
                default_ms = DEFAULT_SETTLE_TIMEOUT.as_millis() as u64,
                "settle timeout must be greater than 0, using default"
            );
            DEFAULT_SETTLE_TIMEOUT
        } else {
            settle_timeout
        };

        Self {
            reserve,
            settle_timeout,
        }
    }
}

/// Inputs of one review
#[derive(Clone, Debug, PartialEq)]
pub struct ReviewRequest {
    /// Ledger JSON of the instruction to review
    pub instruction_path: PathBuf,
    /// The signing account
    pub account: AccountId,
    /// Total native balance of the signing account, in whole units
    pub balance: LedgerValue,
    /// Number of ledger objects the signing account owns
    pub owner_count: u32,
    /// Trust lines of the signing account
    pub lines_path: Option<PathBuf>,
    /// Issuer directory backing enrichment
    pub directory_path: Option<PathBuf>,
}

/// Run one review and write its report to `output`
///
/// # Errors
///
/// Input files that cannot be read, an instruction that cannot be decoded,
/// an instruction type without a review template, and output write failures.
/// Enrichment failures are never errors: they render as absent values.
pub async fn run_review(
    request: &ReviewRequest,
    config: &RunnerConfig,
    output: &mut dyn Write,
) -> Result<(), ReviewError> {
    let instruction = read_instruction(&request.instruction_path).await?;

    if instruction.account() != &request.account {
        warn!(
            instruction_account = %instruction.account(),
            snapshot_account = %request.account,
            "instruction is signed by a different account than the snapshot"
        );
    }

    let lines = match &request.lines_path {
        Some(path) => read_trust_lines(path).await?,
        None => Vec::new(),
    };
    let directory = match &request.directory_path {
        Some(path) => read_directory(path).await?,
        None => Vec::new(),
    };

    let snapshot = AccountSnapshot::from_ledger_balance(
        request.account.clone(),
        &request.balance,
        request.owner_count,
        lines,
        &config.reserve,
    );
    let service: Arc<dyn EnrichmentService> =
        Arc::new(CachingEnrichment::new(DirectoryEnrichment::new(directory)));

    let tx_type = instruction.instruction_type();
    let mut template = dispatch(instruction, &snapshot, service)?;

    let session = template.session_mut();
    if tokio::time::timeout(config.settle_timeout, session.settle())
        .await
        .is_err()
    {
        warn!(
            timeout_ms = config.settle_timeout.as_millis() as u64,
            "enrichment did not settle in time, rendering partial review"
        );
    }
    session.deactivate();

    info!(%tx_type, settled = template.state().is_settled(), "review rendered");
    write_review_report(tx_type, &template.render(), output)
}
