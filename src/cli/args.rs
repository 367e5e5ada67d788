use crate::runner::{ReviewRequest, RunnerConfig};
use crate::types::{AccountId, LedgerValue, ReserveConfig};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Review a ledger instruction before signing
#[derive(Parser, Debug)]
#[command(name = "offer-review")]
#[command(about = "Review a ledger instruction before signing", long_about = None)]
pub struct CliArgs {
    /// Instruction JSON file path
    #[arg(value_name = "INSTRUCTION", help = "Path to the instruction JSON file")]
    pub instruction_file: PathBuf,

    /// Signing account
    #[arg(
        long = "account",
        value_name = "ACCOUNT",
        help = "Address of the account signing the instruction"
    )]
    pub account: AccountId,

    /// Total native balance of the signing account
    #[arg(
        long = "balance",
        value_name = "XRP",
        default_value = "0",
        help = "Total native balance of the signing account, in XRP"
    )]
    pub balance: LedgerValue,

    /// Owned ledger objects
    #[arg(
        long = "owner-count",
        value_name = "COUNT",
        default_value_t = 0,
        help = "Number of ledger objects owned by the signing account"
    )]
    pub owner_count: u32,

    /// Trust line CSV file path
    #[arg(
        long = "lines",
        value_name = "CSV",
        help = "Trust lines of the signing account (counterparty,currency,balance,nft)"
    )]
    pub lines_file: Option<PathBuf>,

    /// Issuer directory CSV file path
    #[arg(
        long = "directory",
        value_name = "CSV",
        help = "Issuer directory (account,name,avatar,transfer_rate)"
    )]
    pub directory_file: Option<PathBuf>,

    #[arg(
        long = "base-reserve",
        value_name = "XRP",
        help = "Base account reserve in XRP (default: 10)"
    )]
    pub base_reserve: Option<LedgerValue>,

    #[arg(
        long = "owner-reserve",
        value_name = "XRP",
        help = "Reserve per owned object in XRP (default: 2)"
    )]
    pub owner_reserve: Option<LedgerValue>,

    #[arg(
        long = "lookup-timeout-ms",
        value_name = "MS",
        help = "Time to wait for issuer lookups before rendering (default: 5000)"
    )]
    pub lookup_timeout_ms: Option<u64>,
}

impl CliArgs {
    /// Create a ReviewRequest from CLI arguments
    pub fn to_request(&self) -> ReviewRequest {
        ReviewRequest {
            instruction_path: self.instruction_file.clone(),
            account: self.account.clone(),
            balance: self.balance.clone(),
            owner_count: self.owner_count,
            lines_path: self.lines_file.clone(),
            directory_path: self.directory_file.clone(),
        }
    }

    /// Create a RunnerConfig from CLI arguments
    ///
    /// Values not given on the command line use the defaults. Invalid values
    /// fall back to the defaults with a logged warning.
    pub fn to_runner_config(&self) -> RunnerConfig {
        let default = RunnerConfig::default();

        let reserve = if self.base_reserve.is_some() || self.owner_reserve.is_some() {
            ReserveConfig::new(
                self.base_reserve
                    .clone()
                    .unwrap_or(default.reserve.base_reserve.clone()),
                self.owner_reserve
                    .clone()
                    .unwrap_or(default.reserve.owner_reserve.clone()),
            )
        } else {
            default.reserve.clone()
        };

        let settle_timeout = self
            .lookup_timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(default.settle_timeout);

        RunnerConfig::new(reserve, settle_timeout)
    }
}
