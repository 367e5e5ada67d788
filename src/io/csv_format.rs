//! CSV format handling for account snapshot inputs
//!
//! This module centralizes the CSV formats the runner reads:
//! - trust lines of the signing account: `counterparty,currency,balance,nft`
//! - the issuer directory: `account,name,avatar,transfer_rate`
//!
//! All conversions are pure (no I/O) for easy testing.

use crate::core::DirectoryEntry;
use crate::io::csv_reader::CsvRow;
use crate::types::{AccountId, Currency, LedgerValue, ReviewError, TrustLine};
use serde::Deserialize;

/// Trust line row
///
/// `nft` may be left empty, meaning `false`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TrustLineRow {
    pub counterparty: String,
    pub currency: String,
    pub balance: String,
    pub nft: Option<bool>,
}

impl CsvRow for TrustLineRow {
    type Output = TrustLine;
    const KIND: &'static str = "trust_line";

    fn convert(self) -> Result<TrustLine, ReviewError> {
        Ok(TrustLine {
            counterparty: AccountId::parse(&self.counterparty)?,
            currency: Currency::parse(&self.currency)?,
            balance: LedgerValue::parse(&self.balance)?,
            is_nft: self.nft.unwrap_or(false),
        })
    }
}

/// Issuer directory row
///
/// Every column but `account` may be left empty.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DirectoryRow {
    pub account: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
    pub transfer_rate: Option<u32>,
}

impl CsvRow for DirectoryRow {
    type Output = DirectoryEntry;
    const KIND: &'static str = "directory_entry";

    fn convert(self) -> Result<DirectoryEntry, ReviewError> {
        Ok(DirectoryEntry {
            account: AccountId::parse(&self.account)?,
            name: self.name.filter(|name| !name.is_empty()),
            avatar: self.avatar.filter(|avatar| !avatar.is_empty()),
            transfer_rate: self.transfer_rate,
        })
    }
}
