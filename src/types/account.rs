//! Account-related types for the review engine
//!
//! This module defines the read-only view of the signing account that a
//! review is evaluated against: its trust lines and its spendable native
//! balance.

use super::amount::{AccountId, Currency, LedgerValue};
use bigdecimal::BigDecimal;
use tracing::warn;

/// Holder's balance record for an issued asset
///
/// Scoped to one counterparty (the issuer) and one currency code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustLine {
    /// The issuing account on the other side of the line
    pub counterparty: AccountId,

    /// Currency held on this line
    pub currency: Currency,

    /// Balance from the holder's perspective
    pub balance: LedgerValue,

    /// Whether the line holds a non-fungible token representation
    ///
    /// Full-balance semantics do not apply to these lines.
    pub is_nft: bool,
}

/// Reserve requirements of the ledger
///
/// The base reserve is locked by every account; the owner reserve is locked
/// once per object the account owns (offers, trust lines, escrows...).
#[derive(Clone, Debug, PartialEq)]
pub struct ReserveConfig {
    /// Native units locked by every account
    pub base_reserve: LedgerValue,
    /// Native units locked per owned ledger object
    pub owner_reserve: LedgerValue,
}

impl Default for ReserveConfig {
    fn default() -> Self {
        Self {
            base_reserve: LedgerValue::from_decimal(BigDecimal::from(10)),
            owner_reserve: LedgerValue::from_decimal(BigDecimal::from(2)),
        }
    }
}

impl ReserveConfig {
    /// Create a ReserveConfig with custom values
    ///
    /// Negative reserves are rejected and replaced by the defaults.
    pub fn new(base_reserve: LedgerValue, owner_reserve: LedgerValue) -> Self {
        let default = Self::default();

        let base_reserve = if base_reserve.is_negative() {
            warn!(
                base_reserve = %base_reserve,
                default = %default.base_reserve,
                "invalid base reserve, using default"
            );
            default.base_reserve
        } else {
            base_reserve
        };

        let owner_reserve = if owner_reserve.is_negative() {
            warn!(
                owner_reserve = %owner_reserve,
                default = %default.owner_reserve,
                "invalid owner reserve, using default"
            );
            default.owner_reserve
        } else {
            owner_reserve
        };

        Self {
            base_reserve,
            owner_reserve,
        }
    }

    /// Total reserve locked by an account owning `owner_count` objects
    pub fn total_reserve(&self, owner_count: u32) -> BigDecimal {
        self.base_reserve.as_decimal()
            + self.owner_reserve.as_decimal() * BigDecimal::from(owner_count)
    }
}

/// Snapshot of the signing account at review time
///
/// Supplied by the caller once per review session and never refreshed or
/// mutated by the review pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountSnapshot {
    /// The account that will sign the instruction
    pub account: AccountId,

    /// Trust lines held by the account, in ledger order
    pub lines: Vec<TrustLine>,

    /// Native balance that can actually be spent
    ///
    /// Already excludes the reserve.
    pub available_native_balance: LedgerValue,
}

impl AccountSnapshot {
    /// Create a snapshot from an already-computed available balance
    pub fn new(
        account: AccountId,
        lines: Vec<TrustLine>,
        available_native_balance: LedgerValue,
    ) -> Self {
        AccountSnapshot {
            account,
            lines,
            available_native_balance,
        }
    }

    /// Create a snapshot from the raw ledger balance
    ///
    /// The available balance is `balance - reserve`, floored at zero.
    pub fn from_ledger_balance(
        account: AccountId,
        balance: &LedgerValue,
        owner_count: u32,
        lines: Vec<TrustLine>,
        reserve: &ReserveConfig,
    ) -> Self {
        let available = balance.as_decimal() - reserve.total_reserve(owner_count);
        let available = if available < BigDecimal::from(0) {
            LedgerValue::zero()
        } else {
            LedgerValue::from_decimal(available)
        };

        AccountSnapshot::new(account, lines, available)
    }

    /// Find the line held with `issuer` for `currency`
    ///
    /// Returns the first match in ledger order.
    pub fn find_line(&self, issuer: &AccountId, currency: &Currency) -> Option<&TrustLine> {
        self.lines
            .iter()
            .find(|line| &line.counterparty == issuer && &line.currency == currency)
    }
}
