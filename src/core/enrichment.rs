//! Enrichment service implementations
//!
//! - `DirectoryEnrichment`: answers lookups from an in-memory issuer
//!   directory (loaded from CSV by the `io` module)
//! - `CachingEnrichment`: wraps any service and remembers successful answers
//!   per account, so that repeated reviews of the same issuer reuse them
//!
//! Both implement [`EnrichmentService`].

use crate::core::traits::EnrichmentService;
use crate::types::{AccountId, IssuerProfile, LookupError};
use async_trait::async_trait;
use dashmap::DashMap;
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Ledger transfer rate meaning "no fee"
pub const TRANSFER_RATE_PARITY: u32 = 1_000_000_000;

/// Highest transfer rate the ledger accepts (100% fee)
pub const TRANSFER_RATE_MAX: u32 = 2_000_000_000;

/// Convert a ledger transfer rate into a fee percentage
///
/// The rate is a billionths multiplier: `1_002_000_000` charges 0.2%.
/// `0` and `1_000_000_000` both mean no fee. Rates outside
/// `1_000_000_000..=2_000_000_000` are rejected.
pub fn transfer_rate_to_percent(rate: u32) -> Result<Decimal, LookupError> {
    if rate == 0 || rate == TRANSFER_RATE_PARITY {
        return Ok(Decimal::ZERO);
    }

    if !(TRANSFER_RATE_PARITY..=TRANSFER_RATE_MAX).contains(&rate) {
        return Err(LookupError::Malformed(format!(
            "transfer rate {} out of range",
            rate
        )));
    }

    // (rate - parity) / 1e9 * 100
    Ok(Decimal::new(i64::from(rate - TRANSFER_RATE_PARITY), 7).normalize())
}

/// One row of the issuer directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub account: AccountId,
    pub name: Option<String>,
    pub avatar: Option<String>,
    /// Raw ledger transfer rate, if the issuer sets one
    pub transfer_rate: Option<u32>,
}

/// Enrichment backed by a static issuer directory
///
/// Accounts absent from the directory resolve to no profile and no fee.
#[derive(Debug, Default)]
pub struct DirectoryEnrichment {
    entries: HashMap<AccountId, DirectoryEntry>,
}

impl DirectoryEnrichment {
    /// Build the directory; later entries replace earlier ones
    pub fn new(entries: impl IntoIterator<Item = DirectoryEntry>) -> Self {
        DirectoryEnrichment {
            entries: entries
                .into_iter()
                .map(|entry| (entry.account.clone(), entry))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl EnrichmentService for DirectoryEnrichment {
    async fn resolve_issuer_profile(
        &self,
        account: &AccountId,
    ) -> Result<Option<IssuerProfile>, LookupError> {
        Ok(self.entries.get(account).and_then(|entry| {
            entry.name.as_ref().map(|name| IssuerProfile {
                name: name.clone(),
                avatar: entry.avatar.clone(),
            })
        }))
    }

    async fn resolve_issuer_fee_percent(
        &self,
        account: &AccountId,
    ) -> Result<Option<Decimal>, LookupError> {
        self.entries
            .get(account)
            .and_then(|entry| entry.transfer_rate)
            .map(transfer_rate_to_percent)
            .transpose()
    }
}

/// Caching decorator for any enrichment service
///
/// Successful answers, including "nothing known", are cached per account.
/// Failures are not cached, so a later review retries them.
#[derive(Debug)]
pub struct CachingEnrichment<S> {
    inner: S,
    profiles: DashMap<AccountId, Option<IssuerProfile>>,
    fees: DashMap<AccountId, Option<Decimal>>,
}

impl<S: EnrichmentService> CachingEnrichment<S> {
    pub fn new(inner: S) -> Self {
        CachingEnrichment {
            inner,
            profiles: DashMap::new(),
            fees: DashMap::new(),
        }
    }

    /// Number of accounts with a cached profile answer
    pub fn cached_profiles(&self) -> usize {
        self.profiles.len()
    }

    /// Number of accounts with a cached fee answer
    pub fn cached_fees(&self) -> usize {
        self.fees.len()
    }
}

#[async_trait]
impl<S: EnrichmentService> EnrichmentService for CachingEnrichment<S> {
    async fn resolve_issuer_profile(
        &self,
        account: &AccountId,
    ) -> Result<Option<IssuerProfile>, LookupError> {
        let cached = self.profiles.get(account).map(|entry| entry.value().clone());
        if let Some(profile) = cached {
            return Ok(profile);
        }

        let profile = self.inner.resolve_issuer_profile(account).await?;
        self.profiles.insert(account.clone(), profile.clone());
        Ok(profile)
    }

    async fn resolve_issuer_fee_percent(
        &self,
        account: &AccountId,
    ) -> Result<Option<Decimal>, LookupError> {
        let cached = self.fees.get(account).map(|entry| *entry.value());
        if let Some(fee) = cached {
            return Ok(fee);
        }

        let fee = self.inner.resolve_issuer_fee_percent(account).await?;
        self.fees.insert(account.clone(), fee);
        Ok(fee)
    }
}
