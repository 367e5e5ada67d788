//! Scripted enrichment services shared by unit tests

use crate::core::traits::EnrichmentService;
use crate::types::{AccountId, IssuerProfile, LookupError};
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Semaphore;

/// Answers every lookup immediately with fixed values
#[derive(Debug, Default)]
pub(crate) struct StaticEnrichment {
    profile: Option<IssuerProfile>,
    fee: Option<Decimal>,
    profile_calls: AtomicUsize,
    fee_calls: AtomicUsize,
}

impl StaticEnrichment {
    pub(crate) fn new(profile: Option<IssuerProfile>, fee: Option<Decimal>) -> Self {
        StaticEnrichment {
            profile,
            fee,
            ..Default::default()
        }
    }

    pub(crate) fn profile_calls(&self) -> usize {
        self.profile_calls.load(Ordering::SeqCst)
    }

    pub(crate) fn fee_calls(&self) -> usize {
        self.fee_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EnrichmentService for StaticEnrichment {
    async fn resolve_issuer_profile(
        &self,
        _account: &AccountId,
    ) -> Result<Option<IssuerProfile>, LookupError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.profile.clone())
    }

    async fn resolve_issuer_fee_percent(
        &self,
        _account: &AccountId,
    ) -> Result<Option<Decimal>, LookupError> {
        self.fee_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.fee)
    }
}

/// Fails every lookup
#[derive(Debug)]
pub(crate) struct FailingEnrichment;

#[async_trait]
impl EnrichmentService for FailingEnrichment {
    async fn resolve_issuer_profile(
        &self,
        account: &AccountId,
    ) -> Result<Option<IssuerProfile>, LookupError> {
        Err(LookupError::NotFound(account.to_string()))
    }

    async fn resolve_issuer_fee_percent(
        &self,
        _account: &AccountId,
    ) -> Result<Option<Decimal>, LookupError> {
        Err(LookupError::Network("connection refused".to_string()))
    }
}

/// Holds every lookup until the test lets it through
///
/// Each call to `open(n)` releases `n` lookups, in the order they queued.
#[derive(Debug)]
pub(crate) struct GatedEnrichment {
    gate: Semaphore,
    inner: StaticEnrichment,
    completed: AtomicUsize,
}

impl GatedEnrichment {
    pub(crate) fn closed(inner: StaticEnrichment) -> Self {
        GatedEnrichment {
            gate: Semaphore::new(0),
            inner,
            completed: AtomicUsize::new(0),
        }
    }

    pub(crate) fn open(&self, lookups: usize) {
        self.gate.add_permits(lookups);
    }

    /// Lookups that made it through the gate
    pub(crate) fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    async fn pass(&self) -> Result<(), LookupError> {
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|_| LookupError::Network("gate closed".to_string()))?;
        permit.forget();
        self.completed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl EnrichmentService for GatedEnrichment {
    async fn resolve_issuer_profile(
        &self,
        account: &AccountId,
    ) -> Result<Option<IssuerProfile>, LookupError> {
        self.pass().await?;
        self.inner.resolve_issuer_profile(account).await
    }

    async fn resolve_issuer_fee_percent(
        &self,
        account: &AccountId,
    ) -> Result<Option<Decimal>, LookupError> {
        self.pass().await?;
        self.inner.resolve_issuer_fee_percent(account).await
    }
}
