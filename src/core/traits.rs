//! Core traits for the review pipeline
//!
//! This module defines the enrichment capability review templates depend on
//! and the surface every template exposes to the host. Enrichment
//! implementations can query a live ledger node, a directory service or a
//! static table; templates only see the trait.

use crate::core::session::ReviewSession;
use crate::core::state::ReviewState;
use crate::core::templates::ReviewField;
use crate::types::{AccountId, IssuerProfile, LookupError};
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Best-effort lookups of issuer data
///
/// Each lookup is invoked at most once per template instance. Implementations
/// report failures through `LookupError`; templates downgrade any error to
/// an absent result, so a failing service never blocks or fails a review.
/// Timeouts are the implementation's concern.
#[async_trait]
pub trait EnrichmentService: Send + Sync {
    /// Resolve the display identity of an issuing account
    ///
    /// `Ok(None)` means the account has no known identity.
    async fn resolve_issuer_profile(
        &self,
        account: &AccountId,
    ) -> Result<Option<IssuerProfile>, LookupError>;

    /// Resolve the transfer fee charged by an issuing account, in percent
    ///
    /// `Ok(None)` means the account sets no transfer fee.
    async fn resolve_issuer_fee_percent(
        &self,
        account: &AccountId,
    ) -> Result<Option<Decimal>, LookupError>;
}

/// Shared surface of every review template
///
/// A template owns the session of one review and renders the instruction
/// it was activated with against the current session state.
pub trait ReviewTemplate {
    fn session(&self) -> &ReviewSession;

    fn session_mut(&mut self) -> &mut ReviewSession;

    /// Render-ready fields for the current state
    fn render(&self) -> Vec<ReviewField>;

    fn state(&self) -> &ReviewState {
        self.session().state()
    }
}
