//! Per-template review session
//!
//! A `ReviewSession` owns the `ReviewState` of one template instance and the
//! background lookups feeding it.
//!
//! # Design
//!
//! ```text
//! activate()
//!     ├── warning (pure)            ──► applied immediately
//!     ├── tokio task: issuer profile ─┐
//!     └── tokio task: issuer fee     ─┴─► mpsc ──► next_update() / apply_pending()
//!                                                   └── ReviewState::apply
//! ```
//!
//! Tasks never touch the state: they send one typed `ReviewUpdate` each and
//! the session reduces them in arrival order. No task waits for another.
//!
//! # Cancellation
//!
//! `deactivate()` (and `Drop`) cancels in-flight lookups and closes the
//! update channel. A lookup that still completes afterwards fails to send
//! its update, and the state is left untouched.

use crate::core::state::{ReviewState, ReviewUpdate};
use crate::core::traits::EnrichmentService;
use crate::core::warning::Warning;
use crate::types::{AccountId, LookupError};
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Review state plus the lookups resolving it
#[derive(Debug)]
pub struct ReviewSession {
    state: ReviewState,
    updates: mpsc::UnboundedReceiver<ReviewUpdate>,
    cancel: CancellationToken,
    active: bool,
}

impl ReviewSession {
    /// Start a session
    ///
    /// With an issuer, both lookups are spawned on the current Tokio runtime
    /// in parallel. Without one, they are skipped and both loading flags are
    /// cleared immediately. Outside of a runtime the lookups are skipped the
    /// same way, as if both had failed. The warning is applied as evaluated
    /// at activation time and is never recomputed.
    pub fn activate(
        issuer: Option<AccountId>,
        warning: Option<Warning>,
        service: Arc<dyn EnrichmentService>,
    ) -> Self {
        let (sender, updates) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let mut state = ReviewState::new();

        match issuer.map(|issuer| (issuer, Handle::try_current())) {
            Some((issuer, Ok(runtime))) => {
                let profile_service = Arc::clone(&service);
                let profile_issuer = issuer.clone();
                spawn_lookup(
                    &runtime,
                    "issuer_profile",
                    cancel.clone(),
                    sender.clone(),
                    async move {
                        let result = profile_service
                            .resolve_issuer_profile(&profile_issuer)
                            .await;
                        ReviewUpdate::IssuerProfile(best_effort(
                            "issuer_profile",
                            &profile_issuer,
                            result,
                        ))
                    },
                );
                spawn_lookup(&runtime, "issuer_fee", cancel.clone(), sender, async move {
                    let result = service.resolve_issuer_fee_percent(&issuer).await;
                    ReviewUpdate::IssuerFee(best_effort("issuer_fee", &issuer, result))
                });
            }
            Some((issuer, Err(error))) => {
                warn!(%issuer, %error, "no async runtime for enrichment lookups, skipping them");
                state.apply(ReviewUpdate::IssuerProfile(None));
                state.apply(ReviewUpdate::IssuerFee(None));
            }
            None => {
                state.apply(ReviewUpdate::IssuerProfile(None));
                state.apply(ReviewUpdate::IssuerFee(None));
            }
        }

        state.apply(ReviewUpdate::Warning(warning));

        ReviewSession {
            state,
            updates,
            cancel,
            active: true,
        }
    }

    pub fn state(&self) -> &ReviewState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Apply every update that has already arrived, without waiting
    ///
    /// Returns the number of updates applied. Always 0 once deactivated.
    pub fn apply_pending(&mut self) -> usize {
        if !self.active {
            return 0;
        }

        let mut applied = 0;
        while let Ok(update) = self.updates.try_recv() {
            self.state.apply(update);
            applied += 1;
        }
        applied
    }

    /// Wait for the next update and apply it
    ///
    /// Returns `false` once no lookup can deliver anything more, or when the
    /// session is inactive. Cancel-safe.
    pub async fn next_update(&mut self) -> bool {
        if !self.active {
            return false;
        }

        match self.updates.recv().await {
            Some(update) => {
                self.state.apply(update);
                true
            }
            None => false,
        }
    }

    /// Wait until every lookup has delivered its update
    ///
    /// A lookup that never resolves keeps this pending forever; callers that
    /// need a bound wrap it in a timeout.
    pub async fn settle(&mut self) {
        while self.next_update().await {}
    }

    /// Release the lookups and freeze the state
    pub fn deactivate(&mut self) {
        if !self.active {
            return;
        }

        self.active = false;
        self.cancel.cancel();
        self.updates.close();
        debug!(settled = self.state.is_settled(), "review session deactivated");
    }
}

impl Drop for ReviewSession {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

fn spawn_lookup<F>(
    runtime: &Handle,
    lookup: &'static str,
    cancel: CancellationToken,
    sender: mpsc::UnboundedSender<ReviewUpdate>,
    task: F,
) where
    F: Future<Output = ReviewUpdate> + Send + 'static,
{
    runtime.spawn(async move {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(lookup, "enrichment lookup cancelled");
            }
            update = task => {
                if sender.send(update).is_err() {
                    debug!(lookup, "review closed before lookup resolved");
                }
            }
        }
    });
}

/// Downgrade a lookup failure to an absent result
fn best_effort<T>(
    lookup: &'static str,
    account: &AccountId,
    result: Result<Option<T>, LookupError>,
) -> Option<T> {
    result.unwrap_or_else(|error| {
        debug!(lookup, %account, %error, "enrichment lookup failed");
        None
    })
}
