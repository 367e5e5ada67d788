//! Review state and its reducer
//!
//! A `ReviewState` belongs to one template instance. It is only changed by
//! applying `ReviewUpdate` messages, one per background task:
//!
//! ```text
//! issuer profile lookup ──► IssuerProfile ──► issuer_profile_loading, issuer_profile
//! issuer fee lookup     ──► IssuerFee     ──► issuer_fee_loading, issuer_fee_percent
//! warning evaluation    ──► Warning       ──► warning
//! ```
//!
//! Each message touches a disjoint set of fields, so the final state does
//! not depend on the order in which the three messages arrive.

use crate::core::warning::Warning;
use crate::types::IssuerProfile;
use rust_decimal::Decimal;

/// Render-ready state of one review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewState {
    /// Issuer profile lookup still running
    pub issuer_profile_loading: bool,

    /// Resolved issuer identity, if any
    pub issuer_profile: Option<IssuerProfile>,

    /// Issuer fee lookup still running
    ///
    /// The presentation layer must use this flag, not the fee value, to
    /// decide whether to show a placeholder: an unresolved fee stays at 0.
    pub issuer_fee_loading: bool,

    /// Issuer transfer fee in percent
    pub issuer_fee_percent: Decimal,

    /// Warning banner, if the rule engine produced one
    pub warning: Option<Warning>,
}

impl Default for ReviewState {
    fn default() -> Self {
        ReviewState {
            issuer_profile_loading: true,
            issuer_profile: None,
            issuer_fee_loading: true,
            issuer_fee_percent: Decimal::ZERO,
            warning: None,
        }
    }
}

/// Result message of one background task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewUpdate {
    /// Issuer profile lookup finished; `None` when nothing was resolved
    IssuerProfile(Option<IssuerProfile>),

    /// Issuer fee lookup finished; `None` keeps the default fee
    IssuerFee(Option<Decimal>),

    /// Warning evaluation finished
    Warning(Option<Warning>),
}

impl ReviewState {
    /// State at activation: both lookups loading, no warning
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one task result
    pub fn apply(&mut self, update: ReviewUpdate) {
        match update {
            ReviewUpdate::IssuerProfile(profile) => {
                if profile.is_some() {
                    self.issuer_profile = profile;
                }
                self.issuer_profile_loading = false;
            }
            ReviewUpdate::IssuerFee(fee) => {
                if let Some(fee) = fee {
                    self.issuer_fee_percent = fee;
                }
                self.issuer_fee_loading = false;
            }
            ReviewUpdate::Warning(warning) => {
                if warning.is_some() {
                    self.warning = warning;
                }
            }
        }
    }

    /// Both lookups have finished
    pub fn is_settled(&self) -> bool {
        !self.issuer_profile_loading && !self.issuer_fee_loading
    }
}
