//! Review templates, one per supported instruction variant
//!
//! A template is activated with a decoded instruction, the account snapshot
//! and an enrichment service. It owns a
//! [`ReviewSession`](crate::core::session::ReviewSession) and renders a list
//! of semantic fields:
//!
//! - fields derived from the instruction (amounts, flags, expiration...) are
//!   available immediately
//! - issuer identity, issuer fee and the warning banner come from the
//!   session state and carry their own loading status
//!
//! [`offer_create`] is the reference template; the others follow its shape.

pub mod offer_cancel;
pub mod offer_create;
pub mod payment;
pub mod trust_set;

pub use offer_cancel::OfferCancelReview;
pub use offer_create::OfferCreateReview;
pub use payment::PaymentReview;
pub use trust_set::TrustSetReview;

use crate::core::state::ReviewState;
use crate::core::warning::Warning;
use crate::types::{AccountId, IssuerProfile, LedgerAmount, LedgerTime};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;

/// Semantic label of a rendered field
///
/// Final wording belongs to the presentation layer; `Display` gives the
/// default English text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldLabel {
    Issuer,
    Warning,
    Selling,
    /// Receive side of a regular offer
    InExchangeForReceive,
    /// Receive side of a sell offer
    InExchangeForAtLeastReceive,
    IssuerFee,
    /// Passive, immediate-or-cancel and fill-or-kill offer flags
    Execution,
    ExpireAfter,
    OfferSequence,
    Destination,
    DestinationTag,
    Amount,
    SendMax,
    TrustLimit,
}

impl fmt::Display for FieldLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FieldLabel::Issuer => "Issuer",
            FieldLabel::Warning => "Warning",
            FieldLabel::Selling => "Selling",
            FieldLabel::InExchangeForReceive => "In exchange you receive",
            FieldLabel::InExchangeForAtLeastReceive => "In exchange you receive at least",
            FieldLabel::IssuerFee => "Issuer fee",
            FieldLabel::Execution => "Execution",
            FieldLabel::ExpireAfter => "Expire after",
            FieldLabel::OfferSequence => "Offer sequence",
            FieldLabel::Destination => "Destination",
            FieldLabel::DestinationTag => "Destination tag",
            FieldLabel::Amount => "Amount",
            FieldLabel::SendMax => "Send max",
            FieldLabel::TrustLimit => "Trust limit",
        };
        f.write_str(label)
    }
}

/// Value of a rendered field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Amount(LedgerAmount),
    /// Account with its resolved identity
    Account {
        address: AccountId,
        profile: Option<IssuerProfile>,
        loading: bool,
    },
    Percent(Decimal),
    /// Value still being resolved
    Loading,
    Warning(Warning),
    Timestamp(DateTime<Utc>),
    Integer(u64),
    /// Flag names, comma separated
    Modes(Vec<&'static str>),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Amount(amount) => write!(f, "{}", amount),
            FieldValue::Account {
                address,
                profile,
                loading,
            } => match (loading, profile) {
                (true, _) => write!(f, "{} (Loading...)", address),
                (false, Some(profile)) => write!(f, "{} ({})", address, profile.name),
                (false, None) => write!(f, "{}", address),
            },
            FieldValue::Percent(percent) => write!(f, "{}%", percent.normalize()),
            FieldValue::Loading => f.write_str("Loading..."),
            FieldValue::Warning(warning) => write!(f, "{}", warning),
            FieldValue::Timestamp(time) => write!(f, "{}", time.format("%Y-%m-%d %H:%M:%S UTC")),
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::Modes(modes) => f.write_str(&modes.join(", ")),
        }
    }
}

/// One labelled line of a review
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewField {
    pub label: FieldLabel,
    pub value: FieldValue,
}

impl ReviewField {
    pub fn new(label: FieldLabel, value: FieldValue) -> Self {
        ReviewField { label, value }
    }
}

/// First issuer found on the given legs
pub(crate) fn issuer_of<'a>(
    legs: impl IntoIterator<Item = &'a LedgerAmount>,
) -> Option<AccountId> {
    legs.into_iter().find_map(|leg| leg.issuer()).cloned()
}

/// Issuer line, gated by the profile lookup
pub(crate) fn issuer_field(issuer: &AccountId, state: &ReviewState) -> ReviewField {
    ReviewField::new(
        FieldLabel::Issuer,
        FieldValue::Account {
            address: issuer.clone(),
            profile: state.issuer_profile.clone(),
            loading: state.issuer_profile_loading,
        },
    )
}

/// Issuer fee line, gated by the fee lookup
pub(crate) fn issuer_fee_field(state: &ReviewState) -> ReviewField {
    let value = if state.issuer_fee_loading {
        FieldValue::Loading
    } else {
        FieldValue::Percent(state.issuer_fee_percent)
    };
    ReviewField::new(FieldLabel::IssuerFee, value)
}

/// Warning banner, if any
pub(crate) fn warning_field(state: &ReviewState) -> Option<ReviewField> {
    state
        .warning
        .clone()
        .map(|warning| ReviewField::new(FieldLabel::Warning, FieldValue::Warning(warning)))
}

/// Expiration line
pub(crate) fn expiration_field(expiration: LedgerTime) -> ReviewField {
    let value = match expiration.to_utc() {
        Some(time) => FieldValue::Timestamp(time),
        None => FieldValue::Integer(u64::from(expiration.0)),
    };
    ReviewField::new(FieldLabel::ExpireAfter, value)
}
