//! Warning rule engine
//!
//! Pure functions evaluating an instruction against the account snapshot and
//! producing at most one warning.
//!
//! The full-balance rule applies to any instruction that disposes of an
//! asset:
//! - native asset: warn when the disposed value is at least the available
//!   (reserve-excluded) native balance
//! - issued asset: warn when the disposed value is at least the balance of
//!   the matching fungible trust line; no matching line or a non-fungible
//!   line means the balance cannot be assessed and no warning is produced
//!
//! Comparisons are exact decimal comparisons and include equality.

use crate::types::{AccountSnapshot, LedgerAmount, OfferCreate, Payment};
use std::fmt;

/// Warning attached to a review
///
/// Carries a semantic key and parameters; final wording belongs to the
/// presentation layer. The `Display` implementation is the default English
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The instruction disposes of the entire liquid balance of a currency
    TradeEntireBalance {
        /// Display form of the currency code
        currency: String,
    },
}

impl Warning {
    /// Stable identifier for localization lookups
    pub fn key(&self) -> &'static str {
        match self {
            Warning::TradeEntireBalance { .. } => "trade_entire_balance",
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::TradeEntireBalance { currency } => write!(
                f,
                "You may be trading your entire liquid balance of {}",
                currency
            ),
        }
    }
}

/// Evaluate the full-balance rule for a disposed amount
pub fn full_balance_warning(disposed: &LedgerAmount, source: &AccountSnapshot) -> Option<Warning> {
    let currency = disposed.currency();

    let entire_balance = match disposed.issuer() {
        None => disposed.value() >= &source.available_native_balance,
        Some(issuer) => match source.find_line(issuer, currency) {
            Some(line) if !line.is_nft => disposed.value() >= &line.balance,
            _ => false,
        },
    };

    entire_balance.then(|| Warning::TradeEntireBalance {
        currency: currency.display_code(),
    })
}

/// Warning for an offer creation: the disposed leg is TakerGets
pub fn compute_offer_warning(offer: &OfferCreate, source: &AccountSnapshot) -> Option<Warning> {
    full_balance_warning(&offer.taker_gets, source)
}

/// Warning for a payment: the disposed leg is SendMax, or Amount without it
pub fn compute_payment_warning(payment: &Payment, source: &AccountSnapshot) -> Option<Warning> {
    full_balance_warning(payment.disposed_amount(), source)
}
