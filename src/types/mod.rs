//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `amount`: Account identifiers, currencies and ledger amounts
//! - `account`: Account snapshot, trust lines and reserve requirements
//! - `instruction`: Decoded ledger instructions
//! - `issuer`: Issuer identity resolved by enrichment
//! - `error`: Error types for the review engine

pub mod account;
pub mod amount;
pub mod error;
pub mod instruction;
pub mod issuer;

pub use account::{AccountSnapshot, ReserveConfig, TrustLine};
pub use amount::{
    normalize_currency_code, AccountId, Currency, LedgerAmount, LedgerValue, NATIVE_CURRENCY_CODE,
};
pub use error::{LookupError, ReviewError};
pub use instruction::{
    AccountSet, EscrowCreate, Instruction, InstructionType, LedgerTime, OfferCancel, OfferCreate,
    OfferFlags, Payment, TrustSet,
};
pub use issuer::IssuerProfile;
