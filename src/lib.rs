//! Offer Review Engine Library
//! # Overview
//!
//! This library renders the pre-signing review of a ledger instruction:
//! what the instruction does, who issues the assets it moves, what the
//! issuer charges, and whether it may dispose of the signer's entire balance
//! of an asset.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (amounts, instructions, account snapshot)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Review logic:
//!   - [`core::dispatcher`] - Instruction type to review template selection
//!   - [`core::templates`] - One review template per instruction type
//!   - [`core::session`] - Concurrent, cancellable enrichment lookups
//!   - [`core::warning`] - Full-balance warning rules
//!   - [`core::enrichment`] - Directory-backed and caching enrichment
//! - [`io`] - Instruction JSON and snapshot CSV decoding, report output
//! - [`runner`] - End-to-end review from files to report
//!
//! # Instruction Types
//!
//! - **OfferCreate**: Place an exchange offer (issuer, fee, warning, flags)
//! - **OfferCancel**: Remove an offer
//! - **Payment**: Send an amount (issuer, fee, warning on the spent amount)
//! - **TrustSet**: Set a trust line limit (issuer, fee)
//!
//! `AccountSet` and `EscrowCreate` decode but have no review template;
//! dispatching them fails with [`ReviewError::UnhandledInstructionType`].
//!
//! # Review State
//!
//! Each review maintains:
//! - issuer profile and its loading flag
//! - issuer fee percentage and its loading flag
//! - the warning, evaluated once at activation

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod runner;
pub mod types;

pub use core::{dispatch, ActiveTemplate, EnrichmentService, ReviewTemplate, Warning};
pub use runner::{run_review, ReviewRequest, RunnerConfig};
pub use types::{
    AccountId, AccountSnapshot, Currency, Instruction, InstructionType, IssuerProfile,
    LedgerAmount, LedgerValue, LookupError, ReviewError, TrustLine,
};
