//! Core review logic
//!
//! This module contains the review pipeline components:
//! - `traits` - Enrichment capability and the shared template surface
//! - `warning` - Full-balance warning rules
//! - `state` - Review state and the updates that resolve it
//! - `session` - Per-template lookups feeding the state
//! - `templates` - One review template per supported instruction type
//! - `dispatcher` - Instruction to template selection
//! - `enrichment` - Directory-backed and caching enrichment services

pub mod dispatcher;
pub mod enrichment;
pub mod session;
pub mod state;
pub mod templates;
pub mod traits;
pub mod warning;

#[cfg(test)]
pub(crate) mod test_support;

pub use dispatcher::{dispatch, select_template, ActiveTemplate, TemplateKind};
pub use enrichment::{
    transfer_rate_to_percent, CachingEnrichment, DirectoryEnrichment, DirectoryEntry,
};
pub use session::ReviewSession;
pub use state::{ReviewState, ReviewUpdate};
pub use templates::{FieldLabel, FieldValue, ReviewField};
pub use traits::{EnrichmentService, ReviewTemplate};
pub use warning::{compute_offer_warning, compute_payment_warning, full_balance_warning, Warning};
