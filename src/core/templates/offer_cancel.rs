//! Offer-cancellation review template
//!
//! Nothing to enrich and nothing disposed of: the session settles at
//! activation and the review shows the offer sequence being removed.

use crate::core::session::ReviewSession;
use crate::core::templates::{FieldLabel, FieldValue, ReviewField};
use crate::core::traits::{EnrichmentService, ReviewTemplate};
use crate::types::OfferCancel;
use std::sync::Arc;

/// Review of one offer cancellation
#[derive(Debug)]
pub struct OfferCancelReview {
    instruction: OfferCancel,
    session: ReviewSession,
}

impl OfferCancelReview {
    pub fn activate(instruction: OfferCancel, service: Arc<dyn EnrichmentService>) -> Self {
        OfferCancelReview {
            instruction,
            session: ReviewSession::activate(None, None, service),
        }
    }

    pub fn instruction(&self) -> &OfferCancel {
        &self.instruction
    }
}

impl ReviewTemplate for OfferCancelReview {
    fn session(&self) -> &ReviewSession {
        &self.session
    }

    fn session_mut(&mut self) -> &mut ReviewSession {
        &mut self.session
    }

    fn render(&self) -> Vec<ReviewField> {
        vec![ReviewField::new(
            FieldLabel::OfferSequence,
            FieldValue::Integer(u64::from(self.instruction.offer_sequence)),
        )]
    }
}
