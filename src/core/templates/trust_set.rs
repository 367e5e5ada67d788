//! Trust-line review template
//!
//! Shows the limit being set and the issuer it is set towards. Setting a
//! limit disposes of nothing, so no warning is evaluated.

use crate::core::session::ReviewSession;
use crate::core::templates::{
    issuer_fee_field, issuer_field, issuer_of, FieldLabel, FieldValue, ReviewField,
};
use crate::core::traits::{EnrichmentService, ReviewTemplate};
use crate::types::{AccountId, TrustSet};
use std::sync::Arc;

/// Review of one trust-line change
#[derive(Debug)]
pub struct TrustSetReview {
    instruction: TrustSet,
    issuer: Option<AccountId>,
    session: ReviewSession,
}

impl TrustSetReview {
    pub fn activate(instruction: TrustSet, service: Arc<dyn EnrichmentService>) -> Self {
        let issuer = issuer_of([&instruction.limit_amount]);
        let session = ReviewSession::activate(issuer.clone(), None, service);

        TrustSetReview {
            instruction,
            issuer,
            session,
        }
    }

    pub fn instruction(&self) -> &TrustSet {
        &self.instruction
    }
}

impl ReviewTemplate for TrustSetReview {
    fn session(&self) -> &ReviewSession {
        &self.session
    }

    fn session_mut(&mut self) -> &mut ReviewSession {
        &mut self.session
    }

    fn render(&self) -> Vec<ReviewField> {
        let state = self.session.state();
        let mut fields = Vec::new();

        if let Some(issuer) = &self.issuer {
            fields.push(issuer_field(issuer, state));
        }

        fields.push(ReviewField::new(
            FieldLabel::TrustLimit,
            FieldValue::Amount(self.instruction.limit_amount.clone()),
        ));

        if self.issuer.is_some() {
            fields.push(issuer_fee_field(state));
        }

        fields
    }
}
