//! Payment review template
//!
//! Enriches the issuer of the delivered asset (or of SendMax when only the
//! spent side is issued) and evaluates the full-balance rule on what leaves
//! the account: SendMax when present, Amount otherwise.

use crate::core::session::ReviewSession;
use crate::core::templates::{
    issuer_fee_field, issuer_field, issuer_of, warning_field, FieldLabel, FieldValue, ReviewField,
};
use crate::core::traits::{EnrichmentService, ReviewTemplate};
use crate::core::warning::compute_payment_warning;
use crate::types::{AccountId, AccountSnapshot, Payment};
use std::sync::Arc;

/// Review of one payment
#[derive(Debug)]
pub struct PaymentReview {
    instruction: Payment,
    issuer: Option<AccountId>,
    session: ReviewSession,
}

impl PaymentReview {
    pub fn activate(
        instruction: Payment,
        source: &AccountSnapshot,
        service: Arc<dyn EnrichmentService>,
    ) -> Self {
        let issuer = issuer_of(std::iter::once(&instruction.amount).chain(&instruction.send_max));
        let warning = compute_payment_warning(&instruction, source);
        let session = ReviewSession::activate(issuer.clone(), warning, service);

        PaymentReview {
            instruction,
            issuer,
            session,
        }
    }

    pub fn instruction(&self) -> &Payment {
        &self.instruction
    }
}

impl ReviewTemplate for PaymentReview {
    fn session(&self) -> &ReviewSession {
        &self.session
    }

    fn session_mut(&mut self) -> &mut ReviewSession {
        &mut self.session
    }

    fn render(&self) -> Vec<ReviewField> {
        let tx = &self.instruction;
        let state = self.session.state();
        let mut fields = Vec::new();

        fields.extend(warning_field(state));

        fields.push(ReviewField::new(
            FieldLabel::Destination,
            FieldValue::Account {
                address: tx.destination.clone(),
                profile: None,
                loading: false,
            },
        ));

        if let Some(tag) = tx.destination_tag {
            fields.push(ReviewField::new(
                FieldLabel::DestinationTag,
                FieldValue::Integer(u64::from(tag)),
            ));
        }

        fields.push(ReviewField::new(
            FieldLabel::Amount,
            FieldValue::Amount(tx.amount.clone()),
        ));

        if let Some(send_max) = &tx.send_max {
            fields.push(ReviewField::new(
                FieldLabel::SendMax,
                FieldValue::Amount(send_max.clone()),
            ));
        }

        if let Some(issuer) = &self.issuer {
            fields.push(issuer_field(issuer, state));
            fields.push(issuer_fee_field(state));
        }

        fields
    }
}
