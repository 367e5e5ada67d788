//! Offer-creation review template
//!
//! On activation the template starts, without any of them waiting for
//! another:
//! - the issuer profile lookup
//! - the issuer fee lookup
//! - the full-balance warning evaluation on TakerGets, against the snapshot
//!   as it is at activation time
//!
//! The issuer is taken from TakerGets, or from TakerPays when TakerGets is
//! native. Amounts, the offer flags, expiration and the replaced offer
//! sequence render straight from the instruction.

use crate::core::session::ReviewSession;
use crate::core::templates::{
    expiration_field, issuer_fee_field, issuer_field, issuer_of, warning_field, FieldLabel,
    FieldValue, ReviewField,
};
use crate::core::traits::{EnrichmentService, ReviewTemplate};
use crate::core::warning::compute_offer_warning;
use crate::types::{AccountId, AccountSnapshot, OfferCreate};
use std::sync::Arc;

/// Review of one offer creation
#[derive(Debug)]
pub struct OfferCreateReview {
    instruction: OfferCreate,
    issuer: Option<AccountId>,
    session: ReviewSession,
}

impl OfferCreateReview {
    /// Activate the template
    pub fn activate(
        instruction: OfferCreate,
        source: &AccountSnapshot,
        service: Arc<dyn EnrichmentService>,
    ) -> Self {
        let issuer = issuer_of([&instruction.taker_gets, &instruction.taker_pays]);
        let warning = compute_offer_warning(&instruction, source);
        let session = ReviewSession::activate(issuer.clone(), warning, service);

        OfferCreateReview {
            instruction,
            issuer,
            session,
        }
    }

    pub fn instruction(&self) -> &OfferCreate {
        &self.instruction
    }

    /// Issuer the enrichment lookups target
    pub fn issuer(&self) -> Option<&AccountId> {
        self.issuer.as_ref()
    }
}

impl ReviewTemplate for OfferCreateReview {
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

        if let Some(issuer) = &self.issuer {
            fields.push(issuer_field(issuer, state));
        }

        fields.extend(warning_field(state));

        fields.push(ReviewField::new(
            FieldLabel::Selling,
            FieldValue::Amount(tx.taker_gets.clone()),
        ));

        let receive_label = if tx.sell() {
            FieldLabel::InExchangeForAtLeastReceive
        } else {
            FieldLabel::InExchangeForReceive
        };
        fields.push(ReviewField::new(
            receive_label,
            FieldValue::Amount(tx.taker_pays.clone()),
        ));

        if self.issuer.is_some() {
            fields.push(issuer_fee_field(state));
        }

        let modes = tx.flags.execution_modes();
        if !modes.is_empty() {
            fields.push(ReviewField::new(FieldLabel::Execution, FieldValue::Modes(modes)));
        }

        if let Some(expiration) = tx.expiration {
            fields.push(expiration_field(expiration));
        }

        if let Some(sequence) = tx.offer_sequence {
            fields.push(ReviewField::new(
                FieldLabel::OfferSequence,
                FieldValue::Integer(u64::from(sequence)),
            ));
        }

        fields
    }
}
