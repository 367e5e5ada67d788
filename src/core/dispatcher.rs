//! Instruction review dispatcher
//!
//! Maps a decoded instruction to the review template for its type. The
//! selection itself is a pure function of the instruction-type tag; it holds
//! no state and starts nothing. Activating the chosen template is what
//! triggers enrichment.
//!
//! # Design
//!
//! ```text
//! Instruction ──► InstructionType ──► select_template() ──► TemplateKind
//!                                                              │
//!                                        dispatch() ◄──────────┘
//!                                            └──► ActiveTemplate::{OfferCreate, ..}
//! ```
//!
//! Instruction types that are decoded but have no template (`AccountSet`,
//! `EscrowCreate`) fail with `ReviewError::UnhandledInstructionType`. There
//! is no fallback rendering.

use crate::core::session::ReviewSession;
use crate::core::templates::{
    OfferCancelReview, OfferCreateReview, PaymentReview, ReviewField, TrustSetReview,
};
use crate::core::traits::{EnrichmentService, ReviewTemplate};
use crate::types::{AccountSnapshot, Instruction, InstructionType, ReviewError};
use std::sync::Arc;
use tracing::warn;

/// Review template implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    OfferCreate,
    OfferCancel,
    Payment,
    TrustSet,
}

/// Select the template for an instruction type
///
/// # Errors
///
/// Returns `ReviewError::UnhandledInstructionType` for types without a
/// review template.
pub fn select_template(tx_type: InstructionType) -> Result<TemplateKind, ReviewError> {
    match tx_type {
        InstructionType::OfferCreate => Ok(TemplateKind::OfferCreate),
        InstructionType::OfferCancel => Ok(TemplateKind::OfferCancel),
        InstructionType::Payment => Ok(TemplateKind::Payment),
        InstructionType::TrustSet => Ok(TemplateKind::TrustSet),
        InstructionType::AccountSet | InstructionType::EscrowCreate => {
            Err(ReviewError::unhandled_instruction_type(tx_type.as_str()))
        }
    }
}

/// An activated review template
#[derive(Debug)]
pub enum ActiveTemplate {
    OfferCreate(OfferCreateReview),
    OfferCancel(OfferCancelReview),
    Payment(PaymentReview),
    TrustSet(TrustSetReview),
}

impl ActiveTemplate {
    pub fn kind(&self) -> TemplateKind {
        match self {
            ActiveTemplate::OfferCreate(_) => TemplateKind::OfferCreate,
            ActiveTemplate::OfferCancel(_) => TemplateKind::OfferCancel,
            ActiveTemplate::Payment(_) => TemplateKind::Payment,
            ActiveTemplate::TrustSet(_) => TemplateKind::TrustSet,
        }
    }

    fn as_template(&self) -> &dyn ReviewTemplate {
        match self {
            ActiveTemplate::OfferCreate(review) => review,
            ActiveTemplate::OfferCancel(review) => review,
            ActiveTemplate::Payment(review) => review,
            ActiveTemplate::TrustSet(review) => review,
        }
    }

    fn as_template_mut(&mut self) -> &mut dyn ReviewTemplate {
        match self {
            ActiveTemplate::OfferCreate(review) => review,
            ActiveTemplate::OfferCancel(review) => review,
            ActiveTemplate::Payment(review) => review,
            ActiveTemplate::TrustSet(review) => review,
        }
    }
}

impl ReviewTemplate for ActiveTemplate {
    fn session(&self) -> &ReviewSession {
        self.as_template().session()
    }

    fn session_mut(&mut self) -> &mut ReviewSession {
        self.as_template_mut().session_mut()
    }

    fn render(&self) -> Vec<ReviewField> {
        self.as_template().render()
    }
}

/// Activate the review template matching `instruction`
///
/// Enrichment lookups run on the current Tokio runtime. Called outside of
/// one, the template renders without issuer details.
///
/// # Errors
///
/// Returns `ReviewError::UnhandledInstructionType` when the instruction type
/// has no review template. Nothing is started in that case.
pub fn dispatch(
    instruction: Instruction,
    source: &AccountSnapshot,
    service: Arc<dyn EnrichmentService>,
) -> Result<ActiveTemplate, ReviewError> {
    let tx_type = instruction.instruction_type();
    if let Err(error) = select_template(tx_type) {
        warn!(%tx_type, "no review template for instruction");
        return Err(error);
    }

    let template = match instruction {
        Instruction::OfferCreate(tx) => {
            ActiveTemplate::OfferCreate(OfferCreateReview::activate(tx, source, service))
        }
        Instruction::OfferCancel(tx) => {
            ActiveTemplate::OfferCancel(OfferCancelReview::activate(tx, service))
        }
        Instruction::Payment(tx) => {
            ActiveTemplate::Payment(PaymentReview::activate(tx, source, service))
        }
        Instruction::TrustSet(tx) => {
            ActiveTemplate::TrustSet(TrustSetReview::activate(tx, service))
        }
        Instruction::AccountSet(_) | Instruction::EscrowCreate(_) => {
            return Err(ReviewError::unhandled_instruction_type(tx_type.as_str()));
        }
    };

    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_support::StaticEnrichment;
    use crate::types::{
        AccountId, AccountSet, Currency, EscrowCreate, LedgerAmount, LedgerValue, OfferCancel,
        OfferCreate, OfferFlags,
    };
    use rstest::rstest;

    fn account(s: &str) -> AccountId {
        AccountId::parse(s).unwrap()
    }

    fn xrp(v: &str) -> LedgerAmount {
        LedgerAmount::native(LedgerValue::parse(v).unwrap())
    }

    fn snapshot() -> AccountSnapshot {
        AccountSnapshot::new(account("rSOURCE"), vec![], LedgerValue::parse("100").unwrap())
    }

    #[rstest]
    #[case::offer_create(InstructionType::OfferCreate, Some(TemplateKind::OfferCreate))]
    #[case::offer_cancel(InstructionType::OfferCancel, Some(TemplateKind::OfferCancel))]
    #[case::payment(InstructionType::Payment, Some(TemplateKind::Payment))]
    #[case::trust_set(InstructionType::TrustSet, Some(TemplateKind::TrustSet))]
    #[case::account_set(InstructionType::AccountSet, None)]
    #[case::escrow_create(InstructionType::EscrowCreate, None)]
    fn test_select_template(#[case] tx_type: InstructionType, #[case] expected: Option<TemplateKind>) {
        assert_eq!(select_template(tx_type).ok(), expected);
    }

    #[test]
    fn test_every_type_selects_or_fails_explicitly() {
        for tx_type in InstructionType::ALL {
            match select_template(tx_type) {
                Ok(_) => {}
                Err(ReviewError::UnhandledInstructionType { tx_type: name }) => {
                    assert_eq!(name, tx_type.as_str());
                }
                Err(other) => panic!("unexpected error for {}: {}", tx_type, other),
            }
        }
    }

    #[test]
    fn test_dispatch_offer_create() {
        let instruction = Instruction::OfferCreate(OfferCreate {
            account: account("rSOURCE"),
            taker_gets: xrp("1"),
            taker_pays: xrp("2"),
            flags: OfferFlags::default(),
            expiration: None,
            offer_sequence: None,
        });

        let template =
            dispatch(instruction, &snapshot(), Arc::new(StaticEnrichment::default())).unwrap();
        assert_eq!(template.kind(), TemplateKind::OfferCreate);
        assert_eq!(template.render().len(), 2);
    }

    #[test]
    fn test_dispatch_offer_cancel() {
        let instruction = Instruction::OfferCancel(OfferCancel {
            account: account("rSOURCE"),
            offer_sequence: 3,
        });

        let template =
            dispatch(instruction, &snapshot(), Arc::new(StaticEnrichment::default())).unwrap();
        assert_eq!(template.kind(), TemplateKind::OfferCancel);
        assert!(template.state().is_settled());
    }

    #[rstest]
    #[case::account_set(Instruction::AccountSet(AccountSet { account: account("rSOURCE") }), "AccountSet")]
    #[case::escrow_create(
        Instruction::EscrowCreate(EscrowCreate {
            account: account("rSOURCE"),
            destination: account("rDEST"),
            amount: xrp("5"),
        }),
        "EscrowCreate"
    )]
    fn test_dispatch_unhandled_type(#[case] instruction: Instruction, #[case] tx_type: &str) {
        let service = Arc::new(StaticEnrichment::default());
        let result = dispatch(instruction, &snapshot(), service.clone());

        assert_eq!(
            result.unwrap_err(),
            ReviewError::unhandled_instruction_type(tx_type)
        );
        assert_eq!(service.profile_calls() + service.fee_calls(), 0);
    }

    #[test]
    fn test_dispatch_issued_offer_without_runtime() {
        let usd = LedgerAmount::issued(
            LedgerValue::parse("5").unwrap(),
            Currency::parse("USD").unwrap(),
            account("rISSUER"),
        )
        .unwrap();
        let instruction = Instruction::OfferCreate(OfferCreate {
            account: account("rSOURCE"),
            taker_gets: usd,
            taker_pays: xrp("2"),
            flags: OfferFlags::default(),
            expiration: None,
            offer_sequence: None,
        });

        let template =
            dispatch(instruction, &snapshot(), Arc::new(StaticEnrichment::default())).unwrap();
        assert_eq!(template.kind(), TemplateKind::OfferCreate);
        assert!(template.state().is_settled());
    }

    #[tokio::test]
    async fn test_dispatched_template_settles_through_enum() {
        let usd = LedgerAmount::issued(
            LedgerValue::parse("5").unwrap(),
            Currency::parse("USD").unwrap(),
            account("rISSUER"),
        )
        .unwrap();
        let instruction = Instruction::OfferCreate(OfferCreate {
            account: account("rSOURCE"),
            taker_gets: usd,
            taker_pays: xrp("2"),
            flags: OfferFlags::default(),
            expiration: None,
            offer_sequence: None,
        });

        let mut template =
            dispatch(instruction, &snapshot(), Arc::new(StaticEnrichment::default())).unwrap();
        template.session_mut().settle().await;
        assert!(template.state().is_settled());
    }
}
