//! Instruction-related types for the review engine
//!
//! This module defines the decoded ledger instructions that can be presented
//! for review. Instructions are immutable once decoded: review templates read
//! them and never modify them.

use super::amount::{AccountId, LedgerAmount};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

use super::error::ReviewError;

/// Seconds between the Unix epoch and the ledger epoch (2000-01-01T00:00:00Z)
pub const LEDGER_EPOCH_OFFSET: i64 = 946_684_800;

/// Instruction type tags the decoder can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionType {
    /// Place an offer on the decentralized exchange
    OfferCreate,
    /// Remove a previously placed offer
    OfferCancel,
    /// Send an amount to another account
    Payment,
    /// Create or modify a trust line
    TrustSet,
    /// Modify account settings
    AccountSet,
    /// Lock native funds until a condition or time
    EscrowCreate,
}

impl InstructionType {
    /// Every tag, in declaration order
    pub const ALL: [InstructionType; 6] = [
        InstructionType::OfferCreate,
        InstructionType::OfferCancel,
        InstructionType::Payment,
        InstructionType::TrustSet,
        InstructionType::AccountSet,
        InstructionType::EscrowCreate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            InstructionType::OfferCreate => "OfferCreate",
            InstructionType::OfferCancel => "OfferCancel",
            InstructionType::Payment => "Payment",
            InstructionType::TrustSet => "TrustSet",
            InstructionType::AccountSet => "AccountSet",
            InstructionType::EscrowCreate => "EscrowCreate",
        }
    }
}

impl FromStr for InstructionType {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InstructionType::ALL
            .into_iter()
            .find(|tx_type| tx_type.as_str() == s)
            .ok_or_else(|| ReviewError::parse(format!("Unknown transaction type '{}'", s)))
    }
}

impl fmt::Display for InstructionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point in time expressed in seconds since the ledger epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LedgerTime(pub u32);

impl LedgerTime {
    /// Convert to a UTC timestamp
    pub fn to_utc(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(LEDGER_EPOCH_OFFSET + i64::from(self.0), 0)
    }
}

/// Flags of an offer-creation instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OfferFlags(pub u32);

impl OfferFlags {
    pub const PASSIVE: u32 = 0x0001_0000;
    pub const IMMEDIATE_OR_CANCEL: u32 = 0x0002_0000;
    pub const FILL_OR_KILL: u32 = 0x0004_0000;
    pub const SELL: u32 = 0x0008_0000;

    pub fn bits(&self) -> u32 {
        self.0
    }

    /// Offer does not consume offers that exactly match it
    pub fn passive(&self) -> bool {
        self.0 & Self::PASSIVE != 0
    }

    pub fn immediate_or_cancel(&self) -> bool {
        self.0 & Self::IMMEDIATE_OR_CANCEL != 0
    }

    pub fn fill_or_kill(&self) -> bool {
        self.0 & Self::FILL_OR_KILL != 0
    }

    /// Exchange the entire TakerGets amount, even for more than TakerPays
    pub fn sell(&self) -> bool {
        self.0 & Self::SELL != 0
    }

    /// Names of the execution modes set, in flag order
    pub fn execution_modes(&self) -> Vec<&'static str> {
        [
            (self.passive(), "Passive"),
            (self.immediate_or_cancel(), "Immediate or cancel"),
            (self.fill_or_kill(), "Fill or kill"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}

/// Exchange offer creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferCreate {
    /// Account placing the offer
    pub account: AccountId,

    /// Amount the offer creator gives away
    pub taker_gets: LedgerAmount,

    /// Amount the offer creator wants in return
    pub taker_pays: LedgerAmount,

    pub flags: OfferFlags,

    /// Time after which the offer is no longer active
    pub expiration: Option<LedgerTime>,

    /// Sequence of an existing offer this one replaces
    pub offer_sequence: Option<u32>,
}

impl OfferCreate {
    pub fn sell(&self) -> bool {
        self.flags.sell()
    }
}

/// Exchange offer removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfferCancel {
    pub account: AccountId,

    /// Sequence of the offer to remove
    pub offer_sequence: u32,
}

/// Payment to another account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    pub account: AccountId,
    pub destination: AccountId,

    /// Amount delivered to the destination
    pub amount: LedgerAmount,

    /// Upper bound of what the source spends, for cross-currency payments
    pub send_max: Option<LedgerAmount>,

    pub destination_tag: Option<u32>,
}

impl Payment {
    /// Amount leaving the source account
    pub fn disposed_amount(&self) -> &LedgerAmount {
        self.send_max.as_ref().unwrap_or(&self.amount)
    }
}

/// Trust line creation or modification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustSet {
    pub account: AccountId,

    /// Maximum balance accepted from the issuer
    pub limit_amount: LedgerAmount,
}

/// Account settings change
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSet {
    pub account: AccountId,
}

/// Native funds escrow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscrowCreate {
    pub account: AccountId,
    pub destination: AccountId,
    pub amount: LedgerAmount,
}

/// Decoded ledger instruction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    OfferCreate(OfferCreate),
    OfferCancel(OfferCancel),
    Payment(Payment),
    TrustSet(TrustSet),
    AccountSet(AccountSet),
    EscrowCreate(EscrowCreate),
}

impl Instruction {
    pub fn instruction_type(&self) -> InstructionType {
        match self {
            Instruction::OfferCreate(_) => InstructionType::OfferCreate,
            Instruction::OfferCancel(_) => InstructionType::OfferCancel,
            Instruction::Payment(_) => InstructionType::Payment,
            Instruction::TrustSet(_) => InstructionType::TrustSet,
            Instruction::AccountSet(_) => InstructionType::AccountSet,
            Instruction::EscrowCreate(_) => InstructionType::EscrowCreate,
        }
    }

    /// Account that signs the instruction
    pub fn account(&self) -> &AccountId {
        match self {
            Instruction::OfferCreate(tx) => &tx.account,
            Instruction::OfferCancel(tx) => &tx.account,
            Instruction::Payment(tx) => &tx.account,
            Instruction::TrustSet(tx) => &tx.account,
            Instruction::AccountSet(tx) => &tx.account,
            Instruction::EscrowCreate(tx) => &tx.account,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_instruction_type_round_trips_through_str() {
        for tx_type in InstructionType::ALL {
            assert_eq!(tx_type.as_str().parse::<InstructionType>().unwrap(), tx_type);
        }
    }

    #[test]
    fn test_unknown_instruction_type() {
        assert!(matches!(
            "AMMDeposit".parse::<InstructionType>(),
            Err(ReviewError::ParseError { .. })
        ));
    }

    #[rstest]
    #[case::none(0, false, false, false, false)]
    #[case::sell(0x0008_0000, false, false, false, true)]
    #[case::passive_sell(0x0009_0000, true, false, false, true)]
    #[case::ioc(0x0002_0000, false, true, false, false)]
    #[case::fok_with_universal(0x8004_0000, false, false, true, false)]
    fn test_offer_flags(
        #[case] bits: u32,
        #[case] passive: bool,
        #[case] ioc: bool,
        #[case] fok: bool,
        #[case] sell: bool,
    ) {
        let flags = OfferFlags(bits);
        assert_eq!(flags.passive(), passive);
        assert_eq!(flags.immediate_or_cancel(), ioc);
        assert_eq!(flags.fill_or_kill(), fok);
        assert_eq!(flags.sell(), sell);
    }

    #[test]
    fn test_execution_modes_ignore_sell() {
        assert!(OfferFlags(OfferFlags::SELL).execution_modes().is_empty());
        assert_eq!(
            OfferFlags(OfferFlags::PASSIVE | OfferFlags::FILL_OR_KILL | OfferFlags::SELL)
                .execution_modes(),
            ["Passive", "Fill or kill"]
        );
    }

    #[rstest]
    #[case::epoch(0, "2000-01-01T00:00:00+00:00")]
    #[case::one_day(86_400, "2000-01-02T00:00:00+00:00")]
    #[case::later(757_382_400, "2024-01-01T00:00:00+00:00")]
    fn test_ledger_time_to_utc(#[case] seconds: u32, #[case] expected: &str) {
        assert_eq!(LedgerTime(seconds).to_utc().unwrap().to_rfc3339(), expected);
    }
}
