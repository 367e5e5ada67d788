//! JSON format handling for ledger instructions
//!
//! Instructions arrive in the ledger's JSON form:
//!
//! ```json
//! {
//!   "TransactionType": "OfferCreate",
//!   "Account": "rSOURCE...",
//!   "TakerGets": "1000000",
//!   "TakerPays": { "currency": "USD", "issuer": "rISSUER...", "value": "10" },
//!   "Flags": 524288
//! }
//! ```
//!
//! Native amounts are strings of drops, issued amounts are objects.
//! `JsonInstruction` mirrors that shape; `convert_json_instruction` turns it
//! into a typed `Instruction`, checking the fields each type requires. Fields
//! the review does not use are ignored.

use crate::types::{
    AccountId, AccountSet, Currency, EscrowCreate, Instruction, InstructionType, LedgerAmount,
    LedgerTime, LedgerValue, OfferCancel, OfferCreate, OfferFlags, Payment, ReviewError, TrustSet,
};
use crate::io::read_input;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

/// Instruction as found in the ledger JSON
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct JsonInstruction {
    pub transaction_type: String,
    pub account: Option<String>,
    pub flags: Option<u32>,

    pub taker_gets: Option<JsonAmount>,
    pub taker_pays: Option<JsonAmount>,
    pub expiration: Option<u32>,
    pub offer_sequence: Option<u32>,

    pub destination: Option<String>,
    pub amount: Option<JsonAmount>,
    pub send_max: Option<JsonAmount>,
    pub destination_tag: Option<u32>,

    pub limit_amount: Option<JsonAmount>,
}

/// Amount as found in the ledger JSON
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum JsonAmount {
    /// Native amount in drops
    Drops(String),
    Issued {
        value: String,
        currency: String,
        issuer: Option<String>,
    },
}

/// Decode one instruction from its JSON text
pub fn decode_instruction(input: &str) -> Result<Instruction, ReviewError> {
    let json: JsonInstruction = serde_json::from_str(input)?;
    convert_json_instruction(json)
}

/// Read and decode the instruction stored at `path`
pub async fn read_instruction(path: &Path) -> Result<Instruction, ReviewError> {
    let input = read_input(path).await?;
    let json: JsonInstruction = serde_json::from_slice(&input)?;
    convert_json_instruction(json)
}

/// Convert a JsonInstruction into a typed Instruction
///
/// # Errors
///
/// - `ParseError` for an unknown `TransactionType`
/// - `MissingField` when a field the type requires is absent
/// - amount, currency and account errors from the typed constructors
pub fn convert_json_instruction(json: JsonInstruction) -> Result<Instruction, ReviewError> {
    let tx_type = InstructionType::from_str(&json.transaction_type)?;
    let account = parse_account(required(tx_type, "Account", json.account)?)?;

    let instruction = match tx_type {
        InstructionType::OfferCreate => Instruction::OfferCreate(OfferCreate {
            account,
            taker_gets: convert_amount(required(tx_type, "TakerGets", json.taker_gets)?)?,
            taker_pays: convert_amount(required(tx_type, "TakerPays", json.taker_pays)?)?,
            flags: OfferFlags(json.flags.unwrap_or_default()),
            expiration: json.expiration.map(LedgerTime),
            offer_sequence: json.offer_sequence,
        }),
        InstructionType::OfferCancel => Instruction::OfferCancel(OfferCancel {
            account,
            offer_sequence: required(tx_type, "OfferSequence", json.offer_sequence)?,
        }),
        InstructionType::Payment => Instruction::Payment(Payment {
            account,
            destination: parse_account(required(tx_type, "Destination", json.destination)?)?,
            amount: convert_amount(required(tx_type, "Amount", json.amount)?)?,
            send_max: json.send_max.map(convert_amount).transpose()?,
            destination_tag: json.destination_tag,
        }),
        InstructionType::TrustSet => Instruction::TrustSet(TrustSet {
            account,
            limit_amount: convert_amount(required(tx_type, "LimitAmount", json.limit_amount)?)?,
        }),
        InstructionType::AccountSet => Instruction::AccountSet(AccountSet { account }),
        InstructionType::EscrowCreate => Instruction::EscrowCreate(EscrowCreate {
            account,
            destination: parse_account(required(tx_type, "Destination", json.destination)?)?,
            amount: convert_amount(required(tx_type, "Amount", json.amount)?)?,
        }),
    };

    Ok(instruction)
}

/// Convert a JsonAmount into a LedgerAmount
///
/// Drops strings become native amounts in whole units. Objects are issued
/// amounts, except for the native sentinel which carries whole units and no
/// issuer.
pub fn convert_amount(json: JsonAmount) -> Result<LedgerAmount, ReviewError> {
    match json {
        JsonAmount::Drops(drops) => Ok(LedgerAmount::native(LedgerValue::from_drops(&drops)?)),
        JsonAmount::Issued {
            value,
            currency,
            issuer,
        } => {
            let value = LedgerValue::parse(&value)?;
            let currency = Currency::parse(&currency)?;
            let issuer = issuer.as_deref().map(parse_account).transpose()?;
            LedgerAmount::new(value, currency, issuer)
        }
    }
}

fn required<T>(tx_type: InstructionType, field: &str, value: Option<T>) -> Result<T, ReviewError> {
    value.ok_or_else(|| ReviewError::missing_field(tx_type.as_str(), field))
}

fn parse_account(account: impl AsRef<str>) -> Result<AccountId, ReviewError> {
    AccountId::parse(account.as_ref())
}
