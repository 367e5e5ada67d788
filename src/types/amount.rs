//! Amount-related types for the review engine
//!
//! This module defines the value objects carried by decoded ledger
//! instructions: account identifiers, currencies, exact decimal values and
//! the amounts built from them.
//!
//! Values are held as arbitrary-precision decimals so that comparisons
//! between an instruction amount and a balance are exact, whatever the
//! magnitude or precision of the issued asset.

use super::error::ReviewError;
use bigdecimal::BigDecimal;
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Currency code of the ledger's built-in asset
pub const NATIVE_CURRENCY_CODE: &str = "XRP";

/// Number of decimal places between drops and whole native units
const DROPS_SCALE: u32 = 6;

/// Length of a non-standard (hex) currency code
const HEX_CURRENCY_LEN: usize = 40;

/// Symbols allowed in a 3-character standard currency code
const STANDARD_CODE_SYMBOLS: &str = "?!@#$%^&*<>(){}[]|";

/// Ledger account identifier
///
/// Classic addresses start with `r` followed by alphanumeric characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AccountId(String);

impl AccountId {
    /// Parse and validate an account identifier
    pub fn parse(account: &str) -> Result<Self, ReviewError> {
        let account = account.trim();
        let valid = account.len() >= 2
            && account.len() <= 35
            && account.starts_with('r')
            && account.chars().all(|c| c.is_ascii_alphanumeric());

        if valid {
            Ok(AccountId(account.to_string()))
        } else {
            Err(ReviewError::invalid_account(account))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccountId {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AccountId::parse(s)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Currency of a ledger amount
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Currency {
    /// The ledger's built-in asset, never issued
    Native,
    /// An issued currency: a 3-character standard code or 40 hex digits
    Issued(String),
}

impl Currency {
    /// Parse a currency code
    ///
    /// Hex codes are stored upper-cased so that lookups by
    /// (issuer, currency) are insensitive to the case used by the decoder.
    pub fn parse(code: &str) -> Result<Self, ReviewError> {
        let code = code.trim();

        if code == NATIVE_CURRENCY_CODE {
            return Ok(Currency::Native);
        }

        if code.len() == 3
            && code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || STANDARD_CODE_SYMBOLS.contains(c))
        {
            return Ok(Currency::Issued(code.to_string()));
        }

        if code.len() == HEX_CURRENCY_LEN && code.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(Currency::Issued(code.to_ascii_uppercase()));
        }

        Err(ReviewError::invalid_currency(code))
    }

    /// The code as it appears on the ledger
    pub fn code(&self) -> &str {
        match self {
            Currency::Native => NATIVE_CURRENCY_CODE,
            Currency::Issued(code) => code,
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Currency::Native)
    }

    /// Human-readable form of the code, see [`normalize_currency_code`]
    pub fn display_code(&self) -> String {
        normalize_currency_code(self.code())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Convert a ledger currency code into its display form
///
/// - 3-character codes are returned unchanged
/// - 40-digit hex codes are decoded; NUL padding is stripped and the text is
///   used when it is printable ASCII
/// - hex codes whose first byte is `0x03` are AMM pool tokens (`LP Token`)
/// - anything else is returned as-is
pub fn normalize_currency_code(code: &str) -> String {
    if code.len() != HEX_CURRENCY_LEN {
        return code.to_string();
    }

    let bytes = match hex::decode(code) {
        Ok(bytes) => bytes,
        Err(_) => return code.to_string(),
    };

    if bytes.first() == Some(&0x03) {
        return "LP Token".to_string();
    }

    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|b| *b != 0).map_or(start, |i| i + 1);
    let text = &bytes[start..end];

    if !text.is_empty() && text.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
        String::from_utf8_lossy(text).trim().to_string()
    } else {
        code.to_string()
    }
}

/// Exact decimal value of an amount or balance
///
/// Keeps the decoded string for display and an arbitrary-precision decimal
/// for comparison. Equality and ordering are numeric: `"50"` equals
/// `"50.000"` and `"1e2"` equals `"100"`.
#[derive(Debug, Clone)]
pub struct LedgerValue {
    raw: String,
    value: BigDecimal,
}

impl LedgerValue {
    /// Parse a decimal string, exponent notation included
    pub fn parse(value: &str) -> Result<Self, ReviewError> {
        let raw = value.trim();
        let parsed = BigDecimal::from_str(raw).map_err(|_| ReviewError::invalid_amount(raw))?;

        Ok(LedgerValue {
            raw: raw.to_string(),
            value: parsed,
        })
    }

    /// Parse a native amount expressed in drops into whole native units
    ///
    /// `"1500000"` drops becomes `1.5`. Drops are integers: anything other
    /// than ASCII digits is rejected.
    pub fn from_drops(drops: &str) -> Result<Self, ReviewError> {
        let trimmed = drops.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ReviewError::invalid_amount(trimmed));
        }

        let mut value =
            Decimal::from_str(trimmed).map_err(|_| ReviewError::invalid_amount(trimmed))?;

        value
            .set_scale(DROPS_SCALE)
            .map_err(|_| ReviewError::invalid_amount(trimmed))?;

        LedgerValue::parse(&value.normalize().to_string())
    }

    /// Wrap a computed decimal
    pub fn from_decimal(value: BigDecimal) -> Self {
        LedgerValue {
            raw: value.to_string(),
            value,
        }
    }

    pub fn zero() -> Self {
        LedgerValue::from_decimal(BigDecimal::from(0))
    }

    /// The value as decoded, for display
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn as_decimal(&self) -> &BigDecimal {
        &self.value
    }

    pub fn is_negative(&self) -> bool {
        self.value < BigDecimal::from(0)
    }
}

impl FromStr for LedgerValue {
    type Err = ReviewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LedgerValue::parse(s)
    }
}

impl PartialEq for LedgerValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for LedgerValue {}

impl PartialOrd for LedgerValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LedgerValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for LedgerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Ledger amount: value, currency and issuer
///
/// Invariant: the issuer is present if and only if the currency is issued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerAmount {
    value: LedgerValue,
    currency: Currency,
    issuer: Option<AccountId>,
}

impl LedgerAmount {
    /// Build an amount, enforcing the issuer invariant
    pub fn new(
        value: LedgerValue,
        currency: Currency,
        issuer: Option<AccountId>,
    ) -> Result<Self, ReviewError> {
        match (&currency, &issuer) {
            (Currency::Native, Some(_)) => Err(ReviewError::UnexpectedIssuer),
            (Currency::Issued(code), None) => Err(ReviewError::missing_issuer(code)),
            _ => Ok(LedgerAmount {
                value,
                currency,
                issuer,
            }),
        }
    }

    /// Amount of the native asset
    pub fn native(value: LedgerValue) -> Self {
        LedgerAmount {
            value,
            currency: Currency::Native,
            issuer: None,
        }
    }

    /// Amount of an issued asset
    pub fn issued(
        value: LedgerValue,
        currency: Currency,
        issuer: AccountId,
    ) -> Result<Self, ReviewError> {
        LedgerAmount::new(value, currency, Some(issuer))
    }

    pub fn value(&self) -> &LedgerValue {
        &self.value
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    pub fn issuer(&self) -> Option<&AccountId> {
        self.issuer.as_ref()
    }

    pub fn is_native(&self) -> bool {
        self.currency.is_native()
    }
}

impl fmt::Display for LedgerAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.currency.display_code())
    }
}
