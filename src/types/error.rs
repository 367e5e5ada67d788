//! Error types for the review engine
//!
//! This module defines the errors that can occur while decoding instructions,
//! loading account data and dispatching an instruction to its review template.
//!
//! # Error Categories
//!
//! - **Dispatch Errors**: an instruction type with no review template. This is
//!   the only error allowed to abort a review.
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Decoding Errors**: malformed JSON/CSV, missing fields, invalid amounts,
//!   currencies or account identifiers.
//! - **Lookup Errors**: enrichment failures. These never leave a review
//!   template; they are downgraded to "no result".

use thiserror::Error;

/// Main error type for the review engine
///
/// Each variant includes relevant context to help diagnose the failure.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReviewError {
    /// Instruction type has no review template
    ///
    /// This is fatal for the dispatch attempt and is surfaced to the caller
    /// instead of rendering a default view.
    #[error("No review template for instruction type '{tx_type}'")]
    UnhandledInstructionType {
        /// The instruction type tag
        tx_type: String,
    },

    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// JSON or CSV parsing error
    #[error("Parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// A field required by the instruction type is absent
    #[error("{tx_type} instruction requires field {field}")]
    MissingField {
        /// Instruction type being decoded
        tx_type: String,
        /// Name of the missing field
        field: String,
    },

    /// Amount value is not a decimal number
    #[error("Invalid amount '{amount}'")]
    InvalidAmount {
        /// The invalid amount string
        amount: String,
    },

    /// Currency code is neither the native sentinel, a 3-character code nor
    /// a 40-digit hex code
    #[error("Invalid currency code '{currency}'")]
    InvalidCurrency {
        /// The invalid currency code
        currency: String,
    },

    /// Non-native amount without an issuer
    #[error("Currency {currency} requires an issuer")]
    MissingIssuer {
        /// The issued currency code
        currency: String,
    },

    /// Native amount carrying an issuer
    #[error("Native currency cannot have an issuer")]
    UnexpectedIssuer,

    /// Account identifier is malformed
    #[error("Invalid account '{account}'")]
    InvalidAccount {
        /// The invalid account string
        account: String,
    },
}

/// Failure of a single enrichment lookup
///
/// Enrichment is best-effort: review templates downgrade every `LookupError`
/// to an absent result and clear the matching loading flag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The service could not be reached
    #[error("network error: {0}")]
    Network(String),

    /// The account does not exist on the ledger
    #[error("account {0} not found")]
    NotFound(String),

    /// The service answered with data that could not be interpreted
    #[error("malformed response: {0}")]
    Malformed(String),
}

// Conversion from io::Error to ReviewError
impl From<std::io::Error> for ReviewError {
    fn from(error: std::io::Error) -> Self {
        ReviewError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to ReviewError
impl From<csv::Error> for ReviewError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        ReviewError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Conversion from serde_json::Error to ReviewError
impl From<serde_json::Error> for ReviewError {
    fn from(error: serde_json::Error) -> Self {
        let line = match error.line() {
            0 => None,
            line => Some(line as u64),
        };

        ReviewError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ReviewError {
    /// Create an UnhandledInstructionType error
    pub fn unhandled_instruction_type(tx_type: &str) -> Self {
        ReviewError::UnhandledInstructionType {
            tx_type: tx_type.to_string(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        ReviewError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a ParseError without line information
    pub fn parse(message: impl Into<String>) -> Self {
        ReviewError::ParseError {
            line: None,
            message: message.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(tx_type: &str, field: &str) -> Self {
        ReviewError::MissingField {
            tx_type: tx_type.to_string(),
            field: field.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str) -> Self {
        ReviewError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Create an InvalidCurrency error
    pub fn invalid_currency(currency: &str) -> Self {
        ReviewError::InvalidCurrency {
            currency: currency.to_string(),
        }
    }

    /// Create a MissingIssuer error
    pub fn missing_issuer(currency: &str) -> Self {
        ReviewError::MissingIssuer {
            currency: currency.to_string(),
        }
    }

    /// Create an InvalidAccount error
    pub fn invalid_account(account: &str) -> Self {
        ReviewError::InvalidAccount {
            account: account.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::unhandled(
        ReviewError::UnhandledInstructionType { tx_type: "AccountSet".to_string() },
        "No review template for instruction type 'AccountSet'"
    )]
    #[case::file_not_found(
        ReviewError::FileNotFound { path: "offer.json".to_string() },
        "File not found: offer.json"
    )]
    #[case::io_error(
        ReviewError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        ReviewError::ParseError { line: Some(3), message: "expected value".to_string() },
        "Parse error at line 3: expected value"
    )]
    #[case::parse_error_without_line(
        ReviewError::ParseError { line: None, message: "expected value".to_string() },
        "Parse error: expected value"
    )]
    #[case::missing_field(
        ReviewError::MissingField { tx_type: "OfferCreate".to_string(), field: "TakerGets".to_string() },
        "OfferCreate instruction requires field TakerGets"
    )]
    #[case::invalid_amount(
        ReviewError::InvalidAmount { amount: "ten".to_string() },
        "Invalid amount 'ten'"
    )]
    #[case::invalid_currency(
        ReviewError::InvalidCurrency { currency: "US".to_string() },
        "Invalid currency code 'US'"
    )]
    #[case::missing_issuer(
        ReviewError::MissingIssuer { currency: "USD".to_string() },
        "Currency USD requires an issuer"
    )]
    #[case::unexpected_issuer(ReviewError::UnexpectedIssuer, "Native currency cannot have an issuer")]
    fn test_error_display(#[case] error: ReviewError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::unhandled(
        ReviewError::unhandled_instruction_type("EscrowCreate"),
        ReviewError::UnhandledInstructionType { tx_type: "EscrowCreate".to_string() }
    )]
    #[case::missing_field(
        ReviewError::missing_field("Payment", "Destination"),
        ReviewError::MissingField { tx_type: "Payment".to_string(), field: "Destination".to_string() }
    )]
    #[case::invalid_account(
        ReviewError::invalid_account("xyz"),
        ReviewError::InvalidAccount { account: "xyz".to_string() }
    )]
    fn test_helper_functions(#[case] result: ReviewError, #[case] expected: ReviewError) {
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case::network(LookupError::Network("timeout".to_string()), "network error: timeout")]
    #[case::not_found(LookupError::NotFound("rISSUER".to_string()), "account rISSUER not found")]
    #[case::malformed(LookupError::Malformed("rate".to_string()), "malformed response: rate")]
    fn test_lookup_error_display(#[case] error: LookupError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: ReviewError = io_error.into();
        assert!(matches!(error, ReviewError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_json_error_conversion_keeps_line() {
        let json_error = serde_json::from_str::<serde_json::Value>("{\n\"a\": }").unwrap_err();
        let error: ReviewError = json_error.into();
        assert!(matches!(error, ReviewError::ParseError { line: Some(2), .. }));
    }
}
