//! Plain-text review report
//!
//! One `Label: value` line per rendered field, after a header naming the
//! instruction type:
//!
//! ```text
//! Transaction type: OfferCreate
//! Issuer: rISSUER (Bitstamp)
//! Selling: 25 USD
//! In exchange you receive: 50 XRP
//! Issuer fee: 0.2%
//! ```

use crate::core::ReviewField;
use crate::types::{InstructionType, ReviewError};
use std::io::Write;

/// Write the rendered fields of one review
pub fn write_review_report(
    tx_type: InstructionType,
    fields: &[ReviewField],
    output: &mut dyn Write,
) -> Result<(), ReviewError> {
    writeln!(output, "Transaction type: {}", tx_type)?;
    for field in fields {
        writeln!(output, "{}: {}", field.label, field.value)?;
    }
    output.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FieldLabel, FieldValue};

    #[test]
    fn test_write_review_report() {
        let fields = vec![
            ReviewField::new(FieldLabel::OfferSequence, FieldValue::Integer(12)),
            ReviewField::new(FieldLabel::IssuerFee, FieldValue::Loading),
        ];
        let mut output = Vec::new();

        write_review_report(InstructionType::OfferCancel, &fields, &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Transaction type: OfferCancel\nOffer sequence: 12\nIssuer fee: Loading...\n"
        );
    }

    #[test]
    fn test_write_review_report_without_fields() {
        let mut output = Vec::new();
        write_review_report(InstructionType::Payment, &[], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "Transaction type: Payment\n");
    }
}
