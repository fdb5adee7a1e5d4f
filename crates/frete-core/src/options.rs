//! Extra services requested with a quote.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Hand delivery, declared value, and receipt notice.
///
/// The declared value is passed through to the carrier unchanged; no
/// insurance computation happens here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "QuoteOptionsRecord")]
pub struct QuoteOptions {
    hand_delivery: bool,
    declared_value: Decimal,
    receipt_notice: bool,
}

impl QuoteOptions {
    /// # Errors
    ///
    /// Returns [`ValidationError::NegativeDeclaredValue`] if
    /// `declared_value < 0`.
    pub fn new(
        hand_delivery: bool,
        declared_value: Decimal,
        receipt_notice: bool,
    ) -> Result<Self, ValidationError> {
        if declared_value < Decimal::ZERO {
            return Err(ValidationError::NegativeDeclaredValue(
                declared_value.to_string(),
            ));
        }
        Ok(Self {
            hand_delivery,
            declared_value,
            receipt_notice,
        })
    }

    pub fn hand_delivery(&self) -> bool {
        self.hand_delivery
    }

    pub fn declared_value(&self) -> Decimal {
        self.declared_value
    }

    pub fn receipt_notice(&self) -> bool {
        self.receipt_notice
    }
}

#[derive(Debug, Deserialize)]
struct QuoteOptionsRecord {
    #[serde(default)]
    hand_delivery: bool,
    #[serde(default)]
    declared_value: Decimal,
    #[serde(default)]
    receipt_notice: bool,
}

impl TryFrom<QuoteOptionsRecord> for QuoteOptions {
    type Error = ValidationError;

    fn try_from(record: QuoteOptionsRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.hand_delivery,
            record.declared_value,
            record.receipt_notice,
        )
    }
}

/// Carrier flag encoding: `s` (sim) or `n` (não).
pub fn yes_no(flag: bool) -> &'static str {
    if flag {
        "s"
    } else {
        "n"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_off() {
        let opts = QuoteOptions::default();
        assert!(!opts.hand_delivery());
        assert!(!opts.receipt_notice());
        assert_eq!(opts.declared_value(), Decimal::ZERO);
    }

    #[test]
    fn rejects_negative_declared_value() {
        assert!(matches!(
            QuoteOptions::new(false, Decimal::new(-1, 0), false),
            Err(ValidationError::NegativeDeclaredValue(_))
        ));
    }

    #[test]
    fn yes_no_mapping() {
        assert_eq!(yes_no(true), "s");
        assert_eq!(yes_no(false), "n");
    }

    #[test]
    fn deserialize_rejects_non_boolean_flag() {
        let bad = serde_json::from_str::<QuoteOptions>(r#"{"hand_delivery": "maybe"}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn deserialize_with_defaults() {
        let opts: QuoteOptions =
            serde_json::from_str(r#"{"declared_value": "150.50", "receipt_notice": true}"#)
                .unwrap();
        assert_eq!(opts.declared_value(), Decimal::new(15050, 2));
        assert!(opts.receipt_notice());
        assert!(!opts.hand_delivery());
    }
}
