//! Brazilian-real amounts.
//!
//! The carrier writes prices with `.` as the thousands separator and `,`
//! as the decimal separator (`1.234,56`). Amounts are held as [`Decimal`]
//! so totals never pick up binary floating-point error.

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::error::ValidationError;

/// Parse a Brazilian-formatted amount such as `"1.234,56"` or `"19,80"`.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidAmount`] if the text is empty or not
/// a number once separators are normalized.
pub fn parse_brl(raw: &str) -> Result<Decimal, ValidationError> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix("R$").unwrap_or(trimmed).trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidAmount(raw.to_string()));
    }

    let normalized: String = trimmed
        .chars()
        .filter(|c| *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    Decimal::from_str(&normalized).map_err(|_| ValidationError::InvalidAmount(raw.to_string()))
}

/// Format an amount with two places and a comma separator, no thousands
/// grouping: `1234,5` → `"1234,50"`. Half-cent amounts round away from
/// zero (`19,805` → `"19,81"`).
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}").replace('.', ",")
}

/// Display form with the currency symbol: `"R$ 1234,50"`.
pub fn display_brl(amount: Decimal) -> String {
    format!("R$ {}", format_brl(amount))
}
