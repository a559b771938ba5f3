//! Shared input-parsing helpers.

use std::str::FromStr;

use num_traits::Zero;
use rust_decimal::Decimal;

/// Parses a monetary amount from raw form input, tolerating sloppy
/// formatting. Unparsable input falls back to ZERO (permissive policy,
/// not a failure) after logging the parse errors.
pub fn parse_amount_lenient(value_str: &str, field_name: &str) -> Decimal {
    let trimmed = value_str.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    match Decimal::from_str(trimmed) {
        Ok(d) => d,
        Err(e_decimal) => match Decimal::from_scientific(trimmed) {
            Ok(d) => d,
            Err(e_scientific) => {
                log::error!(
                    "Failed to parse {} '{}': as Decimal (err: {}), and as scientific (err: {}). Falling back to ZERO.",
                    field_name, trimmed, e_decimal, e_scientific
                );
                Decimal::ZERO
            }
        },
    }
}

/// Parses a strictly positive monetary amount. `None` means the input
/// is unparsable or non-positive; the caller decides how to report it.
pub fn parse_positive_amount(value_str: &str) -> Option<Decimal> {
    let parsed = Decimal::from_str(value_str.trim())
        .or_else(|_| Decimal::from_scientific(value_str.trim()));
    match parsed {
        Ok(amount) if amount > Decimal::zero() => Some(amount),
        _ => None,
    }
}

/// Splits comma-separated form input into trimmed, non-empty entries.
pub fn split_comma_separated(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
