//! Helpers for the decimal-as-text columns.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a stored amount, accepting scientific notation as a fallback.
///
/// Unparseable values are logged and read as zero.
pub fn parse_decimal_tolerant(value: &str, field_name: &str) -> Decimal {
    match Decimal::from_str(value) {
        Ok(d) => d,
        Err(e_decimal) => match Decimal::from_scientific(value) {
            Ok(d) => d,
            Err(e_scientific) => {
                log::error!(
                    "Failed to parse {} '{}': as Decimal (err: {}), and as scientific (err: {}). Falling back to ZERO.",
                    field_name, value, e_decimal, e_scientific
                );
                Decimal::ZERO
            }
        },
    }
}
