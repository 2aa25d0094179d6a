use std::str::FromStr;

use rust_decimal::Decimal;

/// Converts text-field contents to a decimal.
///
/// Malformed input means the field is currently absent, not that something
/// went wrong: the user is mid-edit and validation will simply report the
/// ticket as not yet submittable.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text.trim()).ok()
}
