//! Helpers for checking submitted form fields.
//!
//! Browsers omit unchecked or unnamed inputs entirely, so every field arrives
//! as an `Option<String>`. A field counts as present only when it holds
//! something other than whitespace.

use crate::error::CoreError;

/// Return the trimmed value of a required field, or `None` when it is
/// missing or blank.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Parse a monetary amount.
///
/// Accepts anything Rust parses as an `f64` once trimmed, except NaN and the
/// infinities.
pub fn parse_amount(raw: &str) -> Result<f64, CoreError> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| CoreError::Validation(format!("'{raw}' is not a number")))?;
    if !amount.is_finite() {
        return Err(CoreError::Validation(format!("'{raw}' is not a finite number")));
    }
    Ok(amount)
}
