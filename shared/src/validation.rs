//! Input validation functions
//!
//! This module parses raw form-field text into validated numbers.
//! Every measurement the calculators accept must be a finite number
//! strictly greater than zero; anything else is an [`InputError`].

use crate::errors::InputError;

/// User-facing field labels, used in validation errors and notices
pub const FIELD_HEIGHT: &str = "Height";
pub const FIELD_WEIGHT: &str = "Weight";
pub const FIELD_AGE: &str = "Age";

/// Parse a raw text field as a strictly positive finite number
///
/// Non-finite values (NaN, ±inf) count as "not a number": the text
/// `"NaN"` parses as `f64` but is never a valid measurement.
pub fn parse_positive(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Missing { field });
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber { field })?;
    if !value.is_finite() {
        return Err(InputError::NotANumber { field });
    }
    if value <= 0.0 {
        return Err(InputError::NotPositive { field });
    }
    Ok(value)
}
