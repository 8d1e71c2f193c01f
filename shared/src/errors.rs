//! Error types for the FitCalc calculators

use thiserror::Error;

/// Input validation error for a single form field
///
/// `field` is the user-facing field label, so `Display` output can be
/// shown directly in a notice.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} must be a number")]
    NotANumber { field: &'static str },

    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
}

impl InputError {
    /// The field label the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            InputError::Missing { field }
            | InputError::NotANumber { field }
            | InputError::NotPositive { field } => field,
        }
    }
}
