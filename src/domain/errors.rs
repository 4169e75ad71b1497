//! Domain validation errors.
//!
//! This module defines the validation error type using `thiserror` for
//! precise error handling.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
///
/// Validation failure is the only hard error in this crate. Absent-target
/// situations (removing or editing a phone that is not present, looking up
/// an unknown contact) are normal outcomes and surface as no-ops, `Option`,
/// or `bool` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is not exactly 10 ASCII digits.
    #[error("invalid phone number {0:?}: must be exactly 10 digits")]
    InvalidPhone(String),
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
