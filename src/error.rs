//! Error types for the contact book.
//!
//! This module defines the crate-level error type using `thiserror` for
//! precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when manipulating records and the address book.
#[derive(Error, Debug)]
pub enum BookError {
    /// A value failed domain validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The phone number being edited is not in the record
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;
