//! Core error types for the glamping site console.
//!
//! This module defines store-agnostic error types. Storage-specific errors
//! (file I/O, JSON decoding) are converted to these types by the storage layer.

use thiserror::Error;

use crate::reservations::ReservationError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the console.
///
/// Every variant is recoverable at the caller boundary: the operator is shown
/// the message and may retry.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Reservation rejected: {0}")]
    Reservation(#[from] ReservationError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl Error {
    /// True when the error means a record id did not resolve.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Store(StoreError::NotFound(_)))
    }
}

/// Store-agnostic error type for record store operations.
///
/// The storage layer converts its file and serialization errors into this
/// format so that services never see storage-specific types.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing collection could not be read or written.
    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    /// The backing collection was readable but held data that does not
    /// decode into typed records.
    #[error("Record store holds malformed data: {0}")]
    Malformed(String),

    /// The requested record was not found.
    #[error("Record not found: {0}")]
    NotFound(String),
}

/// Validation errors for caller input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}
