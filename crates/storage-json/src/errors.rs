//! Storage-specific error types for JSON file operations.
//!
//! These wrap I/O and serde errors and convert them to the store-agnostic
//! error types defined in `glampsite_core`.

use glampsite_core::errors::{Error, StoreError};
use thiserror::Error;

/// Storage-specific errors.
///
/// Internal to the storage layer; converted to `glampsite_core::Error`
/// before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Collection file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Collection file is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed record: {0}")]
    Malformed(String),

    #[error("Collection writer stopped")]
    WriterStopped,
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Io(e) => Error::Store(StoreError::Unavailable(e.to_string())),
            StorageError::Serialization(e) => Error::Store(StoreError::Malformed(e.to_string())),
            StorageError::Malformed(e) => Error::Store(StoreError::Malformed(e)),
            StorageError::WriterStopped => Error::Store(StoreError::Unavailable(
                "collection writer is not running".to_string(),
            )),
        }
    }
}

/// Extension trait for converting storage Results to core Results.
pub trait IntoCore<T> {
    fn into_core(self) -> glampsite_core::Result<T>;
}

impl<T> IntoCore<T> for std::result::Result<T, StorageError> {
    fn into_core(self) -> glampsite_core::Result<T> {
        self.map_err(Error::from)
    }
}
