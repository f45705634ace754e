//! Glampsite Core - Domain entities, the reservation engine, and service traits.
//!
//! This crate contains the business logic for the glamping site console.
//! It is storage-agnostic and defines repository traits that are implemented
//! by the `storage-json` crate.

pub mod constants;
pub mod customers;
pub mod errors;
pub mod records;
pub mod reservations;
pub mod units;
pub mod utils;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

#[cfg(test)]
mod test_support;
