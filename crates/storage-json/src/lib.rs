//! JSON file storage implementation for the glamping site console.
//!
//! This crate implements the repository traits defined in `glampsite-core`
//! on top of three flat JSON array files and contains:
//! - Collection file loading and atomic persistence
//! - A single-writer actor per collection
//! - Wire models carrying the persisted field names
//! - Repository implementations for customers, units and reservations
//!
//! # Architecture
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-json (this crate)
//!              │
//!              ▼
//!  clientes.json  glampings.json  reservas.json
//! ```

pub mod errors;
pub mod store;

// Repository implementations
pub mod customers;
pub mod reservations;
pub mod units;

use std::sync::Arc;

pub use errors::StorageError;
pub use store::{
    init, spawn_writer, JsonCollection, JsonStoreConfig, WireRecord, WriteHandle,
    CUSTOMERS_FILE, RESERVATIONS_FILE, UNITS_FILE,
};

// Re-export from glampsite-core for convenience
pub use glampsite_core::errors::{Error, Result, StoreError};

/// The three repositories over one data directory.
pub struct JsonRepositories {
    pub customers: Arc<customers::CustomerRepository>,
    pub units: Arc<units::UnitRepository>,
    pub reservations: Arc<reservations::ReservationRepository>,
}

/// Opens every collection under `config.data_dir` and starts their writers.
///
/// Must be called from within a Tokio runtime.
pub fn open_repositories(config: &JsonStoreConfig) -> Result<JsonRepositories> {
    init(config)?;
    Ok(JsonRepositories {
        customers: Arc::new(customers::CustomerRepository::open(config)),
        units: Arc::new(units::UnitRepository::open(config)),
        reservations: Arc::new(reservations::ReservationRepository::open(config)),
    })
}
