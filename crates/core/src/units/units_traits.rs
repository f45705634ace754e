//! Unit repository and service traits.

use async_trait::async_trait;

use super::units_model::{NewUnit, Unit};
use crate::errors::Result;

/// Trait defining the contract for unit persistence.
#[async_trait]
pub trait UnitRepositoryTrait: Send + Sync {
    /// Loads every unit in stored order. A missing collection loads as empty.
    fn load_all(&self) -> Result<Vec<Unit>>;

    /// Retrieves a unit by its id.
    fn get_by_id(&self, unit_id: i64) -> Result<Unit>;

    /// Inserts or replaces a unit, assigning an id when absent.
    async fn upsert(&self, unit: NewUnit) -> Result<Unit>;

    /// Deletes a unit by its id. Returns the number of deleted records.
    async fn delete(&self, unit_id: i64) -> Result<usize>;
}

/// Trait defining the contract for unit service operations.
#[async_trait]
pub trait UnitServiceTrait: Send + Sync {
    fn get_units(&self) -> Result<Vec<Unit>>;

    /// Units currently offered for new reservations.
    fn get_available_units(&self) -> Result<Vec<Unit>>;

    fn get_unit(&self, unit_id: i64) -> Result<Unit>;
    async fn create_unit(&self, new_unit: NewUnit) -> Result<Unit>;
    async fn update_unit(&self, unit: Unit) -> Result<Unit>;
    async fn set_unit_availability(&self, unit_id: i64, available: bool) -> Result<Unit>;
    async fn delete_unit(&self, unit_id: i64) -> Result<usize>;
}
