use log::debug;
use std::sync::Arc;

use super::units_model::{NewUnit, Unit};
use super::units_traits::{UnitRepositoryTrait, UnitServiceTrait};
use crate::errors::Result;

/// Service for managing lodging units
pub struct UnitService {
    repository: Arc<dyn UnitRepositoryTrait>,
}

impl UnitService {
    pub fn new(repository: Arc<dyn UnitRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl UnitServiceTrait for UnitService {
    fn get_units(&self) -> Result<Vec<Unit>> {
        self.repository.load_all()
    }

    fn get_available_units(&self) -> Result<Vec<Unit>> {
        Ok(self
            .repository
            .load_all()?
            .into_iter()
            .filter(|unit| unit.available)
            .collect())
    }

    fn get_unit(&self, unit_id: i64) -> Result<Unit> {
        self.repository.get_by_id(unit_id)
    }

    async fn create_unit(&self, mut new_unit: NewUnit) -> Result<Unit> {
        new_unit.id = None;
        let unit = self.repository.upsert(new_unit).await?;
        debug!("Created unit {} ({})", unit.id, unit.name);
        Ok(unit)
    }

    async fn update_unit(&self, unit: Unit) -> Result<Unit> {
        self.repository.get_by_id(unit.id)?;
        self.repository.upsert(unit.into()).await
    }

    async fn set_unit_availability(&self, unit_id: i64, available: bool) -> Result<Unit> {
        let mut unit = self.repository.get_by_id(unit_id)?;
        unit.available = available;
        debug!("Setting unit {} availability to {}", unit_id, available);
        self.repository.upsert(unit.into()).await
    }

    async fn delete_unit(&self, unit_id: i64) -> Result<usize> {
        self.repository.delete(unit_id).await
    }
}
