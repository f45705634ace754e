//! Persisted model for lodging units.

use serde::{Deserialize, Serialize};

use crate::errors::StorageError;
use crate::store::WireRecord;
use glampsite_core::units::Unit;

/// Unit as stored in `glampings.json`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UnitDB {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "capacidad")]
    pub capacity: u32,
    #[serde(rename = "precioPorNoche")]
    pub nightly_rate: u64,
    #[serde(rename = "caracteristicas", default)]
    pub features: Vec<String>,
    #[serde(rename = "disponible")]
    pub available: bool,
}

impl TryFrom<UnitDB> for Unit {
    type Error = StorageError;

    fn try_from(db: UnitDB) -> Result<Self, Self::Error> {
        if db.capacity < 1 {
            return Err(StorageError::Malformed(format!(
                "unit {} has capacity {}",
                db.id, db.capacity
            )));
        }
        Ok(Self {
            id: db.id,
            name: db.name,
            capacity: db.capacity,
            nightly_rate: db.nightly_rate,
            features: db.features,
            available: db.available,
        })
    }
}

impl From<&Unit> for UnitDB {
    fn from(domain: &Unit) -> Self {
        Self {
            id: domain.id,
            name: domain.name.clone(),
            capacity: domain.capacity,
            nightly_rate: domain.nightly_rate,
            features: domain.features.clone(),
            available: domain.available,
        }
    }
}

impl WireRecord for UnitDB {
    type Domain = Unit;

    fn into_domain(self) -> Result<Unit, StorageError> {
        self.try_into()
    }

    fn from_domain(domain: &Unit) -> Self {
        domain.into()
    }
}
