use async_trait::async_trait;
use glampsite_core::errors::{Error, StoreError};
use glampsite_core::records::{remove_record, upsert_record};
use glampsite_core::units::{NewUnit, Unit, UnitRepositoryTrait};
use glampsite_core::Result;

use super::model::UnitDB;
use crate::store::{spawn_writer, JsonCollection, JsonStoreConfig, WriteHandle, UNITS_FILE};

pub struct UnitRepository {
    collection: JsonCollection<UnitDB>,
    writer: WriteHandle<Unit>,
}

impl UnitRepository {
    pub fn new(collection: JsonCollection<UnitDB>, writer: WriteHandle<Unit>) -> Self {
        UnitRepository { collection, writer }
    }

    /// Opens `glampings.json` under the configured data directory and starts
    /// its writer.
    pub fn open(config: &JsonStoreConfig) -> Self {
        let collection = JsonCollection::new(config, UNITS_FILE);
        let writer = spawn_writer(collection.clone());
        Self::new(collection, writer)
    }
}

#[async_trait]
impl UnitRepositoryTrait for UnitRepository {
    fn load_all(&self) -> Result<Vec<Unit>> {
        self.collection.load()
    }

    fn get_by_id(&self, unit_id: i64) -> Result<Unit> {
        self.collection
            .load()?
            .into_iter()
            .find(|u| u.id == unit_id)
            .ok_or_else(|| Error::Store(StoreError::NotFound(format!("Unit {}", unit_id))))
    }

    async fn upsert(&self, unit: NewUnit) -> Result<Unit> {
        self.writer
            .exec(move |units: &mut Vec<Unit>| -> Result<Unit> {
                Ok(upsert_record(units, unit).0)
            })
            .await
    }

    async fn delete(&self, unit_id: i64) -> Result<usize> {
        self.writer
            .exec(move |units: &mut Vec<Unit>| -> Result<usize> {
                Ok(remove_record(units, unit_id))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn new_unit(name: &str, available: bool) -> NewUnit {
        NewUnit {
            id: None,
            name: name.to_string(),
            capacity: 2,
            nightly_rate: 100000,
            features: vec!["Jacuzzi".to_string()],
            available,
        }
    }

    #[tokio::test]
    async fn upsert_round_trips_through_file() {
        let dir = tempdir().unwrap();
        let config = JsonStoreConfig::new(dir.path());
        let repo = UnitRepository::open(&config);

        let domo = repo.upsert(new_unit("Domo", true)).await.unwrap();
        assert_eq!(domo.id, 1);

        // A second repository over the same directory sees the write.
        let reopened = UnitRepository::open(&config);
        assert_eq!(reopened.get_by_id(1).unwrap(), domo);

        let raw = fs::read_to_string(config.collection_path(UNITS_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["precioPorNoche"], 100000);
        assert_eq!(value[0]["caracteristicas"][0], "Jacuzzi");
        assert_eq!(value[0]["disponible"], true);
    }

    #[tokio::test]
    async fn explicit_id_replaces_existing_unit() {
        let dir = tempdir().unwrap();
        let repo = UnitRepository::open(&JsonStoreConfig::new(dir.path()));
        repo.upsert(new_unit("Domo", true)).await.unwrap();
        repo.upsert(new_unit("Cabaña", true)).await.unwrap();

        let mut edit = new_unit("Domo", false);
        edit.id = Some(1);
        repo.upsert(edit).await.unwrap();

        let units = repo.load_all().unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(units[0].id, 1);
        assert!(!units[0].available);
        assert_eq!(units[1].name, "Cabaña");
    }

    #[tokio::test]
    async fn malformed_collection_blocks_writes() {
        let dir = tempdir().unwrap();
        let config = JsonStoreConfig::new(dir.path());
        let path = config.collection_path(UNITS_FILE);
        fs::write(&path, r#"[{"id":1,"nombre":"Domo","capacidad":0,"precioPorNoche":1,"disponible":true}]"#)
            .unwrap();
        let repo = UnitRepository::open(&config);

        assert!(matches!(
            repo.load_all(),
            Err(Error::Store(StoreError::Malformed(_)))
        ));
        assert!(repo.upsert(new_unit("Domo", true)).await.is_err());
        assert!(fs::read_to_string(&path).unwrap().contains("\"capacidad\":0"));
    }

    #[tokio::test]
    async fn unknown_unit_is_not_found() {
        let dir = tempdir().unwrap();
        let repo = UnitRepository::open(&JsonStoreConfig::new(dir.path()));
        assert!(repo.get_by_id(9).unwrap_err().is_not_found());
        assert_eq!(repo.delete(9).await.unwrap(), 0);
    }
}
