use async_trait::async_trait;
use glampsite_core::errors::{Error, StoreError};
use glampsite_core::records::{remove_record, upsert_record};
use glampsite_core::reservations::{
    list_by_customer, list_by_unit, Reservation, ReservationRepositoryTrait, ValidatedReservation,
};
use glampsite_core::Result;
use log::debug;

use super::model::ReservationDB;
use crate::store::{
    spawn_writer, JsonCollection, JsonStoreConfig, WriteHandle, RESERVATIONS_FILE,
};

pub struct ReservationRepository {
    collection: JsonCollection<ReservationDB>,
    writer: WriteHandle<Reservation>,
}

impl ReservationRepository {
    pub fn new(
        collection: JsonCollection<ReservationDB>,
        writer: WriteHandle<Reservation>,
    ) -> Self {
        ReservationRepository { collection, writer }
    }

    /// Opens `reservas.json` under the configured data directory and starts
    /// its writer.
    pub fn open(config: &JsonStoreConfig) -> Self {
        let collection = JsonCollection::new(config, RESERVATIONS_FILE);
        let writer = spawn_writer(collection.clone());
        Self::new(collection, writer)
    }
}

#[async_trait]
impl ReservationRepositoryTrait for ReservationRepository {
    fn load_all(&self) -> Result<Vec<Reservation>> {
        self.collection.load()
    }

    fn get_by_id(&self, reservation_id: i64) -> Result<Reservation> {
        self.collection
            .load()?
            .into_iter()
            .find(|r| r.id == reservation_id)
            .ok_or_else(|| {
                Error::Store(StoreError::NotFound(format!(
                    "Reservation {}",
                    reservation_id
                )))
            })
    }

    fn list_by_customer(&self, customer_id: i64) -> Result<Vec<Reservation>> {
        Ok(list_by_customer(&self.collection.load()?, customer_id))
    }

    fn list_by_unit(&self, unit_id: i64) -> Result<Vec<Reservation>> {
        Ok(list_by_unit(&self.collection.load()?, unit_id))
    }

    async fn upsert(&self, reservation: ValidatedReservation) -> Result<Reservation> {
        debug!(
            "Storing reservation for customer {} in unit {} ({} nights)",
            reservation.customer_id, reservation.unit_id, reservation.duration_nights
        );
        self.writer
            .exec(move |reservations: &mut Vec<Reservation>| -> Result<Reservation> {
                Ok(upsert_record(reservations, reservation).0)
            })
            .await
    }

    async fn delete(&self, reservation_id: i64) -> Result<usize> {
        self.writer
            .exec(move |reservations: &mut Vec<Reservation>| -> Result<usize> {
                Ok(remove_record(reservations, reservation_id))
            })
            .await
    }
}
