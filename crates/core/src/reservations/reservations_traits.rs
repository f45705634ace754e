//! Reservation repository and service traits.

use async_trait::async_trait;

use super::reservations_model::{
    NewReservation, Reservation, ReservationDetails, ReservationFilter, ReservationStatus,
    StayQuote, ValidatedReservation,
};
use crate::errors::Result;

/// Trait defining the contract for reservation persistence.
///
/// Only validated reservations reach the store; referential integrity is
/// checked by the engine beforehand, not here.
#[async_trait]
pub trait ReservationRepositoryTrait: Send + Sync {
    /// Loads every reservation in stored order. A missing collection loads
    /// as empty.
    fn load_all(&self) -> Result<Vec<Reservation>>;

    /// Retrieves a reservation by its id.
    fn get_by_id(&self, reservation_id: i64) -> Result<Reservation>;

    /// Lists reservations held by one customer.
    fn list_by_customer(&self, customer_id: i64) -> Result<Vec<Reservation>>;

    /// Lists reservations for one unit.
    fn list_by_unit(&self, unit_id: i64) -> Result<Vec<Reservation>>;

    /// Inserts or replaces a reservation, assigning an id when absent.
    async fn upsert(&self, reservation: ValidatedReservation) -> Result<Reservation>;

    /// Deletes a reservation by its id. Returns the number of deleted records.
    async fn delete(&self, reservation_id: i64) -> Result<usize>;
}

/// Trait defining the contract for reservation service operations.
#[async_trait]
pub trait ReservationServiceTrait: Send + Sync {
    fn get_reservations(&self) -> Result<Vec<Reservation>>;
    fn get_reservation(&self, reservation_id: i64) -> Result<Reservation>;
    fn search_reservations(&self, filter: &ReservationFilter) -> Result<Vec<Reservation>>;
    fn get_customer_reservations(&self, customer_id: i64) -> Result<Vec<Reservation>>;
    fn get_unit_reservations(&self, unit_id: i64) -> Result<Vec<Reservation>>;

    /// Filtered reservations joined with their customer and unit.
    fn get_reservation_details(&self, filter: &ReservationFilter)
        -> Result<Vec<ReservationDetails>>;

    /// Stay summary for a unit, without creating anything.
    fn quote_stay(&self, unit_id: i64, start_date: &str, end_date: &str) -> Result<StayQuote>;

    async fn create_reservation(&self, candidate: NewReservation) -> Result<Reservation>;
    async fn update_reservation(&self, candidate: NewReservation) -> Result<Reservation>;
    async fn update_reservation_status(
        &self,
        reservation_id: i64,
        status: ReservationStatus,
    ) -> Result<Reservation>;
    async fn delete_reservation(&self, reservation_id: i64) -> Result<usize>;
}
