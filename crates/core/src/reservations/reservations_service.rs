use log::{debug, info};
use std::sync::Arc;

use super::reservations_engine::{filter_reservations, join_details, quote_stay, validate_reservation};
use super::reservations_model::{
    NewReservation, Reservation, ReservationDetails, ReservationFilter, ReservationStatus,
    StayQuote, ValidatedReservation, ValidationMode,
};
use super::reservations_traits::{ReservationRepositoryTrait, ReservationServiceTrait};
use crate::customers::CustomerRepositoryTrait;
use crate::errors::{Error, Result, ValidationError};
use crate::units::UnitRepositoryTrait;

/// Service coordinating the reservation engine with the three record stores.
///
/// Each operation runs load, validate, then upsert in that order. The
/// customer and unit collections are read, never written, so a customer
/// deleted between validation and save is not detected.
pub struct ReservationService {
    reservation_repository: Arc<dyn ReservationRepositoryTrait>,
    customer_repository: Arc<dyn CustomerRepositoryTrait>,
    unit_repository: Arc<dyn UnitRepositoryTrait>,
}

impl ReservationService {
    pub fn new(
        reservation_repository: Arc<dyn ReservationRepositoryTrait>,
        customer_repository: Arc<dyn CustomerRepositoryTrait>,
        unit_repository: Arc<dyn UnitRepositoryTrait>,
    ) -> Self {
        Self {
            reservation_repository,
            customer_repository,
            unit_repository,
        }
    }

    fn validate(
        &self,
        candidate: &NewReservation,
        mode: ValidationMode,
    ) -> Result<ValidatedReservation> {
        let customers = self.customer_repository.load_all()?;
        let units = self.unit_repository.load_all()?;
        validate_reservation(candidate, &customers, &units, mode)
    }
}

#[async_trait::async_trait]
impl ReservationServiceTrait for ReservationService {
    fn get_reservations(&self) -> Result<Vec<Reservation>> {
        self.reservation_repository.load_all()
    }

    fn get_reservation(&self, reservation_id: i64) -> Result<Reservation> {
        self.reservation_repository.get_by_id(reservation_id)
    }

    fn search_reservations(&self, filter: &ReservationFilter) -> Result<Vec<Reservation>> {
        let reservations = self.reservation_repository.load_all()?;
        Ok(filter_reservations(&reservations, filter).cloned().collect())
    }

    fn get_customer_reservations(&self, customer_id: i64) -> Result<Vec<Reservation>> {
        self.reservation_repository.list_by_customer(customer_id)
    }

    fn get_unit_reservations(&self, unit_id: i64) -> Result<Vec<Reservation>> {
        self.reservation_repository.list_by_unit(unit_id)
    }

    fn get_reservation_details(
        &self,
        filter: &ReservationFilter,
    ) -> Result<Vec<ReservationDetails>> {
        let reservations = self.search_reservations(filter)?;
        let customers = self.customer_repository.load_all()?;
        let units = self.unit_repository.load_all()?;
        Ok(join_details(&reservations, &customers, &units))
    }

    fn quote_stay(&self, unit_id: i64, start_date: &str, end_date: &str) -> Result<StayQuote> {
        let unit = self.unit_repository.get_by_id(unit_id)?;
        quote_stay(&unit, start_date, end_date)
    }

    /// Validates and stores a new reservation. Any caller-supplied id is
    /// discarded; the store assigns the next one.
    async fn create_reservation(&self, mut candidate: NewReservation) -> Result<Reservation> {
        candidate.id = None;
        let validated = self.validate(&candidate, ValidationMode::Create)?;
        let reservation = self.reservation_repository.upsert(validated).await?;
        info!(
            "Created reservation {} for customer {} in unit {}",
            reservation.id, reservation.customer_id, reservation.unit_id
        );
        Ok(reservation)
    }

    /// Replaces an existing reservation. Availability of the unit is not
    /// re-checked for edits.
    async fn update_reservation(&self, candidate: NewReservation) -> Result<Reservation> {
        let reservation_id = candidate.id.ok_or_else(|| {
            Error::Validation(ValidationError::MissingField("id".to_string()))
        })?;
        self.reservation_repository.get_by_id(reservation_id)?;

        let validated = self.validate(&candidate, ValidationMode::Update)?;
        let reservation = self.reservation_repository.upsert(validated).await?;
        debug!("Updated reservation {}", reservation.id);
        Ok(reservation)
    }

    async fn update_reservation_status(
        &self,
        reservation_id: i64,
        status: ReservationStatus,
    ) -> Result<Reservation> {
        let mut reservation = self.reservation_repository.get_by_id(reservation_id)?;
        debug!(
            "Reservation {} status {} -> {}",
            reservation_id, reservation.status, status
        );
        reservation.status = status;
        self.reservation_repository
            .upsert(ValidatedReservation::from(reservation))
            .await
    }

    async fn delete_reservation(&self, reservation_id: i64) -> Result<usize> {
        self.reservation_repository.delete(reservation_id).await
    }
}
