//! Reservations module - models, the reservation engine, services, and traits.

mod reservations_engine;
mod reservations_errors;
mod reservations_model;
mod reservations_service;
mod reservations_traits;

#[cfg(test)]
mod reservations_service_tests;

pub use reservations_engine::{
    compute_cost, compute_duration, filter_reservations, join_details, list_by_customer,
    list_by_unit, quote_stay, validate_reservation,
};
pub use reservations_errors::ReservationError;
pub use reservations_model::{
    NewReservation, Reservation, ReservationDetails, ReservationFilter, ReservationStatus,
    StayQuote, ValidatedReservation, ValidationMode,
};
pub use reservations_service::ReservationService;
pub use reservations_traits::{ReservationRepositoryTrait, ReservationServiceTrait};
