use thiserror::Error;

/// Reasons the reservation engine rejects a candidate reservation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReservationError {
    #[error("Customer {0} does not exist")]
    UnknownCustomer(i64),

    #[error("Unit {0} does not exist")]
    UnknownUnit(i64),

    #[error("Invalid stay dates: {0}")]
    InvalidDateRange(String),

    #[error("Unit {0} is not available for new reservations")]
    UnitUnavailable(i64),
}
