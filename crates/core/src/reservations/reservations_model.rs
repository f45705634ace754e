//! Reservation domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::customers::Customer;
use crate::errors::{Error, Result, ValidationError};
use crate::records::{NewRecord, Record};
use crate::units::Unit;
use crate::utils::time_utils::{days_between, format_calendar_date};

/// Workflow status of a reservation.
///
/// Any status may be replaced by any other; no transition table applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReservationStatus {
    #[default]
    #[serde(rename = "confirmada")]
    Confirmed,
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "cancelada")]
    Cancelled,
}

impl ReservationStatus {
    /// Wire value stored in the reservations collection.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "confirmada",
            ReservationStatus::Pending => "pendiente",
            ReservationStatus::Cancelled => "cancelada",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReservationStatus {
    type Err = Error;

    /// Accepts the wire values and their English names, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "confirmada" | "confirmed" => Ok(ReservationStatus::Confirmed),
            "pendiente" | "pending" => Ok(ReservationStatus::Pending),
            "cancelada" | "cancelled" | "canceled" => Ok(ReservationStatus::Cancelled),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown reservation status '{}'",
                other
            )))),
        }
    }
}

/// Domain model representing a persisted reservation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub customer_id: i64,
    pub unit_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_paid: u64,
    pub status: ReservationStatus,
}

impl Reservation {
    /// Nights between start and end date.
    pub fn duration_nights(&self) -> i64 {
        days_between(self.start_date, self.end_date)
    }
}

impl Record for Reservation {
    fn id(&self) -> i64 {
        self.id
    }
}

/// A candidate reservation as collected from the operator.
///
/// Dates stay as text until the engine has parsed them; `total_paid` is
/// computed from the unit rate when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewReservation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub customer_id: i64,
    pub unit_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub total_paid: Option<u64>,
    #[serde(default)]
    pub status: ReservationStatus,
}

impl From<Reservation> for NewReservation {
    fn from(reservation: Reservation) -> Self {
        Self {
            id: Some(reservation.id),
            customer_id: reservation.customer_id,
            unit_id: reservation.unit_id,
            start_date: format_calendar_date(reservation.start_date),
            end_date: format_calendar_date(reservation.end_date),
            total_paid: Some(reservation.total_paid),
            status: reservation.status,
        }
    }
}

/// Whether a candidate is a new booking or an edit of an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// New bookings require the unit to be available.
    Create,
    /// Edits skip the availability check.
    Update,
}

/// A reservation that passed the engine checks, ready to be stored.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedReservation {
    pub id: Option<i64>,
    pub customer_id: i64,
    pub unit_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_paid: u64,
    pub status: ReservationStatus,
    pub duration_nights: i64,
}

impl From<Reservation> for ValidatedReservation {
    /// Re-stores an already persisted reservation, e.g. after a status change.
    fn from(reservation: Reservation) -> Self {
        Self {
            id: Some(reservation.id),
            customer_id: reservation.customer_id,
            unit_id: reservation.unit_id,
            start_date: reservation.start_date,
            end_date: reservation.end_date,
            total_paid: reservation.total_paid,
            status: reservation.status,
            duration_nights: reservation.duration_nights(),
        }
    }
}

impl NewRecord for ValidatedReservation {
    type Record = Reservation;

    fn requested_id(&self) -> Option<i64> {
        self.id
    }

    fn into_record(self, id: i64) -> Reservation {
        Reservation {
            id,
            customer_id: self.customer_id,
            unit_id: self.unit_id,
            start_date: self.start_date,
            end_date: self.end_date,
            total_paid: self.total_paid,
            status: self.status,
        }
    }
}

/// Conjunctive reservation filter. `None` matches everything for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationFilter {
    pub customer_id: Option<i64>,
    pub unit_id: Option<i64>,
    pub status: Option<ReservationStatus>,
    /// Inclusive lower bound on the start date, compared as `YYYY-MM-DD` text.
    pub start_from: Option<String>,
}

impl ReservationFilter {
    pub fn for_customer(customer_id: i64) -> Self {
        Self {
            customer_id: Some(customer_id),
            ..Default::default()
        }
    }

    pub fn for_unit(unit_id: i64) -> Self {
        Self {
            unit_id: Some(unit_id),
            ..Default::default()
        }
    }

    pub fn with_status(mut self, status: ReservationStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn starting_from(mut self, date: impl Into<String>) -> Self {
        self.start_from = Some(date.into());
        self
    }

    pub fn matches(&self, reservation: &Reservation) -> bool {
        if self
            .customer_id
            .is_some_and(|customer_id| reservation.customer_id != customer_id)
        {
            return false;
        }
        if self
            .unit_id
            .is_some_and(|unit_id| reservation.unit_id != unit_id)
        {
            return false;
        }
        if self
            .status
            .is_some_and(|status| reservation.status != status)
        {
            return false;
        }
        match self.start_from.as_deref().map(str::trim) {
            Some(threshold) if !threshold.is_empty() => {
                format_calendar_date(reservation.start_date).as_str() >= threshold
            }
            _ => true,
        }
    }
}

/// Summary shown while a reservation is being filled in.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StayQuote {
    pub unit_id: i64,
    pub unit_name: String,
    pub nightly_rate: u64,
    pub nights: i64,
    pub estimated_total: u64,
}

/// A reservation joined with the customer and unit it references.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDetails {
    pub reservation: Reservation,
    pub customer: Customer,
    pub unit: Unit,
}
