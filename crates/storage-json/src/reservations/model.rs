//! Persisted model for reservations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::StorageError;
use crate::store::WireRecord;
use glampsite_core::reservations::{Reservation, ReservationStatus};
use glampsite_core::utils::time_utils::{format_calendar_date, parse_calendar_date};

/// Reservation as stored in `reservas.json`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReservationDB {
    pub id: i64,
    #[serde(rename = "clienteId")]
    pub customer_id: i64,
    #[serde(rename = "glampingId")]
    pub unit_id: i64,
    #[serde(rename = "fechaInicio")]
    pub start_date: String,
    #[serde(rename = "fechaFin")]
    pub end_date: String,
    #[serde(rename = "totalPagado")]
    pub total_paid: u64,
    #[serde(rename = "estado")]
    pub status: ReservationStatus,
}

fn parse_stored_date(id: i64, field: &str, value: &str) -> Result<NaiveDate, StorageError> {
    parse_calendar_date(value).ok_or_else(|| {
        StorageError::Malformed(format!(
            "reservation {} has invalid {} '{}'",
            id, field, value
        ))
    })
}

impl TryFrom<ReservationDB> for Reservation {
    type Error = StorageError;

    fn try_from(db: ReservationDB) -> Result<Self, Self::Error> {
        let start_date = parse_stored_date(db.id, "fechaInicio", &db.start_date)?;
        let end_date = parse_stored_date(db.id, "fechaFin", &db.end_date)?;
        if end_date <= start_date {
            return Err(StorageError::Malformed(format!(
                "reservation {} ends on {} which is not after its start {}",
                db.id, db.end_date, db.start_date
            )));
        }
        Ok(Self {
            id: db.id,
            customer_id: db.customer_id,
            unit_id: db.unit_id,
            start_date,
            end_date,
            total_paid: db.total_paid,
            status: db.status,
        })
    }
}

impl From<&Reservation> for ReservationDB {
    fn from(domain: &Reservation) -> Self {
        Self {
            id: domain.id,
            customer_id: domain.customer_id,
            unit_id: domain.unit_id,
            start_date: format_calendar_date(domain.start_date),
            end_date: format_calendar_date(domain.end_date),
            total_paid: domain.total_paid,
            status: domain.status,
        }
    }
}

impl WireRecord for ReservationDB {
    type Domain = Reservation;

    fn into_domain(self) -> Result<Reservation, StorageError> {
        self.try_into()
    }

    fn from_domain(domain: &Reservation) -> Self {
        domain.into()
    }
}
