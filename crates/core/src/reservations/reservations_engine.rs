//! Reservation engine.
//!
//! Pure functions over caller-supplied records. The engine keeps no state;
//! services load the collections, call in here, and hand results to the store.

use chrono::NaiveDate;
use log::debug;

use super::reservations_errors::ReservationError;
use super::reservations_model::{
    NewReservation, Reservation, ReservationDetails, ReservationFilter, StayQuote,
    ValidatedReservation, ValidationMode,
};
use crate::customers::Customer;
use crate::errors::{Error, Result, ValidationError};
use crate::units::Unit;
use crate::utils::time_utils::{days_between, parse_calendar_date};

fn parse_stay_date(value: &str, field: &str) -> Result<NaiveDate> {
    parse_calendar_date(value).ok_or_else(|| {
        ReservationError::InvalidDateRange(format!("{} '{}' is not a valid date", field, value))
            .into()
    })
}

fn stay_nights(start: NaiveDate, end: NaiveDate) -> Result<i64> {
    let nights = days_between(start, end);
    if nights <= 0 {
        return Err(ReservationError::InvalidDateRange(format!(
            "end date {} must be after start date {}",
            end, start
        ))
        .into());
    }
    Ok(nights)
}

fn parse_stay(start_date: &str, end_date: &str) -> Result<(NaiveDate, NaiveDate, i64)> {
    let start = parse_stay_date(start_date, "start date")?;
    let end = parse_stay_date(end_date, "end date")?;
    let nights = stay_nights(start, end)?;
    Ok((start, end, nights))
}

/// Number of nights between two `YYYY-MM-DD` dates.
///
/// Fails with `InvalidDateRange` when either date does not parse or the stay
/// is not at least one night long.
pub fn compute_duration(start_date: &str, end_date: &str) -> Result<i64> {
    parse_stay(start_date, end_date).map(|(_, _, nights)| nights)
}

/// Total cost of `nights` at the unit's nightly rate.
pub fn compute_cost(unit: &Unit, nights: i64) -> Result<u64> {
    if nights <= 0 {
        return Err(Error::Validation(ValidationError::InvalidInput(format!(
            "Number of nights must be positive, got {}",
            nights
        ))));
    }
    unit.nightly_rate
        .checked_mul(nights.unsigned_abs())
        .ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Cost of {} nights at {} overflows",
                nights, unit.nightly_rate
            )))
        })
}

/// Checks a candidate against the known customers and units.
///
/// Checks run in order: customer exists, unit exists, dates form a stay of
/// at least one night, and (on create only) the unit is available. On
/// success the duration is attached and a missing `total_paid` is filled in
/// from the unit rate.
pub fn validate_reservation(
    candidate: &NewReservation,
    customers: &[Customer],
    units: &[Unit],
    mode: ValidationMode,
) -> Result<ValidatedReservation> {
    if !customers.iter().any(|c| c.id == candidate.customer_id) {
        return Err(ReservationError::UnknownCustomer(candidate.customer_id).into());
    }
    let unit = units
        .iter()
        .find(|u| u.id == candidate.unit_id)
        .ok_or(ReservationError::UnknownUnit(candidate.unit_id))?;

    let (start_date, end_date, nights) = parse_stay(&candidate.start_date, &candidate.end_date)?;

    if mode == ValidationMode::Create && !unit.available {
        return Err(ReservationError::UnitUnavailable(unit.id).into());
    }

    let total_paid = match candidate.total_paid {
        Some(total) => total,
        None => compute_cost(unit, nights)?,
    };

    debug!(
        "Validated reservation for customer {} in unit {}: {} nights, total {}",
        candidate.customer_id, unit.id, nights, total_paid
    );

    Ok(ValidatedReservation {
        id: candidate.id,
        customer_id: candidate.customer_id,
        unit_id: unit.id,
        start_date,
        end_date,
        total_paid,
        status: candidate.status,
        duration_nights: nights,
    })
}

/// Estimated stay summary for a unit between two dates.
pub fn quote_stay(unit: &Unit, start_date: &str, end_date: &str) -> Result<StayQuote> {
    let nights = compute_duration(start_date, end_date)?;
    Ok(StayQuote {
        unit_id: unit.id,
        unit_name: unit.name.clone(),
        nightly_rate: unit.nightly_rate,
        nights,
        estimated_total: compute_cost(unit, nights)?,
    })
}

/// Reservations matching every criterion in `filter`, in input order.
pub fn filter_reservations<'a>(
    reservations: &'a [Reservation],
    filter: &'a ReservationFilter,
) -> impl Iterator<Item = &'a Reservation> + 'a {
    reservations
        .iter()
        .filter(move |reservation| filter.matches(reservation))
}

/// Reservations held by one customer, in input order.
pub fn list_by_customer(reservations: &[Reservation], customer_id: i64) -> Vec<Reservation> {
    let filter = ReservationFilter::for_customer(customer_id);
    filter_reservations(reservations, &filter).cloned().collect()
}

/// Reservations for one unit, in input order.
pub fn list_by_unit(reservations: &[Reservation], unit_id: i64) -> Vec<Reservation> {
    let filter = ReservationFilter::for_unit(unit_id);
    filter_reservations(reservations, &filter).cloned().collect()
}

/// Pairs each reservation with its customer and unit.
///
/// Reservations whose customer or unit no longer exists are skipped.
pub fn join_details(
    reservations: &[Reservation],
    customers: &[Customer],
    units: &[Unit],
) -> Vec<ReservationDetails> {
    reservations
        .iter()
        .filter_map(|reservation| {
            let customer = customers.iter().find(|c| c.id == reservation.customer_id)?;
            let unit = units.iter().find(|u| u.id == reservation.unit_id)?;
            Some(ReservationDetails {
                reservation: reservation.clone(),
                customer: customer.clone(),
                unit: unit.clone(),
            })
        })
        .collect()
}
