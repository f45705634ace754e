//! Operator commands and their plain-text rendering.

use std::io::Write;

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::main_lib::AppState;
use glampsite_core::customers::{Customer, NewCustomer};
use glampsite_core::reservations::{
    NewReservation, Reservation, ReservationDetails, ReservationFilter, ReservationStatus,
    StayQuote,
};
use glampsite_core::units::{features_to_text, parse_features, NewUnit, Unit};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage customers
    #[command(subcommand)]
    Customers(CustomerCommand),
    /// Manage lodging units
    #[command(subcommand)]
    Units(UnitCommand),
    /// Manage reservations
    #[command(subcommand)]
    Reservations(ReservationCommand),
}

#[derive(Subcommand, Debug)]
pub enum CustomerCommand {
    List,
    Show { id: i64 },
    Create(CustomerFields),
    Update {
        id: i64,
        #[command(flatten)]
        fields: CustomerEdit,
    },
    Delete { id: i64 },
}

#[derive(Args, Debug)]
pub struct CustomerFields {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub document: String,
}

#[derive(Args, Debug, Default)]
pub struct CustomerEdit {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub document: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum UnitCommand {
    List {
        /// Only units offered for new reservations
        #[arg(long)]
        available: bool,
    },
    Show { id: i64 },
    Create(UnitFields),
    Update {
        id: i64,
        #[command(flatten)]
        fields: UnitEdit,
    },
    /// Include or exclude a unit from new reservations
    SetAvailability {
        id: i64,
        #[arg(action = clap::ArgAction::Set)]
        available: bool,
    },
    Delete { id: i64 },
}

#[derive(Args, Debug)]
pub struct UnitFields {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub capacity: u32,
    #[arg(long)]
    pub rate: u64,
    /// One feature per line
    #[arg(long, default_value = "")]
    pub features: String,
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub available: bool,
}

#[derive(Args, Debug, Default)]
pub struct UnitEdit {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub capacity: Option<u32>,
    #[arg(long)]
    pub rate: Option<u64>,
    #[arg(long)]
    pub features: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ReservationCommand {
    List {
        #[command(flatten)]
        filter: FilterArgs,
        /// Show customer and unit names next to each reservation
        #[arg(long)]
        details: bool,
    },
    Show { id: i64 },
    /// Nights and estimated total for a stay, without booking it
    Quote {
        #[arg(long)]
        unit: i64,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
    },
    Create(ReservationFields),
    Update {
        id: i64,
        #[command(flatten)]
        fields: ReservationEdit,
    },
    Status { id: i64, status: ReservationStatus },
    Delete { id: i64 },
}

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    #[arg(long)]
    pub customer: Option<i64>,
    #[arg(long)]
    pub unit: Option<i64>,
    #[arg(long)]
    pub status: Option<ReservationStatus>,
    /// Earliest start date, YYYY-MM-DD
    #[arg(long)]
    pub from: Option<String>,
}

impl From<FilterArgs> for ReservationFilter {
    fn from(args: FilterArgs) -> Self {
        ReservationFilter {
            customer_id: args.customer,
            unit_id: args.unit,
            status: args.status,
            start_from: args.from,
        }
    }
}

#[derive(Args, Debug)]
pub struct ReservationFields {
    #[arg(long)]
    pub customer: i64,
    #[arg(long)]
    pub unit: i64,
    #[arg(long)]
    pub start: String,
    #[arg(long)]
    pub end: String,
    /// Amount paid; computed from the nightly rate when omitted
    #[arg(long)]
    pub paid: Option<u64>,
    #[arg(long, default_value = "confirmada")]
    pub status: ReservationStatus,
}

#[derive(Args, Debug, Default)]
pub struct ReservationEdit {
    #[arg(long)]
    pub customer: Option<i64>,
    #[arg(long)]
    pub unit: Option<i64>,
    #[arg(long)]
    pub start: Option<String>,
    #[arg(long)]
    pub end: Option<String>,
    #[arg(long)]
    pub paid: Option<u64>,
    /// Recompute the amount from the nightly rate. Implied when the unit or
    /// dates change and no amount is given
    #[arg(long, conflicts_with = "paid")]
    pub recompute: bool,
    #[arg(long)]
    pub status: Option<ReservationStatus>,
}

/// Output mode shared by every command.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub json: bool,
}

pub async fn run<W: Write>(
    command: Command,
    state: &AppState,
    output: Output,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Customers(cmd) => run_customers(cmd, state, output, out).await,
        Command::Units(cmd) => run_units(cmd, state, output, out).await,
        Command::Reservations(cmd) => run_reservations(cmd, state, output, out).await,
    }
}

async fn run_customers<W: Write>(
    command: CustomerCommand,
    state: &AppState,
    output: Output,
    out: &mut W,
) -> anyhow::Result<()> {
    let service = &state.customer_service;
    match command {
        CustomerCommand::List => {
            let customers = service.get_customers()?;
            emit_all(out, output, &customers, customer_line)
        }
        CustomerCommand::Show { id } => emit(out, output, &service.get_customer(id)?, customer_line),
        CustomerCommand::Create(fields) => {
            let new_customer = NewCustomer {
                id: None,
                name: fields.name,
                email: fields.email,
                phone: fields.phone,
                document: fields.document,
            };
            new_customer.validate()?;
            let customer = service.create_customer(new_customer).await?;
            emit(out, output, &customer, customer_line)
        }
        CustomerCommand::Update { id, fields } => {
            let mut customer = service.get_customer(id)?;
            if let Some(name) = fields.name {
                customer.name = name;
            }
            if let Some(email) = fields.email {
                customer.email = email;
            }
            if let Some(phone) = fields.phone {
                customer.phone = phone;
            }
            if let Some(document) = fields.document {
                customer.document = document;
            }
            NewCustomer::from(customer.clone()).validate()?;
            let customer = service.update_customer(customer).await?;
            emit(out, output, &customer, customer_line)
        }
        CustomerCommand::Delete { id } => {
            let removed = service.delete_customer(id).await?;
            writeln!(out, "Deleted {} customer(s)", removed)?;
            Ok(())
        }
    }
}

async fn run_units<W: Write>(
    command: UnitCommand,
    state: &AppState,
    output: Output,
    out: &mut W,
) -> anyhow::Result<()> {
    let service = &state.unit_service;
    match command {
        UnitCommand::List { available } => {
            let units = if available {
                service.get_available_units()?
            } else {
                service.get_units()?
            };
            emit_all(out, output, &units, unit_line)
        }
        UnitCommand::Show { id } => emit(out, output, &service.get_unit(id)?, unit_line),
        UnitCommand::Create(fields) => {
            let new_unit = NewUnit {
                id: None,
                name: fields.name,
                capacity: fields.capacity,
                nightly_rate: fields.rate,
                features: parse_features(&fields.features),
                available: fields.available,
            };
            new_unit.validate()?;
            let unit = service.create_unit(new_unit).await?;
            emit(out, output, &unit, unit_line)
        }
        UnitCommand::Update { id, fields } => {
            let mut unit = service.get_unit(id)?;
            if let Some(name) = fields.name {
                unit.name = name;
            }
            if let Some(capacity) = fields.capacity {
                unit.capacity = capacity;
            }
            if let Some(rate) = fields.rate {
                unit.nightly_rate = rate;
            }
            if let Some(features) = fields.features {
                unit.features = parse_features(&features);
            }
            NewUnit::from(unit.clone()).validate()?;
            let unit = service.update_unit(unit).await?;
            emit(out, output, &unit, unit_line)
        }
        UnitCommand::SetAvailability { id, available } => {
            let unit = service.set_unit_availability(id, available).await?;
            emit(out, output, &unit, unit_line)
        }
        UnitCommand::Delete { id } => {
            let removed = service.delete_unit(id).await?;
            writeln!(out, "Deleted {} unit(s)", removed)?;
            Ok(())
        }
    }
}

async fn run_reservations<W: Write>(
    command: ReservationCommand,
    state: &AppState,
    output: Output,
    out: &mut W,
) -> anyhow::Result<()> {
    let service = &state.reservation_service;
    match command {
        ReservationCommand::List { filter, details } => {
            let filter = ReservationFilter::from(filter);
            if details {
                let rows = service.get_reservation_details(&filter)?;
                emit_all(out, output, &rows, details_line)
            } else {
                let reservations = service.search_reservations(&filter)?;
                emit_all(out, output, &reservations, reservation_line)
            }
        }
        ReservationCommand::Show { id } => {
            emit(out, output, &service.get_reservation(id)?, reservation_line)
        }
        ReservationCommand::Quote { unit, start, end } => {
            let quote = service.quote_stay(unit, &start, &end)?;
            emit(out, output, &quote, quote_line)
        }
        ReservationCommand::Create(fields) => {
            let candidate = NewReservation {
                id: None,
                customer_id: fields.customer,
                unit_id: fields.unit,
                start_date: fields.start,
                end_date: fields.end,
                total_paid: fields.paid,
                status: fields.status,
            };
            let reservation = service.create_reservation(candidate).await?;
            emit(out, output, &reservation, reservation_line)
        }
        ReservationCommand::Update { id, fields } => {
            let candidate = apply_reservation_edit(
                NewReservation::from(service.get_reservation(id)?),
                fields,
            );
            let reservation = service.update_reservation(candidate).await?;
            emit(out, output, &reservation, reservation_line)
        }
        ReservationCommand::Status { id, status } => {
            let reservation = service.update_reservation_status(id, status).await?;
            emit(out, output, &reservation, reservation_line)
        }
        ReservationCommand::Delete { id } => {
            let removed = service.delete_reservation(id).await?;
            writeln!(out, "Deleted {} reservation(s)", removed)?;
            Ok(())
        }
    }
}

/// Applies operator edits to a stored reservation.
///
/// Changing the unit or either date drops the stored amount so it is
/// recomputed from the nightly rate, unless `--paid` is given.
fn apply_reservation_edit(mut candidate: NewReservation, fields: ReservationEdit) -> NewReservation {
    let stay_changed = fields.unit.is_some() || fields.start.is_some() || fields.end.is_some();
    if let Some(customer_id) = fields.customer {
        candidate.customer_id = customer_id;
    }
    if let Some(unit_id) = fields.unit {
        candidate.unit_id = unit_id;
    }
    if let Some(start) = fields.start {
        candidate.start_date = start;
    }
    if let Some(end) = fields.end {
        candidate.end_date = end;
    }
    match fields.paid {
        Some(paid) => candidate.total_paid = Some(paid),
        None if fields.recompute || stay_changed => candidate.total_paid = None,
        None => {}
    }
    if let Some(status) = fields.status {
        candidate.status = status;
    }
    candidate
}

fn emit<W: Write, T: Serialize>(
    out: &mut W,
    output: Output,
    value: &T,
    line: fn(&T) -> String,
) -> anyhow::Result<()> {
    if output.json {
        writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    } else {
        writeln!(out, "{}", line(value))?;
    }
    Ok(())
}

fn emit_all<W: Write, T: Serialize>(
    out: &mut W,
    output: Output,
    values: &[T],
    line: fn(&T) -> String,
) -> anyhow::Result<()> {
    if output.json {
        writeln!(out, "{}", serde_json::to_string_pretty(values)?)?;
        return Ok(());
    }
    if values.is_empty() {
        writeln!(out, "(none)")?;
    }
    for value in values {
        writeln!(out, "{}", line(value))?;
    }
    Ok(())
}

fn customer_line(c: &Customer) -> String {
    format!(
        "#{} {} <{}> tel {} doc {}",
        c.id, c.name, c.email, c.phone, c.document
    )
}

fn unit_line(u: &Unit) -> String {
    let features = features_to_text(&u.features).replace('\n', ", ");
    format!(
        "#{} {} cap {} rate {}/night {} [{}]",
        u.id,
        u.name,
        u.capacity,
        u.nightly_rate,
        if u.available { "available" } else { "unavailable" },
        features
    )
}

fn reservation_line(r: &Reservation) -> String {
    format!(
        "#{} customer {} unit {} {} -> {} ({} nights) paid {} {}",
        r.id,
        r.customer_id,
        r.unit_id,
        r.start_date,
        r.end_date,
        r.duration_nights(),
        r.total_paid,
        r.status
    )
}

fn details_line(d: &ReservationDetails) -> String {
    format!(
        "#{} {} @ {} {} -> {} paid {} {}",
        d.reservation.id,
        d.customer.name,
        d.unit.name,
        d.reservation.start_date,
        d.reservation.end_date,
        d.reservation.total_paid,
        d.reservation.status
    )
}

fn quote_line(q: &StayQuote) -> String {
    format!(
        "{} ({}): {} nights x {} = {}",
        q.unit_name, q.unit_id, q.nights, q.nightly_rate, q.estimated_total
    )
}
