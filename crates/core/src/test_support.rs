//! In-memory repositories shared by the service tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::customers::{Customer, CustomerRepositoryTrait, NewCustomer};
use crate::errors::{Error, Result, StoreError};
use crate::records::{remove_record, upsert_record, Record};
use crate::reservations::{Reservation, ReservationRepositoryTrait, ValidatedReservation};
use crate::units::{NewUnit, Unit, UnitRepositoryTrait};

fn find<T: Record>(records: &[T], id: i64, kind: &str) -> Result<T> {
    records
        .iter()
        .find(|r| r.id() == id)
        .cloned()
        .ok_or_else(|| Error::Store(StoreError::NotFound(format!("{} {}", kind, id))))
}

pub fn customer(id: i64, name: &str) -> Customer {
    Customer {
        id,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "3001234567".to_string(),
        document: format!("CC{}", id),
    }
}

pub fn unit(id: i64, nightly_rate: u64, available: bool) -> Unit {
    Unit {
        id,
        name: format!("Domo {}", id),
        capacity: 4,
        nightly_rate,
        features: vec!["Jacuzzi".to_string()],
        available,
    }
}

#[derive(Clone, Default)]
pub struct MockCustomerRepository {
    pub customers: Arc<Mutex<Vec<Customer>>>,
}

impl MockCustomerRepository {
    pub fn with(customers: Vec<Customer>) -> Self {
        Self {
            customers: Arc::new(Mutex::new(customers)),
        }
    }
}

#[async_trait]
impl CustomerRepositoryTrait for MockCustomerRepository {
    fn load_all(&self) -> Result<Vec<Customer>> {
        Ok(self.customers.lock().unwrap().clone())
    }

    fn get_by_id(&self, customer_id: i64) -> Result<Customer> {
        find(&*self.customers.lock().unwrap(), customer_id, "customer")
    }

    async fn upsert(&self, customer: NewCustomer) -> Result<Customer> {
        Ok(upsert_record(&mut *self.customers.lock().unwrap(), customer).0)
    }

    async fn delete(&self, customer_id: i64) -> Result<usize> {
        Ok(remove_record(&mut *self.customers.lock().unwrap(), customer_id))
    }
}

#[derive(Clone, Default)]
pub struct MockUnitRepository {
    pub units: Arc<Mutex<Vec<Unit>>>,
}

impl MockUnitRepository {
    pub fn with(units: Vec<Unit>) -> Self {
        Self {
            units: Arc::new(Mutex::new(units)),
        }
    }
}

#[async_trait]
impl UnitRepositoryTrait for MockUnitRepository {
    fn load_all(&self) -> Result<Vec<Unit>> {
        Ok(self.units.lock().unwrap().clone())
    }

    fn get_by_id(&self, unit_id: i64) -> Result<Unit> {
        find(&*self.units.lock().unwrap(), unit_id, "unit")
    }

    async fn upsert(&self, unit: NewUnit) -> Result<Unit> {
        Ok(upsert_record(&mut *self.units.lock().unwrap(), unit).0)
    }

    async fn delete(&self, unit_id: i64) -> Result<usize> {
        Ok(remove_record(&mut *self.units.lock().unwrap(), unit_id))
    }
}

#[derive(Clone, Default)]
pub struct MockReservationRepository {
    pub reservations: Arc<Mutex<Vec<Reservation>>>,
}

impl MockReservationRepository {
    pub fn with(reservations: Vec<Reservation>) -> Self {
        Self {
            reservations: Arc::new(Mutex::new(reservations)),
        }
    }
}

#[async_trait]
impl ReservationRepositoryTrait for MockReservationRepository {
    fn load_all(&self) -> Result<Vec<Reservation>> {
        Ok(self.reservations.lock().unwrap().clone())
    }

    fn get_by_id(&self, reservation_id: i64) -> Result<Reservation> {
        find(&*self.reservations.lock().unwrap(), reservation_id, "reservation")
    }

    fn list_by_customer(&self, customer_id: i64) -> Result<Vec<Reservation>> {
        Ok(crate::reservations::list_by_customer(
            &*self.reservations.lock().unwrap(),
            customer_id,
        ))
    }

    fn list_by_unit(&self, unit_id: i64) -> Result<Vec<Reservation>> {
        Ok(crate::reservations::list_by_unit(
            &*self.reservations.lock().unwrap(),
            unit_id,
        ))
    }

    async fn upsert(&self, reservation: ValidatedReservation) -> Result<Reservation> {
        Ok(upsert_record(&mut *self.reservations.lock().unwrap(), reservation).0)
    }

    async fn delete(&self, reservation_id: i64) -> Result<usize> {
        Ok(remove_record(
            &mut *self.reservations.lock().unwrap(),
            reservation_id,
        ))
    }
}
