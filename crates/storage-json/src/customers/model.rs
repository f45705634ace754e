//! Persisted model for customers.

use serde::{Deserialize, Serialize};

use crate::errors::StorageError;
use crate::store::WireRecord;
use glampsite_core::customers::Customer;

/// Customer as stored in `clientes.json`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CustomerDB {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: String,
    #[serde(rename = "documento")]
    pub document: String,
}

impl From<CustomerDB> for Customer {
    fn from(db: CustomerDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            email: db.email,
            phone: db.phone,
            document: db.document,
        }
    }
}

impl From<&Customer> for CustomerDB {
    fn from(domain: &Customer) -> Self {
        Self {
            id: domain.id,
            name: domain.name.clone(),
            email: domain.email.clone(),
            phone: domain.phone.clone(),
            document: domain.document.clone(),
        }
    }
}

impl WireRecord for CustomerDB {
    type Domain = Customer;

    fn into_domain(self) -> Result<Customer, StorageError> {
        Ok(self.into())
    }

    fn from_domain(domain: &Customer) -> Self {
        domain.into()
    }
}
