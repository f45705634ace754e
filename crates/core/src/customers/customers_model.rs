//! Customer domain models.

use serde::{Deserialize, Serialize};

use crate::records::{NewRecord, Record};
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// National id or similar unique document number
    pub document: String,
}

/// Input model for creating or replacing a customer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub document: String,
}

impl NewCustomer {
    /// Form-level checks run by the presentation layer before saving.
    ///
    /// The store itself accepts any field values.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Customer name cannot be empty".to_string(),
            )));
        }
        if self.email.matches('@').count() != 1 {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Customer email '{}' must contain a single '@'",
                self.email
            ))));
        }
        Ok(())
    }
}

impl Record for Customer {
    fn id(&self) -> i64 {
        self.id
    }
}

impl NewRecord for NewCustomer {
    type Record = Customer;

    fn requested_id(&self) -> Option<i64> {
        self.id
    }

    fn into_record(self, id: i64) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            document: self.document,
        }
    }
}

impl From<Customer> for NewCustomer {
    fn from(customer: Customer) -> Self {
        Self {
            id: Some(customer.id),
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
            document: customer.document,
        }
    }
}
