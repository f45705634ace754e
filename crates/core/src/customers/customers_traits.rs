//! Customer repository and service traits.

use async_trait::async_trait;

use super::customers_model::{Customer, NewCustomer};
use crate::errors::Result;

/// Trait defining the contract for customer persistence.
#[async_trait]
pub trait CustomerRepositoryTrait: Send + Sync {
    /// Loads every customer in stored order. A missing collection loads as
    /// empty.
    fn load_all(&self) -> Result<Vec<Customer>>;

    /// Retrieves a customer by its id.
    fn get_by_id(&self, customer_id: i64) -> Result<Customer>;

    /// Inserts or replaces a customer, assigning an id when absent.
    async fn upsert(&self, customer: NewCustomer) -> Result<Customer>;

    /// Deletes a customer by its id.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, customer_id: i64) -> Result<usize>;
}

/// Trait defining the contract for customer service operations.
#[async_trait]
pub trait CustomerServiceTrait: Send + Sync {
    fn get_customers(&self) -> Result<Vec<Customer>>;
    fn get_customer(&self, customer_id: i64) -> Result<Customer>;
    async fn create_customer(&self, new_customer: NewCustomer) -> Result<Customer>;
    async fn update_customer(&self, customer: Customer) -> Result<Customer>;
    async fn delete_customer(&self, customer_id: i64) -> Result<usize>;
}
