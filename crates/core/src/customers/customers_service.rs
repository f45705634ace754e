use log::debug;
use std::sync::Arc;

use super::customers_model::{Customer, NewCustomer};
use super::customers_traits::{CustomerRepositoryTrait, CustomerServiceTrait};
use crate::errors::Result;

/// Service for managing customers
pub struct CustomerService {
    repository: Arc<dyn CustomerRepositoryTrait>,
}

impl CustomerService {
    pub fn new(repository: Arc<dyn CustomerRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl CustomerServiceTrait for CustomerService {
    fn get_customers(&self) -> Result<Vec<Customer>> {
        self.repository.load_all()
    }

    fn get_customer(&self, customer_id: i64) -> Result<Customer> {
        self.repository.get_by_id(customer_id)
    }

    /// Creates a customer; any caller-supplied id is discarded.
    async fn create_customer(&self, mut new_customer: NewCustomer) -> Result<Customer> {
        new_customer.id = None;
        let customer = self.repository.upsert(new_customer).await?;
        debug!("Created customer {}", customer.id);
        Ok(customer)
    }

    /// Replaces an existing customer. Unknown ids are rejected rather than
    /// inserted.
    async fn update_customer(&self, customer: Customer) -> Result<Customer> {
        self.repository.get_by_id(customer.id)?;
        self.repository.upsert(customer.into()).await
    }

    async fn delete_customer(&self, customer_id: i64) -> Result<usize> {
        let removed = self.repository.delete(customer_id).await?;
        debug!("Deleted {} customer record(s) with id {}", removed, customer_id);
        Ok(removed)
    }
}
