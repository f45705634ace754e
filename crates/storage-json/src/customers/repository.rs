use async_trait::async_trait;
use glampsite_core::customers::{Customer, CustomerRepositoryTrait, NewCustomer};
use glampsite_core::errors::{Error, StoreError};
use glampsite_core::records::{remove_record, upsert_record};
use glampsite_core::Result;

use super::model::CustomerDB;
use crate::store::{spawn_writer, JsonCollection, JsonStoreConfig, WriteHandle, CUSTOMERS_FILE};

pub struct CustomerRepository {
    collection: JsonCollection<CustomerDB>,
    writer: WriteHandle<Customer>,
}

impl CustomerRepository {
    pub fn new(collection: JsonCollection<CustomerDB>, writer: WriteHandle<Customer>) -> Self {
        CustomerRepository { collection, writer }
    }

    /// Opens `clientes.json` under the configured data directory and starts
    /// its writer.
    pub fn open(config: &JsonStoreConfig) -> Self {
        let collection = JsonCollection::new(config, CUSTOMERS_FILE);
        let writer = spawn_writer(collection.clone());
        Self::new(collection, writer)
    }
}

#[async_trait]
impl CustomerRepositoryTrait for CustomerRepository {
    fn load_all(&self) -> Result<Vec<Customer>> {
        self.collection.load()
    }

    fn get_by_id(&self, customer_id: i64) -> Result<Customer> {
        self.collection
            .load()?
            .into_iter()
            .find(|c| c.id == customer_id)
            .ok_or_else(|| {
                Error::Store(StoreError::NotFound(format!("Customer {}", customer_id)))
            })
    }

    async fn upsert(&self, customer: NewCustomer) -> Result<Customer> {
        self.writer
            .exec(move |customers: &mut Vec<Customer>| -> Result<Customer> {
                Ok(upsert_record(customers, customer).0)
            })
            .await
    }

    async fn delete(&self, customer_id: i64) -> Result<usize> {
        self.writer
            .exec(move |customers: &mut Vec<Customer>| -> Result<usize> {
                Ok(remove_record(customers, customer_id))
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn new_customer(name: &str) -> NewCustomer {
        NewCustomer {
            id: None,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "3001234567".to_string(),
            document: "CC9".to_string(),
        }
    }

    #[tokio::test]
    async fn upsert_assigns_ids_and_replaces() {
        let dir = tempdir().unwrap();
        let repo = CustomerRepository::open(&JsonStoreConfig::new(dir.path()));

        let ana = repo.upsert(new_customer("Ana")).await.unwrap();
        let luis = repo.upsert(new_customer("Luis")).await.unwrap();
        assert_eq!((ana.id, luis.id), (1, 2));

        let mut edited: NewCustomer = ana.clone().into();
        edited.phone = "3110000000".to_string();
        repo.upsert(edited).await.unwrap();

        let all = repo.load_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].phone, "3110000000");
        assert_eq!(repo.get_by_id(2).unwrap(), luis);
    }

    #[tokio::test]
    async fn writes_persisted_field_names() {
        let dir = tempdir().unwrap();
        let config = JsonStoreConfig::new(dir.path());
        let repo = CustomerRepository::open(&config);

        repo.upsert(new_customer("Ana")).await.unwrap();

        let raw = std::fs::read_to_string(config.collection_path(CUSTOMERS_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["nombre"], "Ana");
        assert_eq!(value[0]["telefono"], "3001234567");
        assert_eq!(value[0]["documento"], "CC9");
    }

    #[tokio::test]
    async fn delete_and_not_found() {
        let dir = tempdir().unwrap();
        let repo = CustomerRepository::open(&JsonStoreConfig::new(dir.path()));
        repo.upsert(new_customer("Ana")).await.unwrap();

        assert_eq!(repo.delete(1).await.unwrap(), 1);
        assert!(repo.get_by_id(1).unwrap_err().is_not_found());
        assert!(repo.load_all().unwrap().is_empty());
    }
}
