//! Customers module - domain models, services, and traits.

mod customers_model;
mod customers_service;
mod customers_traits;


pub use customers_model::{Customer, NewCustomer};
pub use customers_service::CustomerService;
pub use customers_traits::{CustomerRepositoryTrait, CustomerServiceTrait};
