//! Units module - lodging unit ("glamping") models, services, and traits.

mod units_model;
mod units_service;
mod units_traits;


pub use units_model::{features_to_text, parse_features, NewUnit, Unit};
pub use units_service::UnitService;
pub use units_traits::{UnitRepositoryTrait, UnitServiceTrait};
