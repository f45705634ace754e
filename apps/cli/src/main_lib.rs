use std::sync::Arc;

use crate::config::Config;
use glampsite_core::{
    customers::{CustomerService, CustomerServiceTrait},
    reservations::{ReservationService, ReservationServiceTrait},
    units::{UnitService, UnitServiceTrait},
};
use glampsite_storage_json::open_repositories;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub customer_service: Arc<dyn CustomerServiceTrait>,
    pub unit_service: Arc<dyn UnitServiceTrait>,
    pub reservation_service: Arc<dyn ReservationServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("GLAMPSITE_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    // Console output goes to stdout; logs go to stderr.
    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}

/// Opens the collections under the configured data directory and wires the
/// services over them. Must run inside a Tokio runtime.
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let repositories = open_repositories(&config.store_config())?;
    tracing::info!("Data directory in use: {}", config.data_dir.display());

    let customer_service = Arc::new(CustomerService::new(repositories.customers.clone()));
    let unit_service = Arc::new(UnitService::new(repositories.units.clone()));
    let reservation_service = Arc::new(ReservationService::new(
        repositories.reservations.clone(),
        repositories.customers.clone(),
        repositories.units.clone(),
    ));

    Ok(Arc::new(AppState {
        customer_service,
        unit_service,
        reservation_service,
    }))
}
