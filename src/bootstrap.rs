use anyhow::Context;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::customer::{CustomerService, ValidationService};
use crate::metrics::CustomerMetrics;
use crate::store::{CustomerStore, PgCustomerStore};

// ============================================================================
// Bootstrap - wire store, metrics and services together
// ============================================================================

pub struct Services {
    pub store: Arc<dyn CustomerStore>,
    pub metrics: Arc<CustomerMetrics>,
    pub customers: CustomerService,
    pub validation: ValidationService,
}

/// Connect to PostgreSQL, apply migrations and build both services
pub async fn build_services(config: &AppConfig) -> anyhow::Result<Services> {
    let store = PgCustomerStore::connect(&config.database)
        .await
        .context("failed to connect to the customer database")?;
    store
        .migrate()
        .await
        .context("failed to apply customer migrations")?;

    let store: Arc<dyn CustomerStore> = Arc::new(store);
    let services = wire(store)?;

    services
        .metrics
        .refresh_active_customers(services.store.as_ref())
        .await
        .context("failed to read active customer count")?;

    Ok(services)
}

/// Build both services on top of an already connected store
pub fn wire(store: Arc<dyn CustomerStore>) -> anyhow::Result<Services> {
    let metrics = Arc::new(CustomerMetrics::new().context("failed to register customer metrics")?);
    tracing::info!(
        "📊 Metrics registry created with {} metrics",
        metrics.registry().gather().len()
    );

    Ok(Services {
        customers: CustomerService::new(store.clone(), metrics.clone()),
        validation: ValidationService::new(store.clone(), metrics.clone()),
        store,
        metrics,
    })
}
