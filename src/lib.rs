// ============================================================================
// Customer Lifecycle - registration, status management and validation
// ============================================================================
//
// Layers:
// - domain:    entity, requests/responses, errors, CustomerService, ValidationService
// - store:     CustomerStore contract with PostgreSQL and in-memory adapters
// - metrics:   Prometheus counters and the active customer gauge
// - telemetry: tracing subscriber and correlation ids
// - config:    environment driven settings
// - bootstrap: wiring for the binary and embedders
//
// ============================================================================

pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod metrics;
pub mod store;
pub mod telemetry;
pub mod utils;

pub use config::AppConfig;
pub use domain::customer::{CustomerError, CustomerService, ValidationService};
pub use store::{CustomerStore, InMemoryCustomerStore, PgCustomerStore, StoreError};
