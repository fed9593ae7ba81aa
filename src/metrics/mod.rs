use prometheus::{IntCounter, IntGauge, Registry};

use crate::domain::customer::CustomerStatus;
use crate::store::{CustomerStore, StoreError};

// ============================================================================
// Metrics Module - Prometheus metrics for the customer services
// ============================================================================
//
// - customer_active_total: gauge, customers currently ACTIVE
// - customer_operations_{success,failure}_total: lifecycle service outcomes
// - customer_validation_{success,failure}_total: validation service outcomes
//
// Counters are atomic and shared between requests through Arc<CustomerMetrics>.
// ============================================================================

pub struct CustomerMetrics {
    registry: Registry,

    pub active_customers: IntGauge,

    pub operations_success: IntCounter,
    pub operations_failure: IntCounter,

    pub validation_success: IntCounter,
    pub validation_failure: IntCounter,
}

impl CustomerMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        Self::with_registry(Registry::new())
    }

    /// Register all customer metrics on an existing registry
    pub fn with_registry(registry: Registry) -> Result<Self, prometheus::Error> {
        let active_customers =
            IntGauge::new("customer_active_total", "Total number of active customers")?;
        registry.register(Box::new(active_customers.clone()))?;

        let operations_success = IntCounter::new(
            "customer_operations_success_total",
            "Customer lifecycle operations that succeeded",
        )?;
        registry.register(Box::new(operations_success.clone()))?;

        let operations_failure = IntCounter::new(
            "customer_operations_failure_total",
            "Customer lifecycle operations rejected by a business rule",
        )?;
        registry.register(Box::new(operations_failure.clone()))?;

        let validation_success = IntCounter::new(
            "customer_validation_success_total",
            "Validation checks that found an active customer",
        )?;
        registry.register(Box::new(validation_success.clone()))?;

        let validation_failure = IntCounter::new(
            "customer_validation_failure_total",
            "Validation checks that did not find an active customer",
        )?;
        registry.register(Box::new(validation_failure.clone()))?;

        Ok(Self {
            registry,
            active_customers,
            operations_success,
            operations_failure,
            validation_success,
            validation_failure,
        })
    }

    /// Get the Prometheus registry for exposing metrics
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_operation(&self, success: bool) {
        if success {
            self.operations_success.inc();
        } else {
            self.operations_failure.inc();
        }
    }

    pub fn record_validation(&self, valid: bool) {
        if valid {
            self.validation_success.inc();
        } else {
            self.validation_failure.inc();
        }
    }

    /// Re-read the number of ACTIVE customers into the gauge
    pub async fn refresh_active_customers(
        &self,
        store: &dyn CustomerStore,
    ) -> Result<u64, StoreError> {
        let active = store.count_by_status(CustomerStatus::Active).await?;
        self.active_customers.set(i64::try_from(active).unwrap_or(i64::MAX));

        tracing::debug!(active = active, "Refreshed active customer gauge");
        Ok(active)
    }
}
