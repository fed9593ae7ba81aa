use std::sync::Arc;
use uuid::Uuid;

use crate::metrics::CustomerMetrics;
use crate::store::CustomerStore;

use super::entity::Customer;
use super::errors::CustomerError;
use super::requests::ValidateCustomerRequest;
use super::responses::ValidationResult;

// ============================================================================
// Customer Validation Service
// ============================================================================
//
// Read-only eligibility check used by other services before they act on a
// customer. Exactly one of customer_validation_{success,failure}_total is
// incremented per call.
//
// ============================================================================

pub struct ValidationService {
    store: Arc<dyn CustomerStore>,
    metrics: Arc<CustomerMetrics>,
}

impl ValidationService {
    pub fn new(store: Arc<dyn CustomerStore>, metrics: Arc<CustomerMetrics>) -> Self {
        Self { store, metrics }
    }

    /// Look up by `customer_id` when present, otherwise by `document_id`
    pub async fn validate(
        &self,
        request: ValidateCustomerRequest,
    ) -> Result<ValidationResult, CustomerError> {
        let customer = match (request.customer_id, request.document_id.as_deref()) {
            (Some(id), _) => self.store.get_by_id(id).await?,
            (None, Some(document_id)) if !document_id.trim().is_empty() => {
                self.store.get_by_document(document_id).await?
            }
            _ => {
                self.metrics.record_validation(false);
                tracing::warn!("Validation request carried no identifier");
                return Err(CustomerError::InvalidArgument(
                    "At least one of customerId or documentId must be provided".to_string(),
                ));
            }
        };

        Ok(self.conclude(customer.as_ref()))
    }

    pub async fn validate_by_id(&self, id: Uuid) -> Result<ValidationResult, CustomerError> {
        let customer = self.store.get_by_id(id).await?;
        Ok(self.conclude(customer.as_ref()))
    }

    fn conclude(&self, customer: Option<&Customer>) -> ValidationResult {
        let result = ValidationResult::from_lookup(customer);
        self.metrics.record_validation(result.valid);

        match result.customer_id {
            Some(id) if result.valid => tracing::info!(customer_id = %id, "Customer validated"),
            Some(id) => tracing::info!(
                customer_id = %id,
                status = ?result.status,
                "Customer failed validation"
            ),
            None => tracing::info!("Validation target not found"),
        }

        result
    }
}
