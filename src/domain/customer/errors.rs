use serde::Serialize;
use validator::ValidationErrors;

use crate::store::StoreError;

// ============================================================================
// Customer Business Rule Errors
// ============================================================================

/// A single rejected request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("Validation failed")]
    ValidationFailed(Vec<FieldError>),

    #[error("Storage unavailable")]
    StorageUnavailable(#[source] StoreError),
}

impl CustomerError {
    /// Status code the transport layer answers with
    pub fn status_code(&self) -> u16 {
        match self {
            CustomerError::NotFound(_) => 404,
            CustomerError::Duplicate(_) => 409,
            CustomerError::InvalidArgument(_) | CustomerError::ValidationFailed(_) => 400,
            CustomerError::StorageUnavailable(_) => 500,
        }
    }

    /// Message safe to hand to a caller. Storage details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            CustomerError::StorageUnavailable(_) => "An unexpected error occurred".to_string(),
            other => other.to_string(),
        }
    }

    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            CustomerError::ValidationFailed(errors) => errors,
            _ => &[],
        }
    }
}

impl From<StoreError> for CustomerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Missing(id) => CustomerError::NotFound(format!("Customer not found: {}", id)),
            StoreError::UniqueViolation(constraint) => CustomerError::Duplicate(format!(
                "Customer violates unique constraint {}",
                constraint
            )),
            other => CustomerError::StorageUnavailable(other),
        }
    }
}

impl From<ValidationErrors> for CustomerError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    FieldError::new(field, message)
                })
            })
            .collect();

        fields.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));
        CustomerError::ValidationFailed(fields)
    }
}
