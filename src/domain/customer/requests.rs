use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use uuid::Uuid;
use validator::ValidationError;
use validator_derive::Validate;

use super::value_objects::{CustomerStatus, DocumentType};

// ============================================================================
// Customer Requests
// ============================================================================
//
// Inbound shapes for the lifecycle and validation services. Field rules are
// declared with `validator` and checked before any store access.
//
// ============================================================================

/// International phone number: optional `+`, no leading zero, 2 to 15 digits
pub static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("phone pattern compiles"));

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCustomerRequest {
    #[validate(custom = "not_blank", length(min = 1, max = 100))]
    pub first_name: String,

    #[validate(custom = "not_blank", length(min = 1, max = 100))]
    pub last_name: String,

    pub document_type: DocumentType,

    #[validate(custom = "not_blank", length(min = 5, max = 20))]
    pub document_id: String,

    #[validate(custom = "not_blank", email)]
    pub email: String,

    #[validate(regex = "PHONE_PATTERN")]
    pub phone: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    #[validate(length(max = 500))]
    pub address: Option<String>,
}

/// Partial update. `None` means "leave the stored value alone".
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerRequest {
    #[validate(custom = "not_blank", length(min = 1, max = 100))]
    pub first_name: Option<String>,

    #[validate(custom = "not_blank", length(min = 1, max = 100))]
    pub last_name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(regex = "PHONE_PATTERN")]
    pub phone: Option<String>,

    #[validate(length(max = 500))]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub status: CustomerStatus,

    #[validate(length(max = 500))]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateCustomerRequest {
    pub customer_id: Option<Uuid>,
    pub document_id: Option<String>,
}
