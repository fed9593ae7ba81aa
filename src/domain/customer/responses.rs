use serde::Serialize;
use uuid::Uuid;

use super::entity::Customer;
use super::value_objects::CustomerStatus;

// ============================================================================
// Customer Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPage {
    pub content: Vec<Customer>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl CustomerPage {
    pub fn new(content: Vec<Customer>, page: u32, size: u32, total_elements: u64) -> Self {
        Self {
            content,
            page,
            size,
            total_elements,
            total_pages: total_pages(total_elements, size),
        }
    }
}

/// `ceil(total / size)`, or 0 for a zero page size
pub fn total_pages(total_elements: u64, size: u32) -> u64 {
    if size == 0 {
        return 0;
    }
    total_elements.div_ceil(u64::from(size))
}

/// Outcome of a customer validation check
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub customer_id: Option<Uuid>,
    pub status: Option<CustomerStatus>,
    pub message: String,
}

impl ValidationResult {
    pub fn from_lookup(customer: Option<&Customer>) -> Self {
        match customer {
            None => Self {
                valid: false,
                customer_id: None,
                status: None,
                message: "Customer not found".to_string(),
            },
            Some(customer) if customer.is_active() => Self {
                valid: true,
                customer_id: Some(customer.id),
                status: Some(customer.status),
                message: "Customer is active and valid".to_string(),
            },
            Some(customer) => Self {
                valid: false,
                customer_id: Some(customer.id),
                status: Some(customer.status),
                message: format!("Customer exists but is not active (status: {})", customer.status),
            },
        }
    }
}
