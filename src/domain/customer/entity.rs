use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::requests::{CreateCustomerRequest, UpdateCustomerRequest};
use super::value_objects::{CustomerStatus, DocumentType};

// ============================================================================
// Customer Entity
// ============================================================================

/// A persisted customer record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "customerId")]
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub document_type: DocumentType,
    pub document_id: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub status: CustomerStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A customer that has not been stored yet. The store assigns id and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub document_type: DocumentType,
    pub document_id: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub status: CustomerStatus,
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(request: CreateCustomerRequest) -> Self {
        Self {
            first_name: request.first_name,
            last_name: request.last_name,
            document_type: request.document_type,
            document_id: request.document_id,
            email: request.email,
            phone: request.phone,
            date_of_birth: request.date_of_birth,
            address: request.address,
            status: CustomerStatus::Pending,
        }
    }
}

impl NewCustomer {
    /// Attach store-assigned identity and timestamps
    pub fn into_customer(self, id: Uuid, now: DateTime<Utc>) -> Customer {
        Customer {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            document_type: self.document_type,
            document_id: self.document_id,
            email: self.email,
            phone: self.phone,
            date_of_birth: self.date_of_birth,
            address: self.address,
            status: self.status,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Customer {
    /// Merge a partial update. Absent fields are neither overwritten nor cleared.
    pub fn apply_update(&mut self, update: UpdateCustomerRequest) {
        if let Some(first_name) = update.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = update.last_name {
            self.last_name = last_name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        if let Some(address) = update.address {
            self.address = Some(address);
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == CustomerStatus::Active
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
