// ============================================================================
// Customer Store - Persistence Contract
// ============================================================================
//
// The lifecycle and validation services only talk to `CustomerStore`.
// Two adapters are provided:
// - PgCustomerStore: PostgreSQL through a sqlx pool
// - InMemoryCustomerStore: HashMap behind a RwLock, for tests and embedding
//
// Uniqueness of (document_type, document_id) and of email MUST be enforced by
// the adapter itself (unique constraints in PostgreSQL). The services
// pre-check with `exists_*`, but that check races with concurrent writers;
// adapters report the losing write as `StoreError::UniqueViolation`.
//
// ============================================================================

mod memory;
mod postgres;

pub use memory::InMemoryCustomerStore;
pub use postgres::PgCustomerStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::customer::{Customer, CustomerStatus, DocumentType, NewCustomer};

pub const DOCUMENT_CONSTRAINT: &str = "uk_customers_document";
pub const EMAIL_CONSTRAINT: &str = "uk_customers_email";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error("customer {0} does not exist")]
    Missing(Uuid),

    #[error("could not decode customer row: {0}")]
    Decode(String),

    #[error("database unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
}

/// Zero-based page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Customer>, StoreError>;

    /// First customer holding `document_id`, whatever its document type
    async fn get_by_document(&self, document_id: &str) -> Result<Option<Customer>, StoreError>;

    async fn get_by_document_type_and_id(
        &self,
        document_type: DocumentType,
        document_id: &str,
    ) -> Result<Option<Customer>, StoreError>;

    async fn exists_by_document_type_and_id(
        &self,
        document_type: DocumentType,
        document_id: &str,
    ) -> Result<bool, StoreError>;

    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError>;

    /// Page of customers in `status` plus the total count for that status
    async fn list_by_status(
        &self,
        status: CustomerStatus,
        page: PageRequest,
    ) -> Result<(Vec<Customer>, u64), StoreError>;

    async fn list_all(&self, page: PageRequest) -> Result<(Vec<Customer>, u64), StoreError>;

    async fn count_by_status(&self, status: CustomerStatus) -> Result<u64, StoreError>;

    /// Persist a new customer, assigning its id, `created_at` and `updated_at`
    async fn insert(&self, customer: NewCustomer) -> Result<Customer, StoreError>;

    /// Persist the profile fields of an existing customer and refresh `updated_at`.
    /// The stored status is left untouched; use `update_status` for that.
    async fn update(&self, customer: &Customer) -> Result<Customer, StoreError>;

    /// Change only the status column and refresh `updated_at`
    async fn update_status(&self, id: Uuid, status: CustomerStatus) -> Result<Customer, StoreError>;
}
