use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::metrics::CustomerMetrics;
use crate::store::{CustomerStore, PageRequest, StoreError};

use super::entity::{Customer, NewCustomer};
use super::errors::CustomerError;
use super::requests::{CreateCustomerRequest, UpdateCustomerRequest, UpdateStatusRequest};
use super::responses::CustomerPage;
use super::value_objects::CustomerStatus;

// ============================================================================
// Customer Lifecycle Service
// ============================================================================
//
// Orchestrates: Request → uniqueness/status rules → CustomerStore
//
// Every write that reaches the store bumps customer_operations_success_total;
// every duplicate bumps customer_operations_failure_total before the error is
// returned. Records are never removed: soft_delete is a status change.
//
// ============================================================================

pub struct CustomerService {
    store: Arc<dyn CustomerStore>,
    metrics: Arc<CustomerMetrics>,
}

impl CustomerService {
    pub fn new(store: Arc<dyn CustomerStore>, metrics: Arc<CustomerMetrics>) -> Self {
        Self { store, metrics }
    }

    /// Register a new customer in PENDING state
    pub async fn create(&self, request: CreateCustomerRequest) -> Result<Customer, CustomerError> {
        request.validate()?;

        if self
            .store
            .exists_by_document_type_and_id(request.document_type, &request.document_id)
            .await?
        {
            return Err(self.duplicate(format!(
                "Customer with document {}:{} already exists",
                request.document_type, request.document_id
            )));
        }

        if self.store.exists_by_email(&request.email).await? {
            return Err(self.duplicate(format!(
                "Customer with email {} already exists",
                request.email
            )));
        }

        let customer = self
            .store
            .insert(NewCustomer::from(request))
            .await
            .map_err(|e| self.write_failed(e))?;

        self.metrics.record_operation(true);
        tracing::info!(customer_id = %customer.id, "✅ Customer created");
        Ok(customer)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Customer, CustomerError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| CustomerError::NotFound(format!("Customer not found: {}", id)))
    }

    pub async fn get_by_document(&self, document_id: &str) -> Result<Customer, CustomerError> {
        self.store.get_by_document(document_id).await?.ok_or_else(|| {
            CustomerError::NotFound(format!("Customer not found with document: {}", document_id))
        })
    }

    /// Zero-based page of customers, optionally restricted to one status
    pub async fn list(
        &self,
        page: u32,
        size: u32,
        status: Option<CustomerStatus>,
    ) -> Result<CustomerPage, CustomerError> {
        let request = PageRequest::new(page, size);
        let (content, total) = match status {
            Some(status) => self.store.list_by_status(status, request).await?,
            None => self.store.list_all(request).await?,
        };

        Ok(CustomerPage::new(content, page, size, total))
    }

    /// Partial update; only fields present in `request` change. Status is never
    /// written here, so a concurrent `set_status` survives.
    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCustomerRequest,
    ) -> Result<Customer, CustomerError> {
        request.validate()?;
        let mut customer = self.get_by_id(id).await?;

        if let Some(email) = request.email.as_deref() {
            if email != customer.email && self.store.exists_by_email(email).await? {
                return Err(self.duplicate(format!("Email already in use: {}", email)));
            }
        }

        customer.apply_update(request);
        let customer = self
            .store
            .update(&customer)
            .await
            .map_err(|e| self.write_failed(e))?;

        self.metrics.record_operation(true);
        tracing::info!(customer_id = %id, "Customer updated");
        Ok(customer)
    }

    /// Mark the customer INACTIVE. The record and its history stay in the store.
    pub async fn soft_delete(&self, id: Uuid) -> Result<(), CustomerError> {
        self.transition(id, CustomerStatus::Inactive).await?;
        tracing::info!(customer_id = %id, "Customer soft-deleted");
        Ok(())
    }

    /// Move the customer to `request.status` from whatever state it is in.
    /// The reason is logged, not stored.
    pub async fn set_status(
        &self,
        id: Uuid,
        request: UpdateStatusRequest,
    ) -> Result<Customer, CustomerError> {
        request.validate()?;
        let customer = self.transition(id, request.status).await?;

        tracing::info!(
            customer_id = %id,
            status = %request.status,
            reason = request.reason.as_deref().unwrap_or(""),
            "Customer status updated"
        );
        Ok(customer)
    }

    /// Writes the status column only, so a concurrent profile update is never undone
    async fn transition(&self, id: Uuid, status: CustomerStatus) -> Result<Customer, CustomerError> {
        let customer = self
            .store
            .update_status(id, status)
            .await
            .map_err(|e| self.write_failed(e))?;

        self.metrics.record_operation(true);
        Ok(customer)
    }

    fn duplicate(&self, message: String) -> CustomerError {
        self.metrics.record_operation(false);
        tracing::warn!(reason = %message, "Rejected duplicate customer");
        CustomerError::Duplicate(message)
    }

    /// A unique violation here means a concurrent writer won the race
    fn write_failed(&self, err: StoreError) -> CustomerError {
        match err {
            StoreError::UniqueViolation(constraint) => self.duplicate(format!(
                "Customer violates unique constraint {}",
                constraint
            )),
            other => {
                if matches!(other, StoreError::Unavailable(_) | StoreError::Decode(_)) {
                    tracing::error!(error = %other, "Customer store write failed");
                }
                CustomerError::from(other)
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::customer::DocumentType;
    use crate::store::InMemoryCustomerStore;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Delegates to the in-memory store and counts `exists_by_email` calls.
    /// When `stale_read` is set, `get_by_id` answers with that snapshot instead,
    /// as a request that read before a concurrent writer committed would see.
    #[derive(Default)]
    struct CountingStore {
        inner: InMemoryCustomerStore,
        email_checks: AtomicUsize,
        stale_read: Mutex<Option<Customer>>,
    }

    #[async_trait]
    impl CustomerStore for CountingStore {
        async fn get_by_id(&self, id: Uuid) -> Result<Option<Customer>, StoreError> {
            let stale = self.stale_read.lock().unwrap().clone();
            match stale {
                Some(customer) if customer.id == id => Ok(Some(customer)),
                _ => self.inner.get_by_id(id).await,
            }
        }

        async fn get_by_document(&self, document_id: &str) -> Result<Option<Customer>, StoreError> {
            self.inner.get_by_document(document_id).await
        }

        async fn get_by_document_type_and_id(
            &self,
            document_type: DocumentType,
            document_id: &str,
        ) -> Result<Option<Customer>, StoreError> {
            self.inner.get_by_document_type_and_id(document_type, document_id).await
        }

        async fn exists_by_document_type_and_id(
            &self,
            document_type: DocumentType,
            document_id: &str,
        ) -> Result<bool, StoreError> {
            self.inner.exists_by_document_type_and_id(document_type, document_id).await
        }

        async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
            self.email_checks.fetch_add(1, Ordering::SeqCst);
            self.inner.exists_by_email(email).await
        }

        async fn list_by_status(
            &self,
            status: CustomerStatus,
            page: PageRequest,
        ) -> Result<(Vec<Customer>, u64), StoreError> {
            self.inner.list_by_status(status, page).await
        }

        async fn list_all(&self, page: PageRequest) -> Result<(Vec<Customer>, u64), StoreError> {
            self.inner.list_all(page).await
        }

        async fn count_by_status(&self, status: CustomerStatus) -> Result<u64, StoreError> {
            self.inner.count_by_status(status).await
        }

        async fn insert(&self, customer: NewCustomer) -> Result<Customer, StoreError> {
            self.inner.insert(customer).await
        }

        async fn update(&self, customer: &Customer) -> Result<Customer, StoreError> {
            self.inner.update(customer).await
        }

        async fn update_status(
            &self,
            id: Uuid,
            status: CustomerStatus,
        ) -> Result<Customer, StoreError> {
            self.inner.update_status(id, status).await
        }
    }

    /// Skips the pre-checks so the store's unique constraint is what fires
    struct RacingStore {
        inner: InMemoryCustomerStore,
    }

    #[async_trait]
    impl CustomerStore for RacingStore {
        async fn get_by_id(&self, id: Uuid) -> Result<Option<Customer>, StoreError> {
            self.inner.get_by_id(id).await
        }

        async fn get_by_document(&self, document_id: &str) -> Result<Option<Customer>, StoreError> {
            self.inner.get_by_document(document_id).await
        }

        async fn get_by_document_type_and_id(
            &self,
            document_type: DocumentType,
            document_id: &str,
        ) -> Result<Option<Customer>, StoreError> {
            self.inner.get_by_document_type_and_id(document_type, document_id).await
        }

        async fn exists_by_document_type_and_id(
            &self,
            _document_type: DocumentType,
            _document_id: &str,
        ) -> Result<bool, StoreError> {
            Ok(false)
        }

        async fn exists_by_email(&self, _email: &str) -> Result<bool, StoreError> {
            Ok(false)
        }

        async fn list_by_status(
            &self,
            status: CustomerStatus,
            page: PageRequest,
        ) -> Result<(Vec<Customer>, u64), StoreError> {
            self.inner.list_by_status(status, page).await
        }

        async fn list_all(&self, page: PageRequest) -> Result<(Vec<Customer>, u64), StoreError> {
            self.inner.list_all(page).await
        }

        async fn count_by_status(&self, status: CustomerStatus) -> Result<u64, StoreError> {
            self.inner.count_by_status(status).await
        }

        async fn insert(&self, customer: NewCustomer) -> Result<Customer, StoreError> {
            self.inner.insert(customer).await
        }

        async fn update(&self, customer: &Customer) -> Result<Customer, StoreError> {
            self.inner.update(customer).await
        }

        async fn update_status(
            &self,
            id: Uuid,
            status: CustomerStatus,
        ) -> Result<Customer, StoreError> {
            self.inner.update_status(id, status).await
        }
    }

    fn create_request(document_id: &str, email: &str) -> CreateCustomerRequest {
        CreateCustomerRequest {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            document_type: DocumentType::Dni,
            document_id: document_id.to_string(),
            email: email.to_string(),
            phone: Some("+51999999999".to_string()),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1),
            address: Some("123 Street".to_string()),
        }
    }

    fn setup() -> (CustomerService, Arc<CountingStore>, Arc<CustomerMetrics>) {
        let store = Arc::new(CountingStore::default());
        let metrics = Arc::new(CustomerMetrics::new().unwrap());
        let service = CustomerService::new(store.clone(), metrics.clone());
        (service, store, metrics)
    }

    #[tokio::test]
    async fn test_create_customer_success() {
        let (service, store, metrics) = setup();

        let customer = service
            .create(create_request("DOC12345678", "john@x.com"))
            .await
            .unwrap();

        assert_eq!(customer.status, CustomerStatus::Pending);
        assert!(!customer.id.is_nil());
        assert_eq!(customer.first_name, "John");
        assert_eq!(store.inner.len().await, 1);
        assert_eq!(metrics.operations_success.get(), 1);
        assert_eq!(metrics.operations_failure.get(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_document_then_duplicate_email() {
        let (service, store, metrics) = setup();

        let first = service
            .create(create_request("DOC12345678", "john@x.com"))
            .await
            .unwrap();
        assert_eq!(first.status, CustomerStatus::Pending);

        let err = service
            .create(create_request("DOC12345678", "other@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, CustomerError::Duplicate(ref m) if m.contains("DNI:DOC12345678")));

        let err = service
            .create(create_request("DOC87654321", "john@x.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, CustomerError::Duplicate(ref m) if m.contains("john@x.com")));

        assert_eq!(store.inner.len().await, 1);
        assert_eq!(metrics.operations_success.get(), 1);
        assert_eq!(metrics.operations_failure.get(), 2);
    }

    #[tokio::test]
    async fn test_document_check_takes_precedence_over_email() {
        let (service, store, _metrics) = setup();
        service
            .create(create_request("DOC12345678", "john@x.com"))
            .await
            .unwrap();
        let checks_before = store.email_checks.load(Ordering::SeqCst);

        let err = service
            .create(create_request("DOC12345678", "john@x.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, CustomerError::Duplicate(ref m) if m.contains("document")));
        assert_eq!(store.email_checks.load(Ordering::SeqCst), checks_before);
    }

    #[tokio::test]
    async fn test_same_document_id_with_other_type_is_allowed() {
        let (service, _store, _metrics) = setup();
        service
            .create(create_request("DOC12345678", "john@x.com"))
            .await
            .unwrap();

        let mut passport = create_request("DOC12345678", "jane@x.com");
        passport.document_type = DocumentType::Passport;
        assert!(service.create(passport).await.is_ok());
    }

    #[tokio::test]
    async fn test_store_unique_violation_counts_as_duplicate() {
        let store = Arc::new(RacingStore {
            inner: InMemoryCustomerStore::new(),
        });
        let metrics = Arc::new(CustomerMetrics::new().unwrap());
        let service = CustomerService::new(store.clone(), metrics.clone());

        service
            .create(create_request("DOC12345678", "john@x.com"))
            .await
            .unwrap();
        let err = service
            .create(create_request("DOC12345678", "john@x.com"))
            .await
            .unwrap_err();

        assert!(matches!(err, CustomerError::Duplicate(_)));
        assert_eq!(store.inner.len().await, 1);
        assert_eq!(metrics.operations_failure.get(), 1);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_request() {
        let (service, store, metrics) = setup();
        let mut request = create_request("DOC1", "not-an-email");
        request.last_name = String::new();

        let err = service.create(request).await.unwrap_err();
        let fields: Vec<&str> = err.field_errors().iter().map(|f| f.field.as_str()).collect();

        assert_eq!(fields, vec!["document_id", "email", "last_name", "last_name"]);
        assert_eq!(err.status_code(), 400);
        assert!(store.inner.is_empty().await);
        assert_eq!(metrics.operations_failure.get(), 0);
    }

    #[tokio::test]
    async fn test_get_by_id_and_document() {
        let (service, _store, _metrics) = setup();
        let created = service
            .create(create_request("DOC12345678", "john@x.com"))
            .await
            .unwrap();

        assert_eq!(service.get_by_id(created.id).await.unwrap(), created);
        assert_eq!(service.get_by_document("DOC12345678").await.unwrap(), created);

        let missing = Uuid::new_v4();
        assert!(matches!(
            service.get_by_id(missing).await,
            Err(CustomerError::NotFound(ref m)) if m.contains(&missing.to_string())
        ));
        assert!(matches!(
            service.get_by_document("UNKNOWN").await,
            Err(CustomerError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_pages_and_filters() {
        let (service, _store, _metrics) = setup();
        for i in 0..25 {
            let customer = service
                .create(create_request(&format!("DOC{:05}", i), &format!("c{}@x.com", i)))
                .await
                .unwrap();
            if i < 4 {
                service
                    .set_status(
                        customer.id,
                        UpdateStatusRequest {
                            status: CustomerStatus::Active,
                            reason: None,
                        },
                    )
                    .await
                    .unwrap();
            }
        }

        let page = service.list(0, 10, None).await.unwrap();
        assert_eq!(page.content.len(), 10);
        assert_eq!(page.total_elements, 25);
        assert_eq!(page.total_pages, 3);

        let last = service.list(2, 10, None).await.unwrap();
        assert_eq!(last.content.len(), 5);

        let active = service.list(0, 3, Some(CustomerStatus::Active)).await.unwrap();
        assert_eq!(active.total_elements, 4);
        assert_eq!(active.total_pages, 2);
        assert!(active.content.iter().all(|c| c.status == CustomerStatus::Active));

        let empty = service.list(0, 0, None).await.unwrap();
        assert_eq!(empty.total_pages, 0);
        assert!(empty.content.is_empty());
    }

    #[tokio::test]
    async fn test_update_merges_present_fields_only() {
        let (service, _store, metrics) = setup();
        let created = service
            .create(create_request("DOC12345678", "john@x.com"))
            .await
            .unwrap();

        let updated = service
            .update(
                created.id,
                UpdateCustomerRequest {
                    first_name: Some("Johnny".to_string()),
                    address: Some("456 Avenue".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Johnny");
        assert_eq!(updated.address.as_deref(), Some("456 Avenue"));
        assert_eq!(updated.last_name, created.last_name);
        assert_eq!(updated.email, created.email);
        assert_eq!(updated.phone, created.phone);
        assert_eq!(updated.date_of_birth, created.date_of_birth);
        assert_eq!(updated.status, created.status);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(metrics.operations_success.get(), 2);
    }

    #[tokio::test]
    async fn test_update_with_unchanged_or_absent_email_skips_check() {
        let (service, store, _metrics) = setup();
        let created = service
            .create(create_request("DOC12345678", "john@x.com"))
            .await
            .unwrap();
        let checks_before = store.email_checks.load(Ordering::SeqCst);

        service
            .update(
                created.id,
                UpdateCustomerRequest {
                    email: Some("john@x.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        service
            .update(
                created.id,
                UpdateCustomerRequest {
                    last_name: Some("Smith".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(store.email_checks.load(Ordering::SeqCst), checks_before);
    }

    #[tokio::test]
    async fn test_update_email_collision_is_rejected() {
        let (service, store, metrics) = setup();
        let john = service
            .create(create_request("DOC12345678", "john@x.com"))
            .await
            .unwrap();
        service
            .create(create_request("DOC87654321", "jane@x.com"))
            .await
            .unwrap();

        let err = service
            .update(
                john.id,
                UpdateCustomerRequest {
                    first_name: Some("Changed".to_string()),
                    email: Some("jane@x.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CustomerError::Duplicate(ref m) if m == "Email already in use: jane@x.com"));
        assert_eq!(metrics.operations_failure.get(), 1);

        let stored = store.inner.get_by_id(john.id).await.unwrap().unwrap();
        assert_eq!(stored.first_name, "John");
        assert_eq!(stored.email, "john@x.com");
    }

    #[tokio::test]
    async fn test_update_to_new_free_email() {
        let (service, store, _metrics) = setup();
        let created = service
            .create(create_request("DOC12345678", "john@x.com"))
            .await
            .unwrap();
        let checks_before = store.email_checks.load(Ordering::SeqCst);

        let updated = service
            .update(
                created.id,
                UpdateCustomerRequest {
                    email: Some("johnny@x.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.email, "johnny@x.com");
        assert_eq!(store.email_checks.load(Ordering::SeqCst), checks_before + 1);
    }

    #[tokio::test]
    async fn test_update_rejects_blank_names() {
        let (service, store, metrics) = setup();
        let created = service
            .create(create_request("DOC12345678", "john@x.com"))
            .await
            .unwrap();

        let err = service
            .update(
                created.id,
                UpdateCustomerRequest {
                    first_name: Some("   ".to_string()),
                    last_name: Some("\t".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        let fields: Vec<&str> = err.field_errors().iter().map(|f| f.field.as_str()).collect();
        assert_eq!(fields, vec!["first_name", "last_name"]);
        assert_eq!(err.status_code(), 400);

        let stored = store.inner.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.first_name, "John");
        assert_eq!(stored.last_name, "Doe");
        assert_eq!(metrics.operations_success.get(), 1);
    }

    #[tokio::test]
    async fn test_update_from_stale_read_keeps_concurrent_status_change() {
        let (service, store, _metrics) = setup();
        let created = service
            .create(create_request("DOC12345678", "john@x.com"))
            .await
            .unwrap();

        *store.stale_read.lock().unwrap() = Some(created.clone());
        store
            .inner
            .update_status(created.id, CustomerStatus::Suspended)
            .await
            .unwrap();

        let updated = service
            .update(
                created.id,
                UpdateCustomerRequest {
                    first_name: Some("Johnny".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.first_name, "Johnny");
        assert_eq!(updated.status, CustomerStatus::Suspended);
    }

    #[tokio::test]
    async fn test_soft_delete_keeps_concurrent_profile_change() {
        let (service, store, _metrics) = setup();
        let created = service
            .create(create_request("DOC12345678", "john@x.com"))
            .await
            .unwrap();

        *store.stale_read.lock().unwrap() = Some(created.clone());
        let mut renamed = created.clone();
        renamed.first_name = "Johnny".to_string();
        store.inner.update(&renamed).await.unwrap();

        service.soft_delete(created.id).await.unwrap();

        let stored = store.inner.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored.status, CustomerStatus::Inactive);
        assert_eq!(stored.first_name, "Johnny");
    }

    #[tokio::test]
    async fn test_update_missing_customer() {
        let (service, _store, metrics) = setup();
        let err = service
            .update(Uuid::new_v4(), UpdateCustomerRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, CustomerError::NotFound(_)));
        assert_eq!(metrics.operations_failure.get(), 0);
    }

    #[tokio::test]
    async fn test_soft_delete_is_idempotent() {
        let (service, store, metrics) = setup();
        let created = service
            .create(create_request("DOC12345678", "john@x.com"))
            .await
            .unwrap();

        service.soft_delete(created.id).await.unwrap();
        let once = store.inner.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(once.status, CustomerStatus::Inactive);

        service.soft_delete(created.id).await.unwrap();
        let twice = store.inner.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(twice.status, CustomerStatus::Inactive);
        assert_eq!(twice.email, created.email);
        assert_eq!(twice.first_name, created.first_name);

        assert_eq!(store.inner.len().await, 1);
        assert_eq!(metrics.operations_success.get(), 3);
    }

    #[tokio::test]
    async fn test_soft_delete_missing_customer() {
        let (service, _store, _metrics) = setup();
        assert!(matches!(
            service.soft_delete(Uuid::new_v4()).await,
            Err(CustomerError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_set_status_allows_any_transition() {
        let (service, _store, _metrics) = setup();
        let created = service
            .create(create_request("DOC12345678", "john@x.com"))
            .await
            .unwrap();
        service.soft_delete(created.id).await.unwrap();

        let path = [
            CustomerStatus::Active,
            CustomerStatus::Suspended,
            CustomerStatus::Pending,
            CustomerStatus::Inactive,
            CustomerStatus::Active,
        ];
        for status in path {
            let customer = service
                .set_status(
                    created.id,
                    UpdateStatusRequest {
                        status,
                        reason: Some("compliance review".to_string()),
                    },
                )
                .await
                .unwrap();
            assert_eq!(customer.status, status);
        }
    }

    #[tokio::test]
    async fn test_set_status_rejects_long_reason() {
        let (service, _store, _metrics) = setup();
        let created = service
            .create(create_request("DOC12345678", "john@x.com"))
            .await
            .unwrap();

        let err = service
            .set_status(
                created.id,
                UpdateStatusRequest {
                    status: CustomerStatus::Active,
                    reason: Some("x".repeat(501)),
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CustomerError::ValidationFailed(_)));
    }

    #[tokio::test]
    async fn test_set_status_missing_customer() {
        let (service, _store, _metrics) = setup();
        let err = service
            .set_status(
                Uuid::new_v4(),
                UpdateStatusRequest {
                    status: CustomerStatus::Suspended,
                    reason: None,
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CustomerError::NotFound(_)));
    }
}
