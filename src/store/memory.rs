use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CustomerStore, PageRequest, StoreError, DOCUMENT_CONSTRAINT, EMAIL_CONSTRAINT};
use crate::domain::customer::{Customer, CustomerStatus, DocumentType, NewCustomer};

/// In-process customer store with the same unique constraints as the database
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    customers: RwLock<HashMap<Uuid, Customer>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.customers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.customers.read().await.is_empty()
    }

    fn check_unique(
        customers: &HashMap<Uuid, Customer>,
        id: Option<Uuid>,
        document_type: DocumentType,
        document_id: &str,
        email: &str,
    ) -> Result<(), StoreError> {
        let mut others = customers.values().filter(|c| Some(c.id) != id);

        if others
            .clone()
            .any(|c| c.document_type == document_type && c.document_id == document_id)
        {
            return Err(StoreError::UniqueViolation(DOCUMENT_CONSTRAINT.to_string()));
        }
        if others.any(|c| c.email == email) {
            return Err(StoreError::UniqueViolation(EMAIL_CONSTRAINT.to_string()));
        }
        Ok(())
    }

    fn paginate<'a>(
        matching: impl Iterator<Item = &'a Customer>,
        page: PageRequest,
    ) -> (Vec<Customer>, u64) {
        let mut matching: Vec<&Customer> = matching.collect();
        matching.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));

        let total = matching.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let items = matching
            .into_iter()
            .skip(offset)
            .take(page.size as usize)
            .cloned()
            .collect();

        (items, total)
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Customer>, StoreError> {
        Ok(self.customers.read().await.get(&id).cloned())
    }

    async fn get_by_document(&self, document_id: &str) -> Result<Option<Customer>, StoreError> {
        let customers = self.customers.read().await;
        Ok(customers
            .values()
            .filter(|c| c.document_id == document_id)
            .min_by_key(|c| (c.created_at, c.id))
            .cloned())
    }

    async fn get_by_document_type_and_id(
        &self,
        document_type: DocumentType,
        document_id: &str,
    ) -> Result<Option<Customer>, StoreError> {
        let customers = self.customers.read().await;
        Ok(customers
            .values()
            .find(|c| c.document_type == document_type && c.document_id == document_id)
            .cloned())
    }

    async fn exists_by_document_type_and_id(
        &self,
        document_type: DocumentType,
        document_id: &str,
    ) -> Result<bool, StoreError> {
        let customers = self.customers.read().await;
        Ok(customers
            .values()
            .any(|c| c.document_type == document_type && c.document_id == document_id))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        let customers = self.customers.read().await;
        Ok(customers.values().any(|c| c.email == email))
    }

    async fn list_by_status(
        &self,
        status: CustomerStatus,
        page: PageRequest,
    ) -> Result<(Vec<Customer>, u64), StoreError> {
        let customers = self.customers.read().await;
        Ok(Self::paginate(
            customers.values().filter(|c| c.status == status),
            page,
        ))
    }

    async fn list_all(&self, page: PageRequest) -> Result<(Vec<Customer>, u64), StoreError> {
        let customers = self.customers.read().await;
        Ok(Self::paginate(customers.values(), page))
    }

    async fn count_by_status(&self, status: CustomerStatus) -> Result<u64, StoreError> {
        let customers = self.customers.read().await;
        Ok(customers.values().filter(|c| c.status == status).count() as u64)
    }

    async fn insert(&self, customer: NewCustomer) -> Result<Customer, StoreError> {
        let mut customers = self.customers.write().await;
        Self::check_unique(
            &customers,
            None,
            customer.document_type,
            &customer.document_id,
            &customer.email,
        )?;

        let customer = customer.into_customer(Uuid::new_v4(), Utc::now());
        customers.insert(customer.id, customer.clone());

        tracing::debug!(customer_id = %customer.id, "Inserted customer into memory store");
        Ok(customer)
    }

    async fn update(&self, customer: &Customer) -> Result<Customer, StoreError> {
        let mut customers = self.customers.write().await;
        if !customers.contains_key(&customer.id) {
            return Err(StoreError::Missing(customer.id));
        }
        Self::check_unique(
            &customers,
            Some(customer.id),
            customer.document_type,
            &customer.document_id,
            &customer.email,
        )?;

        let stored = customers
            .get_mut(&customer.id)
            .ok_or(StoreError::Missing(customer.id))?;

        *stored = Customer {
            status: stored.status,
            created_at: stored.created_at,
            updated_at: Utc::now(),
            ..customer.clone()
        };

        Ok(stored.clone())
    }

    async fn update_status(&self, id: Uuid, status: CustomerStatus) -> Result<Customer, StoreError> {
        let mut customers = self.customers.write().await;
        let stored = customers.get_mut(&id).ok_or(StoreError::Missing(id))?;

        stored.status = status;
        stored.updated_at = Utc::now();
        Ok(stored.clone())
    }
}
