use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use super::{CustomerStore, PageRequest, StoreError};
use crate::config::DatabaseConfig;
use crate::domain::customer::{Customer, CustomerStatus, DocumentType, NewCustomer};
use crate::utils::{retry_on_transient, IsTransient};

// ============================================================================
// PostgreSQL Customer Store
// ============================================================================
//
// Enum columns are TEXT holding the upper-case literal ("DNI", "ACTIVE").
// Unique constraints uk_customers_document and uk_customers_email live in the
// migration; a losing concurrent insert surfaces as UniqueViolation.
//
// ============================================================================

const CUSTOMER_COLUMNS: &str = "customer_id, first_name, last_name, document_type, document_id, \
     email, phone, date_of_birth, address, status, created_at, updated_at";

pub struct PgCustomerStore {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    customer_id: Uuid,
    first_name: String,
    last_name: String,
    document_type: String,
    document_id: String,
    email: String,
    phone: Option<String>,
    date_of_birth: Option<NaiveDate>,
    address: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = StoreError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        let document_type = row.document_type.parse::<DocumentType>().map_err(StoreError::Decode)?;
        let status = row.status.parse::<CustomerStatus>().map_err(StoreError::Decode)?;

        Ok(Customer {
            id: row.customer_id,
            first_name: row.first_name,
            last_name: row.last_name,
            document_type,
            document_id: row.document_id,
            email: row.email,
            phone: row.phone,
            date_of_birth: row.date_of_birth,
            address: row.address,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl IsTransient for sqlx::Error {
    fn is_transient(&self) -> bool {
        matches!(
            self,
            sqlx::Error::Io(_) | sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed
        )
    }
}

/// Unique violations become `UniqueViolation`, everything else stays `Unavailable`
fn map_write_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() {
            let constraint = db_err.constraint().unwrap_or("unknown").to_string();
            return StoreError::UniqueViolation(constraint);
        }
    }
    StoreError::Unavailable(err)
}

fn page_bounds(page: PageRequest) -> (i64, i64) {
    let limit = i64::from(page.size);
    let offset = i64::try_from(page.offset()).unwrap_or(i64::MAX);
    (limit, offset)
}

impl PgCustomerStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Build a pool, retrying while the database is not reachable yet
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        tracing::info!(
            max_connections = config.max_connections,
            "Connecting to PostgreSQL..."
        );

        let pool = retry_on_transient(config.retry_config(), |attempt| {
            tracing::debug!(attempt = attempt, "Opening customer database pool");
            PgPoolOptions::new()
                .min_connections(config.min_connections)
                .max_connections(config.max_connections)
                .acquire_timeout(config.acquire_timeout())
                .connect(&config.url)
        })
        .await
        .into_result()?;

        tracing::info!("✅ Connected to customer database");
        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| StoreError::Unavailable(e.into()))?;

        tracing::info!("Customer schema is up to date");
        Ok(())
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn fetch_one_where(
        &self,
        filter: &str,
        bind: &str,
    ) -> Result<Option<Customer>, StoreError> {
        let sql = format!(
            "SELECT {} FROM customers WHERE {} ORDER BY created_at, customer_id LIMIT 1",
            CUSTOMER_COLUMNS, filter
        );

        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(bind)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Customer::try_from).transpose()
    }
}

#[async_trait]
impl CustomerStore for PgCustomerStore {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Customer>, StoreError> {
        let sql = format!("SELECT {} FROM customers WHERE customer_id = $1", CUSTOMER_COLUMNS);

        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Customer::try_from).transpose()
    }

    async fn get_by_document(&self, document_id: &str) -> Result<Option<Customer>, StoreError> {
        self.fetch_one_where("document_id = $1", document_id).await
    }

    async fn get_by_document_type_and_id(
        &self,
        document_type: DocumentType,
        document_id: &str,
    ) -> Result<Option<Customer>, StoreError> {
        let sql = format!(
            "SELECT {} FROM customers WHERE document_type = $1 AND document_id = $2",
            CUSTOMER_COLUMNS
        );

        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(document_type.as_str())
            .bind(document_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Customer::try_from).transpose()
    }

    async fn exists_by_document_type_and_id(
        &self,
        document_type: DocumentType,
        document_id: &str,
    ) -> Result<bool, StoreError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM customers WHERE document_type = $1 AND document_id = $2)",
        )
        .bind(document_type.as_str())
        .bind(document_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, StoreError> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM customers WHERE email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn list_by_status(
        &self,
        status: CustomerStatus,
        page: PageRequest,
    ) -> Result<(Vec<Customer>, u64), StoreError> {
        let (limit, offset) = page_bounds(page);
        let sql = format!(
            "SELECT {} FROM customers WHERE status = $1 \
             ORDER BY created_at, customer_id LIMIT $2 OFFSET $3",
            CUSTOMER_COLUMNS
        );

        let rows = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(status.as_str())
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        let items = rows
            .into_iter()
            .map(Customer::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let total = self.count_by_status(status).await?;

        Ok((items, total))
    }

    async fn list_all(&self, page: PageRequest) -> Result<(Vec<Customer>, u64), StoreError> {
        let (limit, offset) = page_bounds(page);
        let sql = format!(
            "SELECT {} FROM customers ORDER BY created_at, customer_id LIMIT $1 OFFSET $2",
            CUSTOMER_COLUMNS
        );

        let rows = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        let items = rows
            .into_iter()
            .map(Customer::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(&self.pool)
            .await?;

        Ok((items, total.max(0) as u64))
    }

    async fn count_by_status(&self, status: CustomerStatus) -> Result<u64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(count.max(0) as u64)
    }

    async fn insert(&self, customer: NewCustomer) -> Result<Customer, StoreError> {
        let sql = format!(
            "INSERT INTO customers (
                first_name, last_name, document_type, document_id, email,
                phone, date_of_birth, address, status
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {}",
            CUSTOMER_COLUMNS
        );

        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(&customer.first_name)
            .bind(&customer.last_name)
            .bind(customer.document_type.as_str())
            .bind(&customer.document_id)
            .bind(&customer.email)
            .bind(&customer.phone)
            .bind(customer.date_of_birth)
            .bind(&customer.address)
            .bind(customer.status.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)?;

        let customer = Customer::try_from(row)?;
        tracing::debug!(customer_id = %customer.id, "Inserted customer row");
        Ok(customer)
    }

    async fn update(&self, customer: &Customer) -> Result<Customer, StoreError> {
        let sql = format!(
            "UPDATE customers SET
                first_name = $2, last_name = $3, document_type = $4, document_id = $5,
                email = $6, phone = $7, date_of_birth = $8, address = $9,
                updated_at = now()
             WHERE customer_id = $1
             RETURNING {}",
            CUSTOMER_COLUMNS
        );

        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(customer.id)
            .bind(&customer.first_name)
            .bind(&customer.last_name)
            .bind(customer.document_type.as_str())
            .bind(&customer.document_id)
            .bind(&customer.email)
            .bind(&customer.phone)
            .bind(customer.date_of_birth)
            .bind(&customer.address)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_write_error)?;

        match row {
            Some(row) => Customer::try_from(row),
            None => Err(StoreError::Missing(customer.id)),
        }
    }

    async fn update_status(&self, id: Uuid, status: CustomerStatus) -> Result<Customer, StoreError> {
        let sql = format!(
            "UPDATE customers SET status = $2, updated_at = now()
             WHERE customer_id = $1
             RETURNING {}",
            CUSTOMER_COLUMNS
        );

        let row = sqlx::query_as::<_, CustomerRow>(&sql)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => Customer::try_from(row),
            None => Err(StoreError::Missing(id)),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
//
// Query execution needs a live PostgreSQL and is exercised by deployments
// running the migration; these tests cover the pure mapping code.
//
// ============================================================================
