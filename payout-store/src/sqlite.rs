//! SQLite store adapter.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use payout_types::{
    CustomerDirectory, CustomerId, CustomerRecord, LedgerInsert, LedgerStore, PaymentId,
    PaymentRecord, StoreError,
};

use crate::types::{DbCustomer, DbPayment};

/// SQLite implementation of both store ports.
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Connects and runs migrations.
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        // Ensure on-disk SQLite target directory exists (no-op for in-memory).
        if let Some(path) = database_url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if path != ":memory:" {
                let p = std::path::Path::new(path);
                if let Some(parent) = p.parent() {
                    if !parent.as_os_str().is_empty() {
                        tokio::fs::create_dir_all(parent).await?;
                    }
                }
            }
        }

        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePool::connect_with(options).await?;

        let ddl = include_str!("../migrations/0001_create_tables.sql");
        sqlx::raw_sql(ddl).execute(&pool).await?;

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn store_err(e: sqlx::Error) -> StoreError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => StoreError::Unavailable(e.to_string()),
        other => StoreError::Backend(other.to_string()),
    }
}

#[async_trait]
impl CustomerDirectory for SqliteStore {
    async fn lookup(&self, id: &CustomerId) -> Result<Option<CustomerRecord>, StoreError> {
        let row: Option<DbCustomer> = sqlx::query_as(
            r#"SELECT customer_id, email, created_at FROM customers WHERE customer_id = ?"#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        row.map(CustomerRecord::try_from).transpose()
    }

    async fn register(&self, record: CustomerRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"INSERT INTO customers (customer_id, email, created_at) VALUES (?, ?, ?)
               ON CONFLICT(customer_id) DO UPDATE SET email = excluded.email"#,
        )
        .bind(record.customer_id.as_str())
        .bind(&record.email)
        .bind(record.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(())
    }
}

#[async_trait]
impl LedgerStore for SqliteStore {
    async fn insert_pending(&self, record: &PaymentRecord) -> Result<LedgerInsert, StoreError> {
        let result = sqlx::query(
            r#"INSERT INTO disbursements
               (payment_id, customer_id, email, amount, currency, payment_method,
                status, gateway_ref, idempotency_key, created_at)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
               ON CONFLICT(idempotency_key) DO NOTHING"#,
        )
        .bind(record.payment_id.to_string())
        .bind(record.customer_id.as_str())
        .bind(&record.email)
        .bind(record.amount.to_string())
        .bind(record.currency.code())
        .bind(&record.payment_method)
        .bind(record.status.to_string())
        .bind(&record.gateway_ref)
        .bind(&record.idempotency_key)
        .bind(record.created_at.to_rfc3339())
        .execute(&self.pool)
        .await
        .map_err(store_err)?;

        if result.rows_affected() > 0 {
            return Ok(LedgerInsert::Inserted);
        }

        // The conditional insert was skipped: an entry with this
        // idempotency key already exists.
        let key = record.idempotency_key.as_deref().ok_or_else(|| {
            StoreError::Backend("insert skipped without an idempotency key".into())
        })?;

        let existing: DbPayment = sqlx::query_as(
            r#"SELECT payment_id, customer_id, email, amount, currency, payment_method,
                      status, gateway_ref, idempotency_key, created_at
               FROM disbursements WHERE idempotency_key = ?"#,
        )
        .bind(key)
        .fetch_one(&self.pool)
        .await
        .map_err(store_err)?;

        Ok(LedgerInsert::Duplicate(existing.try_into()?))
    }

    async fn mark_completed(&self, id: &PaymentId, gateway_ref: &str) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"UPDATE disbursements SET status = 'Completed', gateway_ref = ?
               WHERE payment_id = ? AND status = 'Pending'"#,
        )
        .bind(gateway_ref)
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(store_err)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Backend(format!(
                "no pending payment record {}",
                id
            )));
        }
        Ok(())
    }

    async fn mark_failed(&self, id: &PaymentId) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"UPDATE disbursements SET status = 'Failed'
               WHERE payment_id = ? AND status = 'Pending'"#,
        )
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(store_err)?;

        if result.rows_affected() == 0 {
            return Err(StoreError::Backend(format!(
                "no pending payment record {}",
                id
            )));
        }
        Ok(())
    }

    async fn get(&self, id: &PaymentId) -> Result<Option<PaymentRecord>, StoreError> {
        let row: Option<DbPayment> = sqlx::query_as(
            r#"SELECT payment_id, customer_id, email, amount, currency, payment_method,
                      status, gateway_ref, idempotency_key, created_at
               FROM disbursements WHERE payment_id = ?"#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(store_err)?;

        row.map(PaymentRecord::try_from).transpose()
    }

    async fn stale_pending(&self, older_than: Duration) -> Result<Vec<PaymentRecord>, StoreError> {
        let cutoff = (Utc::now() - older_than).to_rfc3339();

        let rows: Vec<DbPayment> = sqlx::query_as(
            r#"SELECT payment_id, customer_id, email, amount, currency, payment_method,
                      status, gateway_ref, idempotency_key, created_at
               FROM disbursements WHERE status = 'Pending' AND created_at <= ?"#,
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await
        .map_err(store_err)?;

        rows.into_iter().map(PaymentRecord::try_from).collect()
    }
}
