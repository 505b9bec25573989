//! Ledger store port trait.

use chrono::Duration;

use crate::domain::{PaymentId, PaymentRecord};
use crate::error::StoreError;

/// Outcome of a conditional ledger insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerInsert {
    /// The record was written.
    Inserted,
    /// A record with the same idempotency key already exists; no write
    /// occurred. Carries the existing record.
    Duplicate(PaymentRecord),
}

/// Durable store for disbursement records.
///
/// Records are written as `Pending` before the gateway call and change
/// status exactly once afterwards. There is no delete path.
#[async_trait::async_trait]
pub trait LedgerStore: Send + Sync + 'static {
    /// Inserts a pending record. When the record carries an idempotency
    /// key and an entry with that key already exists, nothing is written
    /// and the existing record is returned instead.
    async fn insert_pending(&self, record: &PaymentRecord) -> Result<LedgerInsert, StoreError>;

    /// Transitions a pending record to `Completed`, attaching the
    /// gateway-assigned reference.
    async fn mark_completed(&self, id: &PaymentId, gateway_ref: &str) -> Result<(), StoreError>;

    /// Transitions a pending record to `Failed` after a clean gateway
    /// decline or auth failure.
    async fn mark_failed(&self, id: &PaymentId) -> Result<(), StoreError>;

    /// Fetches a record by payment id.
    async fn get(&self, id: &PaymentId) -> Result<Option<PaymentRecord>, StoreError>;

    /// Lists records still `Pending` after `older_than`; input for the
    /// reconciliation worker.
    async fn stale_pending(&self, older_than: Duration) -> Result<Vec<PaymentRecord>, StoreError>;
}

#[async_trait::async_trait]
impl<T: LedgerStore + ?Sized> LedgerStore for std::sync::Arc<T> {
    async fn insert_pending(&self, record: &PaymentRecord) -> Result<LedgerInsert, StoreError> {
        (**self).insert_pending(record).await
    }

    async fn mark_completed(&self, id: &PaymentId, gateway_ref: &str) -> Result<(), StoreError> {
        (**self).mark_completed(id, gateway_ref).await
    }

    async fn mark_failed(&self, id: &PaymentId) -> Result<(), StoreError> {
        (**self).mark_failed(id).await
    }

    async fn get(&self, id: &PaymentId) -> Result<Option<PaymentRecord>, StoreError> {
        (**self).get(id).await
    }

    async fn stale_pending(&self, older_than: Duration) -> Result<Vec<PaymentRecord>, StoreError> {
        (**self).stale_pending(older_than).await
    }
}
