//! # Payout Store
//!
//! Concrete store adapters for the payout service. This crate provides the
//! `CustomerDirectory` and `LedgerStore` port implementations: an in-memory
//! adapter used for tests and credential-free local runs, and a SQLite
//! adapter behind the `sqlite` feature.

use async_trait::async_trait;
use chrono::Duration;

use payout_types::{
    CustomerDirectory, CustomerId, CustomerRecord, LedgerInsert, LedgerStore, PaymentId,
    PaymentRecord, StoreError,
};

pub mod memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;
#[cfg(feature = "sqlite")]
mod types;


pub use memory::MemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

/// Unified store handle over the available adapters.
pub enum Store {
    Memory(MemoryStore),
    #[cfg(feature = "sqlite")]
    Sqlite(SqliteStore),
}

/// Build and initialize a store.
///
/// A `sqlite://` URL selects the SQLite adapter (running migrations on
/// connect); `None` selects the in-memory adapter.
pub async fn build_store(database_url: Option<&str>) -> anyhow::Result<Store> {
    match database_url {
        None => Ok(Store::Memory(MemoryStore::new())),
        #[cfg(feature = "sqlite")]
        Some(url) => Ok(Store::Sqlite(SqliteStore::new(url).await?)),
        #[cfg(not(feature = "sqlite"))]
        Some(url) => anyhow::bail!(
            "DATABASE_URL {} given but this build has no `sqlite` feature",
            url
        ),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Port delegation
// ─────────────────────────────────────────────────────────────────────────────

#[async_trait]
impl CustomerDirectory for Store {
    async fn lookup(&self, id: &CustomerId) -> Result<Option<CustomerRecord>, StoreError> {
        match self {
            Store::Memory(inner) => inner.lookup(id).await,
            #[cfg(feature = "sqlite")]
            Store::Sqlite(inner) => inner.lookup(id).await,
        }
    }

    async fn register(&self, record: CustomerRecord) -> Result<(), StoreError> {
        match self {
            Store::Memory(inner) => inner.register(record).await,
            #[cfg(feature = "sqlite")]
            Store::Sqlite(inner) => inner.register(record).await,
        }
    }
}

#[async_trait]
impl LedgerStore for Store {
    async fn insert_pending(&self, record: &PaymentRecord) -> Result<LedgerInsert, StoreError> {
        match self {
            Store::Memory(inner) => inner.insert_pending(record).await,
            #[cfg(feature = "sqlite")]
            Store::Sqlite(inner) => inner.insert_pending(record).await,
        }
    }

    async fn mark_completed(&self, id: &PaymentId, gateway_ref: &str) -> Result<(), StoreError> {
        match self {
            Store::Memory(inner) => inner.mark_completed(id, gateway_ref).await,
            #[cfg(feature = "sqlite")]
            Store::Sqlite(inner) => inner.mark_completed(id, gateway_ref).await,
        }
    }

    async fn mark_failed(&self, id: &PaymentId) -> Result<(), StoreError> {
        match self {
            Store::Memory(inner) => inner.mark_failed(id).await,
            #[cfg(feature = "sqlite")]
            Store::Sqlite(inner) => inner.mark_failed(id).await,
        }
    }

    async fn get(&self, id: &PaymentId) -> Result<Option<PaymentRecord>, StoreError> {
        match self {
            Store::Memory(inner) => inner.get(id).await,
            #[cfg(feature = "sqlite")]
            Store::Sqlite(inner) => inner.get(id).await,
        }
    }

    async fn stale_pending(&self, older_than: Duration) -> Result<Vec<PaymentRecord>, StoreError> {
        match self {
            Store::Memory(inner) => inner.stale_pending(older_than).await,
            #[cfg(feature = "sqlite")]
            Store::Sqlite(inner) => inner.stale_pending(older_than).await,
        }
    }
}
