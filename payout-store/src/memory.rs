//! In-memory store adapter.
//!
//! Backed by `DashMap`; suitable for tests and credential-free local runs.
//! The idempotency index is keyed separately so the conditional insert can
//! decide atomically through the map's entry API.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use payout_types::{
    CustomerDirectory, CustomerId, CustomerRecord, LedgerInsert, LedgerStore, PaymentId,
    PaymentRecord, PaymentStatus, StoreError,
};

#[derive(Default)]
pub struct MemoryStore {
    customers: DashMap<CustomerId, CustomerRecord>,
    payments: DashMap<PaymentId, PaymentRecord>,
    idempotency: DashMap<String, PaymentId>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerDirectory for MemoryStore {
    async fn lookup(&self, id: &CustomerId) -> Result<Option<CustomerRecord>, StoreError> {
        Ok(self.customers.get(id).map(|entry| entry.clone()))
    }

    async fn register(&self, record: CustomerRecord) -> Result<(), StoreError> {
        self.customers.insert(record.customer_id.clone(), record);
        Ok(())
    }
}

#[async_trait]
impl LedgerStore for MemoryStore {
    async fn insert_pending(&self, record: &PaymentRecord) -> Result<LedgerInsert, StoreError> {
        if let Some(key) = &record.idempotency_key {
            match self.idempotency.entry(key.clone()) {
                Entry::Occupied(existing) => {
                    let id = *existing.get();
                    let duplicate = self
                        .payments
                        .get(&id)
                        .map(|entry| entry.clone())
                        .ok_or_else(|| {
                            StoreError::Backend(format!(
                                "idempotency index points at missing payment {}",
                                id
                            ))
                        })?;
                    return Ok(LedgerInsert::Duplicate(duplicate));
                }
                Entry::Vacant(slot) => {
                    slot.insert(record.payment_id);
                }
            }
        }

        self.payments.insert(record.payment_id, record.clone());
        Ok(LedgerInsert::Inserted)
    }

    async fn mark_completed(&self, id: &PaymentId, gateway_ref: &str) -> Result<(), StoreError> {
        self.transition(id, PaymentStatus::Completed, Some(gateway_ref))
    }

    async fn mark_failed(&self, id: &PaymentId) -> Result<(), StoreError> {
        self.transition(id, PaymentStatus::Failed, None)
    }

    async fn get(&self, id: &PaymentId) -> Result<Option<PaymentRecord>, StoreError> {
        Ok(self.payments.get(id).map(|entry| entry.clone()))
    }

    async fn stale_pending(&self, older_than: Duration) -> Result<Vec<PaymentRecord>, StoreError> {
        let cutoff = Utc::now() - older_than;
        Ok(self
            .payments
            .iter()
            .filter(|entry| {
                entry.status == PaymentStatus::Pending && entry.created_at <= cutoff
            })
            .map(|entry| entry.clone())
            .collect())
    }
}

impl MemoryStore {
    fn transition(
        &self,
        id: &PaymentId,
        status: PaymentStatus,
        gateway_ref: Option<&str>,
    ) -> Result<(), StoreError> {
        let mut record = self
            .payments
            .get_mut(id)
            .ok_or_else(|| StoreError::Backend(format!("no payment record {}", id)))?;

        if record.status != PaymentStatus::Pending {
            return Err(StoreError::Backend(format!(
                "payment {} already {}",
                id, record.status
            )));
        }

        record.status = status;
        if let Some(gateway_ref) = gateway_ref {
            record.gateway_ref = Some(gateway_ref.to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payout_types::PaymentRequest;
    use rust_decimal_macros::dec;

    fn record(idempotency_key: Option<&str>) -> PaymentRecord {
        let request = PaymentRequest::parse(
            "u1",
            "u1@x.com",
            dec!(100.00),
            Some("USD"),
            idempotency_key.map(String::from),
        )
        .unwrap();
        PaymentRecord::pending(&request)
    }

    #[tokio::test]
    async fn register_then_lookup_round_trips() {
        let store = MemoryStore::new();
        let id = CustomerId::new("u1").unwrap();
        store
            .register(CustomerRecord::new(id.clone(), "u1@x.com".into()))
            .await
            .unwrap();

        let found = store.lookup(&id).await.unwrap().unwrap();
        assert_eq!(found.email, "u1@x.com");
    }

    #[tokio::test]
    async fn lookup_of_unknown_customer_is_none_not_error() {
        let store = MemoryStore::new();
        let missing = store
            .lookup(&CustomerId::new("ghost").unwrap())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn register_overwrites_existing_record() {
        let store = MemoryStore::new();
        let id = CustomerId::new("u1").unwrap();
        store
            .register(CustomerRecord::new(id.clone(), "old@x.com".into()))
            .await
            .unwrap();
        store
            .register(CustomerRecord::new(id.clone(), "new@x.com".into()))
            .await
            .unwrap();

        assert_eq!(store.lookup(&id).await.unwrap().unwrap().email, "new@x.com");
    }

    #[tokio::test]
    async fn pending_then_completed_transition() {
        let store = MemoryStore::new();
        let pending = record(None);
        store.insert_pending(&pending).await.unwrap();

        store
            .mark_completed(&pending.payment_id, "PAY-123")
            .await
            .unwrap();

        let stored = store.get(&pending.payment_id).await.unwrap().unwrap();
        assert_eq!(stored.status, PaymentStatus::Completed);
        assert_eq!(stored.gateway_ref.as_deref(), Some("PAY-123"));
    }

    #[tokio::test]
    async fn completed_records_cannot_transition_again() {
        let store = MemoryStore::new();
        let pending = record(None);
        store.insert_pending(&pending).await.unwrap();
        store
            .mark_completed(&pending.payment_id, "PAY-123")
            .await
            .unwrap();

        assert!(store.mark_failed(&pending.payment_id).await.is_err());
    }

    #[tokio::test]
    async fn duplicate_idempotency_key_returns_existing_record() {
        let store = MemoryStore::new();
        let first = record(Some("key-1"));
        let second = record(Some("key-1"));

        assert_eq!(
            store.insert_pending(&first).await.unwrap(),
            LedgerInsert::Inserted
        );
        match store.insert_pending(&second).await.unwrap() {
            LedgerInsert::Duplicate(existing) => {
                assert_eq!(existing.payment_id, first.payment_id)
            }
            LedgerInsert::Inserted => panic!("second insert must not write"),
        }

        // Only the first record exists.
        assert!(store.get(&second.payment_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn records_without_keys_never_deduplicate() {
        let store = MemoryStore::new();
        let first = record(None);
        let second = record(None);

        assert_eq!(
            store.insert_pending(&first).await.unwrap(),
            LedgerInsert::Inserted
        );
        assert_eq!(
            store.insert_pending(&second).await.unwrap(),
            LedgerInsert::Inserted
        );
        assert_ne!(first.payment_id, second.payment_id);
    }

    #[tokio::test]
    async fn stale_pending_skips_fresh_and_settled_records() {
        let store = MemoryStore::new();
        let fresh = record(None);
        store.insert_pending(&fresh).await.unwrap();

        let mut old = record(None);
        old.created_at = Utc::now() - Duration::hours(2);
        store.insert_pending(&old).await.unwrap();

        let mut settled = record(None);
        settled.created_at = Utc::now() - Duration::hours(2);
        store.insert_pending(&settled).await.unwrap();
        store
            .mark_completed(&settled.payment_id, "PAY-9")
            .await
            .unwrap();

        let stale = store.stale_pending(Duration::hours(1)).await.unwrap();
        assert_eq!(stale.len(), 1);
        assert_eq!(stale[0].payment_id, old.payment_id);
    }
}
