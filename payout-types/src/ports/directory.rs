//! Customer directory port trait.

use crate::domain::{CustomerId, CustomerRecord};
use crate::error::StoreError;

/// Read/write access to the customer directory, keyed by `customer_id`.
///
/// An absent customer is a normal business outcome and comes back as
/// `Ok(None)`; `StoreError` is reserved for infrastructure failures.
#[async_trait::async_trait]
pub trait CustomerDirectory: Send + Sync + 'static {
    /// Looks up a customer by identifier. Read-only.
    async fn lookup(&self, id: &CustomerId) -> Result<Option<CustomerRecord>, StoreError>;

    /// Registers a customer, overwriting any record with the same id
    /// (put semantics).
    async fn register(&self, record: CustomerRecord) -> Result<(), StoreError>;
}

#[async_trait::async_trait]
impl<T: CustomerDirectory + ?Sized> CustomerDirectory for std::sync::Arc<T> {
    async fn lookup(&self, id: &CustomerId) -> Result<Option<CustomerRecord>, StoreError> {
        (**self).lookup(id).await
    }

    async fn register(&self, record: CustomerRecord) -> Result<(), StoreError> {
        (**self).register(record).await
    }
}
