//! Ledger-side payment domain model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::currency::Currency;
use super::customer::CustomerId;
use super::request::PaymentRequest;

/// The only payment method this service disburses through.
pub const PAYMENT_METHOD: &str = "paypal";

/// Unique identifier for a ledger payment record.
///
/// Random v4 UUID rather than a timestamp so that concurrent or rapidly
/// retried submissions for the same customer cannot collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(Uuid);

impl PaymentId {
    /// Creates a new random PaymentId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a PaymentId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PaymentId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Lifecycle of a ledger entry.
///
/// A record is written as `Pending` before the gateway is called and
/// transitions exactly once, to `Completed` on gateway success or `Failed`
/// on a clean decline. Entries stuck in `Pending` are surfaced by the
/// reconciliation worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "Pending"),
            PaymentStatus::Completed => write!(f, "Completed"),
            PaymentStatus::Failed => write!(f, "Failed"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(PaymentStatus::Pending),
            "Completed" => Ok(PaymentStatus::Completed),
            "Failed" => Ok(PaymentStatus::Failed),
            other => Err(format!("unknown payment status: {}", other)),
        }
    }
}

/// A durably recorded disbursement.
///
/// Amount and currency are copied verbatim from the validated request.
/// `gateway_ref` is filled in when the gateway authorization succeeds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub payment_id: PaymentId,
    pub customer_id: CustomerId,
    pub email: String,
    pub amount: Decimal,
    pub currency: Currency,
    pub payment_method: String,
    pub status: PaymentStatus,
    pub gateway_ref: Option<String>,
    pub idempotency_key: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PaymentRecord {
    /// Builds the pending ledger entry for a validated request.
    pub fn pending(request: &PaymentRequest) -> Self {
        Self {
            payment_id: PaymentId::new(),
            customer_id: request.customer_id.clone(),
            email: request.email.clone(),
            amount: request.amount,
            currency: request.currency,
            payment_method: PAYMENT_METHOD.to_string(),
            status: PaymentStatus::Pending,
            gateway_ref: None,
            idempotency_key: request.idempotency_key.clone(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn request() -> PaymentRequest {
        PaymentRequest::parse("u1", "u1@x.com", dec!(100.00), Some("USD"), None).unwrap()
    }

    #[test]
    fn pending_record_copies_request_fields() {
        let record = PaymentRecord::pending(&request());
        assert_eq!(record.customer_id.as_str(), "u1");
        assert_eq!(record.email, "u1@x.com");
        assert_eq!(record.amount, dec!(100.00));
        assert_eq!(record.currency, Currency::USD);
        assert_eq!(record.payment_method, "paypal");
        assert_eq!(record.status, PaymentStatus::Pending);
        assert!(record.gateway_ref.is_none());
    }

    #[test]
    fn payment_ids_are_distinct() {
        assert_ne!(PaymentId::new(), PaymentId::new());
    }

    #[test]
    fn status_round_trips_through_display() {
        for status in [
            PaymentStatus::Pending,
            PaymentStatus::Completed,
            PaymentStatus::Failed,
        ] {
            assert_eq!(status.to_string().parse::<PaymentStatus>().unwrap(), status);
        }
    }
}
