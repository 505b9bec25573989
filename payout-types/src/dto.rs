//! Data Transfer Objects (DTOs) for requests and responses.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Currency, CustomerId, CustomerRecord, PaymentId, PaymentRecord};

// ─────────────────────────────────────────────────────────────────────────────
// Customer DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to register a customer in the directory.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterCustomerRequest {
    /// Customer identifier, unique within the directory
    #[schema(example = "u1")]
    pub customer_id: String,
    /// Payout email address on record for this customer
    #[schema(example = "u1@x.com")]
    pub email: String,
}

/// A customer as returned by the directory endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerResponse {
    #[schema(value_type = String, example = "u1")]
    pub customer_id: CustomerId,
    #[schema(example = "u1@x.com")]
    pub email: String,
}

impl From<CustomerRecord> for CustomerResponse {
    fn from(record: CustomerRecord) -> Self {
        Self {
            customer_id: record.customer_id,
            email: record.email,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to disburse a payment to a customer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitPaymentRequest {
    /// Customer identifier; must exist in the directory
    #[schema(example = "u1")]
    pub customer_id: String,
    /// Payee email address
    #[schema(example = "u1@x.com")]
    pub email: String,
    /// Amount in major currency units
    #[schema(value_type = f64, example = 100.00)]
    pub amount: Decimal,
    /// ISO-4217 currency code; defaults to USD when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "USD")]
    pub currency: Option<String>,
    /// Optional idempotency key; resubmissions carrying the same key
    /// return the original result instead of paying twice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idempotency_key: Option<String>,
}

/// Response after a payment has been orchestrated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaymentConfirmation {
    /// Human-readable outcome summary
    #[schema(example = "u1 payment successful")]
    pub message: String,
    #[schema(value_type = String, example = "u1")]
    pub customer_id: CustomerId,
    #[schema(example = "u1@x.com")]
    pub email: String,
    #[schema(value_type = f64, example = 100.00)]
    pub amount: Decimal,
    pub currency: Currency,
    /// Ledger-assigned payment identifier
    #[schema(value_type = String, example = "123e4567-e89b-12d3-a456-426614174000")]
    pub payment_id: PaymentId,
    /// Ledger status of the payment record
    #[schema(example = "Completed")]
    pub status: String,
}

impl PaymentConfirmation {
    /// Shapes the caller-facing confirmation from a ledger record.
    pub fn from_record(record: PaymentRecord) -> Self {
        Self {
            message: format!("{} payment successful", record.customer_id),
            customer_id: record.customer_id,
            email: record.email,
            amount: record.amount,
            currency: record.currency,
            payment_id: record.payment_id,
            status: record.status.to_string(),
        }
    }
}
