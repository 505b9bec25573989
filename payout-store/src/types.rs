//! Row types mapping SQLite rows onto domain records.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use payout_types::{
    Currency, CustomerId, CustomerRecord, PaymentId, PaymentRecord, PaymentStatus, StoreError,
};

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct DbCustomer {
    pub customer_id: String,
    pub email: String,
    pub created_at: String,
}

impl TryFrom<DbCustomer> for CustomerRecord {
    type Error = StoreError;

    fn try_from(row: DbCustomer) -> Result<Self, Self::Error> {
        let customer_id = CustomerId::new(&row.customer_id)
            .ok_or_else(|| StoreError::Backend("empty customer_id column".into()))?;
        let created_at = parse_timestamp(&row.created_at)?;
        Ok(CustomerRecord {
            customer_id,
            email: row.email,
            created_at,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct DbPayment {
    pub payment_id: String,
    pub customer_id: String,
    pub email: String,
    pub amount: String,
    pub currency: String,
    pub payment_method: String,
    pub status: String,
    pub gateway_ref: Option<String>,
    pub idempotency_key: Option<String>,
    pub created_at: String,
}

impl TryFrom<DbPayment> for PaymentRecord {
    type Error = StoreError;

    fn try_from(row: DbPayment) -> Result<Self, Self::Error> {
        let payment_id = Uuid::parse_str(&row.payment_id)
            .map(PaymentId::from_uuid)
            .map_err(|e| StoreError::Backend(format!("bad payment_id column: {}", e)))?;
        let customer_id = CustomerId::new(&row.customer_id)
            .ok_or_else(|| StoreError::Backend("empty customer_id column".into()))?;
        let amount = Decimal::from_str(&row.amount)
            .map_err(|e| StoreError::Backend(format!("bad amount column: {}", e)))?;
        let currency = row
            .currency
            .parse::<Currency>()
            .map_err(StoreError::Backend)?;
        let status = row
            .status
            .parse::<PaymentStatus>()
            .map_err(StoreError::Backend)?;
        let created_at = parse_timestamp(&row.created_at)?;

        Ok(PaymentRecord {
            payment_id,
            customer_id,
            email: row.email,
            amount,
            currency,
            payment_method: row.payment_method,
            status,
            gateway_ref: row.gateway_ref,
            idempotency_key: row.idempotency_key,
            created_at,
        })
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| StoreError::Backend(format!("bad created_at column: {}", e)))
}
