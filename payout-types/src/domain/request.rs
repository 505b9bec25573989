//! Validated payment submission.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::Currency;
use super::customer::CustomerId;
use crate::dto::SubmitPaymentRequest;
use crate::error::ValidationError;

/// A payment submission that has passed structural validation.
///
/// Constructing one of these is the validation step: every field check
/// happens here, before any directory, gateway, or ledger call is made.
/// Instances are immutable and discarded once orchestration completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub customer_id: CustomerId,
    pub email: String,
    pub amount: Decimal,
    pub currency: Currency,
    pub idempotency_key: Option<String>,
}

impl PaymentRequest {
    /// Validates raw submission fields.
    ///
    /// Rules: `customer_id` and `email` non-empty after trimming, `amount`
    /// strictly positive, `currency` absent (defaults to USD) or in the
    /// allow-list. A blank idempotency key is treated as absent.
    pub fn parse(
        customer_id: &str,
        email: &str,
        amount: Decimal,
        currency: Option<&str>,
        idempotency_key: Option<String>,
    ) -> Result<Self, ValidationError> {
        let customer_id = CustomerId::new(customer_id).ok_or_else(|| ValidationError {
            field: "customer_id",
            reason: "must not be empty".to_string(),
        })?;

        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationError {
                field: "email",
                reason: "must not be empty".to_string(),
            });
        }

        if amount <= Decimal::ZERO {
            return Err(ValidationError {
                field: "amount",
                reason: "must be a positive amount".to_string(),
            });
        }

        let currency = match currency {
            Some(code) => code.parse::<Currency>().map_err(|reason| ValidationError {
                field: "currency",
                reason,
            })?,
            None => Currency::default(),
        };

        let idempotency_key = idempotency_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        Ok(Self {
            customer_id,
            email: email.to_string(),
            amount,
            currency,
            idempotency_key,
        })
    }

    /// Validates an inbound submission DTO.
    pub fn from_submission(req: &SubmitPaymentRequest) -> Result<Self, ValidationError> {
        Self::parse(
            &req.customer_id,
            &req.email,
            req.amount,
            req.currency.as_deref(),
            req.idempotency_key.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn accepts_well_formed_request() {
        let req = PaymentRequest::parse("u1", " u1@x.com ", dec!(100.00), Some("USD"), None)
            .expect("valid request");
        assert_eq!(req.customer_id.as_str(), "u1");
        assert_eq!(req.email, "u1@x.com");
        assert_eq!(req.currency, Currency::USD);
        assert!(req.idempotency_key.is_none());
    }

    #[test]
    fn rejects_blank_customer_id() {
        let err = PaymentRequest::parse("  ", "u1@x.com", dec!(1), None, None).unwrap_err();
        assert_eq!(err.field, "customer_id");
    }

    #[test]
    fn rejects_blank_email() {
        let err = PaymentRequest::parse("u1", "", dec!(1), None, None).unwrap_err();
        assert_eq!(err.field, "email");
    }

    #[test]
    fn rejects_non_positive_amounts() {
        let zero = PaymentRequest::parse("u1", "u1@x.com", dec!(0), None, None).unwrap_err();
        assert_eq!(zero.field, "amount");
        let negative =
            PaymentRequest::parse("u1", "u1@x.com", dec!(-5.00), None, None).unwrap_err();
        assert_eq!(negative.field, "amount");
    }

    #[test]
    fn rejects_unknown_currency() {
        let err = PaymentRequest::parse("u1", "u1@x.com", dec!(1), Some("XYZ"), None).unwrap_err();
        assert_eq!(err.field, "currency");
    }

    #[test]
    fn missing_currency_defaults_to_usd() {
        let req = PaymentRequest::parse("u1", "u1@x.com", dec!(1), None, None).unwrap();
        assert_eq!(req.currency, Currency::USD);
    }

    #[test]
    fn blank_idempotency_key_is_dropped() {
        let req =
            PaymentRequest::parse("u1", "u1@x.com", dec!(1), None, Some("  ".into())).unwrap();
        assert!(req.idempotency_key.is_none());
    }
}
