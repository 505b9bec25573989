//! Error types for the payout service.

use crate::domain::CustomerId;

/// A structural validation failure for a single inbound field.
///
/// Safe to echo back to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {field}: {reason}")]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

/// Store-level errors (directory or ledger infrastructure failures).
///
/// Absence of a record is never a `StoreError`; lookups return
/// `Ok(None)` for that. These messages may contain backend identifiers
/// and must not be forwarded to callers.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store backend error: {0}")]
    Backend(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Errors from the payment gateway's OAuth or authorization endpoints.
///
/// A non-2xx response keeps the gateway's original status code and raw
/// body so the orchestrator can propagate the status and log the body;
/// callers never see the body.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("gateway returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("gateway unreachable: {0}")]
    Transport(String),
}

impl GatewayError {
    /// The HTTP status to surface for this failure. Transport errors have
    /// no gateway status and surface as 500.
    pub fn surfaced_status(&self) -> u16 {
        match self {
            GatewayError::Status { status, .. } => *status,
            GatewayError::Transport(_) => 500,
        }
    }

    /// Diagnostic detail for the operational log sink.
    pub fn detail(&self) -> String {
        self.to_string()
    }
}

/// Application-level error taxonomy returned by the orchestrator.
///
/// `Display` carries full diagnostic detail and is intended for the log
/// sink only; [`PaymentError::public_message`] is what callers may see.
#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("{0} not in records")]
    CustomerNotFound(CustomerId),

    #[error("customer details do not match our records")]
    IdentityMismatch,

    #[error("gateway authentication failed (status {status}): {detail}")]
    AuthFailure { status: u16, detail: String },

    #[error("payment declined (status {status}): {detail}")]
    PaymentDeclined { status: u16, detail: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl PaymentError {
    /// The HTTP status code this error maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::Validation { .. } => 400,
            PaymentError::CustomerNotFound(_) => 404,
            PaymentError::IdentityMismatch => 400,
            PaymentError::AuthFailure { status, .. } => *status,
            PaymentError::PaymentDeclined { status, .. } => *status,
            PaymentError::Internal(_) => 500,
        }
    }

    /// The sanitized message callers are allowed to see.
    ///
    /// Validation, not-found, and mismatch outcomes echo their own wording;
    /// everything downstream is replaced with a generic notice because the
    /// raw detail may contain gateway bodies or infrastructure identifiers.
    pub fn public_message(&self) -> String {
        match self {
            PaymentError::Validation { field, reason } => {
                format!("invalid {}: {}", field, reason)
            }
            PaymentError::CustomerNotFound(id) => format!("{} not in records", id),
            PaymentError::IdentityMismatch => {
                "customer details do not match our records".to_string()
            }
            PaymentError::AuthFailure { .. } => {
                "failed to authenticate with the payment gateway".to_string()
            }
            PaymentError::PaymentDeclined { .. } => {
                "payment was declined by the gateway".to_string()
            }
            PaymentError::Internal(_) => "an internal error occurred".to_string(),
        }
    }
}

impl From<ValidationError> for PaymentError {
    fn from(err: ValidationError) -> Self {
        PaymentError::Validation {
            field: err.field,
            reason: err.reason,
        }
    }
}

impl From<StoreError> for PaymentError {
    fn from(err: StoreError) -> Self {
        PaymentError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CustomerId;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            PaymentError::Validation {
                field: "amount",
                reason: "must be a positive amount".into()
            }
            .status_code(),
            400
        );
        assert_eq!(
            PaymentError::CustomerNotFound(CustomerId::new("u1").unwrap()).status_code(),
            404
        );
        assert_eq!(PaymentError::IdentityMismatch.status_code(), 400);
        assert_eq!(
            PaymentError::AuthFailure {
                status: 503,
                detail: "upstream down".into()
            }
            .status_code(),
            503
        );
        assert_eq!(PaymentError::Internal("boom".into()).status_code(), 500);
    }

    #[test]
    fn public_messages_suppress_downstream_detail() {
        let declined = PaymentError::PaymentDeclined {
            status: 402,
            detail: r#"{"name":"INSTRUMENT_DECLINED","debug_id":"abc123"}"#.into(),
        };
        assert!(!declined.public_message().contains("debug_id"));

        let internal = PaymentError::Internal("dynamodb table Disbursements missing".into());
        assert!(!internal.public_message().contains("Disbursements"));
    }

    #[test]
    fn not_found_message_is_safe_to_echo() {
        let err = PaymentError::CustomerNotFound(CustomerId::new("u1").unwrap());
        assert_eq!(err.public_message(), "u1 not in records");
    }

    #[test]
    fn transport_errors_surface_as_500() {
        assert_eq!(
            GatewayError::Transport("connection refused".into()).surfaced_status(),
            500
        );
        assert_eq!(
            GatewayError::Status {
                status: 401,
                body: "{}".into()
            }
            .surfaced_status(),
            401
        );
    }
}
