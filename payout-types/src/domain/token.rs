//! Gateway access token and authorization result.

use chrono::{DateTime, Utc};

/// Bearer token obtained from the gateway's OAuth endpoint.
///
/// Scoped to a single orchestration call; there is no cross-request token
/// cache. The token value is deliberately excluded from `Debug` output so
/// it cannot leak into logs.
#[derive(Clone)]
pub struct AccessToken {
    value: String,
    obtained_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(value: String) -> Self {
        Self {
            value,
            obtained_at: Utc::now(),
        }
    }

    /// The raw bearer token value.
    pub fn secret(&self) -> &str {
        &self.value
    }

    pub fn obtained_at(&self) -> DateTime<Utc> {
        self.obtained_at
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"<redacted>")
            .field("obtained_at", &self.obtained_at)
            .finish()
    }
}

/// The slice of a gateway-side payment authorization this service observes:
/// the gateway-assigned reference. Not persisted directly; re-derived into
/// the ledger record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayAuthorization {
    pub gateway_ref: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_token_value() {
        let token = AccessToken::new("A21AAaSecret".to_string());
        let printed = format!("{:?}", token);
        assert!(printed.contains("<redacted>"));
        assert!(!printed.contains("A21AAaSecret"));
    }
}
