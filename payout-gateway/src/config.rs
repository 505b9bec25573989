//! Gateway connection settings.

use std::time::Duration;

/// Settings for talking to the payment gateway.
///
/// Credentials are injected here explicitly and handed to the adapters at
/// construction time; nothing in this crate reads ambient process state.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Gateway base URL, e.g. `https://api.sandbox.paypal.com`.
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
    /// Per-request timeout for both the token and payment endpoints. A
    /// timed-out call is reported as the corresponding step's error.
    pub timeout: Duration,
}

impl GatewayConfig {
    pub fn new(base_url: String, client_id: String, client_secret: String) -> Self {
        Self {
            base_url,
            client_id,
            client_secret,
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Joins an endpoint path onto the base URL, tolerating a trailing
    /// slash in configuration.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_tolerates_trailing_slash() {
        let with_slash = GatewayConfig::new("https://api.example.com/".into(), "id".into(), "s".into());
        let without = GatewayConfig::new("https://api.example.com".into(), "id".into(), "s".into());
        assert_eq!(
            with_slash.endpoint("/v1/oauth2/token"),
            "https://api.example.com/v1/oauth2/token"
        );
        assert_eq!(with_slash.endpoint("/v1/oauth2/token"), without.endpoint("/v1/oauth2/token"));
    }
}
