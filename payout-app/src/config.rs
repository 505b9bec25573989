//! Configuration loading from environment.

use std::env;
use std::time::Duration;

use payout_gateway::GatewayConfig;

/// Application configuration.
pub struct Config {
    pub port: u16,
    /// `sqlite://` URL for the durable store; absent means in-memory.
    pub database_url: Option<String>,
    pub gateway: GatewayConfig,
    pub require_email_match: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Gateway credentials are mandatory; the process refuses to start
    /// without them rather than failing on the first payment.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let database_url = env::var("DATABASE_URL").ok();

        let base_url = env::var("GATEWAY_BASE_URL")
            .unwrap_or_else(|_| "https://api.sandbox.paypal.com".to_string());
        let client_id = env::var("GATEWAY_CLIENT_ID")
            .map_err(|_| anyhow::anyhow!("GATEWAY_CLIENT_ID environment variable is required"))?;
        let client_secret = env::var("GATEWAY_CLIENT_SECRET").map_err(|_| {
            anyhow::anyhow!("GATEWAY_CLIENT_SECRET environment variable is required")
        })?;

        let mut gateway = GatewayConfig::new(base_url, client_id, client_secret);
        if let Ok(secs) = env::var("GATEWAY_TIMEOUT_SECS") {
            gateway.timeout = Duration::from_secs(secs.parse()?);
        }

        let require_email_match = match env::var("REQUIRE_EMAIL_MATCH") {
            Ok(value) => value.parse()?,
            Err(_) => true,
        };

        Ok(Self {
            port,
            database_url,
            gateway,
            require_email_match,
        })
    }
}
