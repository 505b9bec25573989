//! OAuth `client_credentials` token provider.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};
use tracing::warn;

use payout_types::{AccessToken, AccessTokenProvider, GatewayError};

use crate::config::GatewayConfig;
use crate::wire::TokenResponse;

/// Fetches bearer tokens from the gateway's token endpoint.
///
/// One grant call per orchestration; tokens are not cached across
/// requests, and a failed call is terminal for the current attempt.
pub struct OAuthTokenProvider {
    client: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
}

impl OAuthTokenProvider {
    pub fn new(config: &GatewayConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            token_url: config.endpoint("/v1/oauth2/token"),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        })
    }
}

#[async_trait]
impl AccessTokenProvider for OAuthTokenProvider {
    async fn fetch_token(&self) -> Result<AccessToken, GatewayError> {
        let response = self
            .client
            .post(&self.token_url)
            .header(ACCEPT, "application/json")
            .header(ACCEPT_LANGUAGE, "en_US")
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        if !status.is_success() {
            warn!(status = status.as_u16(), "token endpoint refused the grant");
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::Transport(format!("malformed token response: {}", e)))?;

        Ok(AccessToken::new(token.access_token))
    }
}
