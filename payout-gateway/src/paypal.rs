//! PayPal payment-authorization client.

use async_trait::async_trait;
use reqwest::StatusCode;
use rust_decimal::Decimal;
use tracing::warn;

use payout_types::{AccessToken, Currency, GatewayAuthorization, GatewayError, PaymentGateway};

use crate::config::GatewayConfig;
use crate::wire::{PaymentOrder, PaymentResponse};

/// Submits authorization-intent payments to the gateway.
pub struct PayPalGateway {
    client: reqwest::Client,
    payments_url: String,
}

impl PayPalGateway {
    pub fn new(config: &GatewayConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            payments_url: config.endpoint("/v1/payments/payment"),
        })
    }
}

#[async_trait]
impl PaymentGateway for PayPalGateway {
    async fn authorize(
        &self,
        token: &AccessToken,
        payee_email: &str,
        amount: Decimal,
        currency: Currency,
    ) -> Result<GatewayAuthorization, GatewayError> {
        let order = PaymentOrder::authorize(payee_email, amount, currency);

        let response = self
            .client
            .post(&self.payments_url)
            .bearer_auth(token.secret())
            .json(&order)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        // Some gateway deployments answer 200 rather than 201 for a
        // created authorization; both count as success.
        if status != StatusCode::OK && status != StatusCode::CREATED {
            warn!(status = status.as_u16(), "gateway rejected the authorization");
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: PaymentResponse = serde_json::from_str(&body)
            .map_err(|e| GatewayError::Transport(format!("malformed payment response: {}", e)))?;

        Ok(GatewayAuthorization {
            gateway_ref: parsed.id,
        })
    }
}
