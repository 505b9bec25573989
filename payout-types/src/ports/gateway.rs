//! Payment gateway port traits.

use rust_decimal::Decimal;

use crate::domain::{AccessToken, Currency, GatewayAuthorization};
use crate::error::GatewayError;

/// Acquires a bearer token from the gateway's credential endpoint.
///
/// Implementations perform a single `client_credentials` grant; no retry
/// is attempted, and a non-2xx response must carry the gateway's original
/// status code upward rather than a fabricated 500.
#[async_trait::async_trait]
pub trait AccessTokenProvider: Send + Sync + 'static {
    async fn fetch_token(&self) -> Result<AccessToken, GatewayError>;
}

/// Submits a payment authorization to the gateway.
///
/// The payee is identified solely by email. Both 200 and 201 responses
/// count as success; anything else is a `GatewayError` with the response
/// body attached for operational diagnosis.
#[async_trait::async_trait]
pub trait PaymentGateway: Send + Sync + 'static {
    async fn authorize(
        &self,
        token: &AccessToken,
        payee_email: &str,
        amount: Decimal,
        currency: Currency,
    ) -> Result<GatewayAuthorization, GatewayError>;
}

#[async_trait::async_trait]
impl<T: AccessTokenProvider + ?Sized> AccessTokenProvider for std::sync::Arc<T> {
    async fn fetch_token(&self) -> Result<AccessToken, GatewayError> {
        (**self).fetch_token().await
    }
}

#[async_trait::async_trait]
impl<T: PaymentGateway + ?Sized> PaymentGateway for std::sync::Arc<T> {
    async fn authorize(
        &self,
        token: &AccessToken,
        payee_email: &str,
        amount: Decimal,
        currency: Currency,
    ) -> Result<GatewayAuthorization, GatewayError> {
        (**self).authorize(token, payee_email, amount, currency).await
    }
}
