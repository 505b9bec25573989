//! # Payout Gateway
//!
//! Outbound adapters for the payment gateway: the OAuth token provider and
//! the PayPal payment-authorization client. Both implement port traits from
//! `payout-types` over `reqwest` with per-request timeouts; neither retries.

mod config;
mod oauth;
mod paypal;
pub mod wire;

pub use config::GatewayConfig;
pub use oauth::OAuthTokenProvider;
pub use paypal::PayPalGateway;
