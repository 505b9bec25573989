//! Wire-format types for the gateway's OAuth and payment endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use payout_types::Currency;

/// Successful response from `POST /v1/oauth2/token`.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Body for `POST /v1/payments/payment`.
///
/// The redirect URLs are placeholders: unused in the API-driven flow but
/// required by the gateway's payment object schema.
#[derive(Debug, Serialize)]
pub struct PaymentOrder<'a> {
    pub intent: &'static str,
    pub payer: Payer,
    pub transactions: Vec<OrderTransaction<'a>>,
    pub redirect_urls: RedirectUrls,
}

#[derive(Debug, Serialize)]
pub struct Payer {
    pub payment_method: &'static str,
}

#[derive(Debug, Serialize)]
pub struct OrderTransaction<'a> {
    pub amount: OrderAmount,
    pub description: &'static str,
    pub payee: Payee<'a>,
}

#[derive(Debug, Serialize)]
pub struct OrderAmount {
    pub total: Decimal,
    pub currency: Currency,
}

#[derive(Debug, Serialize)]
pub struct Payee<'a> {
    pub email: &'a str,
}

#[derive(Debug, Serialize)]
pub struct RedirectUrls {
    pub return_url: &'static str,
    pub cancel_url: &'static str,
}

/// The slice of the gateway's payment response this service consumes.
#[derive(Debug, Deserialize)]
pub struct PaymentResponse {
    pub id: String,
}

impl<'a> PaymentOrder<'a> {
    /// Builds an authorization-intent order for an email-identified payee.
    pub fn authorize(payee_email: &'a str, amount: Decimal, currency: Currency) -> Self {
        Self {
            intent: "authorize",
            payer: Payer {
                payment_method: payout_types::PAYMENT_METHOD,
            },
            transactions: vec![OrderTransaction {
                amount: OrderAmount {
                    total: amount,
                    currency,
                },
                description: "Customer payout",
                payee: Payee { email: payee_email },
            }],
            redirect_urls: RedirectUrls {
                return_url: "http://localhost:3000/return",
                cancel_url: "http://localhost:3000/cancel",
            },
        }
    }
}
