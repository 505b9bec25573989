//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use payout_types::{
    Currency, CustomerResponse, PaymentConfirmation, RegisterCustomerRequest, SubmitPaymentRequest,
};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Register a customer
#[utoipa::path(
    post,
    path = "/v1/api/customer",
    tag = "customers",
    request_body = RegisterCustomerRequest,
    responses(
        (status = 201, description = "Customer registered", body = CustomerResponse),
        (status = 400, description = "Invalid request")
    )
)]
async fn register_customer() {}

/// Get a customer by identifier
#[utoipa::path(
    get,
    path = "/v1/api/customer/{customer_id}",
    tag = "customers",
    params(
        ("customer_id" = String, Path, description = "Customer identifier")
    ),
    responses(
        (status = 200, description = "Customer details", body = CustomerResponse),
        (status = 404, description = "Customer not in records")
    )
)]
async fn get_customer() {}

/// Submit a payment
#[utoipa::path(
    post,
    path = "/v1/api/payments",
    tag = "payments",
    request_body = SubmitPaymentRequest,
    responses(
        (status = 201, description = "Payment orchestrated", body = PaymentConfirmation),
        (status = 400, description = "Invalid request or identity mismatch"),
        (status = 404, description = "Customer not in records"),
        (status = 500, description = "Gateway or store failure")
    )
)]
async fn submit_payment() {}

/// OpenAPI documentation for the payout API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Payout Orchestration Service API",
        version = "1.0.0",
        description = "Orchestrates customer payouts: directory lookup, gateway authorization, and a durable disbursement ledger.",
        license(name = "MIT"),
    ),
    paths(health, register_customer, get_customer, submit_payment),
    components(
        schemas(
            RegisterCustomerRequest,
            CustomerResponse,
            SubmitPaymentRequest,
            PaymentConfirmation,
            Currency,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "customers", description = "Customer directory operations"),
        (name = "payments", description = "Payment orchestration"),
    )
)]
pub struct ApiDoc;
