//! HTTP request handlers.
//!
//! The single place where `PaymentError` is translated into an HTTP
//! response. Handlers and the orchestrator below them only ever deal in
//! the domain error taxonomy.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use payout_types::{
    AccessTokenProvider, CustomerDirectory, LedgerStore, PaymentError, PaymentGateway,
    RegisterCustomerRequest, SubmitPaymentRequest,
};

use crate::PaymentOrchestrator;

/// Application state shared across handlers.
pub struct AppState<D, T, G, L> {
    pub orchestrator: PaymentOrchestrator<D, T, G, L>,
}

/// Wrapper to implement IntoResponse for PaymentError (orphan rule
/// workaround).
pub struct ApiError(pub PaymentError);

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Full detail goes to the log sink; the response body carries only
        // the sanitized message.
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::warn!(error = %self.0, "request rejected");
        }

        let body = serde_json::json!({
            "message": self.0.public_message(),
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Register a customer in the directory.
#[tracing::instrument(skip(state, req), fields(customer_id = %req.customer_id))]
pub async fn register_customer<D, T, G, L>(
    State(state): State<Arc<AppState<D, T, G, L>>>,
    Json(req): Json<RegisterCustomerRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    D: CustomerDirectory,
    T: AccessTokenProvider,
    G: PaymentGateway,
    L: LedgerStore,
{
    let customer = state.orchestrator.register_customer(req).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// Get a customer by identifier.
#[tracing::instrument(skip(state), fields(customer_id = %customer_id))]
pub async fn get_customer<D, T, G, L>(
    State(state): State<Arc<AppState<D, T, G, L>>>,
    Path(customer_id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    D: CustomerDirectory,
    T: AccessTokenProvider,
    G: PaymentGateway,
    L: LedgerStore,
{
    let customer = state.orchestrator.get_customer(&customer_id).await?;
    Ok(Json(customer))
}

/// Submit a payment for orchestration.
#[tracing::instrument(skip(state, req), fields(customer_id = %req.customer_id))]
pub async fn submit_payment<D, T, G, L>(
    State(state): State<Arc<AppState<D, T, G, L>>>,
    Json(req): Json<SubmitPaymentRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    D: CustomerDirectory,
    T: AccessTokenProvider,
    G: PaymentGateway,
    L: LedgerStore,
{
    let confirmation = state.orchestrator.submit_payment(req).await?;
    Ok((StatusCode::CREATED, Json(confirmation)))
}

/// Serve the OpenAPI document.
pub async fn openapi_json() -> impl IntoResponse {
    use utoipa::OpenApi;
    Json(crate::openapi::ApiDoc::openapi())
}
