//! HTTP Server configuration and startup.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use payout_types::{AccessTokenProvider, CustomerDirectory, LedgerStore, PaymentGateway};

use super::handlers::{self, AppState};
use crate::PaymentOrchestrator;

/// HTTP Server for the payout API.
pub struct HttpServer<D, T, G, L> {
    state: Arc<AppState<D, T, G, L>>,
}

impl<D, T, G, L> HttpServer<D, T, G, L>
where
    D: CustomerDirectory,
    T: AccessTokenProvider,
    G: PaymentGateway,
    L: LedgerStore,
{
    /// Creates a new HTTP server around the given orchestrator.
    pub fn new(orchestrator: PaymentOrchestrator<D, T, G, L>) -> Self {
        Self {
            state: Arc::new(AppState { orchestrator }),
        }
    }

    /// Builds the Axum router with all routes.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/health", get(handlers::health))
            .route("/v1/api/customer", post(handlers::register_customer::<D, T, G, L>))
            .route(
                "/v1/api/customer/{customer_id}",
                get(handlers::get_customer::<D, T, G, L>),
            )
            .route("/v1/api/payments", post(handlers::submit_payment::<D, T, G, L>))
            .route("/api-docs/openapi.json", get(handlers::openapi_json))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Runs the server on the given address with graceful shutdown.
    pub async fn run(self, addr: &str) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Server listening on {}", listener.local_addr()?);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown...");
}
