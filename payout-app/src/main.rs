//! # Payout Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the store adapter (customer directory + ledger)
//! - Build the gateway adapters with injected credentials
//! - Create the payment orchestrator and reconciliation worker
//! - Start the HTTP server

mod config;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use payout_gateway::{OAuthTokenProvider, PayPalGateway};
use payout_hex::{
    OrchestratorPolicy, PaymentOrchestrator, inbound::HttpServer, reconcile::ReconciliationWorker,
};
use payout_store::build_store;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,payout_app=debug,payout_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting payout server on port {}", config.port);
    match &config.database_url {
        Some(url) => tracing::info!("Using database: {}", url),
        None => tracing::info!("Using in-memory store"),
    }

    // One store instance serves as both customer directory and ledger
    let store = Arc::new(build_store(config.database_url.as_deref()).await?);

    // Gateway adapters with injected credentials
    let tokens = OAuthTokenProvider::new(&config.gateway)?;
    let gateway = PayPalGateway::new(&config.gateway)?;

    // Background check for disbursements stuck in Pending
    let worker = ReconciliationWorker::new(Arc::clone(&store));
    tokio::spawn(worker.run());

    // Create the payment orchestrator
    let orchestrator = PaymentOrchestrator::with_policy(
        Arc::clone(&store),
        tokens,
        gateway,
        store,
        OrchestratorPolicy {
            require_email_match: config.require_email_match,
        },
    );

    // Create and run the HTTP server
    let server = HttpServer::new(orchestrator);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
