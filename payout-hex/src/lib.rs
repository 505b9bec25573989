//! # Payout Hex
//!
//! Application service layer and HTTP adapter for the payout service.
//!
//! ## Architecture
//!
//! - `service/` - Payment orchestrator (composes the four ports)
//! - `inbound/` - HTTP adapter (Axum server)
//! - `reconcile/` - Background check for ledger entries stuck in Pending
//!
//! The orchestrator is generic over the directory, token-provider, gateway,
//! and ledger ports, so adapters are injected at compile time.

pub mod inbound;
pub mod openapi;
pub mod reconcile;
pub mod service;


pub use service::{OrchestratorPolicy, PaymentOrchestrator};
