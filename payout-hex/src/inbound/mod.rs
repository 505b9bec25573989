//! HTTP Inbound Adapter
//!
//! Axum-based HTTP server that drives the payment orchestrator.

pub(crate) mod handlers;
mod server;

pub use server::HttpServer;
