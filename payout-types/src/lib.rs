//! # Payout Types
//!
//! Domain types and port traits for the payout orchestration service.
//! This crate has ZERO external IO dependencies - only data structures,
//! business rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Currency, CustomerRecord, PaymentRecord)
//! - `ports/` - Trait definitions that adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    AccessToken, Currency, CustomerId, CustomerRecord, GatewayAuthorization, PAYMENT_METHOD,
    PaymentId, PaymentRecord, PaymentRequest, PaymentStatus,
};
pub use dto::*;
pub use error::{GatewayError, PaymentError, StoreError, ValidationError};
pub use ports::{AccessTokenProvider, CustomerDirectory, LedgerInsert, LedgerStore, PaymentGateway};
