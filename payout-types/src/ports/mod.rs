//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod directory;
mod gateway;
mod ledger;

pub use directory::CustomerDirectory;
pub use gateway::{AccessTokenProvider, PaymentGateway};
pub use ledger::{LedgerInsert, LedgerStore};
