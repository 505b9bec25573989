//! Domain models for the payout service.

pub mod currency;
pub mod customer;
pub mod payment;
pub mod request;
pub mod token;

pub use currency::Currency;
pub use customer::{CustomerId, CustomerRecord};
pub use payment::{PAYMENT_METHOD, PaymentId, PaymentRecord, PaymentStatus};
pub use request::PaymentRequest;
pub use token::{AccessToken, GatewayAuthorization};
