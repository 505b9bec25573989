//! Customer directory domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a customer in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    /// Creates a CustomerId from a raw string, trimming surrounding
    /// whitespace. Returns `None` when the trimmed value is empty.
    pub fn new(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer known to the directory.
///
/// Written by the registration flow; the payment orchestrator only ever
/// reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub customer_id: CustomerId,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl CustomerRecord {
    pub fn new(customer_id: CustomerId, email: String) -> Self {
        Self {
            customer_id,
            email,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_id_trims_whitespace() {
        let id = CustomerId::new("  u1  ").unwrap();
        assert_eq!(id.as_str(), "u1");
    }

    #[test]
    fn customer_id_rejects_blank() {
        assert!(CustomerId::new("").is_none());
        assert!(CustomerId::new("   ").is_none());
    }
}
