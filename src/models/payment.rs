use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum PaymentStatus {
    #[default]
    Pending,
    Incomplete,
    Complete,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Incomplete => "Incomplete",
            PaymentStatus::Complete => "Complete",
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, PaymentStatus::Complete)
    }

    /// Reads the body of `GET /payment/status/{id}`. Anything other than a
    /// recognised status string, including a missing or empty one, is pending.
    pub fn from_body(body: &serde_json::Value) -> Self {
        match body.get("status").and_then(|s| s.as_str()) {
            Some("Complete") => PaymentStatus::Complete,
            Some("Incomplete") => PaymentStatus::Incomplete,
            _ => PaymentStatus::Pending,
        }
    }
}

/// Card details as typed into the checkout form. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct CardInput {
    pub card_number: String,
    pub holder_name: String,
    pub expiry: String,
    pub cvv: String,
}
