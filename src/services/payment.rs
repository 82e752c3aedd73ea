use std::time::Duration;

use chrono::NaiveDate;

use crate::models::CardInput;
use crate::services::validation::{validate_card, FieldErrors};
use crate::services::workflow::{ScheduledTransition, Screen};

pub const PAYMENT_SUCCESS_MESSAGE: &str = "Redirecting...";

const SUCCESS_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
    /// Card details passed local checks. No gateway is contacted.
    Approved { next: ScheduledTransition },
    Rejected(FieldErrors),
}

impl PaymentOutcome {
    pub fn is_approved(&self) -> bool {
        matches!(self, PaymentOutcome::Approved { .. })
    }

    /// Alert text for the outcome.
    pub fn message(&self) -> &str {
        match self {
            PaymentOutcome::Approved { .. } => PAYMENT_SUCCESS_MESSAGE,
            PaymentOutcome::Rejected(errors) => &errors.message,
        }
    }
}

/// Validates the card as of `today` and simulates the gateway's answer.
pub fn checkout(card: &CardInput, today: NaiveDate) -> PaymentOutcome {
    match validate_card(card, today) {
        Ok(()) => {
            tracing::info!("payment accepted");
            PaymentOutcome::Approved {
                next: ScheduledTransition::new(Screen::Success, SUCCESS_REDIRECT_DELAY),
            }
        }
        Err(errors) => {
            tracing::debug!(fields = ?errors.fields, "payment rejected");
            PaymentOutcome::Rejected(errors)
        }
    }
}
