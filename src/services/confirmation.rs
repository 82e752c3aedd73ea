use std::time::Duration;

use crate::config::{AppConfig, CompletionRouting};
use crate::errors::AppError;
use crate::models::{Booking, PaymentStatus};
use crate::services::api::BookingApi;
use crate::services::workflow::{ScheduledTransition, Screen};

const SUCCESS_REDIRECT_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmationState {
    Loading,
    Found {
        booking: Booking,
        status: PaymentStatus,
    },
    NotFound,
}

/// Result of one visit to the confirmation screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmationOutcome {
    pub state: ConfirmationState,
    pub transition: Option<ScheduledTransition>,
}

#[derive(Debug, Clone)]
pub struct ConfirmationPolicy {
    pub payment_redirect_delay: Duration,
    pub completion_routing: CompletionRouting,
}

impl From<&AppConfig> for ConfirmationPolicy {
    fn from(config: &AppConfig) -> Self {
        Self {
            payment_redirect_delay: config.payment_redirect_delay,
            completion_routing: config.completion_routing,
        }
    }
}

impl ConfirmationPolicy {
    pub fn next_for(&self, status: PaymentStatus) -> Option<ScheduledTransition> {
        if !status.is_complete() {
            return Some(ScheduledTransition::new(
                Screen::Payment,
                self.payment_redirect_delay,
            ));
        }

        match self.completion_routing {
            CompletionRouting::StayOnConfirmation => None,
            CompletionRouting::RedirectToSuccess => Some(ScheduledTransition::new(
                Screen::Success,
                SUCCESS_REDIRECT_DELAY,
            )),
        }
    }
}

/// Fetches the booking, then reads its payment status exactly once.
pub async fn enter(
    api: &dyn BookingApi,
    policy: &ConfirmationPolicy,
    booking_id: &str,
) -> Result<ConfirmationOutcome, AppError> {
    if booking_id.trim().is_empty() {
        return Err(AppError::Navigation(
            "confirmation requires a booking id".to_string(),
        ));
    }

    let booking = match api.get_booking(booking_id).await {
        Ok(booking) => booking,
        Err(e) => {
            tracing::warn!(booking_id, error = %e, "booking lookup failed");
            return Ok(ConfirmationOutcome {
                state: ConfirmationState::NotFound,
                transition: None,
            });
        }
    };

    let (status, transition) = match api.payment_status(booking_id).await {
        Ok(status) => (status, policy.next_for(status)),
        Err(e) => {
            // Only an unreachable backend or an unreadable body lands here.
            tracing::error!(booking_id, error = %e, "failed to fetch payment status");
            (PaymentStatus::Pending, None)
        }
    };

    tracing::info!(
        booking_id,
        status = status.as_str(),
        next = ?transition.as_ref().map(|t| t.target.as_str()),
        "confirmation loaded"
    );

    Ok(ConfirmationOutcome {
        state: ConfirmationState::Found { booking, status },
        transition,
    })
}
