use std::time::Duration;

use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    BookingForm,
    Confirmation { booking_id: String },
    Payment,
    Success,
    Auth,
    Dashboard,
    Map,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::BookingForm => "booking_form",
            Screen::Confirmation { .. } => "confirmation",
            Screen::Payment => "payment",
            Screen::Success => "success",
            Screen::Auth => "auth",
            Screen::Dashboard => "dashboard",
            Screen::Map => "map",
        }
    }
}

/// A navigation that fires once `delay` has elapsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTransition {
    pub target: Screen,
    pub delay: Duration,
}

impl ScheduledTransition {
    pub fn new(target: Screen, delay: Duration) -> Self {
        Self { target, delay }
    }

    pub async fn wait(self) -> Screen {
        tokio::time::sleep(self.delay).await;
        self.target
    }
}

/// Tracks which screen the user is on.
#[derive(Debug, Clone)]
pub struct Workflow {
    current: Screen,
}

impl Default for Workflow {
    fn default() -> Self {
        Self {
            current: Screen::BookingForm,
        }
    }
}

impl Workflow {
    pub fn current(&self) -> &Screen {
        &self.current
    }

    pub fn navigate(&mut self, target: Screen) -> Result<&Screen, AppError> {
        if let Screen::Confirmation { booking_id } = &target {
            if booking_id.trim().is_empty() {
                return Err(AppError::Navigation(
                    "confirmation requires a booking id".to_string(),
                ));
            }
        }

        tracing::debug!(from = self.current.as_str(), to = target.as_str(), "navigating");
        self.current = target;
        Ok(&self.current)
    }

    /// Waits out a scheduled transition and applies it.
    pub async fn follow(&mut self, transition: ScheduledTransition) -> Result<&Screen, AppError> {
        let target = transition.wait().await;
        self.navigate(target)
    }
}
