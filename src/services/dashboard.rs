use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{BookingHistoryEntry, ClientProfile};
use crate::services::api::BookingApi;

/// Cancel and Remove both hard-delete the booking; only the notice differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingAction {
    Cancel,
    Remove,
}

impl BookingAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingAction::Cancel => "cancel",
            BookingAction::Remove => "remove",
        }
    }

    pub fn notice(&self) -> &'static str {
        match self {
            BookingAction::Cancel => "Booking canceled successfully!",
            BookingAction::Remove => "Booking removed successfully!",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub client_id: Uuid,
    pub profile: Option<ClientProfile>,
    pub bookings: Vec<BookingHistoryEntry>,
}

impl Dashboard {
    pub fn new(client_id: Uuid) -> Self {
        Self {
            client_id,
            profile: None,
            bookings: Vec::new(),
        }
    }

    /// Loads profile and history. Either failing is logged and leaves that part empty.
    pub async fn load(api: &dyn BookingApi, client_id: Uuid) -> Self {
        let mut dashboard = Self::new(client_id);

        match api.client_profile(client_id).await {
            Ok(profile) => dashboard.profile = Some(profile),
            Err(e) => tracing::error!(%client_id, error = %e, "failed to fetch client details"),
        }

        match api.client_bookings(client_id).await {
            Ok(bookings) => dashboard.bookings = bookings,
            Err(e) => tracing::error!(%client_id, error = %e, "failed to fetch booking history"),
        }

        dashboard
    }

    /// Deletes the booking on the backend and drops it from the list on success.
    pub async fn apply(
        &mut self,
        api: &dyn BookingApi,
        action: BookingAction,
        booking_id: &str,
    ) -> Result<&'static str, AppError> {
        if let Err(e) = api.delete_client_booking(self.client_id, booking_id).await {
            tracing::error!(booking_id, action = action.as_str(), error = %e, "booking action failed");
            return Err(e);
        }

        self.bookings.retain(|b| b.booking_id != booking_id);
        tracing::info!(booking_id, action = action.as_str(), "booking deleted");
        Ok(action.notice())
    }

    pub fn reschedule(&self, booking_id: &str) -> String {
        format!("Reschedule clicked for booking ID: {booking_id}")
    }
}
