use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;
use uuid::Uuid;

use super::BookingApi;
use crate::errors::AppError;
use crate::models::{
    Booking, BookingHistoryEntry, ClientProfile, CreatedBooking, NewBooking, PaymentStatus,
    Technician,
};

/// In-memory backend for unit tests. Every call is recorded in `calls`.
#[derive(Default)]
pub struct MockBookingApi {
    pub technicians: Option<Vec<Technician>>,
    pub created_id: Option<String>,
    pub create_detail: Option<String>,
    pub bookings: Vec<Booking>,
    pub payment: Option<PaymentStatus>,
    pub profile: Option<ClientProfile>,
    pub history: Mutex<Vec<BookingHistoryEntry>>,
    pub fail_deletes: bool,
    pub calls: Mutex<Vec<String>>,
}

impl MockBookingApi {
    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn server_error(detail: Option<&str>) -> AppError {
        AppError::Backend {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: detail.map(|d| d.to_string()),
        }
    }
}

#[async_trait]
impl BookingApi for MockBookingApi {
    async fn list_technicians(&self) -> Result<Vec<Technician>, AppError> {
        self.record("GET /technicians".to_string());
        self.technicians
            .clone()
            .ok_or_else(|| Self::server_error(None))
    }

    async fn create_booking(&self, booking: &NewBooking) -> Result<CreatedBooking, AppError> {
        self.record(format!("POST /booking {}", booking.customer_name));
        match &self.created_id {
            Some(id) => Ok(CreatedBooking { id: id.clone() }),
            None => Err(AppError::Backend {
                status: StatusCode::BAD_REQUEST,
                detail: self.create_detail.clone(),
            }),
        }
    }

    async fn get_booking(&self, booking_id: &str) -> Result<Booking, AppError> {
        self.record(format!("GET /booking/{booking_id}"));
        self.bookings
            .iter()
            .find(|b| b.id == booking_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Booking {booking_id}")))
    }

    async fn payment_status(&self, booking_id: &str) -> Result<PaymentStatus, AppError> {
        self.record(format!("GET /payment/status/{booking_id}"));
        self.payment.ok_or_else(|| Self::server_error(None))
    }

    async fn client_profile(&self, client_id: Uuid) -> Result<ClientProfile, AppError> {
        self.record(format!("GET /client/{client_id}"));
        self.profile
            .clone()
            .ok_or_else(|| AppError::NotFound("Client".to_string()))
    }

    async fn client_bookings(&self, client_id: Uuid) -> Result<Vec<BookingHistoryEntry>, AppError> {
        self.record(format!("GET /client/{client_id}/bookings"));
        Ok(self.history.lock().unwrap().clone())
    }

    async fn delete_client_booking(&self, client_id: Uuid, booking_id: &str) -> Result<(), AppError> {
        self.record(format!("DELETE /client/{client_id}/bookings/{booking_id}"));
        if self.fail_deletes {
            return Err(Self::server_error(Some("delete failed")));
        }
        self.history
            .lock()
            .unwrap()
            .retain(|b| b.booking_id != booking_id);
        Ok(())
    }
}
