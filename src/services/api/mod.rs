pub mod http;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    Booking, BookingHistoryEntry, ClientProfile, CreatedBooking, NewBooking, PaymentStatus,
    Technician,
};

/// The booking backend as seen by the client screens.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn list_technicians(&self) -> Result<Vec<Technician>, AppError>;

    async fn create_booking(&self, booking: &NewBooking) -> Result<CreatedBooking, AppError>;

    async fn get_booking(&self, booking_id: &str) -> Result<Booking, AppError>;

    async fn payment_status(&self, booking_id: &str) -> Result<PaymentStatus, AppError>;

    async fn client_profile(&self, client_id: Uuid) -> Result<ClientProfile, AppError>;

    async fn client_bookings(&self, client_id: Uuid) -> Result<Vec<BookingHistoryEntry>, AppError>;

    async fn delete_client_booking(&self, client_id: Uuid, booking_id: &str) -> Result<(), AppError>;
}
