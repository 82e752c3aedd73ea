use serde::{Deserialize, Serialize};

/// A booking as returned by `GET /booking/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: String,
    pub customer_name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub technician_id: String,
    pub booking_date: String,
}

/// Body of `POST /booking`, built only from a validated booking form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBooking {
    pub customer_name: String,
    pub technician_id: String,
    pub booking_date: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatedBooking {
    pub id: String,
}

/// One row of `GET /client/{id}/bookings`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BookingHistoryEntry {
    pub booking_id: String,
    pub service_type: String,
    pub technician_name: String,
    pub status: String,
    pub booking_date: String,
}
