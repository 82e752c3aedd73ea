use chrono::NaiveDate;

use crate::errors::AppError;
use crate::models::{NewBooking, Technician};
use crate::services::api::BookingApi;
use crate::services::validation::{validate_booking_fields, FieldErrors};
use crate::services::workflow::Screen;

pub const INTRO_MESSAGE: &str = "👋 Welcome! Start your technician booking below.";

#[derive(Debug, Clone)]
pub struct BookingForm {
    pub customer_name: String,
    pub email: String,
    pub technician_id: String,
    pub booking_date: String,
    pub technicians: Vec<Technician>,
    pub intro_message: String,
}

impl BookingForm {
    /// An empty form with the date prefilled to `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            customer_name: String::new(),
            email: String::new(),
            technician_id: String::new(),
            booking_date: today.format("%Y-%m-%d").to_string(),
            technicians: Vec::new(),
            intro_message: INTRO_MESSAGE.to_string(),
        }
    }

    /// Builds the form and fetches the technician list once. A failed fetch leaves the list empty.
    pub async fn load(api: &dyn BookingApi, today: NaiveDate) -> Self {
        let mut form = Self::new(today);
        match api.list_technicians().await {
            Ok(technicians) => {
                tracing::debug!(count = technicians.len(), "loaded technicians");
                form.technicians = technicians;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to fetch technicians");
            }
        }
        form
    }

    pub fn set_field(&mut self, name: &str, value: &str) -> Result<(), AppError> {
        let slot = match name {
            "customer_name" => &mut self.customer_name,
            "email" => &mut self.email,
            "technician_id" => &mut self.technician_id,
            "booking_date" => &mut self.booking_date,
            other => return Err(AppError::UnknownField(other.to_string())),
        };
        *slot = value.to_string();
        Ok(())
    }

    pub fn validate(&self) -> Result<NewBooking, FieldErrors> {
        validate_booking_fields(
            &self.customer_name,
            &self.email,
            &self.technician_id,
            &self.booking_date,
        )?;

        Ok(NewBooking {
            customer_name: self.customer_name.clone(),
            technician_id: self.technician_id.clone(),
            booking_date: self.booking_date.clone(),
            email: self.email.clone(),
        })
    }

    /// Validates locally, then posts the booking. Nothing is sent if validation fails.
    pub async fn submit(&self, api: &dyn BookingApi) -> Result<Screen, AppError> {
        let booking = self.validate().map_err(AppError::Validation)?;

        match api.create_booking(&booking).await {
            Ok(created) => {
                tracing::info!(booking_id = %created.id, "booking created");
                Ok(Screen::Confirmation {
                    booking_id: created.id,
                })
            }
            Err(e) => {
                tracing::error!(error = %e, "booking submission failed");
                Err(e)
            }
        }
    }
}
