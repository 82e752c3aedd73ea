use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use uuid::Uuid;

use super::BookingApi;
use crate::errors::AppError;
use crate::models::{
    Booking, BookingHistoryEntry, ClientProfile, CreatedBooking, NewBooking, PaymentStatus,
    Technician,
};

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

pub struct HttpBookingApi {
    base_url: Url,
    client: reqwest::Client,
}

impl HttpBookingApi {
    pub fn new(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self, AppError> {
        let base_url = Url::parse(base_url.as_ref())
            .map_err(|e| AppError::Config(format!("invalid API url: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!("invalid API url: {base_url}")));
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, client })
    }

    /// Appends each segment to the base path, percent-encoding `/`, `?` and `#`.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Config(format!("invalid API url: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, AppError> {
        let resp = self.client.get(self.endpoint(segments)?).send().await?;
        let resp = check_status(resp).await?;
        Ok(resp.json().await?)
    }
}

/// Maps a non-2xx response onto `AppError::Backend`, keeping the `detail` text if any.
async fn check_status(resp: Response) -> Result<Response, AppError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let detail = resp
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail)
        .and_then(|d| d.as_str().map(|s| s.to_string()));

    tracing::warn!(%status, detail = ?detail, "backend request failed");
    Err(AppError::Backend { status, detail })
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn list_technicians(&self) -> Result<Vec<Technician>, AppError> {
        self.get_json(&["technicians"]).await
    }

    async fn create_booking(&self, booking: &NewBooking) -> Result<CreatedBooking, AppError> {
        let resp = self
            .client
            .post(self.endpoint(&["booking"])?)
            .json(booking)
            .send()
            .await?;
        let resp = check_status(resp).await?;
        Ok(resp.json().await?)
    }

    async fn get_booking(&self, booking_id: &str) -> Result<Booking, AppError> {
        match self.get_json::<Booking>(&["booking", booking_id]).await {
            Err(AppError::Backend {
                status: StatusCode::NOT_FOUND,
                ..
            }) => Err(AppError::NotFound(format!("Booking {booking_id}"))),
            other => other,
        }
    }

    /// The body is read whatever the HTTP status; only transport and decode failures are errors.
    async fn payment_status(&self, booking_id: &str) -> Result<PaymentStatus, AppError> {
        let resp = self
            .client
            .get(self.endpoint(&["payment", "status", booking_id])?)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(booking_id, %status, "payment status request returned an error status");
        }

        let body: serde_json::Value = resp.json().await?;
        Ok(PaymentStatus::from_body(&body))
    }

    async fn client_profile(&self, client_id: Uuid) -> Result<ClientProfile, AppError> {
        let client_id = client_id.to_string();
        self.get_json(&["client", &client_id]).await
    }

    async fn client_bookings(&self, client_id: Uuid) -> Result<Vec<BookingHistoryEntry>, AppError> {
        let client_id = client_id.to_string();
        self.get_json(&["client", &client_id, "bookings"]).await
    }

    async fn delete_client_booking(&self, client_id: Uuid, booking_id: &str) -> Result<(), AppError> {
        let client_id = client_id.to_string();
        let resp = self
            .client
            .delete(self.endpoint(&["client", &client_id, "bookings", booking_id])?)
            .send()
            .await?;
        check_status(resp).await?;
        Ok(())
    }
}
