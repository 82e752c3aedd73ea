use crate::config::AppConfig;
use crate::errors::AppError;
use crate::services::api::http::HttpBookingApi;
use crate::services::api::BookingApi;
use crate::services::confirmation::ConfirmationPolicy;

/// Configuration and backend handle shared by every screen.
pub struct AppState {
    pub config: AppConfig,
    pub api: Box<dyn BookingApi>,
}

impl AppState {
    pub fn new(config: AppConfig, api: Box<dyn BookingApi>) -> Self {
        Self { config, api }
    }

    pub fn from_config(config: AppConfig) -> Result<Self, AppError> {
        let api = HttpBookingApi::new(config.api_url.clone(), config.http_timeout)?;
        Ok(Self::new(config, Box::new(api)))
    }

    pub fn confirmation_policy(&self) -> ConfirmationPolicy {
        ConfirmationPolicy::from(&self.config)
    }
}
