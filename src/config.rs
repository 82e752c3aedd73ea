use std::env;
use std::time::Duration;

use uuid::Uuid;

use crate::errors::AppError;

const DEFAULT_API_URL: &str = "http://localhost:8000";
const DEFAULT_CLIENT_ID: &str = "f1846c09-01b3-4422-a206-465b67d6c062";

/// What the confirmation screen does once it observes a completed payment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompletionRouting {
    StayOnConfirmation,
    RedirectToSuccess,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_url: String,
    pub client_id: Uuid,
    pub payment_redirect_delay: Duration,
    pub completion_routing: CompletionRouting,
    pub http_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            client_id: Uuid::parse_str(DEFAULT_CLIENT_ID).unwrap_or_else(|_| Uuid::nil()),
            payment_redirect_delay: Duration::from_millis(3000),
            completion_routing: CompletionRouting::StayOnConfirmation,
            http_timeout: Duration::from_secs(10),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let client_id = match env::var("TECHBOOK_CLIENT_ID") {
            Ok(raw) => Uuid::parse_str(raw.trim())
                .map_err(|e| AppError::Config(format!("TECHBOOK_CLIENT_ID: {e}")))?,
            Err(_) => defaults.client_id,
        };

        let completion_routing = match env::var("TECHBOOK_SUCCESS_REDIRECT").ok().as_deref() {
            Some("1") | Some("true") | Some("yes") => CompletionRouting::RedirectToSuccess,
            _ => CompletionRouting::StayOnConfirmation,
        };

        Ok(Self {
            api_url: env::var("TECHBOOK_API_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            client_id,
            payment_redirect_delay: env::var("TECHBOOK_PAYMENT_REDIRECT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.payment_redirect_delay),
            completion_routing,
            http_timeout: env::var("TECHBOOK_HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.http_timeout),
        })
    }
}
