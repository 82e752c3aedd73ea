use reqwest::StatusCode;

use crate::services::validation::FieldErrors;

const GENERIC_FAILURE: &str = "Something went wrong while booking.";
const UNKNOWN_BACKEND_ERROR: &str = "Unknown error";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned {status}: {}", .detail.as_deref().unwrap_or(UNKNOWN_BACKEND_ERROR))]
    Backend {
        status: StatusCode,
        detail: Option<String>,
    },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid navigation: {0}")]
    Navigation(String),

    #[error("unknown form field: {0}")]
    UnknownField(String),
}

impl AppError {
    /// Text shown to the user in an alert for this failure.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(errors) => errors.summary(),
            AppError::Transport(_) => GENERIC_FAILURE.to_string(),
            AppError::Backend { detail, .. } => detail
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| UNKNOWN_BACKEND_ERROR.to_string()),
            AppError::NotFound(what) => format!("{what} not found."),
            AppError::Config(_) | AppError::Navigation(_) | AppError::UnknownField(_) => {
                GENERIC_FAILURE.to_string()
            }
        }
    }
}
