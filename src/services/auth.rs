use async_trait::async_trait;

use crate::models::{AccessToken, AuthMode, Credentials};
use crate::services::validation::{validate_credentials, FieldErrors};

/// Response of a federated sign-in prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderResponse {
    Success(AccessToken),
    Cancelled,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn request_token(&self) -> anyhow::Result<ProviderResponse>;
}

#[derive(Debug, Clone, Default)]
pub struct AuthScreen {
    pub mode: AuthMode,
    pub credentials: Credentials,
    token: Option<AccessToken>,
}

impl AuthScreen {
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    pub fn token(&self) -> Option<&AccessToken> {
        self.token.as_ref()
    }

    /// Format-only check of the typed credentials; returns the success text for the mode.
    pub fn submit(&self) -> Result<&'static str, FieldErrors> {
        validate_credentials(&self.credentials)?;
        Ok(self.mode.success_message())
    }

    /// Delegates sign-in to the provider and keeps the token it hands back.
    pub async fn federated_login(&mut self, provider: &dyn IdentityProvider) -> bool {
        match provider.request_token().await {
            Ok(ProviderResponse::Success(token)) => {
                tracing::info!("federated login succeeded");
                self.token = Some(token);
                true
            }
            Ok(ProviderResponse::Cancelled) => {
                tracing::debug!("federated login cancelled");
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "federated login failed");
                false
            }
        }
    }
}
