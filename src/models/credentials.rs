/// Email and password typed into the auth screen.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    SignUp,
}

impl AuthMode {
    pub fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::Login,
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            AuthMode::Login => "Logged In",
            AuthMode::SignUp => "Signed Up",
        }
    }
}

/// Opaque access token handed back by a federated identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);
