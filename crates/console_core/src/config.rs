use std::fmt;

use engine_logging::mask_secret;
use thiserror::Error;

use crate::Provider;

/// Credentials and endpoints submitted to the role login endpoint.
///
/// Optional fields are plain strings; an empty string means "not provided".
#[derive(Clone, PartialEq, Eq)]
pub struct CloudConfig {
    pub provider: Provider,
    pub secret_id: String,
    pub secret_key: String,
    pub token: String,
    pub role_arn: String,
    pub destination: String,
    pub login_url: String,
}

/// A single field edit. Applying one yields a new configuration value.
#[derive(Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Provider(Provider),
    SecretId(String),
    SecretKey(String),
    Token(String),
    RoleArn(String),
    Destination(String),
    LoginUrl(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("SecretId and SecretKey are required")]
    MissingCredentials,
    #[error("exactly one of Token/RoleArn must be provided")]
    MissingTokenOrRoleArn,
}

impl CloudConfig {
    pub fn for_provider(provider: Provider) -> Self {
        let defaults = provider.defaults();
        Self {
            provider,
            secret_id: String::new(),
            secret_key: String::new(),
            token: String::new(),
            role_arn: String::new(),
            destination: defaults.destination.to_string(),
            login_url: defaults.login_url.to_string(),
        }
    }

    /// Returns the configuration with `edit` applied.
    ///
    /// Selecting a provider also resets `destination` and `login_url` to that
    /// provider's defaults, even when the provider did not change.
    #[must_use]
    pub fn apply(mut self, edit: FieldEdit) -> Self {
        match edit {
            FieldEdit::Provider(provider) => {
                self.provider = provider;
                return self.with_default_endpoints();
            }
            FieldEdit::SecretId(value) => self.secret_id = value,
            FieldEdit::SecretKey(value) => self.secret_key = value,
            FieldEdit::Token(value) => self.token = value,
            FieldEdit::RoleArn(value) => self.role_arn = value,
            FieldEdit::Destination(value) => self.destination = value,
            FieldEdit::LoginUrl(value) => self.login_url = value,
        }
        self
    }

    /// Returns the configuration with the current provider's endpoint defaults.
    #[must_use]
    pub fn with_default_endpoints(mut self) -> Self {
        let defaults = self.provider.defaults();
        self.destination = defaults.destination.to_string();
        self.login_url = defaults.login_url.to_string();
        self
    }

    /// Checks the fields required before anything is sent over the network.
    ///
    /// Token and RoleArn may both be present; only the absence of both fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.secret_id.is_empty() || self.secret_key.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        if self.token.is_empty() && self.role_arn.is_empty() {
            return Err(ValidationError::MissingTokenOrRoleArn);
        }
        Ok(())
    }
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self::for_provider(Provider::default())
    }
}

impl fmt::Debug for CloudConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloudConfig")
            .field("provider", &self.provider)
            .field("secret_id", &mask_secret(&self.secret_id))
            .field("secret_key", &mask_secret(&self.secret_key))
            .field("token", &mask_secret(&self.token))
            .field("role_arn", &self.role_arn)
            .field("destination", &self.destination)
            .field("login_url", &self.login_url)
            .finish()
    }
}

impl fmt::Debug for FieldEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldEdit::Provider(provider) => f.debug_tuple("Provider").field(provider).finish(),
            FieldEdit::SecretId(value) => {
                f.debug_tuple("SecretId").field(&mask_secret(value)).finish()
            }
            FieldEdit::SecretKey(value) => {
                f.debug_tuple("SecretKey").field(&mask_secret(value)).finish()
            }
            FieldEdit::Token(value) => f.debug_tuple("Token").field(&mask_secret(value)).finish(),
            FieldEdit::RoleArn(value) => f.debug_tuple("RoleArn").field(value).finish(),
            FieldEdit::Destination(value) => f.debug_tuple("Destination").field(value).finish(),
            FieldEdit::LoginUrl(value) => f.debug_tuple("LoginUrl").field(value).finish(),
        }
    }
}
