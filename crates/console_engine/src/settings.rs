use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Environment variable holding the API host.
pub const API_URL_ENV: &str = "CLOUD_CONSOLE_API_URL";
/// Environment variable overriding the path prefix; set it empty to disable.
pub const API_PREFIX_ENV: &str = "CLOUD_CONSOLE_API_PREFIX";
/// Environment variable selecting the deployment kind.
pub const DEPLOYMENT_ENV: &str = "CLOUD_CONSOLE_ENV";

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_API_PREFIX: &str = "/api";
pub const ROLE_LOGIN_PATH: &str = "/v1/role_login";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Deployment {
    #[default]
    Development,
    Production,
}

impl Deployment {
    fn from_value(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("production") => Deployment::Production,
            _ => Deployment::Development,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("invalid API base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("unsupported API url scheme {0:?}, expected http or https")]
    UnsupportedScheme(String),
}

/// Where role login requests are sent, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: Url,
    pub api_prefix: String,
    pub deployment: Deployment,
    /// `None` leaves timeouts to the HTTP client defaults.
    pub request_timeout: Option<Duration>,
}

impl ApiSettings {
    pub fn new(base_url: &str) -> Result<Self, SettingsError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            deployment: Deployment::default(),
            request_timeout: None,
        })
    }

    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`, so tests need not touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = lookup(API_URL_ENV)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let mut settings = Self::new(&base)?;
        if let Some(prefix) = lookup(API_PREFIX_ENV) {
            settings.api_prefix = prefix;
        }
        settings.deployment = Deployment::from_value(lookup(DEPLOYMENT_ENV).as_deref());
        Ok(settings)
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Full endpoint: `{base}{prefix}/v1/role_login`.
    pub fn role_login_url(&self) -> Result<Url, SettingsError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let prefix = normalize_prefix(&self.api_prefix);
        let raw = format!("{base}{prefix}{ROLE_LOGIN_PATH}");
        Url::parse(&raw).map_err(|err| SettingsError::InvalidBaseUrl {
            url: raw,
            reason: err.to_string(),
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, SettingsError> {
    let url = Url::parse(raw.trim()).map_err(|err| SettingsError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: err.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SettingsError::UnsupportedScheme(other.to_string())),
    }
}

fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
