use std::fmt;

use engine_logging::mask_secret;
use serde::{Deserialize, Serialize};

/// Body of `POST /v1/role_login`.
///
/// The destination key is spelled `desiontion` on the wire; the backend
/// expects exactly that name.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct RoleLoginRequest {
    pub provider: String,
    pub secret_id: String,
    pub secret_key: String,
    pub token: String,
    pub role_arn: String,
    #[serde(rename = "desiontion")]
    pub destination: String,
    pub login_url: String,
}

impl fmt::Debug for RoleLoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoleLoginRequest")
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

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoleLoginResponse {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
