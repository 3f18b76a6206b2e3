use engine_logging::{engine_debug, engine_warn};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

use crate::{ApiSettings, ErrorBody, LoginError, RoleLoginRequest, RoleLoginResponse};

/// Exchanges credentials for a temporary console login URL.
#[async_trait::async_trait]
pub trait LoginClient: Send + Sync {
    async fn role_login(&self, request: &RoleLoginRequest) -> Result<String, LoginError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestLoginClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl ReqwestLoginClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, LoginError> {
        let endpoint = settings.role_login_url()?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| LoginError::Network(err.to_string()))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl LoginClient for ReqwestLoginClient {
    async fn role_login(&self, request: &RoleLoginRequest) -> Result<String, LoginError> {
        let body = serde_json::to_vec(request)
            .map_err(|err| LoginError::InvalidRequest(err.to_string()))?;

        engine_debug!("POST {} provider={}", self.endpoint, request.provider);
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&bytes)
                .ok()
                .and_then(|body| body.message);
            engine_warn!(
                "role login rejected: status={} message={:?}",
                status.as_u16(),
                message
            );
            return Err(LoginError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: RoleLoginResponse = serde_json::from_slice(&bytes)
            .map_err(|err| LoginError::Decode(err.to_string()))?;
        Ok(parsed.url)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> LoginError {
    if err.is_timeout() {
        return LoginError::Timeout(err.to_string());
    }
    if err.is_builder() {
        return LoginError::InvalidRequest(err.to_string());
    }
    LoginError::Network(err.to_string())
}
