//! Console login engine: API settings, wire types and request execution.
mod client;
mod engine;
mod settings;
mod types;
mod wire;

pub use client::{LoginClient, ReqwestLoginClient};
pub use engine::{EngineHandle, EventNotifier};
pub use settings::{
    ApiSettings, Deployment, SettingsError, API_PREFIX_ENV, API_URL_ENV, DEFAULT_API_PREFIX,
    DEFAULT_API_URL, DEPLOYMENT_ENV, ROLE_LOGIN_PATH,
};
pub use types::{EngineEvent, LoginError, SubmissionId};
pub use wire::{ErrorBody, RoleLoginRequest, RoleLoginResponse};
