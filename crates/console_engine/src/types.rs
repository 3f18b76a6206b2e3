use thiserror::Error;

use crate::SettingsError;

pub type SubmissionId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    LoginCompleted {
        submission_id: SubmissionId,
        result: Result<String, LoginError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("request timed out: {0}")]
    Timeout(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("http status {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Status {
        status: u16,
        message: Option<String>,
    },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl LoginError {
    /// Message supplied by the server in its error payload, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            LoginError::Status {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }
}
