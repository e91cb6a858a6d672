use thiserror::Error;

/// Failures of a backend call.
///
/// Variants carry rendered messages instead of source errors so a failure can
/// be kept in controller state and shown again on retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Entity not found")]
    NotFound,

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Backend responded with {status}: {detail}")]
    Status { status: u16, detail: String },

    #[error("Failed to decode backend response: {0}")]
    Decode(String),

    #[error("Backend rejected the request: {0}")]
    Rejected(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

#[cfg(feature = "server")]
impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            GatewayError::Timeout(err.to_string())
        } else if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            GatewayError::Status {
                status: status.as_u16(),
                detail: err.to_string(),
            }
        } else if err.is_builder() {
            GatewayError::InvalidRequest(err.to_string())
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

#[cfg(feature = "server")]
impl From<url::ParseError> for GatewayError {
    fn from(err: url::ParseError) -> Self {
        GatewayError::InvalidRequest(format!("Invalid backend url: {err}"))
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Decode(err.to_string())
    }
}
