//! Page workflows composing the gateway, the search controller, and the
//! chart helpers into DTOs.

use thiserror::Error;

use crate::forms::FormError;
use crate::gateway::errors::GatewayError;

pub mod analysis;
pub mod api;
pub mod compare;
pub mod main;
pub mod players;
pub mod search;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("backend error: {0}")]
    Gateway(GatewayError),

    #[error("{0}")]
    Form(String),

    #[error("not found")]
    NotFound,

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
