//! Error conversion glue between layers.
//!
//! The domain and gateway layers do not know about services, so the
//! conversions into [`ServiceError`] live here.

use crate::domain::types::TypeConstraintError;
use crate::gateway::errors::GatewayError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for GatewayError {
    fn from(val: TypeConstraintError) -> Self {
        GatewayError::InvalidRequest(val.to_string())
    }
}

impl From<GatewayError> for ServiceError {
    fn from(val: GatewayError) -> Self {
        match val {
            GatewayError::NotFound => ServiceError::NotFound,
            other => ServiceError::Gateway(other),
        }
    }
}
