use std::fmt;
use user_service::ServiceError;

pub type RpcResult<T> = Result<T, RpcError>;

#[derive(Debug)]
pub enum RpcError {
    NotFound(String),
    InvalidRequest(String),
    ServiceError(String),
}

impl fmt::Display for RpcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RpcError::NotFound(msg) => write!(f, "Not found: {}", msg),
            RpcError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            RpcError::ServiceError(msg) => write!(f, "Service error: {}", msg),
        }
    }
}

impl std::error::Error for RpcError {}

impl From<ServiceError> for RpcError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => RpcError::NotFound(msg),
            ServiceError::InvalidInput(msg) => RpcError::InvalidRequest(msg),
            other => RpcError::ServiceError(other.to_string()),
        }
    }
}
