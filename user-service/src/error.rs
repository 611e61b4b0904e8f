// Service Error Types
// Shared error type for validation and configuration loading

use std::io;
use thiserror::Error;

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced by the opt-in parts of the service.
///
/// Store, logger and the free helpers are total and never produce one of these.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
