// User Service Library
// In-memory user store, prefix logger and small user helpers

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::{Config, DEFAULT_CONFIG};
pub use error::{ServiceError, ServiceResult};
pub use logger::Logger;
pub use models::{next_user_id, User, UserId, UserRole, DEFAULT_NAME, MAX_USERS};
pub use services::{UserStore, INIT_NOTICE};

// Re-export free functions
pub use utils::{format_name, process_user, processing_message};
pub use validation::{validate_email, Validatable};
