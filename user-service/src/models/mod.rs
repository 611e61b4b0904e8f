// Data models

pub mod user;

pub use user::{next_user_id, User, UserId, UserRole, DEFAULT_NAME, MAX_USERS};
