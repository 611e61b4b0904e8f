pub mod user_service;

pub use user_service::{UserStore, INIT_NOTICE};
