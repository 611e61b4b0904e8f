pub mod api;
pub mod error;
pub mod handlers;

pub use api::RpcServer;
pub use error::{RpcError, RpcResult};
pub use handlers::UserHandler;

// Re-export types needed by clients
pub use user_service::{User, UserId};
pub use user_service;
