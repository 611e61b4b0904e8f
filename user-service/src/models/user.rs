use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier type for users
pub type UserId = u64;

/// Maximum number of users (informational, not enforced by the store)
pub const MAX_USERS: usize = 1000;

/// Default user name
pub const DEFAULT_NAME: &str = "Anonymous";

static USER_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A user in the system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: UserId, name: String, email: String) -> Self {
        Self { id, name, email }
    }

    pub fn display_name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "User {{ id: {}, name: {} }}", self.id, self.name)
    }
}

/// User role enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Moderator,
    Member,
    Guest,
}

impl UserRole {
    /// Checks if the role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

/// Increments and returns the process-wide user counter.
///
/// The first call returns 1.
pub fn next_user_id() -> UserId {
    USER_COUNTER.fetch_add(1, Ordering::Relaxed) + 1
}

/// Builds a [`User`] from anything string-like.
///
/// ```
/// use user_service::create_user;
///
/// let user = create_user!(1, "John", "john@example.com");
/// assert_eq!(user.name, "John");
/// ```
#[macro_export]
macro_rules! create_user {
    ($id:expr, $name:expr, $email:expr) => {
        $crate::models::User::new($id, $name.to_string(), $email.to_string())
    };
}
