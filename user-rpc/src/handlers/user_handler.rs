use crate::error::{RpcError, RpcResult};
use user_service::{ServiceError, User, UserId, UserStore, Validatable};

pub struct UserHandler {
    store: UserStore,
}

impl UserHandler {
    pub fn new(db_url: impl Into<String>) -> Self {
        Self {
            store: UserStore::new(db_url),
        }
    }

    pub fn from_store(store: UserStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &UserStore {
        &self.store
    }

    /// Appends `user` unchecked, same as the store.
    pub fn add_user(&mut self, user: User) -> RpcResult<()> {
        self.store.add_user(user);
        Ok(())
    }

    /// Builds, validates and stores a user.
    pub fn register_user(&mut self, id: UserId, name: String, email: String) -> RpcResult<User> {
        let user = User::new(id, name, email);
        user.validate()
            .map_err(|e| RpcError::InvalidRequest(e.to_string()))?;
        self.store.add_user(user.clone());
        Ok(user)
    }

    pub fn get_user(&self, id: UserId) -> RpcResult<User> {
        self.store
            .find_user(id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("User with id {} not found", id)).into())
    }

    /// Snapshot of all users in insertion order.
    pub fn list_users(&self) -> RpcResult<Vec<User>> {
        Ok(self.store.get_all_users().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn handler() -> UserHandler {
        let store = UserStore::with_output("sqlite://test", &mut io::sink()).unwrap();
        UserHandler::from_store(store)
    }

    #[test]
    fn test_register_and_get_user() {
        let mut handler = handler();
        let user = handler
            .register_user(1, "Alice".to_string(), "alice@example.com".to_string())
            .unwrap();

        assert_eq!(user.name, "Alice");
        assert_eq!(user.email, "alice@example.com");

        let fetched_user = handler.get_user(user.id).unwrap();
        assert_eq!(fetched_user.name, "Alice");
    }

    #[test]
    fn test_register_rejects_invalid() {
        let mut handler = handler();

        let err = handler
            .register_user(1, String::new(), "a@b".to_string())
            .unwrap_err();
        assert!(matches!(err, RpcError::InvalidRequest(_)));

        let err = handler
            .register_user(2, "Bob".to_string(), "bob.example.com".to_string())
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid request: Invalid input: Invalid email format");

        assert!(handler.list_users().unwrap().is_empty());
    }

    #[test]
    fn test_get_missing_user() {
        let handler = handler();
        let err = handler.get_user(3).unwrap_err();
        assert_eq!(err.to_string(), "Not found: User with id 3 not found");
    }

    #[test]
    fn test_list_users_is_snapshot() {
        let mut handler = handler();
        handler
            .add_user(User::new(1, "Ann".to_string(), "ann@x.com".to_string()))
            .unwrap();
        handler
            .add_user(User::new(2, "Bo".to_string(), "bo@x.com".to_string()))
            .unwrap();

        let users = handler.list_users().unwrap();
        handler
            .add_user(User::new(3, "Cy".to_string(), "cy@x.com".to_string()))
            .unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "Ann");
        assert_eq!(users[1].name, "Bo");
        assert_eq!(handler.store().len(), 3);
    }
}
