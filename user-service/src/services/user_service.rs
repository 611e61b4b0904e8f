use crate::models::{User, UserId};
use std::io::{self, Write};
use tracing::{debug, info};

/// Line written when a store is constructed.
pub const INIT_NOTICE: &str = "UserService initialized";

/// Ordered, list-backed user store.
///
/// Insertion order is preserved and duplicate ids are allowed; lookups return
/// the first match.
#[derive(Debug)]
pub struct UserStore {
    db_url: String,
    users: Vec<User>,
}

impl UserStore {
    /// Creates an empty store and prints the init notice to stdout.
    pub fn new(db_url: impl Into<String>) -> Self {
        let db_url = db_url.into();
        println!("{}", INIT_NOTICE);
        info!(db_url = %db_url, "user store created");
        Self {
            db_url,
            users: Vec::new(),
        }
    }

    /// Same as [`UserStore::new`], but writes the init notice to `out`.
    pub fn with_output<W: Write>(db_url: impl Into<String>, out: &mut W) -> io::Result<Self> {
        let db_url = db_url.into();
        writeln!(out, "{}", INIT_NOTICE)?;
        info!(db_url = %db_url, "user store created");
        Ok(Self {
            db_url,
            users: Vec::new(),
        })
    }

    /// The database URL given at construction. Stored only.
    pub fn db_url(&self) -> &str {
        &self.db_url
    }

    pub fn add_user(&mut self, user: User) {
        debug!(id = user.id, "adding user");
        self.users.push(user);
    }

    pub fn find_user(&self, user_id: UserId) -> Option<&User> {
        let found = self.users.iter().find(|user| user.id == user_id);
        debug!(id = user_id, found = found.is_some(), "user lookup");
        found
    }

    pub fn get_all_users(&self) -> &[User] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: UserId, name: &str, email: &str) -> User {
        User::new(id, name.to_string(), email.to_string())
    }

    fn quiet_store(url: &str) -> UserStore {
        let mut sink = Vec::new();
        UserStore::with_output(url, &mut sink).unwrap()
    }

    #[test]
    fn test_init_notice_written_once() {
        for url in ["sqlite://test", "", "not a url at all"] {
            let mut out = Vec::new();
            let store = UserStore::with_output(url, &mut out).unwrap();
            assert_eq!(String::from_utf8(out).unwrap(), "UserService initialized\n");
            assert_eq!(store.db_url(), url);
            assert!(store.is_empty());
        }
    }

    #[test]
    fn test_scenario() {
        let mut store = quiet_store("sqlite://test");
        store.add_user(user(1, "Ann", "ann@x.com"));
        store.add_user(user(2, "Bo", "bo@x.com"));

        let bo = store.find_user(2).unwrap();
        assert_eq!(bo.name, "Bo");
        assert_eq!(bo.email, "bo@x.com");

        assert!(store.find_user(3).is_none());

        let names: Vec<&str> = store.get_all_users().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Ann", "Bo"]);
    }

    #[test]
    fn test_find_on_empty_store() {
        let store = quiet_store("sqlite://empty");
        assert!(store.find_user(0).is_none());
        assert!(store.get_all_users().is_empty());
    }

    #[test]
    fn test_duplicate_ids_first_match_wins() {
        let mut store = quiet_store("sqlite://dup");
        store.add_user(user(5, "First", "first@x.com"));
        store.add_user(user(5, "Second", "second@x.com"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.find_user(5).unwrap().name, "First");
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut store = quiet_store("sqlite://order");
        let ids = [9, 3, 7, 3, 1];
        for id in ids {
            store.add_user(user(id, "u", ""));
        }

        let stored: Vec<UserId> = store.get_all_users().iter().map(|u| u.id).collect();
        assert_eq!(stored, ids);
    }

    #[test]
    fn test_unvalidated_input_accepted() {
        let mut store = quiet_store("sqlite://loose");
        store.add_user(user(0, "", ""));
        assert_eq!(store.find_user(0).unwrap().email, "");
    }
}
