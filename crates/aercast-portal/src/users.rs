//! Credential store.
//!
//! Cleartext in-memory table, discarded on restart. Insertion is atomic,
//! so two concurrent registrations of the same username cannot both pass
//! the existence check.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Mutex;

/// Key-value credential store collaborator.
pub trait CredentialStore: Send + Sync {
    /// Insert a credential unless the username is already taken.
    /// Returns `false` when the username exists.
    fn insert_if_absent(&self, username: &str, password: &str) -> bool;

    /// Exact cleartext match on (username, password).
    fn verify(&self, username: &str, password: &str) -> bool;
}

#[derive(Default)]
pub struct MemoryCredentials {
    users: Mutex<HashMap<String, String>>,
}

impl MemoryCredentials {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryCredentials {
    fn insert_if_absent(&self, username: &str, password: &str) -> bool {
        let mut users = self.users.lock().unwrap();
        match users.entry(username.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(password.to_string());
                true
            }
        }
    }

    fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .lock()
            .unwrap()
            .get(username)
            .is_some_and(|stored| stored == password)
    }
}
