//! In-memory user records keyed by auto-incrementing ids.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// First id handed out by a fresh [`UserStore`].
pub const FIRST_ID: u64 = 1;

/// A single user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique id assigned by the store.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Email address (not validated here; see [`crate::text::validate_email`]).
    pub email: String,
    /// Age in years.
    pub age: u32,
}

/// Owns every [`User`] it creates.
///
/// Ids increase by one per [`UserStore::add`] and are never reused, even after
/// the record holding one is deleted.
#[derive(Debug, Clone)]
pub struct UserStore {
    users: BTreeMap<u64, User>,
    next_id: u64,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// An empty store whose first id is [`FIRST_ID`].
    #[must_use]
    pub const fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            next_id: FIRST_ID,
        }
    }

    /// Store a new user under the next id and return it.
    pub fn add(&mut self, name: impl Into<String>, email: impl Into<String>, age: u32) -> &User {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        let user = User {
            id,
            name: name.into(),
            email: email.into(),
            age,
        };
        debug!(id, name = %user.name, "added user");
        self.users.entry(id).or_insert(user)
    }

    /// Look up a user by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&User> {
        self.users.get(&id)
    }

    /// Remove a user; returns whether one was removed.
    pub fn delete(&mut self, id: u64) -> bool {
        let removed = self.users.remove(&id).is_some();
        debug!(id, removed, "delete user");
        removed
    }

    /// Every stored user, in id order (which is also insertion order).
    #[must_use]
    pub fn list_all(&self) -> Vec<&User> {
        self.users.values().collect()
    }

    /// Number of stored users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// The id the next [`UserStore::add`] will assign.
    #[must_use]
    pub const fn next_id(&self) -> u64 {
        self.next_id
    }
}
