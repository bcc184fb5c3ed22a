//! Token and session-artifact storage.
//!
//! In-memory key/value store for the artifacts the shell keeps between
//! requests: bearer tokens, the refresh token, remembered credentials,
//! and the cached profile. Slots are named by
//! [`StorageKey`](atrium_types::StorageKey); the generic
//! [`set`](TokenStore::set)/[`get`](TokenStore::get) pair backs the
//! typed token helpers.

use atrium_types::StorageKey;
use std::collections::HashMap;
use tracing::debug;

/// In-memory store for session artifacts.
///
/// # Example
///
/// ```
/// use atrium_access::TokenStore;
///
/// let mut store = TokenStore::new();
/// store.set_access_token("eyJhbGciOi...");
/// assert_eq!(store.access_token(), Some("eyJhbGciOi..."));
///
/// store.clear();
/// assert_eq!(store.access_token(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    slots: HashMap<StorageKey, String>,
}

impl TokenStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value in a slot, replacing any previous value.
    pub fn set(&mut self, key: StorageKey, value: impl Into<String>) {
        self.slots.insert(key, value.into());
    }

    /// Reads a slot.
    #[must_use]
    pub fn get(&self, key: StorageKey) -> Option<&str> {
        self.slots.get(&key).map(String::as_str)
    }

    /// Removes a slot, returning the previous value if there was one.
    pub fn remove(&mut self, key: StorageKey) -> Option<String> {
        self.slots.remove(&key)
    }

    /// Empties every slot. Called on logout.
    pub fn clear(&mut self) {
        debug!(slots = self.slots.len(), "token store cleared");
        self.slots.clear();
    }

    /// Stores the access token.
    pub fn set_access_token(&mut self, token: impl Into<String>) {
        self.set(StorageKey::AccessToken, token);
    }

    /// Reads the access token.
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.get(StorageKey::AccessToken)
    }

    /// Removes the access token.
    pub fn remove_access_token(&mut self) {
        self.remove(StorageKey::AccessToken);
    }

    /// Stores the refresh token.
    pub fn set_refresh_token(&mut self, token: impl Into<String>) {
        self.set(StorageKey::RefreshToken, token);
    }

    /// Reads the refresh token.
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.get(StorageKey::RefreshToken)
    }

    /// Removes the refresh token.
    pub fn remove_refresh_token(&mut self) {
        self.remove(StorageKey::RefreshToken);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_roundtrip() {
        let mut store = TokenStore::new();
        store.set_access_token("access-1");
        store.set_refresh_token("refresh-1");

        assert_eq!(store.access_token(), Some("access-1"));
        assert_eq!(store.refresh_token(), Some("refresh-1"));
    }

    #[test]
    fn set_replaces_previous_value() {
        let mut store = TokenStore::new();
        store.set_access_token("old");
        store.set_access_token("new");
        assert_eq!(store.access_token(), Some("new"));
    }

    #[test]
    fn remove_is_independent_per_slot() {
        let mut store = TokenStore::new();
        store.set_access_token("access");
        store.set_refresh_token("refresh");

        store.remove_access_token();
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), Some("refresh"));
    }

    #[test]
    fn clear_empties_all_slots() {
        let mut store = TokenStore::new();
        store.set_access_token("access");
        store.set(StorageKey::Credentials, "alice:hunter2");
        store.clear();

        assert_eq!(store.access_token(), None);
        assert_eq!(store.get(StorageKey::Credentials), None);
    }

    #[test]
    fn missing_slot_reads_none() {
        let store = TokenStore::new();
        assert_eq!(store.get(StorageKey::UserInfo), None);
    }
}
