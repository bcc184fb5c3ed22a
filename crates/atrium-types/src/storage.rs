//! Client-side storage keys.
//!
//! The admin shell keeps a handful of session artifacts (tokens,
//! cached credentials, the last fetched profile) in a small key/value
//! store. Keys are a closed enum rather than free strings so a typo
//! cannot silently create a new slot.

use serde::{Deserialize, Serialize};

/// Well-known slots in the client-side session store.
///
/// The string forms are double-underscore framed to keep them visually
/// distinct from application data when the store is inspected.
///
/// | Key | Contents |
/// |-----|----------|
/// | [`AccessToken`](Self::AccessToken) | short-lived bearer token |
/// | [`RefreshToken`](Self::RefreshToken) | long-lived refresh token |
/// | [`Credentials`](Self::Credentials) | remembered login form values |
/// | [`UserInfo`](Self::UserInfo) | last fetched user profile |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StorageKey {
    /// Short-lived bearer token sent on every request.
    AccessToken,
    /// Token used to obtain a fresh access token.
    RefreshToken,
    /// Remembered account/password from the login form.
    Credentials,
    /// Cached user profile.
    UserInfo,
}

impl StorageKey {
    /// Returns the stable string form used as the storage key.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AccessToken => "__ACCESS_TOKEN__",
            Self::RefreshToken => "__REFRESH_TOKEN__",
            Self::Credentials => "__CREDENTIALS__",
            Self::UserInfo => "__USER_INFO__",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_forms_are_distinct() {
        let keys = [
            StorageKey::AccessToken,
            StorageKey::RefreshToken,
            StorageKey::Credentials,
            StorageKey::UserInfo,
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(
            StorageKey::AccessToken.to_string(),
            StorageKey::AccessToken.as_str()
        );
    }
}
