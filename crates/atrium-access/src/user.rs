//! The authenticated user profile.

use crate::CapabilitySet;
use atrium_types::UserId;
use serde::{Deserialize, Serialize};

/// The profile returned by the backend after authentication.
///
/// Carries identity plus the raw permission grants. The grants are not
/// interpreted here; [`derive_access`](crate::derive_access) passes them
/// through to the capability layer untouched.
///
/// # Why No Default?
///
/// **Do not implement `Default` for CurrentUser.** A profile without an
/// identity is not a meaningful value; absence of a user is expressed as
/// `Option<CurrentUser>` at the call sites that need it.
///
/// # Example
///
/// ```
/// use atrium_access::{CapabilitySet, CurrentUser};
/// use atrium_types::UserId;
///
/// let user = CurrentUser::new(UserId::new(), "Alice")
///     .with_avatar("https://cdn.example.com/a.png")
///     .with_permissions(["lead", "lead:my"].into_iter().collect());
///
/// assert_eq!(user.name, "Alice");
/// assert!(user.permissions.contains("lead:my"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Backend identity of the account.
    pub id: UserId,
    /// Display name shown in the header.
    pub name: String,
    /// Avatar URL, if the account has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Raw permission grants from the backend.
    #[serde(default)]
    pub permissions: CapabilitySet,
}

impl CurrentUser {
    /// Creates a profile with no avatar and no permissions.
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar: None,
            permissions: CapabilitySet::new(),
        }
    }

    /// Sets the avatar URL.
    #[must_use]
    pub fn with_avatar(mut self, url: impl Into<String>) -> Self {
        self.avatar = Some(url.into());
        self
    }

    /// Replaces the permission grants.
    #[must_use]
    pub fn with_permissions(mut self, permissions: CapabilitySet) -> Self {
        self.permissions = permissions;
        self
    }
}

impl std::fmt::Display for CurrentUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
