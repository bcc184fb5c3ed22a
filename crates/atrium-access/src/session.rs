//! Session lifecycle.
//!
//! [`SessionContext`] is the explicit owner of "who is logged in" and
//! the capability set derived from them. It replaces the ambient global
//! store the original shell used: whoever composes menus and route
//! guards receives the context as a value, and the only ways the
//! session changes are [`set_session`](SessionContext::set_session) and
//! [`clear_session`](SessionContext::clear_session).

use crate::{derive_access, CapabilitySet, CurrentUser};
use tracing::info;

/// Owner of the current session and its derived capabilities.
///
/// The capability set is recomputed wholesale every time the session
/// changes and is never patched in place, so a reference obtained from
/// [`capabilities`](Self::capabilities) always reflects one coherent
/// session state.
///
/// # Example
///
/// ```
/// use atrium_access::{CurrentUser, SessionContext};
/// use atrium_types::UserId;
///
/// let mut ctx = SessionContext::new();
/// assert!(!ctx.is_authenticated());
/// assert!(!ctx.allows("lead"));
///
/// let user = CurrentUser::new(UserId::new(), "Alice")
///     .with_permissions(["lead", "lead:my"].into_iter().collect());
/// ctx.set_session(user);
///
/// assert!(ctx.is_authenticated());
/// assert!(ctx.allows("lead:my"));
///
/// ctx.clear_session();
/// assert!(!ctx.allows("lead:my"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    user: Option<CurrentUser>,
    capabilities: CapabilitySet,
}

impl SessionContext {
    /// Creates an unauthenticated context with no capabilities.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs a user after login or a successful profile fetch.
    ///
    /// Replaces any previous session and recomputes the capability set
    /// from scratch.
    pub fn set_session(&mut self, user: CurrentUser) {
        info!(user = %user.name, capabilities = user.permissions.len(), "session established");
        self.capabilities = derive_access(Some(&user));
        self.user = Some(user);
    }

    /// Drops the session on logout.
    pub fn clear_session(&mut self) {
        if let Some(user) = self.user.take() {
            info!(user = %user.name, "session cleared");
        }
        self.capabilities = CapabilitySet::new();
    }

    /// Returns the authenticated user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    /// Returns `true` if a user is installed.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The capability set for the current session.
    ///
    /// Empty when unauthenticated.
    #[must_use]
    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    /// The capability-gate: `true` if the session declares `code`.
    ///
    /// Presence check, not truthiness — see
    /// [`CapabilitySet::contains`].
    #[must_use]
    pub fn allows(&self, code: &str) -> bool {
        self.capabilities.contains(code)
    }
}
