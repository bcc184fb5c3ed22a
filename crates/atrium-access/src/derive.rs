//! Access derivation.
//!
//! The single place where a session's permission grants become the
//! capability set consumed by gates and guards. Centralizing the step
//! keeps "what does this session hold" answerable in one spot even
//! though the answer is currently a pass-through.

use crate::{CapabilitySet, CurrentUser};

/// Derives the capability set for an optional authenticated user.
///
/// Total function, no error path:
///
/// - `None` (no session, or the profile fetch failed upstream) yields
///   an empty set — nothing is granted.
/// - `Some(user)` yields the user's declared permissions unchanged.
///   No codes are added, removed, or reinterpreted here.
///
/// Call this once per session change and hold the result; the set is
/// recomputed wholesale rather than mutated when the underlying user
/// data changes.
///
/// # Example
///
/// ```
/// use atrium_access::{derive_access, CurrentUser};
/// use atrium_types::UserId;
///
/// assert!(derive_access(None).is_empty());
///
/// let user = CurrentUser::new(UserId::new(), "Alice")
///     .with_permissions([("order:list", true)].into_iter().collect());
/// let caps = derive_access(Some(&user));
///
/// assert!(caps.contains("order:list"));
/// assert!(!caps.contains("order:receivable"));
/// ```
#[must_use]
pub fn derive_access(user: Option<&CurrentUser>) -> CapabilitySet {
    match user {
        Some(user) => user.permissions.clone(),
        None => CapabilitySet::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atrium_types::UserId;

    #[test]
    fn no_user_means_no_access() {
        assert!(derive_access(None).is_empty());
    }

    #[test]
    fn permissions_pass_through_unchanged() {
        let perms: CapabilitySet = [("lead:my", true), ("lead:legacy", false)]
            .into_iter()
            .collect();
        let user = CurrentUser::new(UserId::new(), "Alice").with_permissions(perms.clone());

        assert_eq!(derive_access(Some(&user)), perms);
    }

    #[test]
    fn derivation_does_not_consume_the_user() {
        let user = CurrentUser::new(UserId::new(), "Bob")
            .with_permissions(["customer"].into_iter().collect());

        let first = derive_access(Some(&user));
        let second = derive_access(Some(&user));
        assert_eq!(first, second);
    }
}
