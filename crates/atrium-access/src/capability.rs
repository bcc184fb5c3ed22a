//! Capability codes granted to a session.
//!
//! A capability code is an opaque string such as `"lead:my"` or
//! `"system:user"`. The backend hands the client a mapping from code to
//! boolean; the client never interprets the codes beyond membership.
//!
//! # Presence vs Truthiness
//!
//! The set stores code → bool entries, so there are two distinct
//! questions one can ask:
//!
//! | Question | Method | Used by |
//! |----------|--------|---------|
//! | "is this code in the set at all?" | [`contains`](CapabilitySet::contains) | menu gates, route guards |
//! | "is this code mapped to `true`?" | [`is_granted`](CapabilitySet::is_granted) | callers that care about the value |
//!
//! Gating decisions use **presence**. An entry mapped to `false` still
//! counts as declared, which matches how the original product checked
//! membership. Switching a gate to truthiness silently changes which
//! fragments render when the backend sends explicit `false` entries.
//! Keep the distinction in mind when adding new gates.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The set of capability codes granted to the current session.
///
/// Iteration order is the lexicographic order of the codes, which keeps
/// serialized output and log lines stable.
///
/// # Example
///
/// ```
/// use atrium_access::CapabilitySet;
///
/// let mut caps = CapabilitySet::new();
/// caps.insert("order:list", true);
/// caps.insert("order:draft", false);
///
/// // Gate checks are presence checks.
/// assert!(caps.contains("order:list"));
/// assert!(caps.contains("order:draft"));
/// assert!(!caps.contains("order:receivable"));
///
/// // Value checks are separate.
/// assert!(caps.is_granted("order:list"));
/// assert!(!caps.is_granted("order:draft"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet(BTreeMap<String, bool>);

impl CapabilitySet {
    /// Creates an empty set. Nothing is granted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a capability code with an explicit value.
    pub fn insert(&mut self, code: impl Into<String>, value: bool) {
        self.0.insert(code.into(), value);
    }

    /// Returns `true` if the code is present in the set, regardless of
    /// its mapped value. This is the capability-gate check.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    /// Returns `true` if the code is present **and** mapped to `true`.
    #[must_use]
    pub fn is_granted(&self, code: &str) -> bool {
        self.0.get(code).copied().unwrap_or(false)
    }

    /// Returns `true` if no codes are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of codes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over `(code, value)` entries in code order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Collects the codes, in order.
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }
}

impl FromIterator<(String, bool)> for CapabilitySet {
    fn from_iter<T: IntoIterator<Item = (String, bool)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, bool)> for CapabilitySet {
    fn from_iter<T: IntoIterator<Item = (&'a str, bool)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

impl FromIterator<String> for CapabilitySet {
    /// Builds a set from bare codes, each mapped to `true`.
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self(iter.into_iter().map(|k| (k, true)).collect())
    }
}

impl<'a> FromIterator<&'a str> for CapabilitySet {
    /// Builds a set from bare codes, each mapped to `true`.
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        Self(iter.into_iter().map(|k| (k.to_string(), true)).collect())
    }
}

impl std::fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            return f.write_str("(none)");
        }
        let mut first = true;
        for code in self.0.keys() {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(code)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_grants_nothing() {
        let caps = CapabilitySet::new();
        assert!(caps.is_empty());
        assert!(!caps.contains("lead"));
        assert!(!caps.is_granted("lead"));
    }

    #[test]
    fn contains_is_presence_not_truthiness() {
        let mut caps = CapabilitySet::new();
        caps.insert("lead:legacy", false);

        assert!(caps.contains("lead:legacy"));
        assert!(!caps.is_granted("lead:legacy"));
    }

    #[test]
    fn from_bare_codes_maps_to_true() {
        let caps: CapabilitySet = ["lead", "lead:my"].into_iter().collect();
        assert_eq!(caps.len(), 2);
        assert!(caps.is_granted("lead"));
        assert!(caps.is_granted("lead:my"));
    }

    #[test]
    fn codes_are_ordered() {
        let caps: CapabilitySet = ["order", "customer", "lead"].into_iter().collect();
        assert_eq!(caps.codes(), vec!["customer", "lead", "order"]);
    }

    #[test]
    fn serde_is_a_plain_object() {
        let caps: CapabilitySet = [("order:list", true)].into_iter().collect();
        let json = serde_json::to_string(&caps).expect("serialize");
        assert_eq!(json, r#"{"order:list":true}"#);

        let back: CapabilitySet = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, caps);
    }

    #[test]
    fn display_lists_codes() {
        let caps: CapabilitySet = ["b", "a"].into_iter().collect();
        assert_eq!(caps.to_string(), "a, b");
        assert_eq!(CapabilitySet::new().to_string(), "(none)");
    }
}
