//! Route declarations.
//!
//! A [`RouteNode`] is one destination in the shell. The gating fields
//! (`path`, `name`, `access`, `children`) are strongly typed because the
//! filter inspects them; everything presentational rides in an open
//! [`RouteMeta`] bag the filter never looks at.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One entry in the static route configuration.
///
/// # The `access` field
///
/// `access` is `Option<String>`, and the distinction between its three
/// shapes is load-bearing:
///
/// | Declared value | Meaning |
/// |----------------|---------|
/// | `None` | route is never part of gated navigation; vetoes its subtree |
/// | `Some("")` | *declared* but empty — still counts as gated |
/// | `Some(code)` | gated behind `code` |
///
/// The filter tests declaration ([`declares_access`](Self::declares_access)),
/// not truthiness of the value. `Some("")` surviving the filter is
/// intentional and mirrors the key-presence check the shell has always
/// used.
///
/// # Example
///
/// ```
/// use atrium_nav::RouteNode;
///
/// let lead = RouteNode::new("/lead")
///     .named("线索管理")
///     .with_access("lead")
///     .with_child(RouteNode::new("/lead/my").named("我的线索").with_access("lead:my"));
///
/// assert!(lead.declares_access());
/// assert_eq!(lead.children.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteNode {
    /// Path, unique within its siblings. May contain one `:param`
    /// segment or a trailing `*` wildcard.
    pub path: String,
    /// Display label for menus.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Capability code required to navigate here. See the type docs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    /// Ordered child routes; empty for leaf pages.
    #[serde(rename = "routes", default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteNode>,
    /// Presentational metadata, opaque to filtering.
    #[serde(flatten)]
    pub meta: RouteMeta,
}

impl RouteNode {
    /// Creates a leaf route with no label, no gate, and default metadata.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            access: None,
            children: Vec::new(),
            meta: RouteMeta::default(),
        }
    }

    /// Sets the display label.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Declares the required capability code.
    #[must_use]
    pub fn with_access(mut self, code: impl Into<String>) -> Self {
        self.access = Some(code.into());
        self
    }

    /// Appends a child route.
    #[must_use]
    pub fn with_child(mut self, child: RouteNode) -> Self {
        self.children.push(child);
        self
    }

    /// Replaces the child list.
    #[must_use]
    pub fn with_children(mut self, children: Vec<RouteNode>) -> Self {
        self.children = children;
        self
    }

    /// Sets the component reference.
    #[must_use]
    pub fn component(mut self, component: impl Into<String>) -> Self {
        self.meta.component = Some(component.into());
        self
    }

    /// Sets the menu icon name.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.meta.icon = Some(icon.into());
        self
    }

    /// Turns the route into a redirect.
    #[must_use]
    pub fn redirect_to(mut self, target: impl Into<String>) -> Self {
        self.meta.redirect = Some(target.into());
        self
    }

    /// Renders the page outside the shell layout (login, 404).
    #[must_use]
    pub fn layoutless(mut self) -> Self {
        self.meta.layout = false;
        self
    }

    /// Returns `true` if the route declares an `access` requirement,
    /// empty string included. This is the filter's test.
    #[must_use]
    pub fn declares_access(&self) -> bool {
        self.access.is_some()
    }
}

/// Presentational route metadata.
///
/// The filter never inspects these fields; they exist so that a full
/// route declaration can round-trip through the tree transforms without
/// loss. Unrecognized declaration fields collect into `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteMeta {
    /// Navigation target for redirect-only routes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    /// Component reference rendered for the route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Menu icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether the page renders inside the shell layout.
    #[serde(default = "default_layout", skip_serializing_if = "is_true")]
    pub layout: bool,
    /// Anything else the declaration carried.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

fn default_layout() -> bool {
    true
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_true(v: &bool) -> bool {
    *v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_access_still_counts_as_declared() {
        let node = RouteNode::new("/odd").with_access("");
        assert!(node.declares_access());
        assert_eq!(node.access.as_deref(), Some(""));
    }

    #[test]
    fn absent_access_is_not_declared() {
        assert!(!RouteNode::new("/login").declares_access());
    }

    #[test]
    fn serde_uses_routes_for_children() {
        let node = RouteNode::new("/lead")
            .with_access("lead")
            .with_child(RouteNode::new("/lead/my").with_access("lead:my"));

        let json = serde_json::to_value(&node).expect("serialize");
        assert!(json.get("routes").is_some());
        assert!(json.get("children").is_none());
    }

    #[test]
    fn serde_distinguishes_empty_and_absent_access() {
        let declared: RouteNode =
            serde_json::from_str(r#"{"path":"/a","access":""}"#).expect("deserialize");
        let absent: RouteNode = serde_json::from_str(r#"{"path":"/a"}"#).expect("deserialize");

        assert!(declared.declares_access());
        assert!(!absent.declares_access());
    }

    #[test]
    fn unknown_fields_land_in_extra() {
        let node: RouteNode =
            serde_json::from_str(r#"{"path":"/login","layout":false,"wrappers":["auth"]}"#)
                .expect("deserialize");

        assert!(!node.meta.layout);
        assert!(node.meta.extra.contains_key("wrappers"));
    }

    #[test]
    fn layout_defaults_to_true() {
        let node: RouteNode = serde_json::from_str(r#"{"path":"/welcome"}"#).expect("deserialize");
        assert!(node.meta.layout);
    }
}
