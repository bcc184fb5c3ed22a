//! Per-session menu construction.
//!
//! The second half of the mechanism: [`filter_routes`](crate::filter_routes)
//! decides which routes are *gated*; [`build_menu`] decides which of
//! those the current session may actually see, by checking each node's
//! access code against the session's capability set. The check is
//! membership ([`CapabilitySet::contains`]), mirroring the gate used by
//! the rest of the shell.

use crate::RouteNode;
use atrium_access::CapabilitySet;
use serde::{Deserialize, Serialize};

/// One visible menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Navigation target.
    pub path: String,
    /// Label shown in the menu; falls back to the path when the route
    /// declares no name.
    pub label: String,
    /// Icon name, if the route declares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Visible children, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
}

/// Builds the visible menu for a session.
///
/// `routes` is expected to be filtered output (every node declares
/// `access`); nodes without a declaration are skipped defensively. A
/// node whose code is missing from `caps` is hidden together with its
/// children — the same top-down shape as the static filter.
///
/// # Example
///
/// ```
/// use atrium_access::CapabilitySet;
/// use atrium_nav::{admin_routes, build_menu};
///
/// let caps: CapabilitySet = ["order", "order:list"].into_iter().collect();
/// let menu = build_menu(&admin_routes().filtered(), &caps);
///
/// assert_eq!(menu.len(), 1);
/// assert_eq!(menu[0].path, "/order");
/// assert_eq!(menu[0].children.len(), 1);
/// assert_eq!(menu[0].children[0].label, "订单列表");
/// ```
#[must_use]
pub fn build_menu(routes: &[RouteNode], caps: &CapabilitySet) -> Vec<MenuItem> {
    routes
        .iter()
        .filter(|route| match route.access.as_deref() {
            Some(code) => caps.contains(code),
            None => false,
        })
        .map(|route| MenuItem {
            path: route.path.clone(),
            label: route.name.clone().unwrap_or_else(|| route.path.clone()),
            icon: route.meta.icon.clone(),
            children: build_menu(&route.children, caps),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::admin_routes;

    #[test]
    fn empty_capabilities_yield_empty_menu() {
        let menu = build_menu(&admin_routes().filtered(), &CapabilitySet::new());
        assert!(menu.is_empty());
    }

    #[test]
    fn section_without_capability_is_hidden_with_children() {
        let caps: CapabilitySet = ["lead:my"].into_iter().collect();
        // "lead" itself is missing, so the whole section stays hidden.
        let menu = build_menu(&admin_routes().filtered(), &caps);
        assert!(menu.is_empty());
    }

    #[test]
    fn held_capabilities_shape_the_menu() {
        let caps: CapabilitySet = ["lead", "lead:my", "system", "system:role"]
            .into_iter()
            .collect();
        let menu = build_menu(&admin_routes().filtered(), &caps);

        let paths: Vec<&str> = menu.iter().map(|m| m.path.as_str()).collect();
        assert_eq!(paths, vec!["/lead", "/system"]);
        assert_eq!(menu[0].children.len(), 1);
        assert_eq!(menu[0].children[0].path, "/lead/my");
        assert_eq!(menu[1].children[0].label, "角色管理");
    }

    #[test]
    fn gate_uses_presence_not_truthiness() {
        let caps: CapabilitySet = [("order", false)].into_iter().collect();
        let menu = build_menu(&admin_routes().filtered(), &caps);

        // Declared-but-false still passes the membership gate.
        assert_eq!(menu.len(), 1);
        assert_eq!(menu[0].path, "/order");
    }

    #[test]
    fn label_falls_back_to_path() {
        let routes = vec![RouteNode::new("/bare").with_access("bare")];
        let caps: CapabilitySet = ["bare"].into_iter().collect();
        let menu = build_menu(&routes, &caps);

        assert_eq!(menu[0].label, "/bare");
    }

    #[test]
    fn icons_carry_over() {
        let caps: CapabilitySet = ["customer"].into_iter().collect();
        let menu = build_menu(&admin_routes().filtered(), &caps);
        assert_eq!(menu[0].icon.as_deref(), Some("TeamOutlined"));
    }
}
