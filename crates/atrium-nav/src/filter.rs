//! Declaration-based route filtering.
//!
//! Produces the navigable subset of a route tree for menu construction.
//! The test is whether a node *declares* an `access` requirement, not
//! whether anyone holds it: this filter runs once over the static
//! configuration, before any session exists. The per-session check
//! happens later, in [`build_menu`](crate::build_menu).
//!
//! # The Rules
//!
//! 1. A node without `access` is excluded, **together with its entire
//!    subtree** — even if a descendant declares `access` of its own.
//!    The veto cascades top-down, never bottom-up.
//! 2. A node with `access` is kept; its children are filtered by the
//!    same rules, and it survives even if every child was pruned.
//! 3. Order is preserved: stable, left-to-right, depth-first.
//!
//! Rule 1 is why the login page, the `*` catch-all, and redirect stubs
//! never show up in menus: they simply declare no `access`.
//!
//! The filter is pure — the input tree is untouched and the output is
//! freshly built — and idempotent: every node in the output already
//! declares `access`, so filtering the output returns it unchanged.

use crate::RouteNode;

/// Filters a route list down to the nodes that declare `access`.
///
/// See the module docs for the exact rules. Total function; malformed
/// declarations are resolved by the rules rather than reported.
///
/// # Example
///
/// ```
/// use atrium_nav::{filter_routes, RouteNode};
///
/// let routes = vec![
///     RouteNode::new("/login").named("登录"),
///     RouteNode::new("/lead").with_access("lead").with_children(vec![
///         RouteNode::new("/lead/my").with_access("lead:my"),
///         RouteNode::new("/lead/legacy"),
///     ]),
/// ];
///
/// let nav = filter_routes(&routes);
/// assert_eq!(nav.len(), 1);
/// assert_eq!(nav[0].path, "/lead");
/// assert_eq!(nav[0].children.len(), 1);
/// assert_eq!(nav[0].children[0].path, "/lead/my");
/// ```
#[must_use]
pub fn filter_routes(routes: &[RouteNode]) -> Vec<RouteNode> {
    routes
        .iter()
        .filter(|route| route.declares_access())
        .map(filter_children)
        .collect()
}

fn filter_children(route: &RouteNode) -> RouteNode {
    let mut kept = route.clone();
    kept.children = filter_routes(&route.children);
    kept
}
