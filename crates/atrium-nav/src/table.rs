//! The validated route table.
//!
//! [`RouteTable`] wraps a list of [`RouteNode`]s and enforces the
//! structural invariants the router relies on: sibling paths are
//! unique, a `*` wildcard only appears as the trailing segment, and a
//! path holds at most one `:param` dynamic segment. Validation happens
//! once, at construction; the table is immutable afterwards.
//!
//! [`admin_routes`] declares the full destination set of the admin
//! shell, gated sections and ungated shell pages alike.

use crate::{filter_routes, RouteNode, RouteTableError};
use std::collections::HashSet;
use tracing::debug;

/// An immutable, validated route configuration.
///
/// # Example
///
/// ```
/// use atrium_nav::{RouteNode, RouteTable};
///
/// let table = RouteTable::new(vec![
///     RouteNode::new("/login"),
///     RouteNode::new("/lead").with_access("lead"),
/// ])
/// .expect("valid table");
///
/// // Only the gated section is navigable.
/// assert_eq!(table.filtered().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RouteTable {
    routes: Vec<RouteNode>,
}

impl RouteTable {
    /// Validates and wraps a route declaration.
    ///
    /// # Errors
    ///
    /// Returns a [`RouteTableError`] for the first duplicate sibling
    /// path, non-trailing wildcard, or doubled dynamic segment found
    /// in depth-first order.
    pub fn new(routes: Vec<RouteNode>) -> Result<Self, RouteTableError> {
        validate_level(&routes, "<root>")?;
        debug!(top_level = routes.len(), "route table validated");
        Ok(Self { routes })
    }

    /// The full declaration, shell pages included.
    #[must_use]
    pub fn routes(&self) -> &[RouteNode] {
        &self.routes
    }

    /// The navigation subset: every node that declares `access`, with
    /// the top-down veto applied. See [`filter_routes`].
    #[must_use]
    pub fn filtered(&self) -> Vec<RouteNode> {
        filter_routes(&self.routes)
    }
}

fn validate_level(siblings: &[RouteNode], parent: &str) -> Result<(), RouteTableError> {
    let mut seen = HashSet::new();
    for route in siblings {
        if !seen.insert(route.path.as_str()) {
            return Err(RouteTableError::DuplicateSiblingPath {
                path: route.path.clone(),
                parent: parent.to_string(),
            });
        }
        validate_path(&route.path)?;
        validate_level(&route.children, &route.path)?;
    }
    Ok(())
}

fn validate_path(path: &str) -> Result<(), RouteTableError> {
    if let Some(pos) = path.find('*') {
        if pos != path.len() - 1 {
            return Err(RouteTableError::WildcardNotTrailing {
                path: path.to_string(),
            });
        }
    }
    let dynamic = path.split('/').filter(|seg| seg.starts_with(':')).count();
    if dynamic > 1 {
        return Err(RouteTableError::MultipleDynamicSegments {
            path: path.to_string(),
        });
    }
    Ok(())
}

/// The route table of the admin shell.
///
/// Ungated entries (login, welcome, the `/` redirect, the `*` catch-all)
/// never appear in [`RouteTable::filtered`] output; the four gated
/// sections — leads, customers, orders, system administration — do.
#[must_use]
pub fn admin_routes() -> RouteTable {
    let routes = vec![
        RouteNode::new("/login").named("登录").layoutless().component("./Login"),
        RouteNode::new("/welcome")
            .named("首页")
            .icon("HomeOutlined")
            .component("./Welcome"),
        RouteNode::new("/lead")
            .named("线索管理")
            .icon("BranchesOutlined")
            .with_access("lead")
            .with_children(vec![
                RouteNode::new("/lead/my")
                    .named("我的线索")
                    .with_access("lead:my")
                    .component("./Lead/My"),
                RouteNode::new("/lead/public")
                    .named("公海线索")
                    .with_access("lead:public")
                    .component("./Lead/Public"),
                RouteNode::new("/lead/invalid")
                    .named("无效线索")
                    .with_access("lead:invalid")
                    .component("./Lead/Invalid"),
            ]),
        RouteNode::new("/customer")
            .named("客户管理")
            .icon("TeamOutlined")
            .with_access("customer")
            .with_children(vec![
                RouteNode::new("/customer/my")
                    .named("我的客户")
                    .with_access("customer:my")
                    .component("./Customer/My"),
                RouteNode::new("/customer/list")
                    .named("客户列表")
                    .with_access("customer:list")
                    .component("./Customer/List"),
                RouteNode::new("/customer/public")
                    .named("公海客户")
                    .with_access("customer:public")
                    .component("./Customer/Public"),
            ]),
        RouteNode::new("/order")
            .named("订单管理")
            .icon("AuditOutlined")
            .with_access("order")
            .with_children(vec![
                RouteNode::new("/order/list")
                    .named("订单列表")
                    .with_access("order:list")
                    .component("./Order/List"),
                RouteNode::new("/order/receivable")
                    .named("应收款订单")
                    .with_access("order:receivable")
                    .component("./Order/Receivable"),
            ]),
        RouteNode::new("/system")
            .named("系统管理")
            .icon("SettingOutlined")
            .with_access("system")
            .with_children(vec![
                RouteNode::new("/system/user")
                    .named("用户管理")
                    .with_access("system:user")
                    .component("./System/User"),
                RouteNode::new("/system/role")
                    .named("角色管理")
                    .with_access("system:role")
                    .component("./System/Role"),
                RouteNode::new("/system/department")
                    .named("部门管理")
                    .with_access("system:department")
                    .component("./System/Department"),
                RouteNode::new("/system/permission")
                    .named("权限管理")
                    .with_access("system:permission")
                    .component("./System/Permission"),
            ]),
        RouteNode::new("/").redirect_to("/welcome"),
        RouteNode::new("*").layoutless().component("./404"),
    ];

    RouteTable::new(routes).expect("static route table is well-formed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_table_validates() {
        let table = admin_routes();
        assert_eq!(table.routes().len(), 8);
    }

    #[test]
    fn duplicate_sibling_paths_are_rejected() {
        let err = RouteTable::new(vec![
            RouteNode::new("/lead").with_access("lead"),
            RouteNode::new("/lead"),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            RouteTableError::DuplicateSiblingPath {
                path: "/lead".to_string(),
                parent: "<root>".to_string(),
            }
        );
    }

    #[test]
    fn duplicate_paths_in_different_levels_are_allowed() {
        // Uniqueness is per sibling group, not global.
        let table = RouteTable::new(vec![
            RouteNode::new("/a").with_access("a").with_child(RouteNode::new("/shared")),
            RouteNode::new("/b").with_access("b").with_child(RouteNode::new("/shared")),
        ]);
        assert!(table.is_ok());
    }

    #[test]
    fn nested_duplicates_name_the_parent() {
        let err = RouteTable::new(vec![RouteNode::new("/lead").with_children(vec![
            RouteNode::new("/lead/my"),
            RouteNode::new("/lead/my"),
        ])])
        .unwrap_err();

        assert_eq!(
            err,
            RouteTableError::DuplicateSiblingPath {
                path: "/lead/my".to_string(),
                parent: "/lead".to_string(),
            }
        );
    }

    #[test]
    fn non_trailing_wildcard_is_rejected() {
        let err = RouteTable::new(vec![RouteNode::new("/files/*/raw")]).unwrap_err();
        assert_eq!(
            err,
            RouteTableError::WildcardNotTrailing {
                path: "/files/*/raw".to_string(),
            }
        );
    }

    #[test]
    fn trailing_wildcard_is_allowed() {
        assert!(RouteTable::new(vec![RouteNode::new("*")]).is_ok());
        assert!(RouteTable::new(vec![RouteNode::new("/files/*")]).is_ok());
    }

    #[test]
    fn single_dynamic_segment_is_allowed() {
        assert!(RouteTable::new(vec![RouteNode::new("/customer/:id")]).is_ok());

        let err = RouteTable::new(vec![RouteNode::new("/a/:x/b/:y")]).unwrap_err();
        assert_eq!(
            err,
            RouteTableError::MultipleDynamicSegments {
                path: "/a/:x/b/:y".to_string(),
            }
        );
    }

    #[test]
    fn filtered_keeps_only_gated_sections() {
        let nav = admin_routes().filtered();
        let paths: Vec<&str> = nav.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/lead", "/customer", "/order", "/system"]);
    }
}
