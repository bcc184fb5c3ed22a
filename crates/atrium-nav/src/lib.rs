//! Navigation structure for the Atrium admin shell.
//!
//! The shell's destinations are declared once, statically, as a tree of
//! [`RouteNode`]s. Two independent transforms consume that tree:
//!
//! ```text
//! RouteTable (static, validated at construction)
//!     │
//!     ├── filter_routes ──► navigation subset        (module load,
//!     │                     "which nodes are gated")  session-independent)
//!     │
//!     └── build_menu ─────► visible menu             (per session,
//!                           needs the CapabilitySet)
//! ```
//!
//! - [`filter_routes`] is a *declaration* filter: it keeps exactly the
//!   nodes that declare an `access` requirement, without asking whether
//!   anyone holds it. See the [`filter`] module for the top-down veto
//!   rule and the presence-vs-truthiness contract.
//! - [`build_menu`] is the runtime gate: it intersects the filtered
//!   tree with the session's
//!   [`CapabilitySet`](atrium_access::CapabilitySet).
//!
//! Malformed declarations (duplicate sibling paths, misplaced
//! wildcards) are configuration errors caught by [`RouteTable::new`];
//! the transforms themselves are total and never fail.

pub mod error;
pub mod filter;
pub mod menu;
pub mod route;
pub mod table;

pub use error::RouteTableError;
pub use filter::filter_routes;
pub use menu::{build_menu, MenuItem};
pub use route::{RouteMeta, RouteNode};
pub use table::{admin_routes, RouteTable};
