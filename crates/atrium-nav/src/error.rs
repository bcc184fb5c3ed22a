//! Route-table configuration errors.
//!
//! The tree transforms in this crate are total; the only thing that can
//! go wrong is the static declaration itself. [`RouteTableError`] is
//! reported once, at [`RouteTable::new`](crate::RouteTable::new), so a
//! bad declaration fails at startup instead of misrouting later.

use thiserror::Error;

/// A malformed route declaration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    /// Two siblings share a path.
    #[error("duplicate path '{path}' among children of '{parent}'")]
    DuplicateSiblingPath {
        /// The repeated path.
        path: String,
        /// Path of the parent node, or "<root>" at the top level.
        parent: String,
    },

    /// A `*` wildcard somewhere other than the end of the path.
    #[error("wildcard must be the trailing segment in '{path}'")]
    WildcardNotTrailing {
        /// The offending path.
        path: String,
    },

    /// More than one `:param` dynamic segment in a single path.
    #[error("at most one dynamic segment is allowed in '{path}'")]
    MultipleDynamicSegments {
        /// The offending path.
        path: String,
    },
}
