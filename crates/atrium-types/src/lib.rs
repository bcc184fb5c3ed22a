//! Core types for the Atrium admin shell.
//!
//! This crate provides the foundational identifier and storage-key types
//! shared by every other Atrium crate.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  atrium-types   : UserId, PermissionId, StorageKey ◄── HERE
//! │  atrium-access  : CapabilitySet, CurrentUser, Session   │
//! │  atrium-nav     : RouteNode, RouteTable, filtering      │
//! ├─────────────────────────────────────────────────────────┤
//! │  atrium-admin   : domain dictionaries, date arithmetic  │
//! │  atrium-cli     : command-line frontend                 │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Types here carry identity only. Permission logic (who may see what)
//! lives in `atrium-access`; navigation structure lives in `atrium-nav`.

pub mod id;
pub mod storage;

pub use id::{PermissionId, UserId};
pub use storage::StorageKey;
