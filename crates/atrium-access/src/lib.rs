//! Capability derivation and session lifecycle for Atrium.
//!
//! This crate answers "what may the current session see" for the admin
//! shell. It sits between `atrium-types` (pure identity) and
//! `atrium-nav` (navigation structure).
//!
//! # Two-Step Model
//!
//! ```text
//! login / profile fetch
//!         │
//!         ▼
//! CurrentUser { permissions }
//!         │  derive_access
//!         ▼
//! CapabilitySet ──── capability-gate ───► render-or-not decisions
//! ```
//!
//! - [`derive_access`] turns an optional [`CurrentUser`] into a
//!   [`CapabilitySet`]. No user means no capabilities; a present user's
//!   permissions pass through unchanged. No business transformation
//!   happens here.
//! - The capability-gate is [`CapabilitySet::contains`]: a **key
//!   presence** check, deliberately not a truthiness check (see the
//!   module docs on [`capability`]).
//!
//! # Session Lifecycle
//!
//! [`SessionContext`] owns the current user and the derived set for the
//! life of a session. It is an explicit value handed to whatever builds
//! menus and guards, not ambient global state: callers invoke
//! [`set_session`](SessionContext::set_session) after authentication and
//! [`clear_session`](SessionContext::clear_session) on logout. The set
//! is recomputed wholesale on every change, never patched in place.

pub mod capability;
pub mod derive;
pub mod session;
pub mod token;
pub mod user;

pub use capability::CapabilitySet;
pub use derive::derive_access;
pub use session::SessionContext;
pub use token::TokenStore;
pub use user::CurrentUser;
