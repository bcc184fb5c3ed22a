//! Domain utilities for the Atrium admin shell.
//!
//! The deterministic, UI-independent pieces of the business modules:
//!
//! - [`contract`] — contract end-date arithmetic for the order form
//!   (calendar days vs working days).
//! - [`dictionary`] — enum-backed dictionaries for select options
//!   (customer source/category/status, follow and operation records).
//! - [`form`] — form-mode helpers shared by the CRUD modals.

pub mod contract;
pub mod dictionary;
pub mod form;

pub use contract::{contract_end_date, TimingType};
pub use form::{modal_title, FormMode};
