//! Form controller for the compound interest calculator.
//!
//! A [`FormState`] is an explicit configuration object: the field being
//! solved for plus the entries of the other four. It replaces widget-level
//! enabled/disabled state, so validation and dispatch operate on plain data.
//!
//! The typical flow is:
//!
//! 1. [`FormState::select_target`] picks the unknown and clears its entry
//! 2. [`FormState::set_raw`] / [`FormState::set_value`] fill the knowns
//! 3. [`FormState::calculate`] validates, solves and renders one line

pub mod error;
pub mod render;
pub mod state;
pub mod validate;

pub use error::{FormError, FormResult, ValidationError};
pub use render::{DisplayOptions, OutcomeKind, Rendered, UNEXPECTED_ERROR, format_value};
pub use state::{Entry, FormState};
pub use validate::validate_entry;
