//! ci-core: shared foundation for the compound interest workspace.
//!
//! Contains:
//! - field (the five quantities of A = P(1 + r/n)^(nT) and their display metadata)
//! - values (a field -> number map used to hand knowns to the solvers)
//! - frequency (named compounding presets)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod field;
pub mod frequency;
pub mod numeric;
pub mod values;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use field::*;
pub use frequency::*;
pub use numeric::*;
pub use values::FieldValues;
