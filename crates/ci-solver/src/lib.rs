//! ci-solver: closed-form solvers for the compound interest equation.
//!
//! `A = P * (1 + r/n)^(n*T)` with `r = R / 100`.
//!
//! Four of the five variables have an algebraic inverse and are solved
//! directly. The compounding frequency cannot be isolated in closed form, so
//! asking for it yields an advisory [`Solution`] instead of a number.
//!
//! Solvers are pure functions: identical inputs give bit-identical outputs.

pub mod closed_form;
pub mod dispatch;
pub mod error;
pub mod solution;

pub use closed_form::{
    FREQUENCY_ADVISORY, solve_amount, solve_frequency, solve_principal, solve_rate, solve_time,
};
pub use dispatch::{SolverFn, Unknown, solve, solver_for};
pub use error::{SolveError, SolveResult};
pub use solution::Solution;
