//! Dispatch from "which field is unknown" to the matching solver.

use ci_core::{Field, FieldValues, Real};

use crate::closed_form::{solve_amount, solve_frequency, solve_principal, solve_rate, solve_time};
use crate::error::{SolveError, SolveResult};
use crate::solution::Solution;

/// Signature shared by every entry in the solver table.
pub type SolverFn = fn(&FieldValues) -> SolveResult<Solution>;

/// The unknown field together with the four knowns, in each solver's
/// parameter order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unknown {
    Principal {
        amount: Real,
        rate_pct: Real,
        time: Real,
        frequency: Real,
    },
    Rate {
        amount: Real,
        principal: Real,
        time: Real,
        frequency: Real,
    },
    Time {
        amount: Real,
        principal: Real,
        rate_pct: Real,
        frequency: Real,
    },
    Frequency {
        amount: Real,
        principal: Real,
        rate_pct: Real,
        time: Real,
    },
    Amount {
        principal: Real,
        rate_pct: Real,
        time: Real,
        frequency: Real,
    },
}

fn known(values: &FieldValues, field: Field) -> SolveResult<Real> {
    values
        .get(field)
        .ok_or_else(|| SolveError::invalid(field, "is required"))
}

impl Unknown {
    /// Pick the knowns for `target` out of `values`.
    ///
    /// Any value stored for `target` itself is ignored.
    pub fn from_values(target: Field, values: &FieldValues) -> SolveResult<Self> {
        let p = || known(values, Field::Principal);
        let r = || known(values, Field::Rate);
        let t = || known(values, Field::Time);
        let n = || known(values, Field::Frequency);
        let a = || known(values, Field::Amount);

        Ok(match target {
            Field::Principal => Unknown::Principal {
                amount: a()?,
                rate_pct: r()?,
                time: t()?,
                frequency: n()?,
            },
            Field::Rate => Unknown::Rate {
                amount: a()?,
                principal: p()?,
                time: t()?,
                frequency: n()?,
            },
            Field::Time => Unknown::Time {
                amount: a()?,
                principal: p()?,
                rate_pct: r()?,
                frequency: n()?,
            },
            Field::Frequency => Unknown::Frequency {
                amount: a()?,
                principal: p()?,
                rate_pct: r()?,
                time: t()?,
            },
            Field::Amount => Unknown::Amount {
                principal: p()?,
                rate_pct: r()?,
                time: t()?,
                frequency: n()?,
            },
        })
    }

    pub fn target(&self) -> Field {
        match self {
            Unknown::Principal { .. } => Field::Principal,
            Unknown::Rate { .. } => Field::Rate,
            Unknown::Time { .. } => Field::Time,
            Unknown::Frequency { .. } => Field::Frequency,
            Unknown::Amount { .. } => Field::Amount,
        }
    }

    pub fn solve(&self) -> SolveResult<Solution> {
        match *self {
            Unknown::Principal {
                amount,
                rate_pct,
                time,
                frequency,
            } => solve_principal(amount, rate_pct, time, frequency).map(Solution::Value),
            Unknown::Rate {
                amount,
                principal,
                time,
                frequency,
            } => solve_rate(amount, principal, time, frequency).map(Solution::Value),
            Unknown::Time {
                amount,
                principal,
                rate_pct,
                frequency,
            } => solve_time(amount, principal, rate_pct, frequency).map(Solution::Value),
            Unknown::Frequency {
                amount,
                principal,
                rate_pct,
                time,
            } => Ok(solve_frequency(amount, principal, rate_pct, time)),
            Unknown::Amount {
                principal,
                rate_pct,
                time,
                frequency,
            } => solve_amount(principal, rate_pct, time, frequency).map(Solution::Value),
        }
    }
}

fn principal_entry(values: &FieldValues) -> SolveResult<Solution> {
    Unknown::from_values(Field::Principal, values)?.solve()
}

fn rate_entry(values: &FieldValues) -> SolveResult<Solution> {
    Unknown::from_values(Field::Rate, values)?.solve()
}

fn time_entry(values: &FieldValues) -> SolveResult<Solution> {
    Unknown::from_values(Field::Time, values)?.solve()
}

fn frequency_entry(values: &FieldValues) -> SolveResult<Solution> {
    Unknown::from_values(Field::Frequency, values)?.solve()
}

fn amount_entry(values: &FieldValues) -> SolveResult<Solution> {
    Unknown::from_values(Field::Amount, values)?.solve()
}

static SOLVERS: [(Field, SolverFn); 5] = [
    (Field::Principal, principal_entry),
    (Field::Rate, rate_entry),
    (Field::Time, time_entry),
    (Field::Frequency, frequency_entry),
    (Field::Amount, amount_entry),
];

/// Look up the solver registered for `target`.
pub fn solver_for(target: Field) -> Option<SolverFn> {
    SOLVERS
        .iter()
        .find(|(field, _)| *field == target)
        .map(|(_, solver)| *solver)
}

/// Solve for `target` using the remaining entries of `values`.
pub fn solve(target: Field, values: &FieldValues) -> SolveResult<Solution> {
    let solver = solver_for(target).ok_or_else(|| SolveError::Unsupported {
        what: format!("no solver registered for {target}"),
    })?;
    let outcome = solver(values);
    match &outcome {
        Ok(Solution::Value(v)) => tracing::debug!(target_field = target.key(), value = *v, "solved"),
        Ok(Solution::Advisory(_)) => tracing::debug!(target_field = target.key(), "advisory"),
        Err(err) => tracing::debug!(target_field = target.key(), error = %err, "solve failed"),
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use ci_core::ALL_FIELDS;

    fn sample() -> FieldValues {
        FieldValues::new()
            .with(Field::Principal, 1000.0)
            .with(Field::Rate, 5.0)
            .with(Field::Time, 1.0)
            .with(Field::Frequency, 12.0)
            .with(Field::Amount, 1051.16)
    }

    #[test]
    fn every_field_has_a_solver() {
        for field in ALL_FIELDS {
            assert!(solver_for(field).is_some(), "missing solver for {field:?}");
        }
    }

    #[test]
    fn from_values_orders_parameters() {
        let unknown = Unknown::from_values(Field::Rate, &sample()).unwrap();
        assert_eq!(
            unknown,
            Unknown::Rate {
                amount: 1051.16,
                principal: 1000.0,
                time: 1.0,
                frequency: 12.0,
            }
        );
        assert_eq!(unknown.target(), Field::Rate);
    }

    #[test]
    fn from_values_ignores_target_value() {
        let values = sample().with(Field::Amount, -1.0);
        let unknown = Unknown::from_values(Field::Amount, &values).unwrap();
        assert!(unknown.solve().is_ok());
    }

    #[test]
    fn missing_known_is_invalid_input() {
        let mut values = sample();
        values.remove(Field::Time);
        let err = solve(Field::Amount, &values).unwrap_err();
        assert_eq!(
            err,
            SolveError::InvalidInput {
                field: Field::Time,
                requirement: "is required",
            }
        );
    }

    #[test]
    fn table_agrees_with_direct_solve() {
        let values = sample();
        for field in ALL_FIELDS {
            let via_table = solve(field, &values);
            let direct = Unknown::from_values(field, &values).and_then(|u| u.solve());
            assert_eq!(via_table, direct, "mismatch for {field:?}");
        }
    }

    #[test]
    fn frequency_dispatch_is_advisory() {
        let outcome = solve(Field::Frequency, &sample()).unwrap();
        assert!(outcome.advisory().is_some());
    }
}
