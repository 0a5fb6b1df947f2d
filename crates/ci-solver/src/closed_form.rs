//! Closed-form inverses of `A = P * (1 + r/n)^(n*T)`.
//!
//! Rates are taken and returned as percentages. No rounding happens here;
//! formatting is the caller's concern.

use ci_core::{Field, Real, decimal_to_percent, percent_to_decimal};

use crate::error::{SolveError, SolveResult};
use crate::solution::Solution;

/// Message returned when the compounding frequency is requested.
pub const FREQUENCY_ADVISORY: &str = "Compounding frequency cannot be isolated algebraically \
     from A = P(1 + r/n)^(nT). Try solving for Final Amount with different \
     frequencies instead.";

fn require_positive(value: Real, field: Field) -> SolveResult<()> {
    // NaN fails the comparison and is rejected with the rest.
    if value > 0.0 {
        Ok(())
    } else {
        Err(SolveError::invalid(field, "must be positive"))
    }
}

fn require_non_negative(value: Real, field: Field) -> SolveResult<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SolveError::invalid(field, "must not be negative"))
    }
}

/// Growth factor `(1 + r/n)^(n*T)`.
fn growth_factor(rate_pct: Real, time: Real, frequency: Real) -> Real {
    let r = percent_to_decimal(rate_pct);
    (1.0 + r / frequency).powf(frequency * time)
}

/// Final amount from principal, annual rate (%), years and periods per year.
pub fn solve_amount(
    principal: Real,
    rate_pct: Real,
    time: Real,
    frequency: Real,
) -> SolveResult<Real> {
    require_positive(principal, Field::Principal)?;
    require_non_negative(rate_pct, Field::Rate)?;
    require_positive(time, Field::Time)?;
    require_positive(frequency, Field::Frequency)?;

    Ok(principal * growth_factor(rate_pct, time, frequency))
}

/// Principal needed to reach `amount`.
pub fn solve_principal(
    amount: Real,
    rate_pct: Real,
    time: Real,
    frequency: Real,
) -> SolveResult<Real> {
    require_positive(amount, Field::Amount)?;
    require_non_negative(rate_pct, Field::Rate)?;
    require_positive(time, Field::Time)?;
    require_positive(frequency, Field::Frequency)?;

    let principal = amount / growth_factor(rate_pct, time, frequency);
    if !(principal.is_finite() && principal > 0.0) {
        return Err(SolveError::NumericDomain {
            what: "principal calculation produced a non-positive or non-finite result",
        });
    }
    Ok(principal)
}

/// Annual rate (%) that grows `principal` into `amount`.
pub fn solve_rate(amount: Real, principal: Real, time: Real, frequency: Real) -> SolveResult<Real> {
    require_positive(amount, Field::Amount)?;
    require_positive(principal, Field::Principal)?;
    require_positive(time, Field::Time)?;
    require_positive(frequency, Field::Frequency)?;
    if amount < principal {
        return Err(SolveError::DomainViolation {
            what: "final amount must be at least the principal to solve for a rate",
        });
    }

    let base = amount / principal;
    let exponent = 1.0 / (frequency * time);
    let term = base.powf(exponent);
    let rate_pct = decimal_to_percent(frequency * (term - 1.0));

    if !rate_pct.is_finite() {
        return Err(SolveError::NumericDomain {
            what: "rate calculation produced a non-finite result",
        });
    }
    Ok(rate_pct)
}

/// Years needed for `principal` to grow into `amount`.
pub fn solve_time(
    amount: Real,
    principal: Real,
    rate_pct: Real,
    frequency: Real,
) -> SolveResult<Real> {
    require_positive(amount, Field::Amount)?;
    require_positive(principal, Field::Principal)?;
    require_non_negative(rate_pct, Field::Rate)?;
    require_positive(frequency, Field::Frequency)?;

    if amount == principal {
        if rate_pct > 0.0 {
            return Ok(0.0);
        }
        return Err(SolveError::DomainViolation {
            what: "time is undetermined when the rate is zero and the amount equals the principal",
        });
    }
    if rate_pct == 0.0 {
        return Err(SolveError::DomainViolation {
            what: "the amount cannot change when the rate is zero",
        });
    }
    if amount < principal {
        return Err(SolveError::DomainViolation {
            what: "final amount cannot be less than the principal with a positive rate",
        });
    }

    let ratio = amount / principal;
    if ratio <= 0.0 {
        return Err(SolveError::NumericDomain {
            what: "amount to principal ratio must be positive",
        });
    }
    let base = 1.0 + percent_to_decimal(rate_pct) / frequency;
    if base <= 0.0 {
        return Err(SolveError::NumericDomain {
            what: "periodic growth factor must be positive",
        });
    }
    let denominator = frequency * base.ln();
    if denominator == 0.0 {
        return Err(SolveError::NumericDomain {
            what: "time formula denominator is zero",
        });
    }

    let time = ratio.ln() / denominator;
    if !time.is_finite() {
        return Err(SolveError::NumericDomain {
            what: "time calculation produced a non-finite result",
        });
    }
    Ok(time)
}

/// Compounding frequency is not solvable in closed form; always advisory.
pub fn solve_frequency(_amount: Real, _principal: Real, _rate_pct: Real, _time: Real) -> Solution {
    Solution::Advisory(FREQUENCY_ADVISORY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Real, expected: Real, tol: Real) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected} +/- {tol}, got {actual}"
        );
    }

    #[test]
    fn amount_monthly_one_year() {
        let a = solve_amount(1000.0, 5.0, 1.0, 12.0).unwrap();
        assert_close(a, 1051.16, 0.005);
    }

    #[test]
    fn amount_with_zero_rate_is_principal() {
        assert_eq!(solve_amount(250.0, 0.0, 10.0, 4.0).unwrap(), 250.0);
    }

    #[test]
    fn amount_rejects_non_positive_principal() {
        let err = solve_amount(-5.0, 5.0, 1.0, 12.0).unwrap_err();
        assert_eq!(
            err,
            SolveError::InvalidInput {
                field: Field::Principal,
                requirement: "must be positive",
            }
        );
    }

    #[test]
    fn amount_checks_fields_in_order() {
        let err = solve_amount(1000.0, -1.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            SolveError::InvalidInput {
                field: Field::Rate,
                ..
            }
        ));
        let err = solve_amount(1000.0, 1.0, 2.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            SolveError::InvalidInput {
                field: Field::Frequency,
                ..
            }
        ));
    }

    #[test]
    fn amount_rejects_nan() {
        assert!(solve_amount(Real::NAN, 5.0, 1.0, 12.0).is_err());
    }

    #[test]
    fn principal_inverts_amount() {
        let p = solve_principal(1051.161_897_881_733, 5.0, 1.0, 12.0).unwrap();
        assert_close(p, 1000.0, 1e-9);
    }

    #[test]
    fn principal_rejects_zero_time() {
        let err = solve_principal(1000.0, 5.0, 0.0, 12.0).unwrap_err();
        assert!(matches!(
            err,
            SolveError::InvalidInput {
                field: Field::Time,
                ..
            }
        ));
    }

    #[test]
    fn principal_rejects_overflowing_growth() {
        // (1 + 5/1000)^(1000 * 500) overflows to inf, leaving a zero principal.
        let err = solve_principal(1000.0, 500.0, 500.0, 1000.0).unwrap_err();
        assert!(matches!(err, SolveError::NumericDomain { .. }));
    }

    #[test]
    fn rate_from_monthly_growth() {
        let r = solve_rate(1051.16, 1000.0, 1.0, 12.0).unwrap();
        assert_close(r, 5.0, 1e-3);
    }

    #[test]
    fn rate_is_zero_when_amount_equals_principal() {
        assert_eq!(solve_rate(500.0, 500.0, 3.0, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn rate_rejects_shrinking_amount() {
        let err = solve_rate(900.0, 1000.0, 1.0, 12.0).unwrap_err();
        assert!(matches!(err, SolveError::DomainViolation { .. }));
    }

    #[test]
    fn rate_detects_overflow() {
        // base^(1/(nT)) overflows when nT is tiny and the ratio is huge.
        let err = solve_rate(1e300, 1e-300, 1e-3, 1.0).unwrap_err();
        assert!(matches!(err, SolveError::NumericDomain { .. }));
    }

    #[test]
    fn time_zero_when_amount_equals_principal() {
        assert_eq!(solve_time(1000.0, 1000.0, 5.0, 12.0).unwrap(), 0.0);
    }

    #[test]
    fn time_doubling_annual() {
        // 1.1^t = 2 -> t = ln 2 / ln 1.1
        let t = solve_time(2000.0, 1000.0, 10.0, 1.0).unwrap();
        assert_close(t, 2.0_f64.ln() / 1.1_f64.ln(), 1e-12);
    }

    #[test]
    fn time_zero_rate_shrinking_amount_is_domain_violation() {
        let err = solve_time(1000.0, 1200.0, 0.0, 12.0).unwrap_err();
        assert!(matches!(err, SolveError::DomainViolation { .. }));
    }

    #[test]
    fn time_zero_rate_growing_amount_is_domain_violation() {
        let err = solve_time(1200.0, 1000.0, 0.0, 12.0).unwrap_err();
        assert!(matches!(err, SolveError::DomainViolation { .. }));
    }

    #[test]
    fn time_zero_rate_equal_amounts_is_domain_violation() {
        let err = solve_time(1000.0, 1000.0, 0.0, 12.0).unwrap_err();
        assert!(matches!(err, SolveError::DomainViolation { .. }));
    }

    #[test]
    fn time_positive_rate_shrinking_amount_is_domain_violation() {
        let err = solve_time(900.0, 1000.0, 5.0, 12.0).unwrap_err();
        assert!(matches!(err, SolveError::DomainViolation { .. }));
    }

    #[test]
    fn time_rejects_negative_rate() {
        let err = solve_time(1200.0, 1000.0, -1.0, 12.0).unwrap_err();
        assert!(matches!(
            err,
            SolveError::InvalidInput {
                field: Field::Rate,
                ..
            }
        ));
    }

    #[test]
    fn time_denominator_underflow_is_numeric_error() {
        // 1 + tiny/n rounds to exactly 1.0, so ln(base) is zero.
        let err = solve_time(2000.0, 1000.0, 1e-300, 12.0).unwrap_err();
        assert!(matches!(err, SolveError::NumericDomain { .. }));
    }

    #[test]
    fn frequency_is_advisory() {
        let outcome = solve_frequency(1051.16, 1000.0, 5.0, 1.0);
        assert_eq!(outcome, Solution::Advisory(FREQUENCY_ADVISORY.to_string()));
        assert!(outcome.value().is_none());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use ci_core::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn principal_round_trips_through_amount(
            p in 0.01_f64..1.0e6,
            r in 0.0_f64..50.0,
            t in 0.01_f64..50.0,
            n in 1_u32..=365,
        ) {
            let n = n as f64;
            let a = solve_amount(p, r, t, n).unwrap();
            let back = solve_principal(a, r, t, n).unwrap();
            let tol = Tolerances { abs: 0.0, rel: 1e-9 };
            prop_assert!(nearly_equal(back, p, tol), "{} vs {}", back, p);
        }

        #[test]
        fn rate_round_trips_through_amount(
            p in 1.0_f64..1.0e5,
            r in 0.1_f64..30.0,
            t in 0.5_f64..30.0,
            n in 1_u32..=365,
        ) {
            let n = n as f64;
            let a = solve_amount(p, r, t, n).unwrap();
            let back = solve_rate(a, p, t, n).unwrap();
            let tol = Tolerances { abs: 1e-9, rel: 1e-6 };
            prop_assert!(nearly_equal(back, r, tol), "{} vs {}", back, r);
        }

        #[test]
        fn time_round_trips_through_amount(
            p in 1.0_f64..1.0e5,
            r in 0.1_f64..30.0,
            t in 0.5_f64..30.0,
            n in 1_u32..=365,
        ) {
            let n = n as f64;
            let a = solve_amount(p, r, t, n).unwrap();
            let back = solve_time(a, p, r, n).unwrap();
            let tol = Tolerances { abs: 1e-9, rel: 1e-6 };
            prop_assert!(nearly_equal(back, t, tol), "{} vs {}", back, t);
        }

        #[test]
        fn solvers_are_bit_identical_across_calls(
            p in 0.01_f64..1.0e6,
            r in 0.0_f64..50.0,
            t in 0.01_f64..50.0,
            n in 1_u32..=365,
        ) {
            let n = n as f64;
            let first = solve_amount(p, r, t, n).unwrap();
            let second = solve_amount(p, r, t, n).unwrap();
            prop_assert_eq!(first.to_bits(), second.to_bits());

            let first = solve_principal(first, r, t, n).unwrap();
            let second = solve_principal(second, r, t, n).unwrap();
            prop_assert_eq!(first.to_bits(), second.to_bits());
        }

        #[test]
        fn frequency_always_advises(
            a in 0.01_f64..1.0e6,
            p in 0.01_f64..1.0e6,
            r in 0.0_f64..50.0,
            t in 0.01_f64..50.0,
        ) {
            let outcome = solve_frequency(a, p, r, t);
            prop_assert!(outcome.advisory().is_some());
            prop_assert!(outcome.value().is_none());
        }
    }
}
