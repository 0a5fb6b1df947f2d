use ci_core::{Field, FieldValues};
use ci_solver::{SolveError, Solution, solve, solve_amount, solve_rate, solve_time};

fn values(entries: &[(Field, f64)]) -> FieldValues {
    entries.iter().copied().collect()
}

#[test]
fn monthly_compounding_reference_amount() {
    let a = solve_amount(1000.0, 5.0, 1.0, 12.0).unwrap();
    assert!((a - 1051.16).abs() < 0.005, "got {a}");
}

#[test]
fn reference_rate_recovers_five_percent() {
    let r = solve_rate(1051.16, 1000.0, 1.0, 12.0).unwrap();
    assert!((r - 5.0).abs() < 1e-3, "got {r}");
}

#[test]
fn equal_amount_means_zero_time() {
    assert_eq!(solve_time(1000.0, 1000.0, 5.0, 12.0).unwrap(), 0.0);
}

#[test]
fn zero_rate_without_growth_path_is_rejected() {
    let err = solve_time(1000.0, 1200.0, 0.0, 12.0).unwrap_err();
    assert!(matches!(err, SolveError::DomainViolation { .. }));
}

#[test]
fn negative_principal_is_invalid_input() {
    let err = solve_amount(-5.0, 5.0, 1.0, 12.0).unwrap_err();
    assert!(matches!(
        err,
        SolveError::InvalidInput {
            field: Field::Principal,
            ..
        }
    ));
}

#[test]
fn dispatch_by_target() {
    let knowns = values(&[
        (Field::Principal, 1000.0),
        (Field::Rate, 5.0),
        (Field::Time, 1.0),
        (Field::Frequency, 12.0),
    ]);
    let amount = solve(Field::Amount, &knowns).unwrap();
    let direct = solve_amount(1000.0, 5.0, 1.0, 12.0).unwrap();
    assert_eq!(amount, Solution::Value(direct));

    let knowns = values(&[
        (Field::Principal, 1000.0),
        (Field::Rate, 5.0),
        (Field::Time, 1.0),
        (Field::Amount, direct),
    ]);
    let frequency = solve(Field::Frequency, &knowns).unwrap();
    assert!(frequency.advisory().is_some());
    assert!(frequency.into_value(Field::Frequency).is_err());
}

#[test]
fn repeated_calls_are_bit_identical() {
    let knowns = values(&[
        (Field::Amount, 2500.0),
        (Field::Principal, 1000.0),
        (Field::Rate, 7.25),
        (Field::Frequency, 4.0),
    ]);
    let first = solve(Field::Time, &knowns).unwrap().value().unwrap();
    let second = solve(Field::Time, &knowns).unwrap().value().unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}
