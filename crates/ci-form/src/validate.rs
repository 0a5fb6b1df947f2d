//! Per-field input rules.
//!
//! - principal, time, amount: positive number
//! - rate: non-negative number
//! - frequency: positive whole number

use ci_core::{Field, Real, is_whole};

use crate::error::ValidationError;
use crate::state::Entry;

/// Check one entry against the rule for `field` and return its number.
pub fn validate_entry(field: Field, entry: &Entry) -> Result<Real, ValidationError> {
    let value = match entry {
        Entry::Empty => return Err(ValidationError::Missing { field }),
        Entry::Text(text) => {
            return Err(ValidationError::NotANumber {
                field,
                text: text.clone(),
            });
        }
        Entry::Number(v) => *v,
    };

    if !value.is_finite() {
        return Err(ValidationError::NotANumber {
            field,
            text: value.to_string(),
        });
    }

    match field {
        Field::Principal | Field::Time | Field::Amount => {
            if value > 0.0 {
                Ok(value)
            } else {
                Err(ValidationError::NotPositive { field })
            }
        }
        Field::Rate => {
            if value >= 0.0 {
                Ok(value)
            } else {
                Err(ValidationError::Negative { field })
            }
        }
        Field::Frequency => {
            if value > 0.0 && is_whole(value) {
                Ok(value)
            } else {
                Err(ValidationError::NotPositiveInteger { field })
            }
        }
    }
}
