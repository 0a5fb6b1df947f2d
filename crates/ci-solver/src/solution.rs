use ci_core::{Field, Real};

use crate::error::{SolveError, SolveResult};

/// Successful outcome of a solver call.
#[derive(Debug, Clone, PartialEq)]
pub enum Solution {
    /// The solved-for quantity.
    Value(Real),
    /// The computation is intentionally unsupported; the message says what to
    /// do instead.
    Advisory(String),
}

impl Solution {
    pub fn value(&self) -> Option<Real> {
        match self {
            Solution::Value(v) => Some(*v),
            Solution::Advisory(_) => None,
        }
    }

    pub fn advisory(&self) -> Option<&str> {
        match self {
            Solution::Value(_) => None,
            Solution::Advisory(msg) => Some(msg),
        }
    }

    /// Demand a number, turning an advisory into an `Unsupported` error.
    pub fn into_value(self, field: Field) -> SolveResult<Real> {
        match self {
            Solution::Value(v) => Ok(v),
            Solution::Advisory(_) => Err(SolveError::Unsupported {
                what: format!("{field} has no closed-form solution"),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let v = Solution::Value(3.5);
        assert_eq!(v.value(), Some(3.5));
        assert_eq!(v.advisory(), None);

        let a = Solution::Advisory("try something else".into());
        assert_eq!(a.value(), None);
        assert_eq!(a.advisory(), Some("try something else"));
    }

    #[test]
    fn advisory_into_value_is_unsupported() {
        let err = Solution::Advisory("no".into())
            .into_value(Field::Frequency)
            .unwrap_err();
        assert!(matches!(err, SolveError::Unsupported { .. }));
        assert!(err.to_string().contains("Compounding Frequency"));
    }
}
