/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Convert a percentage (5.0 for 5%) to a decimal fraction (0.05).
#[inline]
pub fn percent_to_decimal(percent: Real) -> Real {
    percent / 100.0
}

/// Convert a decimal fraction back to a percentage.
#[inline]
pub fn decimal_to_percent(decimal: Real) -> Real {
    decimal * 100.0
}

/// True when `v` is finite and has no fractional part.
pub fn is_whole(v: Real) -> bool {
    v.is_finite() && v.fract() == 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn percent_conversions() {
        assert_eq!(percent_to_decimal(5.0), 0.05);
        assert!(nearly_equal(
            decimal_to_percent(0.0725),
            7.25,
            Tolerances::default()
        ));
    }

    #[test]
    fn whole_numbers() {
        assert!(is_whole(12.0));
        assert!(is_whole(-3.0));
        assert!(!is_whole(12.5));
        assert!(!is_whole(Real::NAN));
        assert!(!is_whole(Real::INFINITY));
    }
}
