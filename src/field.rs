use std::{
    fmt::{Debug, Display},
    ops::{Add, Div, Mul, Neg, Sub},
};

use num_rational::BigRational;
use num_traits::{One, Zero};

/// Relative tolerance for `f64`: a value is zero when its magnitude is below this
/// fraction of the scale it is compared against.
pub const FLOAT_TOLERANCE: f64 = 1e-12;

/// Algebra the interpolation system is solved over.
///
/// Exact fields ([BigRational], [crate::RationalFunction]) give exact solutions,
/// `f64` gives a floating point approximation with partial pivoting.
pub trait Field:
    Clone
    + PartialEq
    + Debug
    + Display
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + 'static
{
    /// Exact fields are eliminated fraction-free, so intermediate entries stay
    /// polynomial in the inputs instead of growing into nested quotients.
    const EXACT: bool = false;

    /// Whether the value counts as zero on a unit scale.
    fn is_negligible(&self) -> bool;

    /// Size used to build the scale of a matrix column or right-hand side.
    fn magnitude(&self) -> f64 {
        0.0
    }

    /// Whether the value counts as zero next to entries of magnitude up to `scale`.
    /// Exact fields ignore the scale.
    fn is_negligible_against(&self, _scale: f64) -> bool {
        self.is_negligible()
    }

    /// Pivot preference, rows with higher weight are chosen first.
    fn pivot_weight(&self) -> f64 {
        0.0
    }

    /// Free unknown called `name`, when the field can express one.
    fn symbol(_name: &str) -> Option<Self> {
        None
    }
}

impl Field for f64 {
    fn is_negligible(&self) -> bool {
        self.is_negligible_against(1.0)
    }

    fn magnitude(&self) -> f64 {
        self.abs()
    }

    fn is_negligible_against(&self, scale: f64) -> bool {
        self.abs() <= FLOAT_TOLERANCE * scale
    }

    fn pivot_weight(&self) -> f64 {
        self.abs()
    }
}

impl Field for BigRational {
    const EXACT: bool = true;

    fn is_negligible(&self) -> bool {
        self.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;

    #[test]
    fn float_tolerance() {
        assert!(1e-13_f64.is_negligible());
        assert!((-1e-13_f64).is_negligible());
        assert!(!1e-6_f64.is_negligible());
        assert_eq!(f64::symbol("a0"), None);
    }

    #[test]
    fn float_tolerance_follows_scale() {
        assert!(!1e-13_f64.is_negligible_against(3e-13));
        assert!(!1e-14_f64.is_negligible_against(4e-14));
        assert!(1e-3_f64.is_negligible_against(1e12));
        assert!(0.0_f64.is_negligible_against(0.0));
        assert!(!f64::EXACT);
    }

    #[test]
    fn float_pivot_prefers_magnitude() {
        assert!((-4.0_f64).pivot_weight() > 2.0_f64.pivot_weight());
    }

    #[test]
    fn rational_is_exact() {
        let third = BigRational::new(BigInt::from(1), BigInt::from(3));
        let almost_zero = third.clone() - third.clone();

        assert!(almost_zero.is_negligible());
        assert!(!third.is_negligible());
        assert_eq!(third.pivot_weight(), (-third.clone()).pivot_weight());
        assert_eq!(BigRational::symbol("x0"), None);
        assert!(BigRational::EXACT);
        assert!(!third.is_negligible_against(1e30));
    }
}
