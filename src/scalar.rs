use std::fmt::Display;

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::symbolic::RationalFunction;

/// Input value that is either a known number or a named unknown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scalar {
    Concrete(BigRational),
    Symbol(String),
}

impl Scalar {
    pub fn integer(value: i64) -> Self {
        Scalar::Concrete(BigRational::from_integer(BigInt::from(value)))
    }

    /// # Panics
    /// Panics when `denominator` is zero.
    pub fn ratio(numerator: i64, denominator: i64) -> Self {
        Scalar::Concrete(BigRational::new(BigInt::from(numerator), BigInt::from(denominator)))
    }

    pub fn symbol(name: &str) -> Self {
        Scalar::Symbol(name.to_string())
    }

    pub fn is_symbol(&self) -> bool {
        matches!(self, Scalar::Symbol(_))
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Scalar::integer(value)
    }
}

impl From<BigRational> for Scalar {
    fn from(value: BigRational) -> Self {
        Scalar::Concrete(value)
    }
}

impl From<&str> for Scalar {
    fn from(name: &str) -> Self {
        Scalar::symbol(name)
    }
}

impl From<Scalar> for RationalFunction {
    fn from(value: Scalar) -> Self {
        match value {
            Scalar::Concrete(number) => RationalFunction::constant(number),
            Scalar::Symbol(name) => RationalFunction::variable(&name),
        }
    }
}

impl From<&Scalar> for RationalFunction {
    fn from(value: &Scalar) -> Self {
        RationalFunction::from(value.clone())
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Concrete(number) => write!(f, "{}", number),
            Scalar::Symbol(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversions() {
        assert_eq!(Scalar::from(3), Scalar::integer(3));
        assert_eq!(Scalar::from("x0"), Scalar::symbol("x0"));
        assert!(Scalar::from("x0").is_symbol());
        assert!(!Scalar::ratio(1, 2).is_symbol());
        assert_eq!(Scalar::ratio(2, 4), Scalar::ratio(1, 2));
    }

    #[test]
    fn into_rational_function() {
        let concrete = RationalFunction::from(Scalar::ratio(-3, 2));
        let expected = BigRational::new(BigInt::from(-3), BigInt::from(2));
        assert_eq!(concrete.constant_value(), Some(expected));

        let symbol = RationalFunction::from(&Scalar::symbol("y2"));
        assert_eq!(symbol, RationalFunction::variable("y2"));
        assert_eq!(symbol.to_string(), "y2");
    }

    #[test]
    fn display() {
        assert_eq!(Scalar::ratio(-3, 2).to_string(), "-3/2");
        assert_eq!(Scalar::symbol("x1").to_string(), "x1");
    }
}
