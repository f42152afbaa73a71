use std::{
    collections::{BTreeSet, HashMap},
    fmt::Display,
    ops::{Add, Div, Mul, Neg, Sub},
};

use num_rational::BigRational;
use num_traits::{One, Zero};

use super::multi_poly::MultiPoly;
use crate::field::Field;

/// Quotient of two multivariate polynomials, the symbolic [Field].
///
/// Kept normalized after every operation: a zero numerator has denominator `1`,
/// shared monomial factors and exact polynomial quotients are cancelled and
/// the denominator's leading coefficient is `1`. Full gcd cancellation is not
/// attempted, so equal values may print differently; equality compares
/// cross products and is exact.
#[derive(Debug, Clone)]
pub struct RationalFunction {
    numerator: MultiPoly,
    denominator: MultiPoly,
}

impl RationalFunction {
    /// # Panics
    /// Panics when `denominator` is the zero polynomial.
    pub fn new(numerator: MultiPoly, denominator: MultiPoly) -> Self {
        assert!(!denominator.is_zero(), "denominator == 0");
        Self::normalized(numerator, denominator)
    }

    pub fn constant(value: BigRational) -> Self {
        RationalFunction { numerator: MultiPoly::constant(value), denominator: MultiPoly::one() }
    }

    pub fn variable(name: &str) -> Self {
        RationalFunction { numerator: MultiPoly::symbol(name), denominator: MultiPoly::one() }
    }

    pub fn numerator(&self) -> &MultiPoly {
        &self.numerator
    }

    pub fn denominator(&self) -> &MultiPoly {
        &self.denominator
    }

    /// Value when no symbols remain.
    pub fn constant_value(&self) -> Option<BigRational> {
        let numerator = self.numerator.constant_value()?;
        let denominator = self.denominator.constant_value()?;
        Some(numerator / denominator)
    }

    pub fn symbols(&self) -> BTreeSet<String> {
        let mut symbols = self.numerator.symbols();
        symbols.extend(self.denominator.symbols());
        symbols
    }

    /// Value under `bindings`. `None` when a symbol is unbound or the denominator vanishes.
    pub fn evaluate(&self, bindings: &HashMap<String, BigRational>) -> Option<BigRational> {
        let denominator = self.denominator.evaluate(bindings)?;
        if denominator.is_zero() {
            return None;
        }
        Some(self.numerator.evaluate(bindings)? / denominator)
    }

    fn normalized(numerator: MultiPoly, denominator: MultiPoly) -> Self {
        if numerator.is_zero() {
            return Self::zero();
        }

        let content = numerator.monomial_content().gcd(&denominator.monomial_content());
        let (mut numerator, mut denominator) = if content.is_one() {
            (numerator, denominator)
        } else {
            match (numerator.div_monomial(&content), denominator.div_monomial(&content)) {
                (Some(n), Some(d)) => (n, d),
                _ => (numerator, denominator),
            }
        };

        if !denominator.is_one() {
            if let Some(quotient) = numerator.div_exact(&denominator) {
                numerator = quotient;
                denominator = MultiPoly::one();
            } else if let Some(quotient) = denominator.div_exact(&numerator) {
                numerator = MultiPoly::one();
                denominator = quotient;
            }
        }

        let leading = denominator
            .leading_term()
            .map(|(_, c)| c.clone())
            .unwrap_or_else(BigRational::one);
        if !leading.is_one() {
            let inverse = leading.recip();
            numerator = numerator.scale(&inverse);
            denominator = denominator.scale(&inverse);
        }

        RationalFunction { numerator, denominator }
    }
}

impl From<BigRational> for RationalFunction {
    fn from(value: BigRational) -> Self {
        Self::constant(value)
    }
}

impl From<MultiPoly> for RationalFunction {
    fn from(value: MultiPoly) -> Self {
        RationalFunction { numerator: value, denominator: MultiPoly::one() }
    }
}

impl PartialEq for RationalFunction {
    fn eq(&self, other: &Self) -> bool {
        self.numerator.mul(&other.denominator) == other.numerator.mul(&self.denominator)
    }
}

impl Add for RationalFunction {
    type Output = RationalFunction;

    fn add(self, rhs: Self) -> Self::Output {
        if self.denominator == rhs.denominator {
            return Self::normalized(self.numerator.add(&rhs.numerator), self.denominator);
        }
        Self::normalized(
            self.numerator.mul(&rhs.denominator).add(&rhs.numerator.mul(&self.denominator)),
            self.denominator.mul(&rhs.denominator),
        )
    }
}

impl Sub for RationalFunction {
    type Output = RationalFunction;

    fn sub(self, rhs: Self) -> Self::Output {
        self + (-rhs)
    }
}

impl Neg for RationalFunction {
    type Output = RationalFunction;

    fn neg(self) -> Self::Output {
        RationalFunction { numerator: self.numerator.neg(), denominator: self.denominator }
    }
}

impl Mul for RationalFunction {
    type Output = RationalFunction;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::normalized(self.numerator.mul(&rhs.numerator), self.denominator.mul(&rhs.denominator))
    }
}

impl Div for RationalFunction {
    type Output = RationalFunction;

    /// # Panics
    /// Panics when `rhs` is zero.
    fn div(self, rhs: Self) -> Self::Output {
        assert!(!rhs.numerator.is_zero(), "division by zero");
        Self::normalized(self.numerator.mul(&rhs.denominator), self.denominator.mul(&rhs.numerator))
    }
}

impl Zero for RationalFunction {
    fn zero() -> Self {
        RationalFunction { numerator: MultiPoly::zero(), denominator: MultiPoly::one() }
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for RationalFunction {
    fn one() -> Self {
        RationalFunction { numerator: MultiPoly::one(), denominator: MultiPoly::one() }
    }
}

impl Field for RationalFunction {
    const EXACT: bool = true;

    fn is_negligible(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Fewer terms keep intermediate expressions small.
    fn pivot_weight(&self) -> f64 {
        -((self.numerator.len() + self.denominator.len()) as f64)
    }

    fn symbol(name: &str) -> Option<Self> {
        Some(Self::variable(name))
    }
}

impl Display for RationalFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.denominator.is_one() {
            return write!(f, "{}", self.numerator);
        }
        let numerator = self.numerator.to_string();
        let numerator = if numerator.contains([' ', '/']) {
            format!("({})", numerator)
        } else {
            numerator
        };
        let denominator = self.denominator.to_string();
        let denominator = if denominator.contains([' ', '/', '*']) {
            format!("({})", denominator)
        } else {
            denominator
        };
        write!(f, "{}/{}", numerator, denominator)
    }
}
