//! Sparse multivariate polynomial over Q.
//!
//! Terms live in a `BTreeMap` keyed by [Monomial] and never hold a zero coefficient,
//! so two polynomials are equal exactly when their maps are equal.

use std::{
    collections::{BTreeMap, BTreeSet, HashMap},
    fmt::Display,
};

use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::monomial::Monomial;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultiPoly {
    terms: BTreeMap<Monomial, BigRational>,
}

impl MultiPoly {
    pub fn zero() -> Self {
        MultiPoly { terms: BTreeMap::new() }
    }

    pub fn one() -> Self {
        Self::constant(BigRational::one())
    }

    pub fn constant(value: BigRational) -> Self {
        Self::term(Monomial::one(), value)
    }

    pub fn symbol(name: &str) -> Self {
        Self::term(Monomial::symbol(name), BigRational::one())
    }

    pub fn term(monomial: Monomial, coefficient: BigRational) -> Self {
        let mut terms = BTreeMap::new();
        if !coefficient.is_zero() {
            terms.insert(monomial, coefficient);
        }
        MultiPoly { terms }
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_one(&self) -> bool {
        self.constant_value().is_some_and(|value| value.is_one())
    }

    /// Value of a polynomial without symbols.
    pub fn constant_value(&self) -> Option<BigRational> {
        match self.terms.len() {
            0 => Some(BigRational::zero()),
            1 => self.terms.get(&Monomial::one()).cloned(),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Greatest term in the lexicographic monomial order.
    pub fn leading_term(&self) -> Option<(&Monomial, &BigRational)> {
        self.terms.last_key_value()
    }

    pub fn symbols(&self) -> BTreeSet<String> {
        self.terms
            .keys()
            .flat_map(|monomial| monomial.powers().map(|(name, _)| name.to_string()))
            .collect()
    }

    pub fn add(&self, other: &MultiPoly) -> MultiPoly {
        let mut terms = self.terms.clone();
        for (monomial, coefficient) in &other.terms {
            accumulate(&mut terms, monomial.clone(), coefficient.clone());
        }
        MultiPoly { terms }
    }

    pub fn sub(&self, other: &MultiPoly) -> MultiPoly {
        self.add(&other.neg())
    }

    pub fn neg(&self) -> MultiPoly {
        let terms = self
            .terms
            .iter()
            .map(|(monomial, coefficient)| (monomial.clone(), -coefficient))
            .collect();
        MultiPoly { terms }
    }

    pub fn mul(&self, other: &MultiPoly) -> MultiPoly {
        let mut terms = BTreeMap::new();
        for (m0, c0) in &self.terms {
            for (m1, c1) in &other.terms {
                accumulate(&mut terms, m0.mul(m1), c0 * c1);
            }
        }
        MultiPoly { terms }
    }

    pub fn mul_term(&self, monomial: &Monomial, coefficient: &BigRational) -> MultiPoly {
        if coefficient.is_zero() {
            return MultiPoly::zero();
        }
        let terms = self
            .terms
            .iter()
            .map(|(m, c)| (m.mul(monomial), c * coefficient))
            .collect();
        MultiPoly { terms }
    }

    pub fn scale(&self, factor: &BigRational) -> MultiPoly {
        self.mul_term(&Monomial::one(), factor)
    }

    /// Largest monomial dividing every term.
    pub fn monomial_content(&self) -> Monomial {
        let mut monomials = self.terms.keys();
        match monomials.next() {
            Some(first) => monomials.fold(first.clone(), |gcd, m| gcd.gcd(m)),
            None => Monomial::one(),
        }
    }

    pub fn div_monomial(&self, monomial: &Monomial) -> Option<MultiPoly> {
        let mut terms = BTreeMap::new();
        for (m, c) in &self.terms {
            terms.insert(m.checked_div(monomial)?, c.clone());
        }
        Some(MultiPoly { terms })
    }

    /// Quotient `self / divisor` when the division leaves no remainder.
    ///
    /// Any factor's leading monomial divides the product's leading monomial,
    /// so a leading term that cannot be reduced proves the division is not exact.
    pub fn div_exact(&self, divisor: &MultiPoly) -> Option<MultiPoly> {
        let (divisor_monomial, divisor_coefficient) = divisor.leading_term()?;
        let mut remainder = self.clone();
        let mut quotient = MultiPoly::zero();

        while let Some((monomial, coefficient)) = remainder.leading_term() {
            let factor_monomial = monomial.checked_div(divisor_monomial)?;
            let factor_coefficient = coefficient / divisor_coefficient;

            for (m, c) in divisor.mul_term(&factor_monomial, &factor_coefficient).terms {
                accumulate(&mut remainder.terms, m, -c);
            }
            accumulate(&mut quotient.terms, factor_monomial, factor_coefficient);
        }
        Some(quotient)
    }

    /// Value under `bindings`, `None` when a symbol is left unbound.
    pub fn evaluate(&self, bindings: &HashMap<String, BigRational>) -> Option<BigRational> {
        let mut result = BigRational::zero();
        for (monomial, coefficient) in &self.terms {
            let mut term = coefficient.clone();
            for (name, power) in monomial.powers() {
                let value = bindings.get(name)?;
                for _ in 0..power {
                    term *= value;
                }
            }
            result += term;
        }
        Some(result)
    }
}

fn accumulate(
    terms: &mut BTreeMap<Monomial, BigRational>,
    monomial: Monomial,
    coefficient: BigRational,
) {
    let sum = match terms.remove(&monomial) {
        Some(existing) => existing + coefficient,
        None => coefficient,
    };
    if !sum.is_zero() {
        terms.insert(monomial, sum);
    }
}

impl Display for MultiPoly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }
        for (index, (monomial, coefficient)) in self.terms.iter().rev().enumerate() {
            let magnitude = coefficient.abs();
            if index == 0 {
                if coefficient.is_negative() {
                    write!(f, "-")?;
                }
            } else if coefficient.is_negative() {
                write!(f, " - ")?;
            } else {
                write!(f, " + ")?;
            }

            if monomial.is_one() {
                write!(f, "{}", magnitude)?;
            } else if magnitude.is_one() {
                write!(f, "{}", monomial)?;
            } else {
                write!(f, "{}*{}", magnitude, monomial)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;

    fn int(value: i64) -> BigRational {
        BigRational::from_integer(BigInt::from(value))
    }

    fn x(name: &str) -> MultiPoly {
        MultiPoly::symbol(name)
    }

    #[test]
    fn like_terms_combine() {
        let p = x("x0").add(&x("x1")).add(&x("x0"));
        assert_eq!(p.len(), 2);
        assert!(p.sub(&p).is_zero());
        assert_eq!(p.to_string(), "2*x0 + x1");
    }

    #[test]
    fn difference_of_squares() {
        // (x0 - x1) * (x0 + x1) = x0^2 - x1^2
        let product = x("x0").sub(&x("x1")).mul(&x("x0").add(&x("x1")));
        let expected = x("x0").mul(&x("x0")).sub(&x("x1").mul(&x("x1")));

        assert_eq!(product, expected);
        assert_eq!(product.to_string(), "x0^2 - x1^2");
    }

    #[test]
    fn exact_division() {
        let squares = x("x0").mul(&x("x0")).sub(&x("x1").mul(&x("x1")));
        let difference = x("x0").sub(&x("x1"));

        assert_eq!(squares.div_exact(&difference), Some(x("x0").add(&x("x1"))));
        assert_eq!(difference.div_exact(&squares), None);
        assert_eq!(x("x0").add(&MultiPoly::one()).div_exact(&x("x0")), None);
        assert_eq!(squares.div_exact(&MultiPoly::zero()), None);
    }

    #[test]
    fn monomial_content() {
        let p = x("x0").mul(&x("x0")).mul(&x("y1")).add(&x("x0").scale(&int(3)));
        assert_eq!(p.monomial_content(), Monomial::symbol("x0"));
        assert_eq!(
            p.div_monomial(&Monomial::symbol("x0")),
            Some(x("x0").mul(&x("y1")).add(&MultiPoly::constant(int(3))))
        );
    }

    #[test]
    fn evaluate() {
        // 2*x0^2 - y0 + 1/2
        let p = x("x0")
            .mul(&x("x0"))
            .scale(&int(2))
            .sub(&x("y0"))
            .add(&MultiPoly::constant(BigRational::new(BigInt::from(1), BigInt::from(2))));
        let bindings = HashMap::from([("x0".to_string(), int(3)), ("y0".to_string(), int(-1))]);

        let expected = BigRational::new(BigInt::from(39), BigInt::from(2));
        assert_eq!(p.evaluate(&bindings), Some(expected));
        assert_eq!(p.evaluate(&HashMap::new()), None);
        assert_eq!(p.symbols(), BTreeSet::from(["x0".to_string(), "y0".to_string()]));
    }

    #[test]
    fn constants() {
        assert_eq!(MultiPoly::zero().constant_value(), Some(int(0)));
        assert_eq!(MultiPoly::constant(int(-7)).constant_value(), Some(int(-7)));
        assert_eq!(x("a0").constant_value(), None);
        assert!(MultiPoly::one().is_one());
        assert_eq!(MultiPoly::constant(int(-7)).to_string(), "-7");
        assert_eq!(MultiPoly::constant(int(0)), MultiPoly::zero());
    }
}
