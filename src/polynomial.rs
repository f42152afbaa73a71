use std::{collections::HashMap, fmt::Display};

use num_rational::BigRational;
use num_traits::ToPrimitive;

use crate::{field::Field, symbolic::RationalFunction};

pub const DEFAULT_VARIABLE: &str = "x";

/// Polynomial `a0 + a1*x + ... + a_{n-1}*x^(n-1)` stored by ascending power.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<F> {
    coefficients: Vec<F>,
    variable: String,
}

impl<F> Polynomial<F> {
    pub fn new(coefficients: Vec<F>) -> Self {
        Self::with_variable(coefficients, DEFAULT_VARIABLE)
    }

    pub fn with_variable(coefficients: Vec<F>, variable: &str) -> Self {
        Polynomial { coefficients, variable: variable.to_string() }
    }

    pub fn coefficients(&self) -> &[F] {
        &self.coefficients
    }

    pub fn into_coefficients(self) -> Vec<F> {
        self.coefficients
    }

    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Number of stored coefficients, including vanishing ones.
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    pub fn map_coefficients<G>(&self, f: impl FnMut(&F) -> G) -> Polynomial<G> {
        Polynomial {
            coefficients: self.coefficients.iter().map(f).collect(),
            variable: self.variable.clone(),
        }
    }
}

impl<F: Field> Polynomial<F> {
    pub fn evaluate(&self, x: &F) -> F {
        self.coefficients
            .iter()
            .rev()
            .fold(F::zero(), |result, c| result * x.clone() + c.clone())
    }

    /// Highest power with a non-negligible coefficient, `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.iter().rposition(|c| !c.is_negligible())
    }
}

impl Polynomial<RationalFunction> {
    /// Replaces every symbol in the coefficients by its value in `bindings`.
    /// Returns `None` if a symbol is unbound or a coefficient's denominator vanishes.
    pub fn bind(&self, bindings: &HashMap<String, BigRational>) -> Option<Polynomial<BigRational>> {
        let coefficients = self
            .coefficients
            .iter()
            .map(|c| c.evaluate(bindings))
            .collect::<Option<Vec<_>>>()?;
        Some(Polynomial::with_variable(coefficients, &self.variable))
    }
}

impl Polynomial<BigRational> {
    pub fn to_f64(&self) -> Polynomial<f64> {
        self.map_coefficients(|c| c.to_f64().unwrap_or(f64::NAN))
    }
}

/// Descending powers, e.g. `x^2 - 3*x + 1`.
impl<F: Field> Display for Polynomial<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (power, coefficient) in self.coefficients.iter().enumerate().rev() {
            if coefficient.is_negligible() {
                continue;
            }
            let text = coefficient.to_string();
            let (negative, magnitude) = match text.strip_prefix('-') {
                Some(rest) if !rest.contains(' ') => (true, rest.to_string()),
                _ => (false, text),
            };

            let separator = match (first, negative) {
                (true, true) => "-",
                (true, false) => "",
                (false, true) => " - ",
                (false, false) => " + ",
            };
            let monomial = match power {
                0 => String::new(),
                1 => self.variable.clone(),
                _ => format!("{}^{}", self.variable, power),
            };
            let term = if power == 0 {
                magnitude
            } else if magnitude == "1" {
                monomial
            } else if is_compound(&magnitude) {
                format!("({})*{}", magnitude, monomial)
            } else {
                format!("{}*{}", magnitude, monomial)
            };

            write!(f, "{}{}", separator, term)?;
            first = false;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

fn is_compound(coefficient: &str) -> bool {
    coefficient.contains(' ')
        || (coefficient.contains('/') && coefficient.contains(|c: char| c.is_alphabetic()))
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use num_bigint::BigInt;

    use super::*;

    fn rational(numerator: i64, denominator: i64) -> BigRational {
        BigRational::new(BigInt::from(numerator), BigInt::from(denominator))
    }

    #[test]
    fn evaluate() {
        let eps = 1e-6;
        let coefficients = vec![1.0, 2.5, -0.25];
        let polynomial = Polynomial::new(coefficients);

        assert_approx_eq!(polynomial.evaluate(&2.1), 5.1475, eps);
        assert_approx_eq!(polynomial.evaluate(&-3.14), -9.3149, eps);
        assert_approx_eq!(polynomial.evaluate(&0.0), 1.0, eps);
    }

    #[test]
    fn evaluate_exact() {
        let polynomial = Polynomial::new(vec![rational(1, 2), rational(0, 1), rational(-3, 1)]);
        assert_eq!(polynomial.evaluate(&rational(1, 3)), rational(1, 6));
    }

    #[test]
    fn degree_skips_vanishing_coefficients() {
        assert_eq!(Polynomial::new(vec![1.0, 2.0, 0.0]).degree(), Some(1));
        assert_eq!(Polynomial::new(vec![0.0, 0.0]).degree(), None);
        assert_eq!(Polynomial::<f64>::new(vec![]).degree(), None);
        assert_eq!(Polynomial::new(vec![3.0]).degree(), Some(0));
    }

    #[test]
    fn display() {
        assert_eq!(Polynomial::new(vec![1.0, -3.0, 1.0]).to_string(), "x^2 - 3*x + 1");
        assert_eq!(Polynomial::new(vec![0.0, 1.0]).to_string(), "x");
        assert_eq!(Polynomial::new(vec![-2.0, 0.0, 0.0, -1.0]).to_string(), "-x^3 - 2");
        assert_eq!(Polynomial::<f64>::new(vec![]).to_string(), "0");
        assert_eq!(
            Polynomial::with_variable(vec![rational(1, 2), rational(-3, 4)], "t").to_string(),
            "-3/4*t + 1/2"
        );
    }

    #[test]
    fn display_symbolic_coefficients() {
        let a = RationalFunction::variable("a1");
        let b = RationalFunction::variable("y0") - RationalFunction::variable("y1");
        let polynomial = Polynomial::new(vec![a.clone(), b, a]);

        assert_eq!(polynomial.to_string(), "a1*x^2 + (y0 - y1)*x + a1");
    }

    #[test]
    fn bind_symbols() {
        let polynomial = Polynomial::new(vec![
            RationalFunction::variable("y0"),
            RationalFunction::variable("a1") / RationalFunction::variable("x0"),
        ]);
        let bindings = HashMap::from([
            ("y0".to_string(), rational(2, 1)),
            ("a1".to_string(), rational(3, 1)),
            ("x0".to_string(), rational(4, 1)),
        ]);

        let bound = polynomial.bind(&bindings).unwrap();
        assert_eq!(bound.coefficients(), &[rational(2, 1), rational(3, 4)]);
        assert!(polynomial.bind(&HashMap::new()).is_none());

        let floating = bound.to_f64();
        assert_approx_eq!(floating.evaluate(&2.0), 3.5, 1e-12);
    }
}
