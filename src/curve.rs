//! Plot data for a polynomial and its samples. Drawing is left to the caller.

use std::fmt::Display;

use num_rational::BigRational;

use crate::{polynomial::Polynomial, sample::Sample};

/// - `steps` - number of evenly spaced curve samples,
/// - `margin` - padding added on both sides of the sample x range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveOptions {
    pub steps: usize,
    pub margin: f64,
}

impl Default for CurveOptions {
    fn default() -> Self {
        CurveOptions { steps: 100, margin: 0.1 }
    }
}

/// Plotting range `[min x - margin, max x + margin]`. Without points the range is
/// `[-1 - margin, 1 + margin]`.
pub fn domain(points: &[Sample<f64>], margin: f64) -> (f64, f64) {
    let x_min = points.iter().map(|p| *p.get_x()).reduce(f64::min).unwrap_or(-1.0);
    let x_max = points.iter().map(|p| *p.get_x()).reduce(f64::max).unwrap_or(1.0);
    (x_min - margin, x_max + margin)
}

/// Everything needed to draw a polynomial with its samples.
pub struct Curve {
    samples: Vec<Sample<f64>>,
    points: Vec<Sample<f64>>,
    title: String,
}

impl Curve {
    /// Samples `polynomial` at `options.steps` points starting at the lower end of
    /// [domain]; the upper end is excluded.
    /// # Example
    /// ```
    /// use poly_interp::{Curve, CurveOptions, Polynomial};
    ///
    /// let curve = Curve::new(&Polynomial::new(vec![1.0, 1.0]), &[], CurveOptions::default());
    ///
    /// assert_eq!(curve.get_samples().len(), 100);
    /// assert_eq!(curve.get_title(), "y = x + 1");
    /// ```
    pub fn new<P>(polynomial: &P, points: &[Sample<f64>], options: CurveOptions) -> Self
    where
        P: Evaluate + Display,
    {
        let (x_min, x_max) = domain(points, options.margin);
        let step = (x_max - x_min) / options.steps.max(1) as f64;

        let samples = (0..options.steps)
            .map(|i| {
                let x = x_min + step * i as f64;
                Sample::new(x, polynomial.evaluate_f64(x))
            })
            .collect();

        Curve {
            samples,
            points: points.to_vec(),
            title: format!("y = {}", polynomial),
        }
    }

    pub fn get_samples(&self) -> &[Sample<f64>] {
        &self.samples
    }

    pub fn get_points(&self) -> &[Sample<f64>] {
        &self.points
    }

    pub fn get_title(&self) -> &str {
        &self.title
    }

    /// `(x,y)` label for each point.
    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(|p| p.to_string()).collect()
    }
}

/// Evaluation at a floating point x, for sampling polynomials over any field.
pub trait Evaluate {
    fn evaluate_f64(&self, x: f64) -> f64;
}

impl Evaluate for Polynomial<f64> {
    fn evaluate_f64(&self, x: f64) -> f64 {
        self.evaluate(&x)
    }
}

impl Evaluate for Polynomial<BigRational> {
    fn evaluate_f64(&self, x: f64) -> f64 {
        self.to_f64().evaluate(&x)
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use num_bigint::BigInt;

    use super::*;

    #[test]
    fn default_domain() {
        let (x_min, x_max) = domain(&[], 0.1);
        assert_approx_eq!(x_min, -1.1, 1e-12);
        assert_approx_eq!(x_max, 1.1, 1e-12);
    }

    #[test]
    fn padded_domain() {
        let points = vec![Sample::new(2.0, 0.0), Sample::new(-3.0, 1.0), Sample::new(0.5, 4.0)];
        let (x_min, x_max) = domain(&points, 0.1);

        assert_approx_eq!(x_min, -3.1, 1e-12);
        assert_approx_eq!(x_max, 2.1, 1e-12);
    }

    #[test]
    fn samples_cover_domain_without_upper_end() {
        let polynomial = Polynomial::new(vec![0.0, 0.0, 1.0]);
        let points = vec![Sample::new(0.0, 0.0), Sample::new(2.0, 4.0)];
        let options = CurveOptions { steps: 4, margin: 0.0 };
        let curve = Curve::new(&polynomial, &points, options);

        let xs: Vec<f64> = curve.get_samples().iter().map(|s| *s.get_x()).collect();
        assert_eq!(xs, vec![0.0, 0.5, 1.0, 1.5]);
        assert_approx_eq!(*curve.get_samples()[3].get_y(), 2.25, 1e-12);
        assert_eq!(curve.labels(), vec!["(0,0)".to_string(), "(2,4)".to_string()]);
        assert_eq!(curve.get_points().len(), 2);
        assert_eq!(curve.get_title(), "y = x^2");
    }

    #[test]
    fn rational_polynomial() {
        let half = BigRational::new(BigInt::from(1), BigInt::from(2));
        let polynomial = Polynomial::new(vec![half.clone(), half]);
        let curve = Curve::new(&polynomial, &[], CurveOptions { steps: 2, margin: 0.0 });

        assert_approx_eq!(*curve.get_samples()[0].get_y(), 0.0, 1e-12);
        assert_approx_eq!(*curve.get_samples()[1].get_y(), 0.5, 1e-12);
        assert_eq!(curve.get_title(), "y = 1/2*x + 1/2");
    }
}
