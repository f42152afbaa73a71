//! Exact polynomial interpolation. Given `n` samples, the coefficients of a polynomial of degree
//! `n - 1` passing through all of them are found by solving the Vandermonde system over a
//! numeric field (`f64`, [BigRational](num_rational::BigRational)) or over rational functions of
//! named symbols, which yields general formulas.
//!
//! # Example
//! ```
//! use poly_interp::interpolate;
//! use num_bigint::BigInt;
//! use num_rational::BigRational;
//!
//! let int = |v: i64| BigRational::from_integer(BigInt::from(v));
//! let xs: Vec<BigRational> = [-1, 0, 1, 2, 3].into_iter().map(int).collect();
//! let ys: Vec<BigRational> = [-1, 2, 1, 4, 5].into_iter().map(int).collect();
//!
//! let f = interpolate(0, &xs, &ys).unwrap();
//!
//! for (x, y) in xs.iter().zip(&ys) {
//!     assert_eq!(&f.evaluate(x), y);
//! }
//! ```
//!
//! Without samples the result is the general formula in placeholder symbols `x0, y0, ...`:
//! ```
//! use poly_interp::{interpolate, RationalFunction};
//!
//! let f = interpolate::<RationalFunction>(2, &[], &[]).unwrap();
//!
//! assert_eq!(f.evaluate(&RationalFunction::variable("x1")), RationalFunction::variable("y1"));
//! ```

mod curve;
mod error;
mod field;
mod interpolator;
mod lagrange;
mod linear_system;
mod polynomial;
mod sample;
mod scalar;
pub mod symbolic;

pub use curve::{domain, Curve, CurveOptions, Evaluate};
pub use error::{InterpolationError, Result};
pub use field::{Field, FLOAT_TOLERANCE};
pub use interpolator::{interpolate, interpolate_scalars, Interpolator};
pub use lagrange::lagrange;
pub use linear_system::LinearSystem;
pub use polynomial::Polynomial;
pub use sample::Sample;
pub use scalar::Scalar;
pub use symbolic::RationalFunction;
