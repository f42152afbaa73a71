//! Exact symbolic algebra: polynomials over Q in named symbols and their quotients.

mod monomial;
mod multi_poly;
mod rational_function;

pub use monomial::Monomial;
pub use multi_poly::MultiPoly;
pub use rational_function::RationalFunction;
