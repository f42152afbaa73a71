use crate::{
    error::{InterpolationError, Result},
    field::Field,
    polynomial::Polynomial,
};

/// Interpolating polynomial built from the Lagrange basis
/// `l_i(x) = prod_{j != i} (x - x_j) / (x_i - x_j)`, expanded into coefficients.
///
/// Gives the same polynomial as solving the square Vandermonde system.
///
/// # Errors
/// [InterpolationError::DuplicateAbscissa] when two x values coincide.
pub fn lagrange<F: Field>(xs: &[F], ys: &[F]) -> Result<Polynomial<F>> {
    let n = xs.len().min(ys.len());
    let xs = &xs[..n];

    for i in 1..n {
        if xs[..i].iter().any(|x| (xs[i].clone() - x.clone()).is_negligible()) {
            return Err(InterpolationError::DuplicateAbscissa { index: i });
        }
    }

    let mut coefficients = vec![F::zero(); n];
    for i in 0..n {
        let mut basis = vec![F::one()];
        let mut denominator = F::one();
        for j in (0..n).filter(|j| *j != i) {
            basis = multiply_by_root(&basis, &xs[j]);
            denominator = denominator * (xs[i].clone() - xs[j].clone());
        }

        let scale = ys[i].clone() / denominator;
        for (k, c) in basis.into_iter().enumerate() {
            coefficients[k] = coefficients[k].clone() + c * scale.clone();
        }
    }

    Ok(Polynomial::new(coefficients))
}

/// `p(x) * (x - root)` on ascending coefficients.
fn multiply_by_root<F: Field>(p: &[F], root: &F) -> Vec<F> {
    let mut result = vec![F::zero(); p.len() + 1];
    for (k, c) in p.iter().enumerate() {
        result[k + 1] = result[k + 1].clone() + c.clone();
        result[k] = result[k].clone() - root.clone() * c.clone();
    }
    result
}
