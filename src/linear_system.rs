use nalgebra::{DMatrix, DVector};
use tracing::{debug, trace};

use crate::{
    error::{InterpolationError, Result},
    field::Field,
};

/// Augmented linear system `matrix * a = rhs` over a [Field].
#[derive(Debug, Clone)]
pub struct LinearSystem<F: Field> {
    matrix: DMatrix<F>,
    rhs: DVector<F>,
}

impl<F: Field> LinearSystem<F> {
    pub fn new(matrix: DMatrix<F>, rhs: DVector<F>) -> Self {
        assert_eq!(matrix.nrows(), rhs.len(), "rhs length must match the number of equations");
        LinearSystem { matrix, rhs }
    }

    /// One equation `sum_k(a_k * x_i^k) = y_i` per sample pair, with `unknowns` coefficients.
    /// Pairs beyond the shorter of `xs` and `ys` are ignored.
    pub fn vandermonde(xs: &[F], ys: &[F], unknowns: usize) -> Self {
        let number_of_equations = xs.len().min(ys.len());
        let mut matrix = DMatrix::<F>::zeros(number_of_equations, unknowns);
        let mut rhs = DVector::<F>::zeros(number_of_equations);

        for (equation, (x, y)) in xs.iter().zip(ys).enumerate() {
            let mut x_pow = F::one();
            for c in 0..unknowns {
                matrix[(equation, c)] = x_pow.clone();
                x_pow = x_pow * x.clone();
            }
            rhs[equation] = y.clone();
        }

        LinearSystem { matrix, rhs }
    }

    pub fn number_of_equations(&self) -> usize {
        self.matrix.nrows()
    }

    pub fn number_of_unknowns(&self) -> usize {
        self.matrix.ncols()
    }

    /// Solves the system by Gauss-Jordan elimination.
    ///
    /// Exact fields ([Field::EXACT]) are eliminated fraction-free: every update is divided by
    /// the previous pivot, which divides it exactly, so entries stay minors of the input and the
    /// single division happens at the end. `f64` is normalized row by row with partial pivoting,
    /// and zero tests are relative to the largest entry of the column or right-hand side.
    ///
    /// Unknowns without a pivot are free: each is assigned `free_value(index)` and the
    /// pivot unknowns are expressed in terms of them. This picks one particular member of
    /// the solution family, not a minimal one.
    ///
    /// # Errors
    /// [InterpolationError::InfeasibleSystem] when an equation reduces to `0 = c` with `c != 0`;
    /// the reported constraint is the equation's original index.
    pub fn solve(self, free_value: impl Fn(usize) -> F) -> Result<Vec<F>> {
        let LinearSystem { mut matrix, mut rhs } = self;
        let (rows, cols) = matrix.shape();
        let mut origin: Vec<usize> = (0..rows).collect();

        trace!("matrix: {}", matrix);
        trace!("rhs: {}", rhs);

        let column_scales: Vec<f64> = matrix
            .column_iter()
            .map(|column| column.iter().map(F::magnitude).fold(0.0, f64::max))
            .collect();
        let rhs_scale = rhs.iter().map(F::magnitude).fold(0.0, f64::max);

        let (pivot_columns, divisor) = if F::EXACT {
            eliminate_fraction_free(&mut matrix, &mut rhs, &mut origin)
        } else {
            let pivot_columns = eliminate(&mut matrix, &mut rhs, &mut origin, &column_scales);
            (pivot_columns, F::one())
        };
        let rank = pivot_columns.len();

        if let Some(r) = (rank..rows).find(|r| !rhs[*r].is_negligible_against(rhs_scale)) {
            debug!(constraint = origin[r], "inconsistent equation, system has no solution");
            return Err(InterpolationError::InfeasibleSystem { constraint: origin[r] });
        }

        let mut is_pivot = vec![false; cols];
        for col in &pivot_columns {
            is_pivot[*col] = true;
        }
        let free_columns: Vec<usize> = (0..cols).filter(|c| !is_pivot[*c]).collect();
        if !free_columns.is_empty() {
            debug!(?free_columns, "underdetermined system, free unknowns keep their values");
        }

        let mut solution: Vec<F> = (0..cols)
            .map(|c| if is_pivot[c] { F::zero() } else { free_value(c) })
            .collect();

        for (r, col) in pivot_columns.iter().enumerate() {
            let mut value = rhs[r].clone();
            for c in &free_columns {
                if !matrix[(r, *c)].is_zero() {
                    value = value - matrix[(r, *c)].clone() * solution[*c].clone();
                }
            }
            solution[*col] = value / divisor.clone();
        }

        trace!(?solution, "solution");
        Ok(solution)
    }
}

/// Floating point Gauss-Jordan. Pivot rows are scaled to a unit pivot; entries negligible
/// next to their column scale are treated as zero. Returns the pivot column of each row.
fn eliminate<F: Field>(
    matrix: &mut DMatrix<F>,
    rhs: &mut DVector<F>,
    origin: &mut [usize],
    column_scales: &[f64],
) -> Vec<usize> {
    let (rows, cols) = matrix.shape();
    let mut pivot_columns = Vec::with_capacity(rows.min(cols));

    let mut row = 0;
    for col in 0..cols {
        if row == rows {
            break;
        }
        let Some(pivot) = select_pivot(matrix, row, col, column_scales[col]) else {
            continue;
        };
        swap_equations(matrix, rhs, origin, pivot, row);

        let inverse = F::one() / matrix[(row, col)].clone();
        for c in col + 1..cols {
            matrix[(row, c)] = matrix[(row, c)].clone() * inverse.clone();
        }
        rhs[row] = rhs[row].clone() * inverse;
        matrix[(row, col)] = F::one();

        for r in 0..rows {
            if r == row {
                continue;
            }
            if matrix[(r, col)].is_negligible_against(column_scales[col]) {
                matrix[(r, col)] = F::zero();
                continue;
            }
            let factor = matrix[(r, col)].clone();
            for c in col + 1..cols {
                let update = factor.clone() * matrix[(row, c)].clone();
                matrix[(r, c)] = matrix[(r, c)].clone() - update;
            }
            rhs[r] = rhs[r].clone() - factor * rhs[row].clone();
            matrix[(r, col)] = F::zero();
        }

        pivot_columns.push(col);
        row += 1;
    }

    pivot_columns
}

/// Fraction-free Gauss-Jordan (Bareiss). After each step every pivot row holds the current
/// pivot on its diagonal, which is returned with the pivot columns.
fn eliminate_fraction_free<F: Field>(
    matrix: &mut DMatrix<F>,
    rhs: &mut DVector<F>,
    origin: &mut [usize],
) -> (Vec<usize>, F) {
    let (rows, cols) = matrix.shape();
    let mut pivot_columns = Vec::with_capacity(rows.min(cols));
    let mut divisor = F::one();

    let mut row = 0;
    for col in 0..cols {
        if row == rows {
            break;
        }
        let Some(pivot) = select_pivot(matrix, row, col, 0.0) else {
            continue;
        };
        swap_equations(matrix, rhs, origin, pivot, row);

        let pivot = matrix[(row, col)].clone();
        for r in 0..rows {
            if r == row {
                continue;
            }
            let factor = matrix[(r, col)].clone();
            for c in 0..cols {
                if c != col {
                    let entry = &matrix[(r, c)];
                    let pivot_entry = &matrix[(row, c)];
                    matrix[(r, c)] = cross_step(&pivot, entry, &factor, pivot_entry, &divisor);
                }
            }
            rhs[r] = cross_step(&pivot, &rhs[r], &factor, &rhs[row], &divisor);
            matrix[(r, col)] = F::zero();
        }

        divisor = pivot;
        pivot_columns.push(col);
        row += 1;
    }

    (pivot_columns, divisor)
}

/// `(pivot * entry - factor * pivot_entry) / divisor`, the division is exact.
fn cross_step<F: Field>(pivot: &F, entry: &F, factor: &F, pivot_entry: &F, divisor: &F) -> F {
    let kept = if entry.is_zero() { F::zero() } else { pivot.clone() * entry.clone() };
    let removed = if factor.is_zero() || pivot_entry.is_zero() {
        F::zero()
    } else {
        factor.clone() * pivot_entry.clone()
    };
    if kept.is_zero() && removed.is_zero() {
        return F::zero();
    }
    (kept - removed) / divisor.clone()
}

fn swap_equations<F: Field>(
    matrix: &mut DMatrix<F>,
    rhs: &mut DVector<F>,
    origin: &mut [usize],
    pivot: usize,
    row: usize,
) {
    if pivot != row {
        matrix.swap_rows(pivot, row);
        rhs.swap_rows(pivot, row);
        origin.swap(pivot, row);
    }
}

/// Row at or below `start` with the highest pivot weight among entries of column `col` that
/// are not negligible next to `scale`. Ties keep the upper row.
fn select_pivot<F: Field>(
    matrix: &DMatrix<F>,
    start: usize,
    col: usize,
    scale: f64,
) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for r in start..matrix.nrows() {
        let entry = &matrix[(r, col)];
        if entry.is_negligible_against(scale) {
            continue;
        }
        let weight = entry.pivot_weight();
        match best {
            Some((_, best_weight)) if best_weight >= weight => {}
            _ => best = Some((r, weight)),
        }
    }
    best.map(|(r, _)| r)
}
