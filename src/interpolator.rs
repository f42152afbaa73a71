use tracing::debug;

use crate::{
    error::{InterpolationError, Result},
    field::Field,
    linear_system::LinearSystem,
    polynomial::{Polynomial, DEFAULT_VARIABLE},
    sample::Sample,
    scalar::Scalar,
    symbolic::RationalFunction,
};

/// Interpolation settings. Every call builds its own system and placeholder symbols,
/// so one `Interpolator` can be reused freely.
///
/// - `degree_hint` - minimal number of coefficients, raised to the number of samples when lower,
/// - `variable` - name of the polynomial variable,
/// - `abscissa_prefix`, `ordinate_prefix` - names of placeholder x and y values (`x0`, `y0`, ...),
/// - `coefficient_prefix` - names of coefficients left free by an underdetermined system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpolator {
    degree_hint: usize,
    variable: String,
    abscissa_prefix: String,
    ordinate_prefix: String,
    coefficient_prefix: String,
}

impl Default for Interpolator {
    fn default() -> Self {
        Interpolator {
            degree_hint: 0,
            variable: DEFAULT_VARIABLE.to_string(),
            abscissa_prefix: "x".to_string(),
            ordinate_prefix: "y".to_string(),
            coefficient_prefix: "a".to_string(),
        }
    }
}

impl Interpolator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_degree_hint(mut self, degree_hint: usize) -> Self {
        self.degree_hint = degree_hint;
        self
    }

    pub fn with_variable(mut self, variable: &str) -> Self {
        self.variable = variable.to_string();
        self
    }

    pub fn with_abscissa_prefix(mut self, prefix: &str) -> Self {
        self.abscissa_prefix = prefix.to_string();
        self
    }

    pub fn with_ordinate_prefix(mut self, prefix: &str) -> Self {
        self.ordinate_prefix = prefix.to_string();
        self
    }

    pub fn with_coefficient_prefix(mut self, prefix: &str) -> Self {
        self.coefficient_prefix = prefix.to_string();
        self
    }

    pub fn get_degree_hint(&self) -> usize {
        self.degree_hint
    }

    /// Number of coefficients used for the given input sizes.
    pub fn number_of_coefficients(&self, xs_len: usize, ys_len: usize) -> usize {
        self.degree_hint.max(xs_len).max(ys_len)
    }

    /// Polynomial with `n = max(degree_hint, xs.len(), ys.len())` coefficients passing through
    /// every `(xs[i], ys[i])`.
    ///
    /// An empty `xs` or `ys` is replaced by `n` placeholder symbols, which needs a symbolic field.
    /// When there are fewer independent samples than coefficients, the coefficients without a
    /// pivot stay free: named symbols over a symbolic field, zero over a numeric one.
    ///
    /// # Errors
    /// - [InterpolationError::InfeasibleSystem] when samples contradict each other,
    /// - [InterpolationError::SymbolsUnsupported] when placeholders are needed over a numeric
    ///   field.
    pub fn interpolate<F: Field>(&self, xs: &[F], ys: &[F]) -> Result<Polynomial<F>> {
        let n = self.number_of_coefficients(xs.len(), ys.len());

        let xs = if xs.is_empty() {
            placeholders(&self.abscissa_prefix, n)?
        } else {
            xs.to_vec()
        };
        let ys = if ys.is_empty() {
            placeholders(&self.ordinate_prefix, n)?
        } else {
            ys.to_vec()
        };

        debug!(
            coefficients = n,
            constraints = xs.len().min(ys.len()),
            field = std::any::type_name::<F>(),
            "building interpolation system"
        );

        let system = LinearSystem::vandermonde(&xs, &ys, n);
        let coefficients = system.solve(|k| {
            F::symbol(&format!("{}{}", self.coefficient_prefix, k)).unwrap_or_else(F::zero)
        })?;

        Ok(Polynomial::with_variable(coefficients, &self.variable))
    }

    pub fn interpolate_samples<F: Field>(&self, samples: &[Sample<F>]) -> Result<Polynomial<F>> {
        let (xs, ys) = Sample::unzip(samples);
        self.interpolate(&xs, &ys)
    }

    /// [Interpolator::interpolate] over [RationalFunction] for mixed concrete and symbolic input.
    pub fn interpolate_scalars(
        &self,
        xs: &[Scalar],
        ys: &[Scalar],
    ) -> Result<Polynomial<RationalFunction>> {
        let xs: Vec<RationalFunction> = xs.iter().map(RationalFunction::from).collect();
        let ys: Vec<RationalFunction> = ys.iter().map(RationalFunction::from).collect();
        self.interpolate(&xs, &ys)
    }
}

fn placeholders<F: Field>(prefix: &str, n: usize) -> Result<Vec<F>> {
    (0..n)
        .map(|i| {
            F::symbol(&format!("{}{}", prefix, i))
                .ok_or(InterpolationError::SymbolsUnsupported { field: std::any::type_name::<F>() })
        })
        .collect()
}

/// Interpolates with `n` as the degree hint and default settings.
/// # Example
/// ```
/// use poly_interp::interpolate;
/// use assert_approx_eq::assert_approx_eq;
///
/// let f = interpolate(0, &[0.0, 1.0, 2.0], &[1.0, 2.0, 5.0]).unwrap();
///
/// assert_eq!(f.degree(), Some(2));
/// assert_approx_eq!(f.evaluate(&3.0), 10.0, 1e-9);
/// ```
pub fn interpolate<F: Field>(n: usize, xs: &[F], ys: &[F]) -> Result<Polynomial<F>> {
    Interpolator::new().with_degree_hint(n).interpolate(xs, ys)
}

/// Interpolates [Scalar] samples with `n` as the degree hint and default settings.
pub fn interpolate_scalars(
    n: usize,
    xs: &[Scalar],
    ys: &[Scalar],
) -> Result<Polynomial<RationalFunction>> {
    Interpolator::new().with_degree_hint(n).interpolate_scalars(xs, ys)
}
