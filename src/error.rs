use thiserror::Error;

pub type Result<T> = std::result::Result<T, InterpolationError>;

/// Errors reported while building or solving an interpolation system.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpolationError {
    /// Constraints contradict each other, e.g. the same x with two different y values.
    /// `constraint` is the index of the sample pair that could not be satisfied.
    #[error(
        "Error in Interpolator: constraint {constraint} contradicts the other samples, \
         system has no solution"
    )]
    InfeasibleSystem { constraint: usize },

    /// Placeholder points were requested from a field that has no free symbols.
    #[error("Error in Interpolator: field {field} cannot create placeholder symbols")]
    SymbolsUnsupported { field: &'static str },

    /// Two samples share the same x value.
    #[error("Error in Interpolator: x value at index {index} repeats an earlier sample")]
    DuplicateAbscissa { index: usize },
}
