use std::fmt::Display;

/// Sample represents a point through which the interpolating polynomial must pass.
/// - `x` - coordinate,
/// - `y` - coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<F> {
    x: F,
    y: F,
}

impl<F: Clone> Sample<F> {
    pub fn new(x: F, y: F) -> Self {
        Sample { x, y }
    }

    /// Pairs `xs` with `ys` in order. Extra values of the longer sequence are ignored.
    /// # Example
    /// ```
    /// use poly_interp::Sample;
    ///
    /// let samples = Sample::zip(&[0.0, 1.0, 2.0], &[5.0, 6.0]);
    /// assert_eq!(samples.len(), 2);
    /// assert_eq!(*samples[1].get_y(), 6.0);
    /// ```
    pub fn zip(xs: &[F], ys: &[F]) -> Vec<Self> {
        xs.iter()
            .zip(ys)
            .map(|(x, y)| Sample::new(x.clone(), y.clone()))
            .collect()
    }

    /// Splits samples back into x and y sequences.
    pub fn unzip(samples: &[Self]) -> (Vec<F>, Vec<F>) {
        samples.iter().map(|s| (s.x.clone(), s.y.clone())).unzip()
    }

    pub fn get_x(&self) -> &F {
        &self.x
    }

    pub fn get_y(&self) -> &F {
        &self.y
    }
}

impl<F> From<(F, F)> for Sample<F> {
    fn from((x, y): (F, F)) -> Self {
        Sample { x, y }
    }
}

/// Point label in the `(x,y)` form used next to plotted points.
impl<F: Display> Display for Sample<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
