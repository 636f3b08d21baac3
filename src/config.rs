/// What a spline returns for queries outside of its knots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extrapolation {
    /// Holds the boundary value. Derivatives outside of the domain are 0.
    Clamp,
    /// Continues the boundary cubic piece.
    #[default]
    Extrapolate,
    /// Fails with [SplineError::OutOfDomain](crate::SplineError::OutOfDomain).
    Error,
}

/// Settings of the safeguarded Newton iteration used by `find_parameter`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Iteration stops once a step is below `tolerance * max(1, |x|)`.
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig { tolerance: 1e-12, max_iterations: 100 }
    }
}

/// Options shared by [Spline1D](crate::Spline1D) and [Spline2D](crate::Spline2D).
///
/// # Example
/// ```
/// use cubic_splines::{Extrapolation, SplineOptions};
///
/// let options = SplineOptions::default()
///     .with_extrapolation(Extrapolation::Error)
///     .with_pivot_tolerance(1e-10);
///
/// assert_eq!(Extrapolation::Error, options.extrapolation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SplineOptions {
    pub extrapolation: Extrapolation,
    /// Pivots smaller than `pivot_tolerance` times the largest entry of their row are rejected as
    /// ill-conditioned.
    pub pivot_tolerance: f64,
    pub search: SearchConfig,
}

impl Default for SplineOptions {
    fn default() -> Self {
        SplineOptions {
            extrapolation: Extrapolation::default(),
            pivot_tolerance: 1e-14,
            search: SearchConfig::default(),
        }
    }
}

impl SplineOptions {
    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    pub fn with_pivot_tolerance(mut self, pivot_tolerance: f64) -> Self {
        self.pivot_tolerance = pivot_tolerance;
        self
    }

    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }
}
