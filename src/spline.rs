use tracing::debug;

use crate::{
    axis::Axis,
    boundary::BoundaryCondition,
    config::{Extrapolation, SplineOptions},
    error::{Result, SplineError},
    knot::KnotSequence,
    polynomial::CoefficientTable,
    solver,
};

/// Cubic spline through `(knots[i], samples[i])`, twice continuously differentiable.
///
/// The spline is immutable once built and can be shared between threads for evaluation.
///
/// # Example
/// ```
/// use cubic_splines::{BoundaryCondition, Spline1D};
/// use assert_approx_eq::assert_approx_eq;
///
/// let spline = Spline1D::new(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 0.0, 1.0], BoundaryCondition::Natural).unwrap();
///
/// assert_approx_eq!(0.0, spline.evaluate(0.0).unwrap(), 1e-12);
/// assert_approx_eq!(0.5, spline.evaluate(1.5).unwrap(), 1e-12);
/// assert_approx_eq!(0.0, spline.derivative(3.0, 2).unwrap(), 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Spline1D {
    knots: KnotSequence,
    coefficients: CoefficientTable,
    boundary: BoundaryCondition,
    options: SplineOptions,
}

impl Spline1D {
    /// Builds a spline with default [SplineOptions].
    /// # Errors
    /// - [SplineError::InsufficientData] for fewer than 2 knots,
    /// - [SplineError::NonMonotonic] when knots are not strictly increasing,
    /// - [SplineError::DimensionMismatch] when `knots` and `samples` differ in length,
    /// - [SplineError::NonFinite] for NaN or infinite input,
    /// - [SplineError::PeriodicMismatch] for [BoundaryCondition::Periodic] with different end samples,
    /// - [SplineError::IllConditioned] when the spline system cannot be solved.
    /// ```
    /// use cubic_splines::{BoundaryCondition, Spline1D, SplineError};
    ///
    /// let result = Spline1D::new(&[0.0, 1.0, 2.0], &[1.0, 2.0], BoundaryCondition::Natural);
    /// assert_eq!(SplineError::DimensionMismatch { expected: 3, got: 2 }, result.unwrap_err());
    ///
    /// let result = Spline1D::new(&[0.0, 2.0, 1.0], &[1.0, 2.0, 3.0], BoundaryCondition::Natural);
    /// assert_eq!(SplineError::NonMonotonic { index: 2 }, result.unwrap_err());
    /// ```
    pub fn new(knots: &[f64], samples: &[f64], boundary: BoundaryCondition) -> Result<Self> {
        Spline1D::with_options(knots, samples, boundary, SplineOptions::default())
    }

    pub fn with_options(
        knots: &[f64],
        samples: &[f64],
        boundary: BoundaryCondition,
        options: SplineOptions,
    ) -> Result<Self> {
        let knots = KnotSequence::new(knots)?;
        Spline1D::from_sequence(knots, samples, boundary, options)
    }

    /// Samples `f` on the nodes of `axis`.
    /// ```
    /// use cubic_splines::{Axis, BoundaryCondition, Spline1D};
    ///
    /// let axis = Axis::linear(0.0, std::f64::consts::PI, 30).unwrap();
    /// let spline = Spline1D::from_fn(&axis, f64::sin, BoundaryCondition::NotAKnot).unwrap();
    ///
    /// assert!((spline.evaluate(1.0).unwrap() - 1.0_f64.sin()).abs() < 1e-5);
    /// ```
    pub fn from_fn(axis: &Axis, f: impl Fn(f64) -> f64, boundary: BoundaryCondition) -> Result<Self> {
        Spline1D::from_fn_with_options(axis, f, boundary, SplineOptions::default())
    }

    pub fn from_fn_with_options(
        axis: &Axis,
        f: impl Fn(f64) -> f64,
        boundary: BoundaryCondition,
        options: SplineOptions,
    ) -> Result<Self> {
        let knots = axis.nodes();
        let samples: Vec<f64> = knots.iter().map(|x| f(*x)).collect();
        Spline1D::with_options(&knots, &samples, boundary, options)
    }

    pub(crate) fn from_sequence(
        knots: KnotSequence,
        samples: &[f64],
        boundary: BoundaryCondition,
        options: SplineOptions,
    ) -> Result<Self> {
        let coefficients = solver::solve_knots(&knots, samples, boundary, options.pivot_tolerance)?;

        debug!(knots = knots.len(), uniform = knots.is_uniform(), ?boundary, "built cubic spline");

        Ok(Spline1D { knots, coefficients, boundary, options })
    }

    /// Value of the spline at `x`. Outside of the knots the [Extrapolation] policy applies.
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        self.derivative(x, 0)
    }

    /// Derivative of order `order` at `x`; order 0 is the value.
    ///
    /// Orders 1 and 2 are continuous across knots. Order 3 is the third derivative of the piece
    /// containing `x` and jumps at the knots. Higher orders are 0.
    pub fn derivative(&self, x: f64, order: usize) -> Result<f64> {
        if self.knots.contains(x) {
            let interval = self.knots.locate(x);
            Ok(self.evaluate_piece(interval, x, order))
        } else {
            self.evaluate_outside(x, order)
        }
    }

    /// Evaluates sorted or nearly sorted `xs` faster by starting each lookup at the previous interval.
    /// Under [Extrapolation::Error] the first point outside of the knots fails the whole batch.
    pub fn evaluate_batch(&self, xs: &[f64]) -> Result<Vec<f64>> {
        let mut results = Vec::with_capacity(xs.len());
        let mut interval = 0;

        for x in xs {
            if self.knots.contains(*x) {
                interval = self.knots.locate_with_hint(interval, *x);
                results.push(self.evaluate_piece(interval, *x, 0));
            } else {
                results.push(self.evaluate_outside(*x, 0)?);
            }
        }
        Ok(results)
    }

    pub fn knots(&self) -> &KnotSequence {
        &self.knots
    }

    /// `(first, last)` knot.
    pub fn domain(&self) -> (f64, f64) {
        self.knots.domain()
    }

    pub fn coefficients(&self) -> &CoefficientTable {
        &self.coefficients
    }

    pub fn boundary(&self) -> BoundaryCondition {
        self.boundary
    }

    pub fn options(&self) -> &SplineOptions {
        &self.options
    }

    /// First derivative at knot `index`, taken from the piece on its right (left for the last knot).
    pub(crate) fn knot_slope(&self, index: usize) -> f64 {
        let last_interval = self.knots.intervals() - 1;
        if index <= last_interval {
            self.coefficients.piece(index).derivative(0.0, 1)
        } else {
            self.coefficients.piece(last_interval).derivative(self.knots.width(last_interval), 1)
        }
    }

    fn evaluate_piece(&self, interval: usize, x: f64, order: usize) -> f64 {
        let offset = x - self.knots.as_slice()[interval];
        self.coefficients.piece(interval).derivative(offset, order)
    }

    fn evaluate_outside(&self, x: f64, order: usize) -> Result<f64> {
        let (min, max) = self.knots.domain();
        match self.options.extrapolation {
            Extrapolation::Extrapolate => Ok(self.evaluate_piece(self.knots.locate(x), x, order)),
            Extrapolation::Clamp if x.is_nan() => Ok(f64::NAN),
            Extrapolation::Clamp if order > 0 => Ok(0.0),
            Extrapolation::Clamp => {
                let edge = if x < min { min } else { max };
                Ok(self.evaluate_piece(self.knots.locate(edge), edge, 0))
            }
            Extrapolation::Error => Err(SplineError::OutOfDomain { value: x, min, max }),
        }
    }
}
