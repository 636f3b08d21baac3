//! Inverse lookup: the coordinate at which a spline takes a given value.

use tracing::debug;

use crate::{
    bicubic::Spline2D,
    config::SearchConfig,
    error::{Result, SplineError},
    interpolant::{Interpolant1D, Interpolant2D},
    spline::Spline1D,
};

/// Where to look for a parameter. Unset bounds default to the spline domain and an unset start to
/// the middle of the bracket.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParameterGuess {
    pub start: Option<f64>,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl ParameterGuess {
    pub fn starting_at(start: f64) -> Self {
        ParameterGuess { start: Some(start), ..Default::default() }
    }

    pub fn within(lower: f64, upper: f64) -> Self {
        ParameterGuess { start: None, lower: Some(lower), upper: Some(upper) }
    }

    pub fn with_start(mut self, start: f64) -> Self {
        self.start = Some(start);
        self
    }

    fn resolve(&self, (min, max): (f64, f64)) -> (f64, f64, f64) {
        let lower = self.lower.unwrap_or(min);
        let upper = self.upper.unwrap_or(max);
        let start = self.start.unwrap_or(0.5 * (lower + upper));
        (lower, upper, start)
    }
}

/// Axis searched by [Spline2D::find_parameter].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    X,
    Y,
}

impl Spline1D {
    /// Finds `x` with `evaluate(x) == value` inside the bracket of `guess`.
    /// # Errors
    /// - [SplineError::NoBracket] when the spline does not cross `value` between the bracket ends,
    /// - [SplineError::NoConvergence] when the search runs out of iterations.
    /// ```
    /// use cubic_splines::{BoundaryCondition, ParameterGuess, Spline1D};
    ///
    /// let knots = [0.0, 0.5, 1.0, 1.5, 2.0];
    /// let samples: Vec<f64> = knots.iter().map(|x| x * x).collect();
    /// let spline = Spline1D::new(&knots, &samples, BoundaryCondition::clamped(0.0, 4.0)).unwrap();
    ///
    /// let x = spline.find_parameter(2.0, ParameterGuess::default()).unwrap();
    /// assert!((x - 2.0_f64.sqrt()).abs() < 1e-10);
    /// ```
    pub fn find_parameter(&self, value: f64, guess: ParameterGuess) -> Result<f64> {
        let (lower, upper, start) = guess.resolve(self.domain());
        find_root(
            value,
            |x| Ok((self.evaluate(x)?, self.derivative(x, 1)?)),
            (lower, upper),
            start,
            &self.options().search,
        )
    }
}

impl Spline2D {
    /// Finds the coordinate along `direction` at which the spline equals `value`, with the other
    /// coordinate held at `fixed`. Fails like [Spline1D::find_parameter].
    pub fn find_parameter(&self, value: f64, direction: Direction, fixed: f64, guess: ParameterGuess) -> Result<f64> {
        let ((x_min, x_max), (y_min, y_max)) = self.domain();
        let search = &self.options().search;

        match direction {
            Direction::X => {
                let (lower, upper, start) = guess.resolve((x_min, x_max));
                find_root(
                    value,
                    |x| Ok((self.evaluate(x, fixed)?, self.derivative(x, fixed, 1, 0)?)),
                    (lower, upper),
                    start,
                    search,
                )
            }
            Direction::Y => {
                let (lower, upper, start) = guess.resolve((y_min, y_max));
                find_root(
                    value,
                    |y| Ok((self.evaluate(fixed, y)?, self.derivative(fixed, y, 0, 1)?)),
                    (lower, upper),
                    start,
                    search,
                )
            }
        }
    }
}

impl Interpolant1D {
    /// Finds `x` with `evaluate(x) == value`, searching in the coordinates of the axis. Fails like
    /// [Spline1D::find_parameter].
    pub fn find_parameter(&self, value: f64, guess: ParameterGuess) -> Result<f64> {
        let (lower, upper, start) = guess.resolve(self.domain());
        find_root(
            value,
            |x| Ok((self.evaluate(x)?, self.first_derivative(x)?)),
            (lower, upper),
            start,
            &self.spline().options().search,
        )
    }
}

impl Interpolant2D {
    /// Same as [Spline2D::find_parameter] in the coordinates of the axes.
    pub fn find_parameter(&self, value: f64, direction: Direction, fixed: f64, guess: ParameterGuess) -> Result<f64> {
        let (x_domain, y_domain) = self.domain();
        let search = &self.spline().options().search;

        match direction {
            Direction::X => {
                let (lower, upper, start) = guess.resolve(x_domain);
                find_root(
                    value,
                    |x| Ok((self.evaluate(x, fixed)?, self.gradient(x, fixed)?[0])),
                    (lower, upper),
                    start,
                    search,
                )
            }
            Direction::Y => {
                let (lower, upper, start) = guess.resolve(y_domain);
                find_root(
                    value,
                    |y| Ok((self.evaluate(fixed, y)?, self.gradient(fixed, y)?[1])),
                    (lower, upper),
                    start,
                    search,
                )
            }
        }
    }
}

/// Newton iteration kept inside a shrinking bracket. Steps that would leave the bracket, stall on a
/// flat slope or shrink too slowly are replaced by bisection.
pub(crate) fn find_root(
    value: f64,
    function: impl Fn(f64) -> Result<(f64, f64)>,
    (lower, upper): (f64, f64),
    start: f64,
    config: &SearchConfig,
) -> Result<f64> {
    let residual_at = |x: f64| -> Result<(f64, f64)> {
        let (y, slope) = function(x)?;
        Ok((y - value, slope))
    };

    let (f_lower, _) = residual_at(lower)?;
    if f_lower == 0.0 {
        return Ok(lower);
    }
    let (f_upper, _) = residual_at(upper)?;
    if f_upper == 0.0 {
        return Ok(upper);
    }
    if f_lower.is_nan() || f_upper.is_nan() || f_lower.signum() == f_upper.signum() {
        return Err(SplineError::NoBracket { value, lower, upper });
    }

    // residual is negative at `low` and positive at `high`
    let (mut low, mut high) = if f_lower < 0.0 { (lower, upper) } else { (upper, lower) };
    let mut x = start.clamp(lower.min(upper), lower.max(upper));
    let mut step = (upper - lower).abs();
    let mut previous_step = step;
    let (mut residual, mut slope) = residual_at(x)?;

    for iteration in 1..=config.max_iterations {
        let leaves_bracket = ((x - high) * slope - residual) * ((x - low) * slope - residual) > 0.0;
        let too_slow = (2.0 * residual).abs() > (previous_step * slope).abs();

        previous_step = step;
        if !slope.is_finite() || slope == 0.0 || leaves_bracket || too_slow {
            step = 0.5 * (high - low);
            x = low + step;
        } else {
            step = residual / slope;
            x -= step;
        }

        if step.abs() <= config.tolerance * x.abs().max(1.0) {
            debug!(value, x, iteration, "found parameter");
            return Ok(x);
        }

        (residual, slope) = residual_at(x)?;
        if residual == 0.0 {
            debug!(value, x, iteration, "found parameter");
            return Ok(x);
        }
        if residual < 0.0 {
            low = x;
        } else {
            high = x;
        }
    }

    Err(SplineError::NoConvergence { iterations: config.max_iterations })
}
