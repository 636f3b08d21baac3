//! Splines of a sampled function, built over the node index of an [Axis].
//!
//! An axis maps a coordinate `x` to its fractional node index `t = axis.transform(x)`. Nodes sit at
//! integer `t`, so the spline runs over evenly spaced knots no matter how the nodes are spread in
//! `x`. Function values may be transformed as well, e.g. to their logarithm for data spanning many
//! orders of magnitude. Evaluation maps both back and derivatives follow the chain rule.

use tracing::debug;

use crate::{
    axis::Axis,
    bicubic::Spline2D,
    boundary::BoundaryCondition,
    config::SplineOptions,
    error::{Result, SplineError},
    spline::Spline1D,
};

/// Transform applied to function values before they are interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueTransform {
    #[default]
    Identity,
    /// Interpolates `ln f`. Values must be positive.
    Log,
}

impl ValueTransform {
    pub fn transform(self, value: f64) -> f64 {
        match self {
            ValueTransform::Identity => value,
            ValueTransform::Log => value.ln(),
        }
    }

    pub fn back_transform(self, value: f64) -> f64 {
        match self {
            ValueTransform::Identity => value,
            ValueTransform::Log => value.exp(),
        }
    }

    /// Derivative of [ValueTransform::back_transform] at the transformed `value`.
    pub fn back_derivative(self, value: f64) -> f64 {
        match self {
            ValueTransform::Identity => 1.0,
            ValueTransform::Log => value.exp(),
        }
    }
}

/// Knots at the node indices of `axis`; the last one is fractional when the step does not divide
/// the axis range.
fn node_indices(axis: &Axis, count: usize) -> Vec<f64> {
    let mut knots: Vec<f64> = (0..count - 1).map(|k| k as f64).collect();
    knots.push(axis.transform(axis.high()));
    knots
}

/// Reports a domain error in the coordinate of the caller instead of the node index.
fn in_coordinates(error: SplineError, x: f64, axis: &Axis) -> SplineError {
    match error {
        SplineError::OutOfDomain { .. } => SplineError::OutOfDomain { value: x, min: axis.low(), max: axis.high() },
        other => other,
    }
}

/// One-dimensional function sampled on the nodes of an [Axis].
///
/// # Example
/// ```
/// use cubic_splines::{Axis, Interpolant1D};
///
/// let axis = Axis::exponential(1e-3, 1e3, 61).unwrap();
/// let interpolant = Interpolant1D::new(axis, |x| x.sqrt()).unwrap();
///
/// assert!((interpolant.evaluate(50.0).unwrap() - 50.0_f64.sqrt()).abs() < 1e-4);
/// assert!((interpolant.first_derivative(4.0).unwrap() - 0.25).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct Interpolant1D {
    axis: Axis,
    values: ValueTransform,
    spline: Spline1D,
}

impl Interpolant1D {
    /// Not-a-knot spline of the untransformed values with default [SplineOptions].
    pub fn new(axis: Axis, f: impl Fn(f64) -> f64) -> Result<Self> {
        Interpolant1D::with_settings(
            axis,
            f,
            BoundaryCondition::NotAKnot,
            ValueTransform::Identity,
            SplineOptions::default(),
        )
    }

    /// `boundary` applies in node-index coordinates: clamped slopes are `d values.transform(f) / dt`.
    pub fn with_settings(
        axis: Axis,
        f: impl Fn(f64) -> f64,
        boundary: BoundaryCondition,
        values: ValueTransform,
        options: SplineOptions,
    ) -> Result<Self> {
        let nodes = axis.nodes();
        let knots = node_indices(&axis, nodes.len());
        let samples: Vec<f64> = nodes.iter().map(|x| values.transform(f(*x))).collect();
        let spline = Spline1D::with_options(&knots, &samples, boundary, options)?;

        debug!(axis = %axis.kind(), nodes = nodes.len(), ?values, "built interpolant");

        Ok(Interpolant1D { axis, values, spline })
    }

    pub fn evaluate(&self, x: f64) -> Result<f64> {
        let t = self.axis.transform(x);
        let value = self.spline.evaluate(t).map_err(|error| in_coordinates(error, x, &self.axis))?;
        Ok(self.values.back_transform(value))
    }

    pub fn first_derivative(&self, x: f64) -> Result<f64> {
        let t = self.axis.transform(x);
        let value = self.spline.evaluate(t).map_err(|error| in_coordinates(error, x, &self.axis))?;
        let slope = self.spline.derivative(t, 1)?;
        if slope == 0.0 {
            return Ok(0.0);
        }
        Ok(slope * self.axis.derivative(x) * self.values.back_derivative(value))
    }

    pub fn axis(&self) -> &Axis {
        &self.axis
    }

    /// `(low, high)` of the axis.
    pub fn domain(&self) -> (f64, f64) {
        (self.axis.low(), self.axis.high())
    }

    pub fn value_transform(&self) -> ValueTransform {
        self.values
    }

    /// Underlying spline over node indices and transformed values.
    pub fn spline(&self) -> &Spline1D {
        &self.spline
    }
}

/// Two-dimensional function sampled on the nodes of two axes.
#[derive(Debug, Clone)]
pub struct Interpolant2D {
    axis_x: Axis,
    axis_y: Axis,
    values: ValueTransform,
    spline: Spline2D,
}

impl Interpolant2D {
    pub fn new(axis_x: Axis, axis_y: Axis, f: impl Fn(f64, f64) -> f64) -> Result<Self> {
        Interpolant2D::with_settings(
            axis_x,
            axis_y,
            f,
            (BoundaryCondition::NotAKnot, BoundaryCondition::NotAKnot),
            ValueTransform::Identity,
            SplineOptions::default(),
        )
    }

    pub fn with_settings(
        axis_x: Axis,
        axis_y: Axis,
        f: impl Fn(f64, f64) -> f64,
        (boundary_x, boundary_y): (BoundaryCondition, BoundaryCondition),
        values: ValueTransform,
        options: SplineOptions,
    ) -> Result<Self> {
        let nodes_x = axis_x.nodes();
        let nodes_y = axis_y.nodes();
        let grid: Vec<Vec<f64>> = nodes_x
            .iter()
            .map(|x| nodes_y.iter().map(|y| values.transform(f(*x, *y))).collect())
            .collect();
        let spline = Spline2D::with_options(
            &node_indices(&axis_x, nodes_x.len()),
            &node_indices(&axis_y, nodes_y.len()),
            &grid,
            boundary_x,
            boundary_y,
            options,
        )?;

        debug!(
            axis_x = %axis_x.kind(),
            axis_y = %axis_y.kind(),
            nx = nodes_x.len(),
            ny = nodes_y.len(),
            ?values,
            "built interpolant"
        );

        Ok(Interpolant2D { axis_x, axis_y, values, spline })
    }

    pub fn evaluate(&self, x: f64, y: f64) -> Result<f64> {
        let (tx, ty) = (self.axis_x.transform(x), self.axis_y.transform(y));
        let value = self.spline.evaluate(tx, ty).map_err(|error| self.in_coordinates(error, tx, x, y))?;
        Ok(self.values.back_transform(value))
    }

    /// `[∂f/∂x, ∂f/∂y]` at `(x, y)`.
    pub fn gradient(&self, x: f64, y: f64) -> Result<[f64; 2]> {
        let (tx, ty) = (self.axis_x.transform(x), self.axis_y.transform(y));
        let value = self.spline.evaluate(tx, ty).map_err(|error| self.in_coordinates(error, tx, x, y))?;
        let [slope_x, slope_y] = self.spline.gradient(tx, ty)?;
        let scale = self.values.back_derivative(value);

        let chain = |slope: f64, axis: &Axis, coordinate: f64| {
            if slope == 0.0 {
                0.0
            } else {
                slope * axis.derivative(coordinate) * scale
            }
        };
        Ok([chain(slope_x, &self.axis_x, x), chain(slope_y, &self.axis_y, y)])
    }

    pub fn axes(&self) -> (&Axis, &Axis) {
        (&self.axis_x, &self.axis_y)
    }

    /// `((x_low, x_high), (y_low, y_high))`.
    pub fn domain(&self) -> ((f64, f64), (f64, f64)) {
        ((self.axis_x.low(), self.axis_x.high()), (self.axis_y.low(), self.axis_y.high()))
    }

    pub fn value_transform(&self) -> ValueTransform {
        self.values
    }

    /// Underlying bicubic spline over node indices and transformed values.
    pub fn spline(&self) -> &Spline2D {
        &self.spline
    }

    /// The x coordinate is checked first, so it is at fault whenever its node index is outside.
    fn in_coordinates(&self, error: SplineError, tx: f64, x: f64, y: f64) -> SplineError {
        if self.spline.x_knots().contains(tx) {
            in_coordinates(error, y, &self.axis_y)
        } else {
            in_coordinates(error, x, &self.axis_x)
        }
    }
}
