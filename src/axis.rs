use std::{f64::consts::LN_2, fmt::Display};

use crate::error::{Result, SplineError};

/// Node spacing of an [Axis].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AxisKind {
    /// `x_k = low + k·step`.
    Linear,
    /// `x_k = low·exp(k·step)`, for data spanning several orders of magnitude.
    Exponential,
    /// `x_k = low·(exp(k·step + ln 2) - 1)`, exponential growth which starts linear near `low`.
    ExpM1,
}

impl Display for AxisKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AxisKind::Linear => write!(f, "linear"),
            AxisKind::Exponential => write!(f, "exponential"),
            AxisKind::ExpM1 => write!(f, "exp-m1"),
        }
    }
}

/// Generates knots between `low` and `high` for sampling a function.
///
/// The axis maps a coordinate to a fractional node index with [Axis::transform]; node `k` sits at
/// [Axis::back_transform]`(k)`. Choosing the spacing to follow the data keeps the number of knots
/// and the interpolation error low.
///
/// # Example
/// ```
/// use cubic_splines::Axis;
///
/// let axis = Axis::exponential(1.0, 1000.0, 4).unwrap();
/// let nodes = axis.nodes();
///
/// assert_eq!(4, nodes.len());
/// assert!((nodes[1] - 10.0).abs() < 1e-9);
/// assert_eq!(1000.0, nodes[3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Axis {
    kind: AxisKind,
    low: f64,
    high: f64,
    step: f64,
}

impl Axis {
    /// Upper limit on the number of nodes.
    pub const MAX_NODES: usize = 1 << 24;

    /// Axis with `nodes` knots from `low` to `high`.
    /// # Errors
    /// [SplineError::InvalidAxis] when `nodes < 2`, `low >= high`, a limit is not finite or, for the
    /// exponential kinds, `low <= 0`.
    pub fn new(kind: AxisKind, low: f64, high: f64, nodes: usize) -> Result<Self> {
        if nodes < 2 {
            return Err(invalid(kind, format!("needs at least 2 nodes, got {}", nodes)));
        }
        if nodes > Axis::MAX_NODES {
            return Err(invalid(kind, format!("at most {} nodes are supported, got {}", Axis::MAX_NODES, nodes)));
        }
        check_limits(kind, low, high)?;

        let intervals = (nodes - 1) as f64;
        let step = match kind {
            AxisKind::Linear => (high - low) / intervals,
            AxisKind::Exponential => (high / low).ln() / intervals,
            AxisKind::ExpM1 => ((high / low).ln_1p() - LN_2) / intervals,
        };
        Ok(Axis { kind, low, high, step })
    }

    /// Axis with a fixed step in transformed coordinates. The last interval is shortened so that
    /// the last node lands on `high`.
    pub fn with_step(kind: AxisKind, low: f64, high: f64, step: f64) -> Result<Self> {
        check_limits(kind, low, high)?;
        if !(step.is_finite() && step > 0.0) {
            return Err(invalid(kind, format!("step must be positive, got {}", step)));
        }
        let axis = Axis { kind, low, high, step };
        if axis.checked_node_count().is_none() {
            return Err(invalid(kind, format!("step {} needs more than {} nodes", step, Axis::MAX_NODES)));
        }
        Ok(axis)
    }

    pub fn linear(low: f64, high: f64, nodes: usize) -> Result<Self> {
        Axis::new(AxisKind::Linear, low, high, nodes)
    }

    pub fn exponential(low: f64, high: f64, nodes: usize) -> Result<Self> {
        Axis::new(AxisKind::Exponential, low, high, nodes)
    }

    pub fn exp_m1(low: f64, high: f64, nodes: usize) -> Result<Self> {
        Axis::new(AxisKind::ExpM1, low, high, nodes)
    }

    pub fn kind(&self) -> AxisKind {
        self.kind
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Fractional node index of `x`.
    pub fn transform(&self, x: f64) -> f64 {
        match self.kind {
            AxisKind::Linear => (x - self.low) / self.step,
            AxisKind::Exponential => (x / self.low).ln() / self.step,
            AxisKind::ExpM1 => ((x / self.low).ln_1p() - LN_2) / self.step,
        }
    }

    /// Coordinate of the fractional node index `t`.
    pub fn back_transform(&self, t: f64) -> f64 {
        match self.kind {
            AxisKind::Linear => self.low + t * self.step,
            AxisKind::Exponential => self.low * (t * self.step).exp(),
            AxisKind::ExpM1 => self.low * (t * self.step + LN_2).exp_m1(),
        }
    }

    /// Derivative of [Axis::transform] at `x`.
    pub fn derivative(&self, x: f64) -> f64 {
        match self.kind {
            AxisKind::Linear => 1.0 / self.step,
            AxisKind::Exponential => 1.0 / (x * self.step),
            AxisKind::ExpM1 => 1.0 / (self.step * (x + self.low)),
        }
    }

    /// Number of nodes needed to reach `high`, never more than [Axis::MAX_NODES].
    pub fn node_count(&self) -> usize {
        self.checked_node_count().unwrap_or(Axis::MAX_NODES)
    }

    fn checked_node_count(&self) -> Option<usize> {
        let intervals = (self.transform(self.high) - 1e-9).ceil().max(1.0);
        if !intervals.is_finite() || intervals >= Axis::MAX_NODES as f64 {
            return None;
        }
        (intervals as usize).checked_add(1)
    }

    /// Strictly increasing nodes from `low` to `high`, both included.
    pub fn nodes(&self) -> Vec<f64> {
        let count = self.node_count();
        let mut nodes: Vec<f64> = (0..count - 1).map(|k| self.back_transform(k as f64)).collect();
        nodes[0] = self.low;
        nodes.push(self.high);
        nodes
    }
}

fn check_limits(kind: AxisKind, low: f64, high: f64) -> Result<()> {
    if !(low.is_finite() && high.is_finite()) {
        return Err(invalid(kind, "limits must be finite".to_string()));
    }
    if low >= high {
        return Err(invalid(kind, format!("low {} must be below high {}", low, high)));
    }
    if kind != AxisKind::Linear && low <= 0.0 {
        return Err(invalid(kind, format!("low must be positive, got {}", low)));
    }
    Ok(())
}

fn invalid(kind: AxisKind, reason: String) -> SplineError {
    SplineError::InvalidAxis { kind, reason }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn linear() {
        let axis = Axis::linear(-1.0, 1.0, 5).unwrap();

        assert_eq!(5, axis.node_count());
        assert_eq!(vec![-1.0, -0.5, 0.0, 0.5, 1.0], axis.nodes());
        assert_approx_eq!(axis.transform(0.25), 2.5, 1e-12);
        assert_approx_eq!(axis.back_transform(2.5), 0.25, 1e-12);
        assert_approx_eq!(axis.derivative(0.3), 2.0, 1e-12);
    }

    #[test]
    fn exponential() {
        let axis = Axis::exponential(0.1, 1000.0, 5).unwrap();
        let nodes = axis.nodes();

        assert_eq!(5, nodes.len());
        for (k, expected) in [0.1, 1.0, 10.0, 100.0, 1000.0].iter().enumerate() {
            assert_approx_eq!(nodes[k], *expected, 1e-9 * expected);
        }
        assert_approx_eq!(axis.transform(10.0), 2.0, 1e-12);

        let x = 3.0;
        let h = 1e-6;
        let numeric = (axis.transform(x + h) - axis.transform(x - h)) / (2.0 * h);
        assert_approx_eq!(axis.derivative(x), numeric, 1e-6);
    }

    #[test]
    fn exp_m1() {
        let axis = Axis::exp_m1(1.0, 100.0, 8).unwrap();
        let nodes = axis.nodes();

        assert_eq!(8, nodes.len());
        assert_eq!(1.0, nodes[0]);
        assert_eq!(100.0, nodes[7]);
        assert!(nodes.windows(2).all(|w| w[1] > w[0]));
        assert_approx_eq!(axis.back_transform(axis.transform(37.0)), 37.0, 1e-10);

        let x = 20.0;
        let h = 1e-5;
        let numeric = (axis.transform(x + h) - axis.transform(x - h)) / (2.0 * h);
        assert_approx_eq!(axis.derivative(x), numeric, 1e-7);
    }

    #[test]
    fn with_step() {
        let axis = Axis::with_step(AxisKind::Linear, 0.0, 1.0, 0.3).unwrap();

        assert_eq!(5, axis.node_count());
        let nodes = axis.nodes();
        assert_approx_eq!(nodes[3], 0.9, 1e-12);
        assert_eq!(1.0, nodes[4]);

        let exact = Axis::with_step(AxisKind::Linear, 0.0, 1.0, 0.25).unwrap();
        assert_eq!(5, exact.node_count());
    }

    #[test]
    fn node_limit() {
        let result = Axis::with_step(AxisKind::Linear, 0.0, 1.0, 1e-300);
        assert!(matches!(result, Err(SplineError::InvalidAxis { kind: AxisKind::Linear, .. })));

        let result = Axis::with_step(AxisKind::Exponential, 1.0, 1e300, 1e-300);
        assert!(matches!(result, Err(SplineError::InvalidAxis { kind: AxisKind::Exponential, .. })));

        assert!(Axis::linear(0.0, 1.0, Axis::MAX_NODES + 1).is_err());

        let dense = Axis::with_step(AxisKind::Linear, 0.0, 1.0, 1.0 / (1 << 23) as f64).unwrap();
        assert_eq!((1 << 23) + 1, dense.node_count());
    }

    #[test]
    fn invalid_axes() {
        assert!(Axis::linear(0.0, 1.0, 1).is_err());
        assert!(Axis::linear(1.0, 1.0, 3).is_err());
        assert!(Axis::linear(0.0, f64::INFINITY, 3).is_err());
        assert!(Axis::exponential(0.0, 1.0, 3).is_err());
        assert!(Axis::exp_m1(-1.0, 1.0, 3).is_err());
        assert!(Axis::with_step(AxisKind::Linear, 0.0, 1.0, 0.0).is_err());

        match Axis::exponential(-2.0, 1.0, 3) {
            Err(SplineError::InvalidAxis { kind, .. }) => assert_eq!(AxisKind::Exponential, kind),
            other => panic!("unexpected {:?}", other),
        }
    }
}
