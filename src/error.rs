use thiserror::Error;

use crate::axis::AxisKind;

/// Errors reported while building or querying a spline.
///
/// Every variant describes a caller-input precondition that was violated.
/// Construction either returns a fully valid spline or one of these errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplineError {
    /// Two inputs which must have the same length do not.
    #[error("dimension mismatch: expected {expected} values, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Knots are not strictly increasing at `index` (`knots[index] <= knots[index - 1]` or NaN).
    #[error("knots are not strictly increasing at index {index}")]
    NonMonotonic { index: usize },

    /// Too few knots to build the requested spline.
    #[error("insufficient data: got {got} knots, need at least {need}")]
    InsufficientData { got: usize, need: usize },

    /// A strict lookup or an `Extrapolation::Error` evaluation fell outside the knots.
    #[error("value {value} is outside of the domain [{min}, {max}]")]
    OutOfDomain { value: f64, min: f64, max: f64 },

    /// Pivot of the linear system is too small to divide by.
    #[error("linear system is ill-conditioned at row {row}")]
    IllConditioned { row: usize },

    /// A knot or a sample is infinite or NaN.
    #[error("non-finite input at index {index}")]
    NonFinite { index: usize },

    /// Periodic boundary requires the first and the last sample to be equal.
    #[error("periodic boundary requires equal end samples, got {first} and {last}")]
    PeriodicMismatch { first: f64, last: f64 },

    /// Axis limits or node count cannot describe an axis.
    #[error("invalid {kind} axis: {reason}")]
    InvalidAxis { kind: AxisKind, reason: String },

    /// Parameter search bracket does not contain the requested value.
    #[error("no bracket: spline does not cross {value} between {lower} and {upper}")]
    NoBracket { value: f64, lower: f64, upper: f64 },

    /// Parameter search did not reach the tolerance.
    #[error("parameter search did not converge after {iterations} iterations")]
    NoConvergence { iterations: usize },
}

pub type Result<T> = std::result::Result<T, SplineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = SplineError::OutOfDomain { value: 5.0, min: 0.0, max: 3.0 };
        assert_eq!("value 5 is outside of the domain [0, 3]", err.to_string());

        let err = SplineError::InsufficientData { got: 1, need: 2 };
        assert!(err.to_string().contains("need at least 2"));

        let err = SplineError::InvalidAxis { kind: AxisKind::Exponential, reason: "low must be positive".to_string() };
        assert_eq!("invalid exponential axis: low must be positive", err.to_string());
    }
}
