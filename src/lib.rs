//! Cubic and bicubic spline interpolation with selectable boundary conditions.
//!
//! [Spline1D] interpolates samples on strictly increasing knots with natural, clamped,
//! not-a-knot or periodic ends. [Spline2D] interpolates a rectangular grid with a bicubic
//! surface whose value and first derivatives are continuous across cells. [Interpolant1D] and
//! [Interpolant2D] sample a function on the nodes of an [Axis] and interpolate over node indices,
//! optionally on the logarithm of the values. Splines are immutable once built and can be
//! evaluated from several threads at once.
//!
//! # Example
//! ```
//! use cubic_splines::{BoundaryCondition, Spline1D};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let knots = [0.0, 1.0, 2.0];
//! let samples = [0.0, 1.0, 0.0];
//! let spline = Spline1D::new(&knots, &samples, BoundaryCondition::Natural).unwrap();
//!
//! assert_approx_eq!(1.0, spline.evaluate(1.0).unwrap(), 1e-12);
//! assert_approx_eq!(0.6875, spline.evaluate(0.5).unwrap(), 1e-12);
//! assert_approx_eq!(-3.0, spline.derivative(0.0, 3).unwrap(), 1e-12);
//! ```

mod axis;
mod bicubic;
mod boundary;
mod config;
mod error;
pub mod grid_index;
mod interpolant;
mod inverse;
mod knot;
mod polynomial;
pub mod solver;
mod spline;

pub use axis::{Axis, AxisKind};
pub use bicubic::Spline2D;
pub use boundary::BoundaryCondition;
pub use config::{Extrapolation, SearchConfig, SplineOptions};
pub use error::{Result, SplineError};
pub use interpolant::{Interpolant1D, Interpolant2D, ValueTransform};
pub use inverse::{Direction, ParameterGuess};
pub use knot::KnotSequence;
pub use polynomial::{CoefficientTable, CubicPiece};
pub use spline::Spline1D;
