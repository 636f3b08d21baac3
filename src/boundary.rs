/// End conditions closing the spline system.
///
/// Each variant fixes the first and the last row of the system solved for the knot second
/// derivatives.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundaryCondition {
    /// Second derivative is 0 at both ends.
    #[default]
    Natural,
    /// First derivative is `start` at the first knot and `end` at the last knot.
    Clamped { start: f64, end: f64 },
    /// Third derivative is continuous across the second and the second-to-last knot.
    /// With 3 knots the spline is the parabola through them, with 2 knots a line.
    NotAKnot,
    /// Value, first and second derivative wrap around from the last knot to the first.
    /// The first and the last sample must be equal.
    Periodic,
}

impl BoundaryCondition {
    pub fn clamped(start: f64, end: f64) -> Self {
        BoundaryCondition::Clamped { start, end }
    }

    /// Condition used for splines of derivative values across the perpendicular axis of a grid.
    ///
    /// Slopes prescribed along an edge are the same for every grid line, so their derivative
    /// along the edge is 0.
    pub(crate) fn for_cross_derivative(self) -> Self {
        match self {
            BoundaryCondition::Clamped { .. } => BoundaryCondition::Clamped { start: 0.0, end: 0.0 },
            other => other,
        }
    }
}
