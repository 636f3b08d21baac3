use crate::{
    error::{Result, SplineError},
    grid_index::{self, Lookup},
};

const UNIFORM_SPACING_TOLERANCE: f64 = 1e-12;

/// Strictly increasing, finite knot coordinates with at least 2 entries.
///
/// The sequence remembers whether its knots are evenly spaced, in which case interval lookup is a
/// direct index computation instead of a binary search.
///
/// # Example
/// ```
/// use cubic_splines::KnotSequence;
///
/// let knots = KnotSequence::new(&[0.0, 0.5, 1.0, 1.5]).unwrap();
/// assert!(knots.is_uniform());
/// assert_eq!((0.0, 1.5), knots.domain());
/// assert_eq!(1, knots.locate(0.75));
/// ```
/// # Errors
/// ```
/// use cubic_splines::{KnotSequence, SplineError};
///
/// assert_eq!(Err(SplineError::NonMonotonic { index: 2 }), KnotSequence::new(&[0.0, 1.0, 1.0]));
/// assert_eq!(Err(SplineError::InsufficientData { got: 1, need: 2 }), KnotSequence::new(&[0.0]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct KnotSequence {
    values: Vec<f64>,
    is_spacing_uniform: bool,
}

impl KnotSequence {
    pub fn new(values: &[f64]) -> Result<Self> {
        if values.len() < 2 {
            return Err(SplineError::InsufficientData { got: values.len(), need: 2 });
        }
        if let Some(index) = values.iter().position(|x| !x.is_finite()) {
            return Err(SplineError::NonFinite { index });
        }
        if let Some(index) = values.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SplineError::NonMonotonic { index: index + 1 });
        }

        let first_spacing = values[1] - values[0];
        let is_spacing_uniform = values
            .windows(2)
            .map(|w| w[1] - w[0])
            .all(|spacing| (spacing - first_spacing).abs() <= UNIFORM_SPACING_TOLERANCE * first_spacing);

        Ok(KnotSequence { values: values.to_vec(), is_spacing_uniform })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`, a sequence holds at least 2 knots.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of intervals between consecutive knots.
    pub fn intervals(&self) -> usize {
        self.values.len() - 1
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn first(&self) -> f64 {
        self.values[0]
    }

    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// `(first, last)` knot.
    pub fn domain(&self) -> (f64, f64) {
        (self.first(), self.last())
    }

    pub fn is_uniform(&self) -> bool {
        self.is_spacing_uniform
    }

    pub fn contains(&self, x: f64) -> bool {
        self.first() <= x && x <= self.last()
    }

    /// Width of interval `index`.
    pub fn width(&self, index: usize) -> f64 {
        self.values[index + 1] - self.values[index]
    }

    /// Interval containing `x`. Values outside of the knots map to the boundary intervals.
    pub fn locate(&self, x: f64) -> usize {
        if self.is_spacing_uniform {
            grid_index::uniform(&self.values, x)
        } else if x > self.last() {
            self.values.len() - 2
        } else {
            grid_index::bisect(&self.values, x)
        }
    }

    /// Interval containing `x`, or [SplineError::OutOfDomain] outside of the knots.
    pub fn locate_strict(&self, x: f64) -> Result<usize> {
        if self.contains(x) {
            Ok(self.locate(x))
        } else {
            grid_index::locate(&self.values, x, Lookup::Strict)
        }
    }

    /// Like [KnotSequence::locate] but tries `hint` and the interval after it first.
    pub fn locate_with_hint(&self, hint: usize, x: f64) -> usize {
        grid_index::with_hint(&self.values, hint, x, |x| self.locate(x))
    }
}

impl AsRef<[f64]> for KnotSequence {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}
