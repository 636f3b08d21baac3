//! Interval lookup in a sorted knot sequence.
//!
//! An interval `i` covers `sequence[i] <= x < sequence[i + 1]`. The last knot belongs to the
//! last interval, so a sequence of `n` knots has intervals `0..n - 1`.

use crate::error::{Result, SplineError};

/// How [locate] treats values outside of `[sequence[0], sequence[n - 1]]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lookup {
    /// Values below the first knot map to the first interval, values above the last knot to the
    /// last interval.
    #[default]
    Clamped,
    /// Values outside of the knots are an error.
    Strict,
}

/// Returns the index of the interval which contains `value`.
///
/// # Example
/// ```
/// use cubic_splines::grid_index::{locate, Lookup};
///
/// let knots = [0.0, 1.0, 2.5, 4.0];
///
/// assert_eq!(0, locate(&knots, 0.5, Lookup::Clamped).unwrap());
/// assert_eq!(1, locate(&knots, 1.0, Lookup::Clamped).unwrap());
/// assert_eq!(2, locate(&knots, 4.0, Lookup::Strict).unwrap());
/// assert_eq!(2, locate(&knots, 7.0, Lookup::Clamped).unwrap());
/// assert!(locate(&knots, 7.0, Lookup::Strict).is_err());
/// ```
/// # Errors
/// [SplineError::InsufficientData] for sequences with fewer than 2 knots and
/// [SplineError::OutOfDomain] for [Lookup::Strict] queries outside of the knots (NaN included).
pub fn locate(sequence: &[f64], value: f64, lookup: Lookup) -> Result<usize> {
    let size = sequence.len();
    if size < 2 {
        return Err(SplineError::InsufficientData { got: size, need: 2 });
    }

    let first = sequence[0];
    let last = sequence[size - 1];
    if first <= value && value <= last {
        return Ok(bisect(sequence, value));
    }

    match lookup {
        Lookup::Strict => Err(SplineError::OutOfDomain { value, min: first, max: last }),
        Lookup::Clamped if value > last => Ok(size - 2),
        Lookup::Clamped => Ok(0),
    }
}

/// Binary search. `sequence` must hold at least 2 knots.
pub(crate) fn bisect(sequence: &[f64], value: f64) -> usize {
    let mut min = 0;
    let mut max = sequence.len() - 1;

    while max - min > 1 {
        let mid = (min + max) / 2;
        if value < sequence[mid] {
            max = mid;
        } else {
            min = mid;
        }
    }
    min
}

/// Direct index computation for evenly spaced knots, corrected by one step for rounding.
/// Values outside of the knots are clamped.
pub(crate) fn uniform(sequence: &[f64], value: f64) -> usize {
    let size = sequence.len();
    let last_interval = size - 2;
    let first = sequence[0];
    let last = sequence[size - 1];

    let relative = (value - first) / (last - first);
    if relative.is_nan() || relative <= 0.0 {
        return 0;
    }
    if relative >= 1.0 {
        return last_interval;
    }

    let mut index = ((relative * (size - 1) as f64).floor() as usize).min(last_interval);
    if value < sequence[index] && index > 0 {
        index -= 1;
    } else if value >= sequence[index + 1] && index < last_interval {
        index += 1;
    }
    index
}

/// Checks the hinted interval and its right neighbour before searching the whole sequence.
pub(crate) fn with_hint(sequence: &[f64], hint: usize, value: f64, search: impl Fn(f64) -> usize) -> usize {
    let last_interval = sequence.len() - 2;
    if hint <= last_interval {
        if is_in_interval(sequence, hint, value) {
            return hint;
        }
        if hint < last_interval && is_in_interval(sequence, hint + 1, value) {
            return hint + 1;
        }
    }
    search(value)
}

fn is_in_interval(sequence: &[f64], interval: usize, value: f64) -> bool {
    (sequence[interval] <= value && value < sequence[interval + 1])
        || (interval == sequence.len() - 2 && value == sequence[interval + 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_inside() {
        let knots = [0.0, 0.9, 1.1, 1.7, 2.0];

        assert_eq!(0, locate(&knots, 0.0, Lookup::Strict).unwrap());
        assert_eq!(0, locate(&knots, 0.5, Lookup::Strict).unwrap());
        assert_eq!(1, locate(&knots, 0.9, Lookup::Strict).unwrap());
        assert_eq!(2, locate(&knots, 1.5, Lookup::Strict).unwrap());
        assert_eq!(3, locate(&knots, 1.7, Lookup::Strict).unwrap());
        assert_eq!(3, locate(&knots, 2.0, Lookup::Strict).unwrap());
    }

    #[test]
    fn locate_outside() {
        let knots = [0.0, 1.0, 2.0];

        assert_eq!(0, locate(&knots, -3.0, Lookup::Clamped).unwrap());
        assert_eq!(1, locate(&knots, 3.0, Lookup::Clamped).unwrap());
        assert_eq!(
            Err(SplineError::OutOfDomain { value: -3.0, min: 0.0, max: 2.0 }),
            locate(&knots, -3.0, Lookup::Strict)
        );
        assert!(locate(&knots, 2.000001, Lookup::Strict).is_err());
        assert!(locate(&knots, f64::NAN, Lookup::Strict).is_err());
    }

    #[test]
    fn locate_too_short() {
        assert_eq!(
            Err(SplineError::InsufficientData { got: 1, need: 2 }),
            locate(&[1.0], 1.0, Lookup::Clamped)
        );
        assert!(locate(&[], 1.0, Lookup::Clamped).is_err());
    }

    #[test]
    fn two_knots() {
        let knots = [-1.0, 1.0];

        assert_eq!(0, locate(&knots, -1.0, Lookup::Strict).unwrap());
        assert_eq!(0, locate(&knots, 1.0, Lookup::Strict).unwrap());
        assert_eq!(0, uniform(&knots, 0.3));
    }

    #[test]
    fn uniform_matches_bisect() {
        let knots: Vec<f64> = (0..11).map(|i| 0.1 * i as f64).collect();

        for i in 0..=1000 {
            let x = 0.001 * i as f64;
            assert_eq!(bisect(&knots, x), uniform(&knots, x), "x = {}", x);
        }
        for x in knots.iter() {
            assert_eq!(bisect(&knots, *x), uniform(&knots, *x), "x = {}", x);
        }
        assert_eq!(0, uniform(&knots, -5.0));
        assert_eq!(9, uniform(&knots, 5.0));
    }

    #[test]
    fn hint() {
        let knots = [0.0, 1.0, 2.0, 3.0, 4.0];
        let search = |x| bisect(&knots, x);

        assert_eq!(1, with_hint(&knots, 1, 1.5, search));
        assert_eq!(2, with_hint(&knots, 1, 2.5, search));
        assert_eq!(3, with_hint(&knots, 0, 3.5, search));
        assert_eq!(0, with_hint(&knots, 3, 0.5, search));
        assert_eq!(3, with_hint(&knots, 3, 4.0, search));
        assert_eq!(2, with_hint(&knots, 17, 2.0, search));
    }
}
