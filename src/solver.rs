//! Spline coefficients from knots, samples and a boundary condition.
//!
//! The unknowns are the second derivatives `M_i` of the spline at the knots. Interior rows enforce
//! continuity of the first derivative, which together with interpolation at both ends of every
//! piece gives a C² spline:
//!
//! `h[i-1]·M[i-1] + 2·(h[i-1] + h[i])·M[i] + h[i]·M[i+1] = 6·(δ[i] - δ[i-1])`
//!
//! where `h[i] = x[i+1] - x[i]` and `δ[i] = (y[i+1] - y[i]) / h[i]`. The boundary condition fills the
//! first and the last row.

use tracing::{trace, warn};

use crate::{
    boundary::BoundaryCondition,
    error::{Result, SplineError},
    knot::KnotSequence,
    polynomial::{CoefficientTable, CubicPiece},
};

const PERIODIC_TOLERANCE: f64 = 1e-10;

/// Builds the coefficient table of the cubic spline through `(knots[i], samples[i])`.
///
/// # Example
/// ```
/// use cubic_splines::{solver, BoundaryCondition};
///
/// let table = solver::solve(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0], BoundaryCondition::Natural, 1e-14).unwrap();
///
/// assert_eq!(2, table.len());
/// assert_eq!(&[0.0, 1.5, 0.0, -0.5], table.piece(0).coefficients());
/// ```
/// # Errors
/// [SplineError::InsufficientData], [SplineError::NonMonotonic] or [SplineError::NonFinite] for
/// invalid knots, [SplineError::DimensionMismatch] when the lengths differ,
/// [SplineError::PeriodicMismatch] for periodic data with different end samples and
/// [SplineError::IllConditioned] when elimination meets a vanishing pivot.
pub fn solve(
    knots: &[f64],
    samples: &[f64],
    boundary: BoundaryCondition,
    pivot_tolerance: f64,
) -> Result<CoefficientTable> {
    let knots = KnotSequence::new(knots)?;
    solve_knots(&knots, samples, boundary, pivot_tolerance)
}

pub(crate) fn solve_knots(
    knots: &KnotSequence,
    samples: &[f64],
    boundary: BoundaryCondition,
    pivot_tolerance: f64,
) -> Result<CoefficientTable> {
    let size = knots.len();
    if samples.len() != size {
        return Err(SplineError::DimensionMismatch { expected: size, got: samples.len() });
    }
    if let Some(index) = samples.iter().position(|y| !y.is_finite()) {
        return Err(SplineError::NonFinite { index });
    }

    trace!(knots = size, ?boundary, "solving spline moments");

    let x = knots.as_slice();
    let mut y = samples.to_vec();
    let moments = match boundary {
        BoundaryCondition::Natural => natural_moments(x, &y, pivot_tolerance)?,
        BoundaryCondition::Clamped { start, end } => {
            if !start.is_finite() {
                return Err(SplineError::NonFinite { index: 0 });
            }
            if !end.is_finite() {
                return Err(SplineError::NonFinite { index: size - 1 });
            }
            clamped_moments(x, &y, start, end, pivot_tolerance)?
        }
        BoundaryCondition::NotAKnot => not_a_knot_moments(x, &y, pivot_tolerance)?,
        BoundaryCondition::Periodic => {
            let first = y[0];
            let last = y[size - 1];
            let scale = first.abs().max(last.abs()).max(1.0);
            if (first - last).abs() > PERIODIC_TOLERANCE * scale {
                return Err(SplineError::PeriodicMismatch { first, last });
            }
            if first != last {
                warn!(first, last, "periodic end samples differ within tolerance, using the first");
                y[size - 1] = first;
            }
            periodic_moments(x, &y, pivot_tolerance)?
        }
    };

    Ok(coefficients(x, &y, &moments))
}

/// Solves a tridiagonal system with the Thomas algorithm.
///
/// Row `i` reads `sub[i]·u[i-1] + diag[i]·u[i] + sup[i]·u[i+1] = rhs[i]`; `sub[0]` and
/// `sup[n-1]` are ignored.
///
/// # Errors
/// [SplineError::DimensionMismatch] when the slices differ in length and
/// [SplineError::IllConditioned] when a pivot is smaller than `pivot_tolerance` times the largest
/// entry of its row.
pub fn solve_tridiagonal(
    sub: &[f64],
    diag: &[f64],
    sup: &[f64],
    rhs: &[f64],
    pivot_tolerance: f64,
) -> Result<Vec<f64>> {
    let size = diag.len();
    for other in [sub.len(), sup.len(), rhs.len()] {
        if other != size {
            return Err(SplineError::DimensionMismatch { expected: size, got: other });
        }
    }
    if size == 0 {
        return Ok(Vec::new());
    }

    // each pivot is measured against the largest entry of its own row
    let row_scale = |row: usize| {
        let mut scale = diag[row].abs();
        if row > 0 {
            scale = scale.max(sub[row].abs());
        }
        if row + 1 < size {
            scale = scale.max(sup[row].abs());
        }
        scale
    };
    let check = |row: usize, pivot: f64| {
        if pivot.is_nan() || pivot.abs() <= pivot_tolerance * row_scale(row) {
            Err(SplineError::IllConditioned { row })
        } else {
            Ok(pivot)
        }
    };

    let mut sup_prime = Vec::with_capacity(size);
    let mut rhs_prime = Vec::with_capacity(size);

    let pivot = check(0, diag[0])?;
    sup_prime.push(sup[0] / pivot);
    rhs_prime.push(rhs[0] / pivot);

    for i in 1..size {
        let pivot = check(i, diag[i] - sub[i] * sup_prime[i - 1])?;
        sup_prime.push(sup[i] / pivot);
        rhs_prime.push((rhs[i] - sub[i] * rhs_prime[i - 1]) / pivot);
    }

    let mut solution = rhs_prime;
    for i in (0..size - 1).rev() {
        solution[i] -= sup_prime[i] * solution[i + 1];
    }
    Ok(solution)
}

/// Solves a tridiagonal system with additional corner entries `top_right` (row 0, last column) and
/// `bottom_left` (last row, column 0) using the Sherman-Morrison formula. Needs at least 3 rows.
pub fn solve_cyclic(
    sub: &[f64],
    diag: &[f64],
    sup: &[f64],
    rhs: &[f64],
    top_right: f64,
    bottom_left: f64,
    pivot_tolerance: f64,
) -> Result<Vec<f64>> {
    let size = diag.len();
    if size < 3 {
        return Err(SplineError::InsufficientData { got: size, need: 3 });
    }

    let gamma = -diag[0];
    if gamma == 0.0 {
        return Err(SplineError::IllConditioned { row: 0 });
    }
    let mut modified = diag.to_vec();
    modified[0] -= gamma;
    modified[size - 1] -= bottom_left * top_right / gamma;

    let mut solution = solve_tridiagonal(sub, &modified, sup, rhs, pivot_tolerance)?;

    let mut correction = vec![0.0; size];
    correction[0] = gamma;
    correction[size - 1] = bottom_left;
    let z = solve_tridiagonal(sub, &modified, sup, &correction, pivot_tolerance)?;

    let denominator = 1.0 + z[0] + top_right * z[size - 1] / gamma;
    if denominator.is_nan() || denominator.abs() <= f64::EPSILON {
        return Err(SplineError::IllConditioned { row: size - 1 });
    }
    let factor = (solution[0] + top_right * solution[size - 1] / gamma) / denominator;
    for (u, z) in solution.iter_mut().zip(z.iter()) {
        *u -= factor * z;
    }
    Ok(solution)
}

fn widths(x: &[f64]) -> Vec<f64> {
    x.windows(2).map(|w| w[1] - w[0]).collect()
}

fn slopes(x: &[f64], y: &[f64]) -> Vec<f64> {
    x.windows(2)
        .zip(y.windows(2))
        .map(|(x, y)| (y[1] - y[0]) / (x[1] - x[0]))
        .collect()
}

/// Rows of the interior continuity equations for knots `1..n-1`, indexed by knot.
fn interior_rows(h: &[f64], delta: &[f64]) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
    let size = h.len() + 1;
    let mut sub = vec![0.0; size];
    let mut diag = vec![0.0; size];
    let mut sup = vec![0.0; size];
    let mut rhs = vec![0.0; size];

    for i in 1..size - 1 {
        sub[i] = h[i - 1];
        diag[i] = 2.0 * (h[i - 1] + h[i]);
        sup[i] = h[i];
        rhs[i] = 6.0 * (delta[i] - delta[i - 1]);
    }
    (sub, diag, sup, rhs)
}

fn natural_moments(x: &[f64], y: &[f64], pivot_tolerance: f64) -> Result<Vec<f64>> {
    let h = widths(x);
    let delta = slopes(x, y);
    let (sub, mut diag, sup, rhs) = interior_rows(&h, &delta);

    let last = diag.len() - 1;
    diag[0] = 1.0;
    diag[last] = 1.0;

    solve_tridiagonal(&sub, &diag, &sup, &rhs, pivot_tolerance)
}

fn clamped_moments(x: &[f64], y: &[f64], start: f64, end: f64, pivot_tolerance: f64) -> Result<Vec<f64>> {
    let h = widths(x);
    let delta = slopes(x, y);
    let (mut sub, mut diag, mut sup, mut rhs) = interior_rows(&h, &delta);

    let last = diag.len() - 1;
    diag[0] = 2.0 * h[0];
    sup[0] = h[0];
    rhs[0] = 6.0 * (delta[0] - start);

    sub[last] = h[last - 1];
    diag[last] = 2.0 * h[last - 1];
    rhs[last] = 6.0 * (end - delta[last - 1]);

    solve_tridiagonal(&sub, &diag, &sup, &rhs, pivot_tolerance)
}

/// `M[0]` and `M[n-1]` follow from the equal third derivatives of the first two and the last two
/// pieces; substituting them into rows 1 and n-2 keeps the reduced system tridiagonal.
fn not_a_knot_moments(x: &[f64], y: &[f64], pivot_tolerance: f64) -> Result<Vec<f64>> {
    let size = x.len();
    let h = widths(x);
    let delta = slopes(x, y);

    match size {
        2 => return Ok(vec![0.0; 2]),
        3 => {
            let curvature = 2.0 * (delta[1] - delta[0]) / (h[0] + h[1]);
            return Ok(vec![curvature; 3]);
        }
        _ => {}
    }

    let (sub, diag, sup, rhs) = interior_rows(&h, &delta);
    let mut sub = sub[1..size - 1].to_vec();
    let mut diag = diag[1..size - 1].to_vec();
    let mut sup = sup[1..size - 1].to_vec();
    let mut rhs = rhs[1..size - 1].to_vec();
    let last = diag.len() - 1;

    let (h0, h1) = (h[0], h[1]);
    diag[0] = (h0 + h1) * (h0 + 2.0 * h1);
    sup[0] = h1 * h1 - h0 * h0;
    rhs[0] *= h1;

    let (a, b) = (h[size - 3], h[size - 2]);
    sub[last] = a * a - b * b;
    diag[last] = (a + b) * (2.0 * a + b);
    rhs[last] *= a;

    let interior = solve_tridiagonal(&sub, &diag, &sup, &rhs, pivot_tolerance)?;

    let mut moments = Vec::with_capacity(size);
    moments.push(((h0 + h1) * interior[0] - h0 * interior[1]) / h1);
    moments.extend_from_slice(&interior);
    moments.push(((a + b) * interior[last] - b * interior[last - 1]) / a);
    Ok(moments)
}

/// Unknowns are `M[0..n-1]` with `M[n-1] = M[0]`; the wrap-around couples the first and the last
/// unknown through the width of the last interval.
fn periodic_moments(x: &[f64], y: &[f64], pivot_tolerance: f64) -> Result<Vec<f64>> {
    let size = x.len();
    let h = widths(x);
    let delta = slopes(x, y);
    let unknowns = size - 1;

    let mut moments = match unknowns {
        1 => vec![0.0],
        2 => {
            let sum = h[0] + h[1];
            let r0 = 6.0 * (delta[0] - delta[1]);
            let r1 = 6.0 * (delta[1] - delta[0]);
            let determinant = 3.0 * sum * sum;
            vec![(2.0 * r0 - r1) * sum / determinant, (2.0 * r1 - r0) * sum / determinant]
        }
        _ => {
            let mut sub = Vec::with_capacity(unknowns);
            let mut diag = Vec::with_capacity(unknowns);
            let mut sup = Vec::with_capacity(unknowns);
            let mut rhs = Vec::with_capacity(unknowns);
            for i in 0..unknowns {
                let previous = (i + unknowns - 1) % unknowns;
                sub.push(h[previous]);
                diag.push(2.0 * (h[previous] + h[i]));
                sup.push(h[i]);
                rhs.push(6.0 * (delta[i] - delta[previous]));
            }
            let corner = h[unknowns - 1];
            solve_cyclic(&sub, &diag, &sup, &rhs, corner, corner, pivot_tolerance)?
        }
    };

    moments.push(moments[0]);
    Ok(moments)
}

fn coefficients(x: &[f64], y: &[f64], moments: &[f64]) -> CoefficientTable {
    let pieces = (0..x.len() - 1)
        .map(|i| {
            let h = x[i + 1] - x[i];
            let delta = (y[i + 1] - y[i]) / h;
            CubicPiece::new([
                y[i],
                delta - h * (2.0 * moments[i] + moments[i + 1]) / 6.0,
                moments[i] / 2.0,
                (moments[i + 1] - moments[i]) / (6.0 * h),
            ])
        })
        .collect();
    CoefficientTable::new(pieces)
}
