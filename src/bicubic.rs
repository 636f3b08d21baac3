//! Bicubic spline on a rectangular grid.
//!
//! Grid derivatives come from 1-D splines: along x on every grid column for `∂z/∂x`, along y on
//! every grid row for `∂z/∂y`, and along y over the `∂z/∂x` values for `∂²z/∂x∂y`. Each cell is
//! then the bicubic Hermite patch of the values and derivatives at its four corners.

use nalgebra::{DMatrix, Matrix4, Vector4};
use tracing::debug;

use crate::{
    axis::Axis,
    boundary::BoundaryCondition,
    config::{Extrapolation, SplineOptions},
    error::{Result, SplineError},
    knot::KnotSequence,
    spline::Spline1D,
};

/// Tensor-product bicubic spline through `(x[i], y[j], grid[i][j])`.
///
/// Values and first derivatives are continuous across cell edges.
///
/// # Example
/// ```
/// use cubic_splines::{BoundaryCondition, Spline2D};
/// use assert_approx_eq::assert_approx_eq;
///
/// let grid = [[0.0, 1.0], [1.0, 0.0]];
/// let spline = Spline2D::new(&[0.0, 1.0], &[0.0, 1.0], &grid, BoundaryCondition::Natural, BoundaryCondition::Natural).unwrap();
///
/// assert_approx_eq!(0.0, spline.evaluate(0.0, 0.0).unwrap(), 1e-12);
/// assert_approx_eq!(1.0, spline.evaluate(0.0, 1.0).unwrap(), 1e-12);
/// assert_approx_eq!(0.5, spline.evaluate(0.5, 0.5).unwrap(), 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Spline2D {
    x: KnotSequence,
    y: KnotSequence,
    /// Coefficients `a[p][q]` of `s^p·w^q` in normalized cell offsets, row-major over cells.
    cells: Vec<Matrix4<f64>>,
    boundary_x: BoundaryCondition,
    boundary_y: BoundaryCondition,
    options: SplineOptions,
}

/// Cell lookup of one coordinate: interval, normalized offset and interval width.
type CellCoordinate = (usize, f64, f64);

impl Spline2D {
    /// Builds a bicubic spline with default [SplineOptions]. `grid[i][j]` is the sample at
    /// `(x_knots[i], y_knots[j])`.
    /// # Errors
    /// [SplineError::DimensionMismatch] when the grid is not `x_knots.len() × y_knots.len()`, and
    /// every error of [Spline1D::new] for either axis.
    /// ```
    /// use cubic_splines::{BoundaryCondition, Spline2D, SplineError};
    ///
    /// let grid = vec![vec![0.0, 1.0], vec![1.0]];
    /// let result = Spline2D::new(&[0.0, 1.0], &[0.0, 1.0], &grid, BoundaryCondition::Natural, BoundaryCondition::Natural);
    ///
    /// assert_eq!(SplineError::DimensionMismatch { expected: 2, got: 1 }, result.unwrap_err());
    /// ```
    pub fn new<R: AsRef<[f64]>>(
        x_knots: &[f64],
        y_knots: &[f64],
        grid: &[R],
        boundary_x: BoundaryCondition,
        boundary_y: BoundaryCondition,
    ) -> Result<Self> {
        Spline2D::with_options(x_knots, y_knots, grid, boundary_x, boundary_y, SplineOptions::default())
    }

    pub fn with_options<R: AsRef<[f64]>>(
        x_knots: &[f64],
        y_knots: &[f64],
        grid: &[R],
        boundary_x: BoundaryCondition,
        boundary_y: BoundaryCondition,
        options: SplineOptions,
    ) -> Result<Self> {
        let x = KnotSequence::new(x_knots)?;
        let y = KnotSequence::new(y_knots)?;

        if grid.len() != x.len() {
            return Err(SplineError::DimensionMismatch { expected: x.len(), got: grid.len() });
        }
        if let Some(row) = grid.iter().find(|row| row.as_ref().len() != y.len()) {
            return Err(SplineError::DimensionMismatch { expected: y.len(), got: row.as_ref().len() });
        }

        let z = DMatrix::from_fn(x.len(), y.len(), |i, j| grid[i].as_ref()[j]);
        Spline2D::build(x, y, z, boundary_x, boundary_y, options)
    }

    /// Like [Spline2D::new] for samples already held in a matrix with one row per x knot.
    pub fn from_matrix(
        x_knots: &[f64],
        y_knots: &[f64],
        grid: &DMatrix<f64>,
        boundary_x: BoundaryCondition,
        boundary_y: BoundaryCondition,
    ) -> Result<Self> {
        Spline2D::from_matrix_with_options(x_knots, y_knots, grid, boundary_x, boundary_y, SplineOptions::default())
    }

    pub fn from_matrix_with_options(
        x_knots: &[f64],
        y_knots: &[f64],
        grid: &DMatrix<f64>,
        boundary_x: BoundaryCondition,
        boundary_y: BoundaryCondition,
        options: SplineOptions,
    ) -> Result<Self> {
        let x = KnotSequence::new(x_knots)?;
        let y = KnotSequence::new(y_knots)?;

        if grid.nrows() != x.len() {
            return Err(SplineError::DimensionMismatch { expected: x.len(), got: grid.nrows() });
        }
        if grid.ncols() != y.len() {
            return Err(SplineError::DimensionMismatch { expected: y.len(), got: grid.ncols() });
        }

        Spline2D::build(x, y, grid.clone(), boundary_x, boundary_y, options)
    }

    /// Samples `f` on the nodes of both axes.
    pub fn from_fn(
        axis_x: &Axis,
        axis_y: &Axis,
        f: impl Fn(f64, f64) -> f64,
        boundary_x: BoundaryCondition,
        boundary_y: BoundaryCondition,
    ) -> Result<Self> {
        Spline2D::from_fn_with_options(axis_x, axis_y, f, boundary_x, boundary_y, SplineOptions::default())
    }

    pub fn from_fn_with_options(
        axis_x: &Axis,
        axis_y: &Axis,
        f: impl Fn(f64, f64) -> f64,
        boundary_x: BoundaryCondition,
        boundary_y: BoundaryCondition,
        options: SplineOptions,
    ) -> Result<Self> {
        let x_knots = axis_x.nodes();
        let y_knots = axis_y.nodes();
        let grid: Vec<Vec<f64>> = x_knots
            .iter()
            .map(|x| y_knots.iter().map(|y| f(*x, *y)).collect())
            .collect();
        Spline2D::with_options(&x_knots, &y_knots, &grid, boundary_x, boundary_y, options)
    }

    fn build(
        x: KnotSequence,
        y: KnotSequence,
        z: DMatrix<f64>,
        boundary_x: BoundaryCondition,
        boundary_y: BoundaryCondition,
        options: SplineOptions,
    ) -> Result<Self> {
        let (nx, ny) = z.shape();
        if let Some(index) = z.transpose().iter().position(|value| !value.is_finite()) {
            return Err(SplineError::NonFinite { index });
        }

        let along_x = |values: Vec<f64>| Spline1D::from_sequence(x.clone(), &values, boundary_x, options);
        let along_y = |values: Vec<f64>, boundary| Spline1D::from_sequence(y.clone(), &values, boundary, options);

        let mut dz_dx = DMatrix::<f64>::zeros(nx, ny);
        for j in 0..ny {
            let spline = along_x(z.column(j).iter().copied().collect())?;
            for i in 0..nx {
                dz_dx[(i, j)] = spline.knot_slope(i);
            }
        }

        let mut dz_dy = DMatrix::<f64>::zeros(nx, ny);
        let mut d2z_dxdy = DMatrix::<f64>::zeros(nx, ny);
        for i in 0..nx {
            let spline = along_y(z.row(i).iter().copied().collect(), boundary_y)?;
            let cross = along_y(dz_dx.row(i).iter().copied().collect(), boundary_y.for_cross_derivative())?;
            for j in 0..ny {
                dz_dy[(i, j)] = spline.knot_slope(j);
                d2z_dxdy[(i, j)] = cross.knot_slope(j);
            }
        }

        let hermite = hermite_matrix();
        let mut cells = Vec::with_capacity((nx - 1) * (ny - 1));
        for i in 0..nx - 1 {
            let hx = x.width(i);
            for j in 0..ny - 1 {
                let hy = y.width(j);
                let corners = Matrix4::new(
                    z[(i, j)], z[(i, j + 1)], dz_dy[(i, j)] * hy, dz_dy[(i, j + 1)] * hy,
                    z[(i + 1, j)], z[(i + 1, j + 1)], dz_dy[(i + 1, j)] * hy, dz_dy[(i + 1, j + 1)] * hy,
                    dz_dx[(i, j)] * hx, dz_dx[(i, j + 1)] * hx, d2z_dxdy[(i, j)] * hx * hy, d2z_dxdy[(i, j + 1)] * hx * hy,
                    dz_dx[(i + 1, j)] * hx, dz_dx[(i + 1, j + 1)] * hx, d2z_dxdy[(i + 1, j)] * hx * hy, d2z_dxdy[(i + 1, j + 1)] * hx * hy,
                );
                cells.push(hermite.transpose() * corners * hermite);
            }
        }

        debug!(nx, ny, ?boundary_x, ?boundary_y, "built bicubic spline");

        Ok(Spline2D { x, y, cells, boundary_x, boundary_y, options })
    }

    /// Value at `(x, y)`. Outside of the grid the [Extrapolation] policy applies to each axis.
    pub fn evaluate(&self, x: f64, y: f64) -> Result<f64> {
        self.derivative(x, y, 0, 0)
    }

    /// `[∂z/∂x, ∂z/∂y]` at `(x, y)`.
    pub fn gradient(&self, x: f64, y: f64) -> Result<[f64; 2]> {
        Ok([self.derivative(x, y, 1, 0)?, self.derivative(x, y, 0, 1)?])
    }

    /// `∂²z/∂x∂y` at `(x, y)`.
    pub fn cross_derivative(&self, x: f64, y: f64) -> Result<f64> {
        self.derivative(x, y, 1, 1)
    }

    /// Mixed partial derivative of order `order_x` in x and `order_y` in y, taken analytically from
    /// the cell containing `(x, y)`. Orders above 3 are 0.
    pub fn derivative(&self, x: f64, y: f64, order_x: usize, order_y: usize) -> Result<f64> {
        let cell_x = self.coordinate(&self.x, x, order_x)?;
        let cell_y = self.coordinate(&self.y, y, order_y)?;

        match (cell_x, cell_y) {
            (Some(cell_x), Some(cell_y)) => Ok(self.evaluate_cell(cell_x, cell_y, order_x, order_y)),
            _ => Ok(0.0),
        }
    }

    pub fn x_knots(&self) -> &KnotSequence {
        &self.x
    }

    pub fn y_knots(&self) -> &KnotSequence {
        &self.y
    }

    /// `((x_min, x_max), (y_min, y_max))`.
    pub fn domain(&self) -> ((f64, f64), (f64, f64)) {
        (self.x.domain(), self.y.domain())
    }

    /// `(x_knots.len(), y_knots.len())`.
    pub fn shape(&self) -> (usize, usize) {
        (self.x.len(), self.y.len())
    }

    /// Coefficients `a[p][q]` of the cell `[x_i, x_{i+1}] × [y_j, y_{j+1}]`, for
    /// `Σ a[p][q]·s^p·w^q` with `s = (x - x_i)/(x_{i+1} - x_i)` and `w` likewise.
    pub fn cell_coefficients(&self, i: usize, j: usize) -> &Matrix4<f64> {
        &self.cells[i * self.y.intervals() + j]
    }

    pub fn boundaries(&self) -> (BoundaryCondition, BoundaryCondition) {
        (self.boundary_x, self.boundary_y)
    }

    pub fn options(&self) -> &SplineOptions {
        &self.options
    }

    /// `None` when a clamped coordinate makes the requested derivative vanish.
    fn coordinate(&self, knots: &KnotSequence, value: f64, order: usize) -> Result<Option<CellCoordinate>> {
        let value = if knots.contains(value) {
            value
        } else {
            let (min, max) = knots.domain();
            match self.options.extrapolation {
                Extrapolation::Extrapolate => value,
                Extrapolation::Clamp if order > 0 && !value.is_nan() => return Ok(None),
                Extrapolation::Clamp if value < min => min,
                Extrapolation::Clamp if value > max => max,
                Extrapolation::Clamp => value,
                Extrapolation::Error => return Err(SplineError::OutOfDomain { value, min, max }),
            }
        };

        let interval = knots.locate(value);
        let width = knots.width(interval);
        Ok(Some((interval, (value - knots.as_slice()[interval]) / width, width)))
    }

    fn evaluate_cell(&self, cell_x: CellCoordinate, cell_y: CellCoordinate, order_x: usize, order_y: usize) -> f64 {
        let (i, s, hx) = cell_x;
        let (j, w, hy) = cell_y;
        let coefficients = self.cell_coefficients(i, j);

        let value = power_basis(s, order_x).dot(&(coefficients * power_basis(w, order_y)));
        value / (hx.powi(order_x as i32) * hy.powi(order_y as i32))
    }
}

/// Maps `[p(0), p(1), p'(0), p'(1)]` to the power coefficients of the cubic `p` on `[0, 1]`.
#[rustfmt::skip]
fn hermite_matrix() -> Matrix4<f64> {
    Matrix4::new(
        1.0, 0.0, -3.0, 2.0,
        0.0, 0.0, 3.0, -2.0,
        0.0, 1.0, -2.0, 1.0,
        0.0, 0.0, -1.0, 1.0,
    )
}

/// `order`-th derivative of `[1, t, t², t³]`.
fn power_basis(t: f64, order: usize) -> Vector4<f64> {
    let mut basis = Vector4::zeros();
    for power in order..4 {
        let factor: usize = (power - order + 1..=power).product();
        basis[power] = factor as f64 * t.powi((power - order) as i32);
    }
    basis
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::*;

    fn separable(x: f64, y: f64) -> f64 {
        (x.powi(3) - 2.0 * x) * (y * y + 1.0)
    }

    #[test]
    fn power_basis_derivatives() {
        let t = 0.5;

        assert_eq!(Vector4::new(1.0, 0.5, 0.25, 0.125), power_basis(t, 0));
        assert_eq!(Vector4::new(0.0, 1.0, 1.0, 0.75), power_basis(t, 1));
        assert_eq!(Vector4::new(0.0, 0.0, 2.0, 3.0), power_basis(t, 2));
        assert_eq!(Vector4::new(0.0, 0.0, 0.0, 6.0), power_basis(t, 3));
        assert_eq!(Vector4::zeros(), power_basis(t, 4));
    }

    #[test]
    fn saddle_example() {
        let grid = [[0.0, 1.0], [1.0, 0.0]];
        let natural = BoundaryCondition::Natural;
        let spline = Spline2D::new(&[0.0, 1.0], &[0.0, 1.0], &grid, natural, natural).unwrap();

        assert_approx_eq!(spline.evaluate(0.0, 0.0).unwrap(), 0.0, 1e-12);
        assert_approx_eq!(spline.evaluate(1.0, 1.0).unwrap(), 0.0, 1e-12);
        assert_approx_eq!(spline.evaluate(0.0, 1.0).unwrap(), 1.0, 1e-12);
        assert_approx_eq!(spline.evaluate(1.0, 0.0).unwrap(), 1.0, 1e-12);
        // bilinear x + y - 2xy
        assert_approx_eq!(spline.evaluate(0.25, 0.5).unwrap(), 0.5, 1e-12);
        assert_approx_eq!(spline.cross_derivative(0.3, 0.8).unwrap(), -2.0, 1e-12);
    }

    #[test]
    fn reproduces_grid() {
        let mut rng = StdRng::seed_from_u64(17);
        let x_knots = [0.0, 0.4, 1.0, 1.3, 2.2, 3.0];
        let y_knots = [-1.0, 0.0, 0.5, 2.0];
        let mut grid: Vec<Vec<f64>> = (0..x_knots.len())
            .map(|_| (0..y_knots.len()).map(|_| rng.gen_range(-5.0..5.0)).collect())
            .collect();
        for i in 0..x_knots.len() {
            grid[i][y_knots.len() - 1] = grid[i][0];
        }
        let last_row = grid[0].clone();
        grid[x_knots.len() - 1] = last_row;

        let boundaries = [
            BoundaryCondition::Natural,
            BoundaryCondition::clamped(0.5, -1.0),
            BoundaryCondition::NotAKnot,
            BoundaryCondition::Periodic,
        ];
        for boundary_x in boundaries {
            for boundary_y in boundaries {
                let spline = Spline2D::new(&x_knots, &y_knots, &grid, boundary_x, boundary_y).unwrap();
                for (i, x) in x_knots.iter().enumerate() {
                    for (j, y) in y_knots.iter().enumerate() {
                        assert_approx_eq!(spline.evaluate(*x, *y).unwrap(), grid[i][j], 1e-10);
                    }
                }
            }
        }
    }

    #[test]
    fn reproduces_separable_cubic() {
        let x_knots = [-1.0, -0.3, 0.2, 1.0, 1.8];
        let y_knots = [0.0, 0.7, 1.1, 2.0];
        let grid: Vec<Vec<f64>> = x_knots
            .iter()
            .map(|x| y_knots.iter().map(|y| separable(*x, *y)).collect())
            .collect();
        let not_a_knot = BoundaryCondition::NotAKnot;

        let spline = Spline2D::new(&x_knots, &y_knots, &grid, not_a_knot, not_a_knot).unwrap();

        for (x, y) in [(-0.8, 0.1), (0.0, 0.9), (0.5, 1.5), (1.7, 1.95), (0.2, 0.7)] {
            assert_approx_eq!(spline.evaluate(x, y).unwrap(), separable(x, y), 1e-9);

            let [dx, dy] = spline.gradient(x, y).unwrap();
            assert_approx_eq!(dx, (3.0 * x * x - 2.0) * (y * y + 1.0), 1e-8);
            assert_approx_eq!(dy, (x.powi(3) - 2.0 * x) * 2.0 * y, 1e-8);
            assert_approx_eq!(spline.cross_derivative(x, y).unwrap(), (3.0 * x * x - 2.0) * 2.0 * y, 1e-7);
        }
    }

    #[test]
    fn continuous_across_cells() {
        let mut rng = StdRng::seed_from_u64(23);
        let x_knots = [0.0, 1.0, 1.5, 3.0];
        let y_knots = [0.0, 0.5, 1.5, 2.0, 2.2];
        let grid: Vec<Vec<f64>> = (0..x_knots.len())
            .map(|_| (0..y_knots.len()).map(|_| rng.gen_range(-1.0..1.0)).collect())
            .collect();
        let natural = BoundaryCondition::Natural;
        let spline = Spline2D::new(&x_knots, &y_knots, &grid, natural, natural).unwrap();

        for i in 1..x_knots.len() - 1 {
            let left = (i - 1, 1.0, x_knots[i] - x_knots[i - 1]);
            let right = (i, 0.0, x_knots[i + 1] - x_knots[i]);
            for j in 0..y_knots.len() - 1 {
                for w in [0.0, 0.3, 0.9] {
                    let cell_y = (j, w, y_knots[j + 1] - y_knots[j]);
                    for (order_x, order_y) in [(0, 0), (1, 0), (0, 1)] {
                        assert_approx_eq!(
                            spline.evaluate_cell(left, cell_y, order_x, order_y),
                            spline.evaluate_cell(right, cell_y, order_x, order_y),
                            1e-9
                        );
                    }
                }
            }
        }

        for j in 1..y_knots.len() - 1 {
            let below = (j - 1, 1.0, y_knots[j] - y_knots[j - 1]);
            let above = (j, 0.0, y_knots[j + 1] - y_knots[j]);
            for i in 0..x_knots.len() - 1 {
                let cell_x = (i, 0.6, x_knots[i + 1] - x_knots[i]);
                for (order_x, order_y) in [(0, 0), (1, 0), (0, 1)] {
                    assert_approx_eq!(
                        spline.evaluate_cell(cell_x, below, order_x, order_y),
                        spline.evaluate_cell(cell_x, above, order_x, order_y),
                        1e-9
                    );
                }
            }
        }
    }

    #[test]
    fn periodic_along_y() {
        let period = 2.0 * std::f64::consts::PI;
        let x_axis = Axis::linear(0.0, 1.0, 5).unwrap();
        let y_axis = Axis::linear(0.0, period, 25).unwrap();
        let spline = Spline2D::from_fn(
            &x_axis,
            &y_axis,
            |x, y| (1.0 + x) * y.cos(),
            BoundaryCondition::Natural,
            BoundaryCondition::Periodic,
        )
        .unwrap();

        for x in [0.0, 0.35, 1.0] {
            let [_, start] = spline.gradient(x, 0.0).unwrap();
            let [_, end] = spline.gradient(x, period).unwrap();
            assert_approx_eq!(start, end, 1e-9);
            assert_approx_eq!(spline.evaluate(x, 1.0).unwrap(), (1.0 + x) * 1.0_f64.cos(), 1e-3);
        }
    }

    #[test]
    fn extrapolation_policies() {
        let grid = [[0.0, 1.0], [1.0, 0.0]];
        let natural = BoundaryCondition::Natural;

        let extrapolate = Spline2D::new(&[0.0, 1.0], &[0.0, 1.0], &grid, natural, natural).unwrap();
        // x + y - 2xy at (2, 0.5)
        assert_approx_eq!(extrapolate.evaluate(2.0, 0.5).unwrap(), 0.5, 1e-12);
        assert_approx_eq!(extrapolate.evaluate(-1.0, 2.0).unwrap(), 5.0, 1e-12);

        let clamp = Spline2D::with_options(
            &[0.0, 1.0],
            &[0.0, 1.0],
            &grid,
            natural,
            natural,
            SplineOptions::default().with_extrapolation(Extrapolation::Clamp),
        )
        .unwrap();
        assert_approx_eq!(clamp.evaluate(-1.0, 2.0).unwrap(), 1.0, 1e-12);
        let [dx, dy] = clamp.gradient(-1.0, 0.0).unwrap();
        assert_eq!(0.0, dx);
        assert_approx_eq!(dy, 1.0, 1e-12);

        let error = Spline2D::with_options(
            &[0.0, 1.0],
            &[0.0, 1.0],
            &grid,
            natural,
            natural,
            SplineOptions::default().with_extrapolation(Extrapolation::Error),
        )
        .unwrap();
        assert_eq!(
            Err(SplineError::OutOfDomain { value: 1.5, min: 0.0, max: 1.0 }),
            error.evaluate(0.5, 1.5)
        );
    }

    #[test]
    fn from_matrix() {
        let grid = DMatrix::from_row_slice(3, 2, &[0.0, 1.0, 1.0, 2.0, 2.0, 3.0]);
        let natural = BoundaryCondition::Natural;

        let spline = Spline2D::from_matrix(&[0.0, 1.0, 2.0], &[0.0, 1.0], &grid, natural, natural).unwrap();
        assert_eq!((3, 2), spline.shape());
        assert_approx_eq!(spline.evaluate(1.5, 0.5).unwrap(), 2.0, 1e-12);

        let transposed = grid.transpose();
        assert_eq!(
            SplineError::DimensionMismatch { expected: 3, got: 2 },
            Spline2D::from_matrix(&[0.0, 1.0, 2.0], &[0.0, 1.0], &transposed, natural, natural).unwrap_err()
        );
    }

    #[test]
    fn constructors_keep_options() {
        let options = SplineOptions::default().with_extrapolation(Extrapolation::Error);
        let natural = BoundaryCondition::Natural;

        let grid = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
        let spline =
            Spline2D::from_matrix_with_options(&[0.0, 1.0], &[0.0, 1.0], &grid, natural, natural, options).unwrap();
        assert_eq!(
            Err(SplineError::OutOfDomain { value: -0.5, min: 0.0, max: 1.0 }),
            spline.evaluate(-0.5, 0.5)
        );

        let axis = Axis::linear(0.0, 2.0, 5).unwrap();
        let spline = Spline2D::from_fn_with_options(&axis, &axis, |x, y| x * y, natural, natural, options).unwrap();
        assert_eq!(&options, spline.options());
        assert_approx_eq!(spline.evaluate(1.5, 0.5).unwrap(), 0.75, 1e-12);
        assert_eq!(
            Err(SplineError::OutOfDomain { value: 2.5, min: 0.0, max: 2.0 }),
            spline.evaluate(1.0, 2.5)
        );
    }

    #[test]
    fn invalid_grid() {
        let natural = BoundaryCondition::Natural;
        let x_knots = [0.0, 1.0, 2.0];
        let y_knots = [0.0, 1.0];

        let short = vec![vec![0.0, 1.0], vec![1.0, 2.0]];
        assert_eq!(
            SplineError::DimensionMismatch { expected: 3, got: 2 },
            Spline2D::new(&x_knots, &y_knots, &short, natural, natural).unwrap_err()
        );

        let ragged = vec![vec![0.0, 1.0], vec![1.0, 2.0, 3.0], vec![0.0, 0.0]];
        assert_eq!(
            SplineError::DimensionMismatch { expected: 2, got: 3 },
            Spline2D::new(&x_knots, &y_knots, &ragged, natural, natural).unwrap_err()
        );

        let nan = vec![vec![0.0, 1.0], vec![1.0, f64::NAN], vec![0.0, 0.0]];
        assert_eq!(
            SplineError::NonFinite { index: 3 },
            Spline2D::new(&x_knots, &y_knots, &nan, natural, natural).unwrap_err()
        );

        let grid = vec![vec![0.0, 1.0], vec![1.0, 2.0], vec![0.0, 0.0]];
        assert_eq!(
            SplineError::NonMonotonic { index: 2 },
            Spline2D::new(&[0.0, 1.0, 0.5], &y_knots, &grid, natural, natural).unwrap_err()
        );
    }
}
