/// Cubic `a + b·t + c·t² + d·t³` in the offset `t` from the left knot of its interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicPiece {
    coefficients: [f64; 4],
}

impl CubicPiece {
    pub fn new(coefficients: [f64; 4]) -> Self {
        CubicPiece { coefficients }
    }

    /// `[a, b, c, d]`, lowest power first.
    pub fn coefficients(&self) -> &[f64; 4] {
        &self.coefficients
    }

    pub fn evaluate(&self, t: f64) -> f64 {
        let [a, b, c, d] = self.coefficients;
        a + t * (b + t * (c + t * d))
    }

    /// Derivative of order `order` at offset `t`. Orders above 3 vanish.
    pub fn derivative(&self, t: f64, order: usize) -> f64 {
        let [a, b, c, d] = self.coefficients;
        match order {
            0 => a + t * (b + t * (c + t * d)),
            1 => b + t * (2.0 * c + t * 3.0 * d),
            2 => 2.0 * c + 6.0 * d * t,
            3 => 6.0 * d,
            _ => 0.0,
        }
    }
}

/// Cubic pieces of a 1-D spline, one per knot interval.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientTable {
    pieces: Vec<CubicPiece>,
}

impl CoefficientTable {
    pub(crate) fn new(pieces: Vec<CubicPiece>) -> Self {
        CoefficientTable { pieces }
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn piece(&self, interval: usize) -> &CubicPiece {
        &self.pieces[interval]
    }

    pub fn iter(&self) -> impl Iterator<Item = &CubicPiece> {
        self.pieces.iter()
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use super::*;

    #[test]
    fn evaluate() {
        let eps = 1e-6;
        let piece = CubicPiece::new([1.0, 2.5, -0.25, 0.0]);

        assert_approx_eq!(piece.evaluate(2.1), 5.1475, eps);
        assert_approx_eq!(piece.evaluate(-3.14), -9.3149, eps);
        assert_approx_eq!(piece.evaluate(0.0), 1.0, eps);
    }

    #[test]
    fn derivatives() {
        let eps = 1e-12;
        // 1 - 2t + 3t^2 + 0.5t^3
        let piece = CubicPiece::new([1.0, -2.0, 3.0, 0.5]);
        let t = 1.5;

        assert_approx_eq!(piece.derivative(t, 0), piece.evaluate(t), eps);
        assert_approx_eq!(piece.derivative(t, 1), -2.0 + 6.0 * t + 1.5 * t * t, eps);
        assert_approx_eq!(piece.derivative(t, 2), 6.0 + 3.0 * t, eps);
        assert_approx_eq!(piece.derivative(t, 3), 3.0, eps);
        assert_eq!(piece.derivative(t, 4), 0.0);
    }
}
