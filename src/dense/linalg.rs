use log::debug;

use crate::linalg::gauss::{
    cofactor_inverse, gauss_back_substitute, gauss_det, gauss_eliminate_in_place,
};
use crate::traits::{LinalgScalar, LinearSolve, Scalar};
use crate::vector::Vector;

use super::DenseMatrix;

impl<T: LinalgScalar> DenseMatrix<T> {
    /// Solve `A x = b` by Gaussian elimination with partial pivoting.
    ///
    /// Consumes the matrix: its storage is overwritten by the elimination.
    /// The matrix must be non-singular; this is not checked.
    ///
    /// ```
    /// use linsolve::{DenseMatrix, Vector};
    /// let a = DenseMatrix::from_rows(3, &[
    ///     2.0_f64, 1.0, -1.0,
    ///     -3.0, -1.0, 2.0,
    ///     -2.0, 1.0, 2.0,
    /// ]);
    /// let x = a.solve(&Vector::from_slice(&[8.0, -11.0, -3.0]));
    /// assert!((x[0] - 2.0).abs() < 1e-12);
    /// assert!((x[1] - 3.0).abs() < 1e-12);
    /// assert!((x[2] + 1.0).abs() < 1e-12);
    /// ```
    pub fn solve(mut self, b: &Vector<T>) -> Vector<T> {
        let n = self.n;
        debug_assert_eq!(b.len(), n, "rhs length mismatch");
        let mut rhs = b.as_slice().to_vec();
        let mut perm = vec![0usize; n];
        let swaps = gauss_eliminate_in_place(&mut self, &mut perm, Some(&mut rhs));
        let mut x = vec![T::zero(); n];
        gauss_back_substitute(&self, &perm, &rhs, &mut x);
        debug!("gaussian elimination: n = {}, {} pivot swaps", n, swaps);
        Vector::from_vec(x)
    }

    /// Determinant via the same reduction as [`solve`](Self::solve).
    ///
    /// Consumes the matrix.
    ///
    /// ```
    /// use linsolve::DenseMatrix;
    /// let m = DenseMatrix::from_rows(2, &[3.0_f64, 8.0, 4.0, 6.0]);
    /// assert!((m.det() - (-14.0)).abs() < 1e-12);
    /// ```
    pub fn det(mut self) -> T {
        let mut perm = vec![0usize; self.n];
        let swaps = gauss_eliminate_in_place(&mut self, &mut perm, None);
        gauss_det(&self, &perm, swaps)
    }

    /// Inverse by cofactor expansion.
    ///
    /// Costs one elimination per entry; use for small validation matrices.
    ///
    /// ```
    /// use linsolve::DenseMatrix;
    /// let a = DenseMatrix::from_rows(2, &[4.0_f64, 7.0, 2.0, 6.0]);
    /// let id = &a * &a.inverse();
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!(id[(0, 1)].abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Self {
        cofactor_inverse(self)
    }
}

impl<T: Scalar> DenseMatrix<T> {
    /// The `(n-1) x (n-1)` matrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Self {
        assert!(row < self.n && col < self.n, "minor index out of range");
        let m = self.n - 1;
        DenseMatrix::from_fn(m, |i, j| {
            let si = if i < row { i } else { i + 1 };
            let sj = if j < col { j } else { j + 1 };
            self[(si, sj)]
        })
    }
}

impl<T: LinalgScalar> LinearSolve<T> for DenseMatrix<T> {
    fn solve(self, b: &Vector<T>) -> Vector<T> {
        DenseMatrix::solve(self, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
        assert!((a - b).abs() < tol, "{}: {} vs {}", msg, a, b);
    }

    #[test]
    fn solve_2x2() {
        let a = DenseMatrix::from_rows(2, &[3.0_f64, 2.0, 1.0, 4.0]);
        let x = a.solve(&Vector::from_slice(&[7.0, 9.0]));
        assert_near(x[0], 1.0, 1e-12, "x0");
        assert_near(x[1], 2.0, 1e-12, "x1");
    }

    #[test]
    fn solve_needs_pivoting() {
        // Zero in the leading position forces a swap.
        let a = DenseMatrix::from_rows(3, &[0.0_f64, 2.0, 1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 3.0]);
        let x_star = Vector::from_slice(&[1.0, -2.0, 3.0]);
        let b = &a * &x_star;
        let x = a.solve(&b);
        for i in 0..3 {
            assert_near(x[i], x_star[i], 1e-12, "pivoted solve");
        }
    }

    #[test]
    fn det_swap_sign() {
        let a = DenseMatrix::from_rows(2, &[0.0_f64, 1.0, 1.0, 0.0]);
        assert_eq!(a.det(), -1.0);
    }

    #[test]
    fn det_3x3() {
        let a = DenseMatrix::from_rows(3, &[6.0_f64, 1.0, 1.0, 4.0, -2.0, 5.0, 2.0, 8.0, 7.0]);
        assert_near(a.det(), -306.0, 1e-10, "det");
    }

    #[test]
    fn det_of_empty_is_one() {
        assert_eq!(DenseMatrix::<f64>::zeros(0).det(), 1.0);
    }

    #[test]
    fn minor_removes_row_and_col() {
        let a = DenseMatrix::from_fn(3, |i, j| (i * 3 + j) as f64);
        let m = a.minor(1, 0);
        assert_eq!(m.as_slice(), &[1.0, 2.0, 7.0, 8.0]);
    }

    #[test]
    fn inverse_3x3() {
        let a = DenseMatrix::from_rows(3, &[1.0_f64, 2.0, 3.0, 0.0, 1.0, 4.0, 5.0, 6.0, 0.0]);
        let id = &a * &a.inverse();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_near(id[(i, j)], expected, 1e-10, "A * inv(A)");
            }
        }
    }

    #[test]
    fn inverse_1x1() {
        let a = DenseMatrix::from_rows(1, &[4.0_f64]);
        assert_eq!(a.inverse()[(0, 0)], 0.25);
    }

    #[test]
    fn solve_through_trait() {
        let a = DenseMatrix::from_rows(2, &[2.0_f64, 0.0, 0.0, 4.0]);
        let x = crate::solve(a, &Vector::from_slice(&[2.0, 2.0]));
        assert_eq!(x.as_slice(), &[1.0, 0.5]);
    }
}
