use core::ops::Mul;

use crate::traits::Scalar;
use crate::vector::{dot_slices, Vector};

use super::DenseMatrix;

impl<T: Scalar> DenseMatrix<T> {
    /// Transpose.
    ///
    /// ```
    /// use linsolve::DenseMatrix;
    /// let m = DenseMatrix::from_rows(2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m.transpose()[(0, 1)], 3.0);
    /// ```
    pub fn transpose(&self) -> Self {
        DenseMatrix::from_fn(self.n, |i, j| self[(j, i)])
    }
}

// ── DenseMatrix * Vector ────────────────────────────────────────────

impl<T: Scalar> Mul<&Vector<T>> for &DenseMatrix<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        assert_eq!(
            self.n,
            rhs.len(),
            "dimension mismatch: {}x{} * {}",
            self.n,
            self.n,
            rhs.len(),
        );
        (0..self.n)
            .map(|i| dot_slices(self.row_slice(i), rhs.as_slice()))
            .collect()
    }
}

impl<T: Scalar> Mul<Vector<T>> for &DenseMatrix<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: Vector<T>) -> Vector<T> {
        self * &rhs
    }
}

impl<T: Scalar> Mul<&Vector<T>> for DenseMatrix<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        &self * rhs
    }
}

// ── DenseMatrix * DenseMatrix ───────────────────────────────────────

impl<T: Scalar> Mul<&DenseMatrix<T>> for &DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn mul(self, rhs: &DenseMatrix<T>) -> DenseMatrix<T> {
        assert_eq!(self.n, rhs.n, "dimension mismatch: {} vs {}", self.n, rhs.n);
        let n = self.n;
        let mut out = DenseMatrix::zeros(n);
        for i in 0..n {
            for k in 0..n {
                let a_ik = self[(i, k)];
                for j in 0..n {
                    out[(i, j)] = out[(i, j)] + a_ik * rhs[(k, j)];
                }
            }
        }
        out
    }
}

impl<T: Scalar> Mul for DenseMatrix<T> {
    type Output = DenseMatrix<T>;

    fn mul(self, rhs: DenseMatrix<T>) -> DenseMatrix<T> {
        &self * &rhs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mat_vec() {
        let a = DenseMatrix::from_rows(2, &[1.0, 2.0, 3.0, 4.0]);
        let x = Vector::from_slice(&[1.0, -1.0]);
        assert_eq!((&a * &x).as_slice(), &[-1.0, -1.0]);
    }

    #[test]
    fn mat_mat() {
        let a = DenseMatrix::from_rows(2, &[1.0, 2.0, 3.0, 4.0]);
        let b = DenseMatrix::from_rows(2, &[0.0, 1.0, 1.0, 0.0]);
        let c = &a * &b;
        assert_eq!(c.as_slice(), &[2.0, 1.0, 4.0, 3.0]);
    }

    #[test]
    fn transpose_twice_is_identity() {
        let a = DenseMatrix::from_fn(4, |i, j| (i * 4 + j) as f64);
        assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn mat_vec_wrong_length() {
        let a = DenseMatrix::<f64>::eye(2);
        let _ = &a * &Vector::from_slice(&[1.0, 2.0, 3.0]);
    }
}
