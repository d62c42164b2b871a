use log::debug;

use crate::dense::DenseMatrix;
use crate::linalg::skyline_lu::{skyline_lu_in_place, skyline_lu_solve};
use crate::traits::{LinalgScalar, LinearSolve, Scalar};
use crate::vector::Vector;

use super::{envelope_get, SkylineMatrix};

/// Envelope LU factors of a [`SkylineMatrix`].
///
/// `L` is lower triangular with the pivots on its diagonal, `U` is unit upper
/// triangular; both share the envelope of the original matrix. The factors
/// can be reused for any number of right-hand sides.
///
/// ```
/// use linsolve::{SkylineMatrix, Vector};
///
/// let a = SkylineMatrix::from_parts(
///     vec![0, 0, 1],
///     vec![2.0_f64, 5.0],
///     vec![1.0],
///     vec![3.0],
/// );
/// let lu = a.lu();
/// assert!((lu.det() - 7.0).abs() < 1e-12);
///
/// let x = lu.solve(&Vector::from_slice(&[5.0, 6.0]));
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct SkylineLu<T> {
    factors: SkylineMatrix<T>,
}

impl<T: LinalgScalar> SkylineMatrix<T> {
    /// Factor in place, consuming the matrix.
    pub fn lu(mut self) -> SkylineLu<T> {
        skyline_lu_in_place(&self.ia, &mut self.di, &mut self.al, &mut self.au);
        SkylineLu { factors: self }
    }

    /// Solve `A x = b` by envelope LU and two substitutions.
    ///
    /// Consumes the matrix. No pivoting is done.
    pub fn solve(self, b: &Vector<T>) -> Vector<T> {
        let n = self.dims();
        let envelope = self.envelope_len();
        let x = self.lu().solve(b);
        debug!("skyline lu: n = {}, envelope = {}", n, envelope);
        x
    }
}

impl<T: LinalgScalar> SkylineLu<T> {
    /// Solve `L U x = b`.
    pub fn solve(&self, b: &Vector<T>) -> Vector<T> {
        let f = &self.factors;
        let n = f.dims();
        assert_eq!(b.len(), n, "rhs length mismatch");
        let mut x = vec![T::zero(); n];
        skyline_lu_solve(&f.ia, &f.di, &f.al, &f.au, b.as_slice(), &mut x);
        Vector::from_vec(x)
    }

    /// Product of the pivots.
    pub fn det(&self) -> T {
        self.factors.di.iter().fold(T::one(), |acc, &d| acc * d)
    }
}

impl<T: Scalar> SkylineLu<T> {
    pub fn dims(&self) -> usize {
        self.factors.dims()
    }

    /// `L` as a dense matrix, pivots on the diagonal.
    pub fn lower(&self) -> DenseMatrix<T> {
        let f = &self.factors;
        DenseMatrix::from_fn(f.dims(), |i, j| {
            if j <= i {
                envelope_get(&f.ia, &f.di, &f.al, &f.au, i, j)
            } else {
                T::zero()
            }
        })
    }

    /// `U` as a dense matrix, unit diagonal.
    pub fn upper(&self) -> DenseMatrix<T> {
        let f = &self.factors;
        DenseMatrix::from_fn(f.dims(), |i, j| match i.cmp(&j) {
            core::cmp::Ordering::Less => envelope_get(&f.ia, &f.di, &f.al, &f.au, i, j),
            core::cmp::Ordering::Equal => T::one(),
            core::cmp::Ordering::Greater => T::zero(),
        })
    }
}

impl<T: LinalgScalar> LinearSolve<T> for SkylineMatrix<T> {
    fn solve(self, b: &Vector<T>) -> Vector<T> {
        SkylineMatrix::solve(self, b)
    }
}
