use core::ops::Mul;

use crate::dense::DenseMatrix;
use crate::linalg::cg::{conjugate_gradient, CgResult, CgSettings};
use crate::skyline::SkylineMatrix;
use crate::traits::{LinalgScalar, LinearOperator, LinearSolve, MatrixRef, Scalar};
use crate::vector::Vector;

/// Symmetric sparse matrix in row-column format.
///
/// Only the strict lower triangle is stored, each value once: row `i` owns
/// `al[ia[i]..ia[i + 1]]`, whose columns are `ja[ia[i]..ia[i + 1]]` (all `< i`).
/// Entries `(i, j)` and `(j, i)` resolve to the same slot.
///
/// Solved iteratively by Conjugate Gradient, so the matrix must be symmetric
/// positive definite. Nothing checks this.
///
/// ```
/// use linsolve::{RowColumnSymMatrix, Vector};
///
/// // [[4, 1, 0], [1, 4, 1], [0, 1, 4]]
/// let a = RowColumnSymMatrix::from_parts(
///     vec![0, 0, 1, 2],
///     vec![0, 1],
///     vec![4.0_f64, 4.0, 4.0],
///     vec![1.0, 1.0],
/// );
/// assert_eq!(a.get(0, 1), a.get(1, 0));
///
/// let x = a.solve(&Vector::from_slice(&[5.0, 6.0, 5.0]));
/// for xi in x.iter() {
///     assert!((xi - 1.0).abs() < 1e-6);
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RowColumnSymMatrix<T> {
    pub(crate) ia: Vec<usize>,
    pub(crate) ja: Vec<usize>,
    pub(crate) di: Vec<T>,
    pub(crate) al: Vec<T>,
}

impl<T: Scalar> RowColumnSymMatrix<T> {
    /// Assemble from raw storage arrays.
    ///
    /// Panics unless `ia.len() == di.len() + 1`, `ia[0] == 0`, `ia` is
    /// non-decreasing, `ja.len() == al.len() == ia[n]` and every column index
    /// lies strictly left of its row's diagonal.
    pub fn from_parts(ia: Vec<usize>, ja: Vec<usize>, di: Vec<T>, al: Vec<T>) -> Self {
        let n = di.len();
        assert_eq!(ia.len(), n + 1, "ia must have n + 1 = {} entries, got {}", n + 1, ia.len());
        assert_eq!(ia[0], 0, "ia must start at 0");
        assert_eq!(ja.len(), ia[n], "ja length {} does not match ia[n] = {}", ja.len(), ia[n]);
        assert_eq!(al.len(), ia[n], "al length {} does not match ia[n] = {}", al.len(), ia[n]);
        for i in 0..n {
            assert!(ia[i] <= ia[i + 1], "ia must be non-decreasing at row {}", i);
            assert!(
                ja[ia[i]..ia[i + 1]].iter().all(|&c| c < i),
                "row {} stores a column on or above the diagonal",
                i
            );
        }
        Self { ia, ja, di, al }
    }

    /// Take the lower triangle of `s` as a symmetric matrix.
    ///
    /// Explicit zeros inside the envelope are not stored. The upper triangle
    /// of `s` is ignored, so the result mirrors `s` only if `s` is symmetric.
    pub fn from_skyline_lower(s: &SkylineMatrix<T>) -> Self {
        let n = s.dims();
        let mut ia = Vec::with_capacity(n + 1);
        let mut ja = Vec::new();
        let mut al = Vec::new();
        ia.push(0);

        for i in 0..n {
            let start = i - s.row_len(i);
            for (k, &v) in s.al[s.ia[i]..s.ia[i + 1]].iter().enumerate() {
                if v != T::zero() {
                    ja.push(start + k);
                    al.push(v);
                }
            }
            ia.push(al.len());
        }

        Self {
            ia,
            ja,
            di: s.di.clone(),
            al,
        }
    }

    /// Element at `(row, col)`; zero if not stored.
    pub fn get(&self, row: usize, col: usize) -> T {
        MatrixRef::get(self, row, col)
    }
}

impl<T> RowColumnSymMatrix<T> {
    /// Number of rows (and columns).
    #[inline]
    pub fn dims(&self) -> usize {
        self.di.len()
    }

    /// Row offsets into `ja`/`al`, `n + 1` entries.
    pub fn ia(&self) -> &[usize] {
        &self.ia
    }

    /// Column of each stored off-diagonal value.
    pub fn ja(&self) -> &[usize] {
        &self.ja
    }

    pub fn di(&self) -> &[T] {
        &self.di
    }

    pub fn al(&self) -> &[T] {
        &self.al
    }

    /// Number of stored off-diagonal values.
    pub fn nnz(&self) -> usize {
        self.al.len()
    }
}

impl<T: Scalar> MatrixRef<T> for RowColumnSymMatrix<T> {
    fn dims(&self) -> usize {
        self.di.len()
    }

    fn get(&self, row: usize, col: usize) -> T {
        if row == col {
            return self.di[row];
        }
        let (r, c) = if row > col { (row, col) } else { (col, row) };
        let range = self.ia[r]..self.ia[r + 1];
        self.ja[range.clone()]
            .iter()
            .position(|&j| j == c)
            .map_or(T::zero(), |k| self.al[range.start + k])
    }
}

impl<T: Scalar> LinearOperator<T> for RowColumnSymMatrix<T> {
    fn mul_vec(&self, x: &Vector<T>) -> Vector<T> {
        self * x
    }
}

// ── RowColumnSymMatrix * Vector ─────────────────────────────────────

impl<T: Scalar> Mul<&Vector<T>> for &RowColumnSymMatrix<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        let n = self.dims();
        assert_eq!(n, rhs.len(), "dimension mismatch: {}x{} * {}", n, n, rhs.len());
        let x = rhs.as_slice();
        let mut y: Vec<T> = self.di.iter().zip(x).map(|(&d, &xi)| d * xi).collect();

        for r in 0..n {
            for k in self.ia[r]..self.ia[r + 1] {
                let c = self.ja[k];
                let v = self.al[k];
                y[r] = y[r] + v * x[c];
                y[c] = y[c] + v * x[r];
            }
        }

        Vector::from_vec(y)
    }
}

impl<T: Scalar> Mul<&Vector<T>> for RowColumnSymMatrix<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        &self * rhs
    }
}

// ── Solvers ─────────────────────────────────────────────────────────

impl<T: LinalgScalar> RowColumnSymMatrix<T> {
    /// Conjugate Gradient with explicit settings.
    ///
    /// The matrix is not modified. Check [`CgResult::converged`] or
    /// [`CgResult::iterations`] to detect a run that hit the cap.
    pub fn solve_cg(&self, b: &Vector<T>, settings: &CgSettings<T>) -> CgResult<T> {
        conjugate_gradient(self, b, settings)
    }

    /// Conjugate Gradient with default settings, returning only `x`.
    pub fn solve(&self, b: &Vector<T>) -> Vector<T> {
        self.solve_cg(b, &CgSettings::default()).x
    }
}

impl<T: LinalgScalar> LinearSolve<T> for RowColumnSymMatrix<T> {
    fn solve(self, b: &Vector<T>) -> Vector<T> {
        RowColumnSymMatrix::solve(&self, b)
    }
}

impl<T: LinalgScalar> LinearSolve<T> for &RowColumnSymMatrix<T> {
    fn solve(self, b: &Vector<T>) -> Vector<T> {
        RowColumnSymMatrix::solve(self, b)
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T: Scalar> From<&RowColumnSymMatrix<T>> for DenseMatrix<T> {
    fn from(s: &RowColumnSymMatrix<T>) -> Self {
        let mut d = DenseMatrix::zeros(s.dims());
        for (i, &v) in s.di.iter().enumerate() {
            d[(i, i)] = v;
        }
        for r in 0..s.dims() {
            for k in s.ia[r]..s.ia[r + 1] {
                d[(r, s.ja[k])] = s.al[k];
                d[(s.ja[k], r)] = s.al[k];
            }
        }
        d
    }
}
