mod lu;

use core::ops::Mul;

use crate::dense::DenseMatrix;
use crate::traits::{LinearOperator, MatrixRef, Scalar};
use crate::vector::Vector;

pub use lu::SkylineLu;

/// Square matrix in profile (skyline) format.
///
/// The nonzero pattern is shape-symmetric, the values are not. Row `i` stores
/// its lower entries for columns `i - len_i .. i` in `al[ia[i]..ia[i + 1]]`;
/// column `i` stores its upper entries for rows `i - len_i .. i` at the same
/// positions of `au`. Everything outside the envelope is zero.
///
/// ```text
///        ia = [0, 0, 1, 3]
///   | d0  u0  u1 |      di = [d0, d1, d2]
///   | l0  d1  u2 |      al = [l0, l1, l2]
///   | l1  l2  d2 |      au = [u0, u1, u2]
/// ```
///
/// Solving factors in place without pivoting, so inputs must be safe for
/// pivot-free LU (diagonally dominant, for instance).
///
/// ```
/// use linsolve::{DenseMatrix, SkylineMatrix, Vector};
///
/// // [[4, 1, 0], [2, 5, 1], [0, 3, 6]]
/// let a = SkylineMatrix::from_parts(
///     vec![0, 0, 1, 2],
///     vec![4.0_f64, 5.0, 6.0],
///     vec![2.0, 3.0],
///     vec![1.0, 1.0],
/// );
/// assert_eq!(a.get(2, 1), 3.0);
/// assert_eq!(a.get(0, 2), 0.0);
///
/// let x = a.solve(&Vector::from_slice(&[5.0, 8.0, 9.0]));
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 1.0).abs() < 1e-12);
/// assert!((x[2] - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SkylineMatrix<T> {
    pub(crate) ia: Vec<usize>,
    pub(crate) di: Vec<T>,
    pub(crate) al: Vec<T>,
    pub(crate) au: Vec<T>,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> SkylineMatrix<T> {
    /// Assemble from raw storage arrays.
    ///
    /// Panics unless `ia.len() == di.len() + 1`, `ia[0] == 0`, `ia` is
    /// non-decreasing with row `i` spanning at most `i` entries, and
    /// `al.len() == au.len() == ia[n]`.
    pub fn from_parts(ia: Vec<usize>, di: Vec<T>, al: Vec<T>, au: Vec<T>) -> Self {
        let n = di.len();
        assert_eq!(ia.len(), n + 1, "ia must have n + 1 = {} entries, got {}", n + 1, ia.len());
        assert_eq!(ia[0], 0, "ia must start at 0");
        for i in 0..n {
            assert!(
                ia[i] <= ia[i + 1] && ia[i + 1] - ia[i] <= i,
                "envelope of row {} is invalid",
                i
            );
        }
        assert_eq!(al.len(), ia[n], "al length {} does not match ia[n] = {}", al.len(), ia[n]);
        assert_eq!(au.len(), ia[n], "au length {} does not match ia[n] = {}", au.len(), ia[n]);
        Self { ia, di, al, au }
    }

    /// Build the smallest envelope holding every nonzero of `a`.
    ///
    /// Row `i`'s envelope starts at the first nonzero in row `i` left of the
    /// diagonal or in column `i` above it, whichever comes first.
    ///
    /// ```
    /// use linsolve::{DenseMatrix, SkylineMatrix};
    /// let d = DenseMatrix::from_rows(3, &[
    ///     1.0_f64, 0.0, 7.0,
    ///     0.0, 2.0, 0.0,
    ///     0.0, 0.0, 3.0,
    /// ]);
    /// let s = SkylineMatrix::from_dense(&d);
    /// assert_eq!(s.ia(), &[0, 0, 0, 2]);
    /// assert_eq!(DenseMatrix::from(&s), d);
    /// ```
    pub fn from_dense(a: &DenseMatrix<T>) -> Self {
        let n = a.dims();
        let mut ia = Vec::with_capacity(n + 1);
        let mut di = Vec::with_capacity(n);
        let mut al = Vec::new();
        let mut au = Vec::new();
        ia.push(0);

        for i in 0..n {
            let start = (0..i)
                .find(|&j| a[(i, j)] != T::zero() || a[(j, i)] != T::zero())
                .unwrap_or(i);
            for j in start..i {
                al.push(a[(i, j)]);
                au.push(a[(j, i)]);
            }
            di.push(a[(i, i)]);
            ia.push(al.len());
        }

        Self { ia, di, al, au }
    }
}

// ── Accessors ───────────────────────────────────────────────────────

impl<T> SkylineMatrix<T> {
    /// Number of rows (and columns).
    #[inline]
    pub fn dims(&self) -> usize {
        self.di.len()
    }

    /// Row offsets into `al`/`au`, `n + 1` entries.
    pub fn ia(&self) -> &[usize] {
        &self.ia
    }

    /// Diagonal.
    pub fn di(&self) -> &[T] {
        &self.di
    }

    /// Lower envelope, packed by row.
    pub fn al(&self) -> &[T] {
        &self.al
    }

    /// Upper envelope, packed by column.
    pub fn au(&self) -> &[T] {
        &self.au
    }

    /// Total number of stored off-diagonal entries on each side.
    pub fn envelope_len(&self) -> usize {
        self.ia[self.dims()]
    }

    /// Number of envelope entries of row (and column) `i`.
    #[inline]
    pub(crate) fn row_len(&self, i: usize) -> usize {
        self.ia[i + 1] - self.ia[i]
    }
}

// ── MatrixRef / LinearOperator ──────────────────────────────────────

impl<T: Scalar> MatrixRef<T> for SkylineMatrix<T> {
    fn dims(&self) -> usize {
        self.di.len()
    }

    fn get(&self, row: usize, col: usize) -> T {
        envelope_get(&self.ia, &self.di, &self.al, &self.au, row, col)
    }
}

impl<T: Scalar> SkylineMatrix<T> {
    /// Element at `(row, col)`; zero outside the envelope.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        MatrixRef::get(self, row, col)
    }
}

/// Shared element lookup for a matrix and its factors.
pub(crate) fn envelope_get<T: Scalar>(ia: &[usize], di: &[T], al: &[T], au: &[T], row: usize, col: usize) -> T {
    use core::cmp::Ordering;

    let (outer, inner, side) = match row.cmp(&col) {
        Ordering::Equal => return di[row],
        Ordering::Greater => (row, col, al),
        Ordering::Less => (col, row, au),
    };
    let len = ia[outer + 1] - ia[outer];
    let start = outer - len;
    if inner < start {
        T::zero()
    } else {
        side[ia[outer] + inner - start]
    }
}

impl<T: Scalar> LinearOperator<T> for SkylineMatrix<T> {
    fn mul_vec(&self, x: &Vector<T>) -> Vector<T> {
        self * x
    }
}

// ── SkylineMatrix * Vector ──────────────────────────────────────────

impl<T: Scalar> Mul<&Vector<T>> for &SkylineMatrix<T> {
    type Output = Vector<T>;

    /// `y = A x` over the envelope: each stored pair `(al, au)` touches
    /// `y[i]` and `y[j]` once.
    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        let n = self.dims();
        assert_eq!(n, rhs.len(), "dimension mismatch: {}x{} * {}", n, n, rhs.len());
        let x = rhs.as_slice();
        let mut y: Vec<T> = self.di.iter().zip(x).map(|(&d, &xi)| d * xi).collect();

        for i in 0..n {
            let start = i - self.row_len(i);
            let range = self.ia[i]..self.ia[i + 1];
            for (k, (&l, &u)) in self.al[range.clone()].iter().zip(&self.au[range]).enumerate() {
                let j = start + k;
                y[i] = y[i] + l * x[j];
                y[j] = y[j] + u * x[i];
            }
        }

        Vector::from_vec(y)
    }
}

impl<T: Scalar> Mul<&Vector<T>> for SkylineMatrix<T> {
    type Output = Vector<T>;

    fn mul(self, rhs: &Vector<T>) -> Vector<T> {
        &self * rhs
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T: Scalar> From<&SkylineMatrix<T>> for DenseMatrix<T> {
    fn from(s: &SkylineMatrix<T>) -> Self {
        DenseMatrix::from_fn(s.dims(), |i, j| s.get(i, j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// [[5, 0, 1, 0], [0, 6, 2, 1], [2, 1, 7, 3], [0, 2, 1, 8]]
    fn sample() -> SkylineMatrix<f64> {
        SkylineMatrix::from_parts(
            vec![0, 0, 0, 2, 4],
            vec![5.0, 6.0, 7.0, 8.0],
            vec![2.0, 1.0, 2.0, 1.0],
            vec![1.0, 2.0, 1.0, 3.0],
        )
    }

    fn sample_dense() -> DenseMatrix<f64> {
        DenseMatrix::from_rows(
            4,
            &[
                5.0, 0.0, 1.0, 0.0, //
                0.0, 6.0, 2.0, 1.0, //
                2.0, 1.0, 7.0, 3.0, //
                0.0, 2.0, 1.0, 8.0,
            ],
        )
    }

    #[test]
    fn element_access() {
        let s = sample();
        assert_eq!(s.get(2, 0), 2.0);
        assert_eq!(s.get(0, 2), 1.0);
        assert_eq!(s.get(3, 0), 0.0);
        assert_eq!(s.get(0, 3), 0.0);
        assert_eq!(s.get(3, 2), 1.0);
        assert_eq!(s.get(2, 3), 3.0);
        assert_eq!(s.get(1, 1), 6.0);
    }

    #[test]
    fn to_dense() {
        assert_eq!(DenseMatrix::from(&sample()), sample_dense());
    }

    #[test]
    fn from_dense_round_trip() {
        let d = sample_dense();
        let s = SkylineMatrix::from_dense(&d);
        assert_eq!(s, sample());
    }

    #[test]
    fn from_dense_diagonal() {
        let d = DenseMatrix::<f64>::eye(3);
        let s = SkylineMatrix::from_dense(&d);
        assert_eq!(s.envelope_len(), 0);
        assert_eq!(s.di(), &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn mat_vec_matches_dense() {
        let x = Vector::from_slice(&[1.0, -1.0, 0.5, 2.0]);
        let ys = &sample() * &x;
        let yd = &sample_dense() * &x;
        assert_eq!(ys, yd);
    }

    #[test]
    #[should_panic(expected = "envelope of row")]
    fn envelope_too_long() {
        // Row 1 cannot reach two columns to its left.
        let _ = SkylineMatrix::from_parts(vec![0, 0, 2], vec![1.0, 1.0], vec![0.0; 2], vec![0.0; 2]);
    }
}
