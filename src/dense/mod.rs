mod linalg;
mod ops;

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::traits::{LinearOperator, MatrixRef, Scalar};
use crate::vector::Vector;

/// Dense `n x n` matrix.
///
/// Row-major `Vec<T>` storage with the invariant `data.len() == n * n`.
/// This is the reference format: sparse formats convert into it for
/// validation, and Newton-type callers solve with it directly.
///
/// # Examples
///
/// ```
/// use linsolve::DenseMatrix;
///
/// let a = DenseMatrix::from_rows(2, &[1.0_f64, 2.0, 3.0, 4.0]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.dims(), 2);
///
/// let id = DenseMatrix::<f64>::eye(3);
/// assert_eq!(id[(1, 1)], 1.0_f64);
/// assert_eq!(id[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix<T> {
    pub(crate) data: Vec<T>,
    pub(crate) n: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> DenseMatrix<T> {
    /// Create an `n x n` zero matrix.
    pub fn zeros(n: usize) -> Self {
        Self {
            data: vec![T::zero(); n * n],
            n,
        }
    }

    /// Create an `n x n` identity matrix.
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `row_major.len() != n * n`.
    ///
    /// ```
    /// use linsolve::DenseMatrix;
    /// let m = DenseMatrix::from_rows(2, &[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn from_rows(n: usize, row_major: &[T]) -> Self {
        Self::from_vec(n, row_major.to_vec())
    }

    /// Create a matrix from an owned row-major `Vec<T>`.
    ///
    /// Panics if `data.len() != n * n`.
    pub fn from_vec(n: usize, data: Vec<T>) -> Self {
        assert_eq!(
            data.len(),
            n * n,
            "data length {} does not match {}x{} matrix",
            data.len(),
            n,
            n,
        );
        Self { data, n }
    }

    /// Row `i` as a vector.
    pub fn row(&self, i: usize) -> Vector<T> {
        Vector::from_slice(self.row_slice(i))
    }

    /// Column `j` as a vector.
    pub fn col(&self, j: usize) -> Vector<T> {
        (0..self.n).map(|i| self[(i, j)]).collect()
    }
}

impl<T> DenseMatrix<T> {
    /// Number of rows (and columns).
    #[inline]
    pub fn dims(&self) -> usize {
        self.n
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use linsolve::DenseMatrix;
    /// let m = DenseMatrix::from_fn(3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(2, 2)], 1.0);
    /// ```
    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(n * n);
        for i in 0..n {
            for j in 0..n {
                data.push(f(i, j));
            }
        }
        Self { data, n }
    }

    /// Row-major view of the storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub(crate) fn row_slice(&self, i: usize) -> &[T] {
        &self.data[i * self.n..(i + 1) * self.n]
    }
}

// ── MatrixRef / LinearOperator ──────────────────────────────────────

impl<T: Copy> MatrixRef<T> for DenseMatrix<T> {
    #[inline]
    fn dims(&self) -> usize {
        self.n
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.n + col]
    }
}

impl<T: Scalar> LinearOperator<T> for DenseMatrix<T> {
    fn mul_vec(&self, x: &Vector<T>) -> Vector<T> {
        self * x
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for DenseMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.n + col]
    }
}

impl<T> IndexMut<(usize, usize)> for DenseMatrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.n + col]
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// Prints the dimension on the first line, then one tab-separated row per line.
impl<T: fmt::Display> fmt::Display for DenseMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.n)?;
        for i in 0..self.n {
            for j in 0..self.n {
                if j > 0 {
                    f.write_str("\t")?;
                }
                write!(f, "{}", self.data[i * self.n + j])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros() {
        let m = DenseMatrix::<f64>::zeros(3);
        assert_eq!(m.dims(), 3);
        assert!(m.as_slice().iter().all(|&x| x == 0.0));
    }

    #[test]
    fn eye() {
        let m = DenseMatrix::<f64>::eye(3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(m[(i, j)], expected);
            }
        }
    }

    #[test]
    fn from_rows_is_row_major() {
        let m = DenseMatrix::from_rows(2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
        assert_eq!(m.get(1, 1), 4.0);
    }

    #[test]
    #[should_panic(expected = "data length")]
    fn from_rows_wrong_length() {
        let _ = DenseMatrix::from_rows(2, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn row_and_col() {
        let m = DenseMatrix::from_fn(3, |i, j| (i * 3 + j) as f64);
        assert_eq!(m.row(1).as_slice(), &[3.0, 4.0, 5.0]);
        assert_eq!(m.col(2).as_slice(), &[2.0, 5.0, 8.0]);
    }

    #[test]
    fn display_is_tab_separated() {
        let m = DenseMatrix::from_rows(2, &[1.0, 2.5, -3.0, 4.0]);
        assert_eq!(m.to_string(), "2\n1\t2.5\n-3\t4\n");
    }
}
