mod ops;

use core::ops::{Index, IndexMut};

use crate::traits::{LinalgScalar, Scalar};

/// Dense, fixed-length vector of scalars.
///
/// Supports elementwise `+ - *` against vectors and scalars, dot product and
/// Euclidean length.
///
/// # Examples
///
/// ```
/// use linsolve::Vector;
///
/// let v = Vector::from_slice(&[1.0_f64, 2.0, 3.0]);
/// assert_eq!(v[0], 1.0);
/// assert_eq!(v.len(), 3);
/// assert!((v.dot(&v) - 14.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    pub(crate) data: Vec<T>,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Vector<T> {
    /// Create a vector from a slice.
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Create a vector from an owned `Vec`.
    ///
    /// ```
    /// use linsolve::Vector;
    /// let v = Vector::from_vec(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(v[2], 3.0);
    /// ```
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Zero vector of length `n`.
    pub fn zeros(n: usize) -> Self {
        Self {
            data: vec![T::zero(); n],
        }
    }

    /// Vector of length `n` filled with `value`.
    pub fn fill(n: usize, value: T) -> Self {
        Self {
            data: vec![value; n],
        }
    }

    /// Create a vector by calling `f(i)` for each index.
    ///
    /// ```
    /// use linsolve::Vector;
    /// let v = Vector::from_fn(3, |i| (i + 1) as f64);
    /// assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    /// ```
    pub fn from_fn(n: usize, f: impl FnMut(usize) -> T) -> Self {
        Self {
            data: (0..n).map(f).collect(),
        }
    }

    /// Dot product.
    ///
    /// ```
    /// use linsolve::Vector;
    /// let a = Vector::from_slice(&[1.0, 2.0, 3.0]);
    /// let b = Vector::from_slice(&[4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    pub fn dot(&self, rhs: &Self) -> T {
        debug_assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        dot_slices(&self.data, &rhs.data)
    }

    /// Squared Euclidean length (dot product with self).
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T> Vector<T> {
    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the vector is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consume the vector, returning its storage.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: LinalgScalar> Vector<T> {
    /// Euclidean length.
    ///
    /// ```
    /// use linsolve::Vector;
    /// let v = Vector::from_slice(&[3.0_f64, 4.0]);
    /// assert!((v.norm() - 5.0).abs() < 1e-12);
    /// ```
    pub fn norm(&self) -> T {
        self.norm_squared().lsqrt()
    }
}

/// Inner product of two equally long slices, accumulated left to right.
#[inline]
pub(crate) fn dot_slices<T: Scalar>(a: &[T], b: &[T]) -> T {
    let mut sum = T::zero();
    for (&x, &y) in a.iter().zip(b.iter()) {
        sum = sum + x * y;
    }
    sum
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Vector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

// ── Conversions ─────────────────────────────────────────────────────

impl<T> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> From<Vector<T>> for Vec<T> {
    fn from(v: Vector<T>) -> Self {
        v.data
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_and_fill() {
        let z = Vector::<f64>::zeros(4);
        assert_eq!(z.len(), 4);
        assert!(z.iter().all(|&x| x == 0.0));
        let f = Vector::fill(2, 7.0_f64);
        assert_eq!(f.as_slice(), &[7.0, 7.0]);
    }

    #[test]
    fn index_mut() {
        let mut v = Vector::<f64>::zeros(3);
        v[1] = 42.0;
        assert_eq!(v[1], 42.0);
    }

    #[test]
    fn dot_and_norms() {
        let a = Vector::from_slice(&[1.0_f64, -2.0, 2.0]);
        assert_eq!(a.norm_squared(), 9.0);
        assert!((a.norm() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_vector() {
        let v: Vector<f64> = Vector::from_vec(Vec::new());
        assert!(v.is_empty());
        assert_eq!(v.norm_squared(), 0.0);
    }

    #[test]
    fn collect_and_into_vec() {
        let v: Vector<f64> = (0..3).map(|i| i as f64).collect();
        assert_eq!(v.clone().into_vec(), vec![0.0, 1.0, 2.0]);
        let total: f64 = v.iter().sum();
        assert_eq!(total, 3.0);
    }
}
