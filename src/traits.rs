use core::fmt::{Debug, Display};
use core::ops::{AddAssign, DivAssign, MulAssign, Neg, SubAssign};
use core::str::FromStr;

use num_traits::{Num, One, Zero};

use crate::vector::Vector;

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for matrix elements the solvers can work with.
///
/// Covers `f32`, `f64` and the operation-counting [`Counted`](crate::Counted)
/// wrapper. `Display`/`FromStr` are required so every matrix can be persisted
/// as text.
pub trait LinalgScalar:
    Scalar
    + PartialOrd
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Display
    + FromStr
{
    /// Absolute value.
    fn modulus(self) -> Self;

    /// Square root.
    fn lsqrt(self) -> Self;

    /// Machine epsilon.
    fn lepsilon() -> Self;

    /// Convert an `f64` constant into `Self`.
    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_linalg_scalar_real {
    ($($t:ty),*) => {
        $(
            impl LinalgScalar for $t {
                #[inline] fn modulus(self) -> $t { self.abs() }
                #[inline] fn lsqrt(self) -> $t { self.sqrt() }
                #[inline] fn lepsilon() -> $t { <$t>::EPSILON }
                #[inline] fn from_f64(v: f64) -> $t { v as $t }
            }
        )*
    };
}

impl_linalg_scalar_real!(f32, f64);

/// Read-only access to a square matrix, whatever its storage.
///
/// Elements are returned by value: sparse formats have no slot to borrow for
/// entries outside their stored pattern.
pub trait MatrixRef<T> {
    /// Number of rows (and columns).
    fn dims(&self) -> usize;

    /// Element at `(row, col)`; zero for entries that are not stored.
    fn get(&self, row: usize, col: usize) -> T;
}

/// Matrix-vector product `y = A * x`.
pub trait LinearOperator<T>: MatrixRef<T> {
    fn mul_vec(&self, x: &Vector<T>) -> Vector<T>;
}

/// Solve `A x = b`.
///
/// Takes the receiver by value: direct solvers factor their storage in place,
/// so a matrix that has been solved cannot be touched again. Clone first if it
/// is still needed.
pub trait LinearSolve<T> {
    fn solve(self, b: &Vector<T>) -> Vector<T>;
}

/// Solve `A x = b` with whichever method the storage format provides.
///
/// ```
/// use linsolve::{solve, DenseMatrix, Vector};
///
/// let a = DenseMatrix::from_rows(2, &[3.0_f64, 2.0, 1.0, 4.0]);
/// let x = solve(a, &Vector::from_slice(&[7.0, 9.0]));
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
/// ```
pub fn solve<T, A: LinearSolve<T>>(a: A, b: &Vector<T>) -> Vector<T> {
    a.solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_modulus_and_sqrt() {
        assert_eq!((-3.0_f64).modulus(), 3.0);
        assert_eq!(16.0_f32.lsqrt(), 4.0);
        assert_eq!(f64::lepsilon(), f64::EPSILON);
        assert_eq!(<f32 as LinalgScalar>::from_f64(0.5), 0.5_f32);
    }
}
