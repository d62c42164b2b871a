use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;

use super::Vector;

// ── Element-wise vector ⊕ vector ────────────────────────────────────

macro_rules! impl_elementwise {
    ($Trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar> $Trait<&Vector<T>> for &Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: &Vector<T>) -> Vector<T> {
                assert_eq!(
                    self.len(),
                    rhs.len(),
                    "vector length mismatch: {} vs {}",
                    self.len(),
                    rhs.len(),
                );
                self.data
                    .iter()
                    .zip(rhs.data.iter())
                    .map(|(&a, &b)| a $op b)
                    .collect()
            }
        }

        impl<T: Scalar> $Trait<Vector<T>> for Vector<T> {
            type Output = Vector<T>;
            fn $method(self, rhs: Vector<T>) -> Vector<T> {
                &self $op &rhs
            }
        }

        impl<T: Scalar> $Trait<&Vector<T>> for Vector<T> {
            type Output = Vector<T>;
            fn $method(self, rhs: &Vector<T>) -> Vector<T> {
                &self $op rhs
            }
        }

        impl<T: Scalar> $Trait<Vector<T>> for &Vector<T> {
            type Output = Vector<T>;
            fn $method(self, rhs: Vector<T>) -> Vector<T> {
                self $op &rhs
            }
        }
    };
}

impl_elementwise!(Add, add, +);
impl_elementwise!(Sub, sub, -);
impl_elementwise!(Mul, mul, *);

// ── Vector ⊕ scalar ─────────────────────────────────────────────────

macro_rules! impl_scalar_rhs {
    ($Trait:ident, $method:ident, $op:tt) => {
        impl<T: Scalar> $Trait<T> for &Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: T) -> Vector<T> {
                self.data.iter().map(|&a| a $op rhs).collect()
            }
        }

        impl<T: Scalar> $Trait<T> for Vector<T> {
            type Output = Vector<T>;

            fn $method(self, rhs: T) -> Vector<T> {
                &self $op rhs
            }
        }
    };
}

impl_scalar_rhs!(Add, add, +);
impl_scalar_rhs!(Sub, sub, -);
impl_scalar_rhs!(Mul, mul, *);

// Left scalar multiplication is only expressible per concrete type.
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl Mul<Vector<$t>> for $t {
                type Output = Vector<$t>;
                fn mul(self, rhs: Vector<$t>) -> Vector<$t> {
                    rhs * self
                }
            }

            impl Mul<&Vector<$t>> for $t {
                type Output = Vector<$t>;
                fn mul(self, rhs: &Vector<$t>) -> Vector<$t> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar + Neg<Output = T>> Neg for Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        self.data.into_iter().map(|a| -a).collect()
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for &Vector<T> {
    type Output = Vector<T>;

    fn neg(self) -> Vector<T> {
        self.data.iter().map(|&a| -a).collect()
    }
}

// ── Compound assignment ─────────────────────────────────────────────

impl<T: Scalar> AddAssign<&Vector<T>> for Vector<T> {
    fn add_assign(&mut self, rhs: &Vector<T>) {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a + b;
        }
    }
}

impl<T: Scalar> AddAssign for Vector<T> {
    fn add_assign(&mut self, rhs: Vector<T>) {
        *self += &rhs;
    }
}

impl<T: Scalar> SubAssign<&Vector<T>> for Vector<T> {
    fn sub_assign(&mut self, rhs: &Vector<T>) {
        assert_eq!(self.len(), rhs.len(), "vector length mismatch");
        for (a, &b) in self.data.iter_mut().zip(rhs.data.iter()) {
            *a = *a - b;
        }
    }
}

impl<T: Scalar> SubAssign for Vector<T> {
    fn sub_assign(&mut self, rhs: Vector<T>) {
        *self -= &rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Vector<T> {
    fn mul_assign(&mut self, rhs: T) {
        for a in self.data.iter_mut() {
            *a = *a * rhs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(data: &[f64]) -> Vector<f64> {
        Vector::from_slice(data)
    }

    #[test]
    fn add_sub_elementwise() {
        let a = v(&[1.0, 2.0, 3.0]);
        let b = v(&[4.0, 5.0, 6.0]);
        assert_eq!((&a + &b).as_slice(), &[5.0, 7.0, 9.0]);
        assert_eq!((&b - &a).as_slice(), &[3.0, 3.0, 3.0]);
        assert_eq!((a.clone() * b).as_slice(), &[4.0, 10.0, 18.0]);
    }

    #[test]
    fn scalar_ops() {
        let a = v(&[1.0, -2.0]);
        assert_eq!((&a * 3.0).as_slice(), &[3.0, -6.0]);
        assert_eq!((2.0 * &a).as_slice(), &[2.0, -4.0]);
        assert_eq!((&a + 1.0).as_slice(), &[2.0, -1.0]);
        assert_eq!((a - 1.0).as_slice(), &[0.0, -3.0]);
    }

    #[test]
    fn negation() {
        let a = v(&[1.0, -2.0]);
        assert_eq!((-&a).as_slice(), &[-1.0, 2.0]);
    }

    #[test]
    fn compound_assignment() {
        let mut a = v(&[1.0, 1.0]);
        a += &v(&[2.0, 3.0]);
        assert_eq!(a.as_slice(), &[3.0, 4.0]);
        a -= v(&[1.0, 1.0]);
        assert_eq!(a.as_slice(), &[2.0, 3.0]);
        a *= 0.5;
        assert_eq!(a.as_slice(), &[1.0, 1.5]);
    }

    #[test]
    #[should_panic(expected = "vector length mismatch")]
    fn length_mismatch_panics() {
        let _ = v(&[1.0]) + v(&[1.0, 2.0]);
    }
}
