//! Operation-counting scalar.
//!
//! [`Counted<T>`] behaves like `T` but bumps a per-thread counter on every
//! `+ - * /` (and `+= -= *= /=`). Running a solver on `Counted<f64>` measures
//! how many floating-point operations it performs:
//!
//! ```
//! use linsolve::counted::{op_counts, reset_op_counts, Counted};
//! use linsolve::Vector;
//!
//! let v: Vector<Counted<f64>> = (1..=3).map(|i| Counted::new(i as f64)).collect();
//! reset_op_counts();
//! let _ = v.dot(&v);
//! let c = op_counts();
//! assert_eq!((c.mul, c.add), (3, 3));
//! ```
//!
//! Counters are thread-local, so concurrent tests do not disturb each other.
//! Negation, remainder and comparisons are not counted.

use core::cell::Cell;
use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, Sub, SubAssign};
use core::str::FromStr;

use num_traits::{Num, One, Zero};

use crate::traits::LinalgScalar;

/// Number of arithmetic operations of each kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCounts {
    pub add: u64,
    pub sub: u64,
    pub mul: u64,
    pub div: u64,
}

impl OpCounts {
    pub fn total(&self) -> u64 {
        self.add + self.sub + self.mul + self.div
    }
}

thread_local! {
    static COUNTS: Cell<OpCounts> = const { Cell::new(OpCounts { add: 0, sub: 0, mul: 0, div: 0 }) };
}

#[inline]
fn bump(f: impl FnOnce(&mut OpCounts)) {
    COUNTS.with(|c| {
        let mut counts = c.get();
        f(&mut counts);
        c.set(counts);
    });
}

/// Counts accumulated on this thread since the last reset.
pub fn op_counts() -> OpCounts {
    COUNTS.with(Cell::get)
}

/// Zero this thread's counters.
pub fn reset_op_counts() {
    COUNTS.with(|c| c.set(OpCounts::default()));
}

/// Scalar wrapper that counts arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Counted<T>(pub T);

impl<T> Counted<T> {
    pub const fn new(value: T) -> Self {
        Counted(value)
    }

    pub fn value(self) -> T {
        self.0
    }
}

// ── Arithmetic ──────────────────────────────────────────────────────

macro_rules! impl_counted_op {
    ($Trait:ident, $method:ident, $AssignTrait:ident, $assign:ident, $field:ident, $op:tt) => {
        impl<T: $Trait<Output = T>> $Trait for Counted<T> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                bump(|c| c.$field += 1);
                Counted(self.0 $op rhs.0)
            }
        }

        impl<T: $Trait<Output = T> + Copy> $AssignTrait for Counted<T> {
            #[inline]
            fn $assign(&mut self, rhs: Self) {
                bump(|c| c.$field += 1);
                self.0 = self.0 $op rhs.0;
            }
        }
    };
}

impl_counted_op!(Add, add, AddAssign, add_assign, add, +);
impl_counted_op!(Sub, sub, SubAssign, sub_assign, sub, -);
impl_counted_op!(Mul, mul, MulAssign, mul_assign, mul, *);
impl_counted_op!(Div, div, DivAssign, div_assign, div, /);

impl<T: Rem<Output = T>> Rem for Counted<T> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self {
        Counted(self.0 % rhs.0)
    }
}

impl<T: Neg<Output = T>> Neg for Counted<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Counted(-self.0)
    }
}

// ── num-traits ──────────────────────────────────────────────────────

impl<T: Zero> Zero for Counted<T> {
    fn zero() -> Self {
        Counted(T::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<T: One> One for Counted<T> {
    fn one() -> Self {
        Counted(T::one())
    }
}

impl<T: Num> Num for Counted<T> {
    type FromStrRadixErr = T::FromStrRadixErr;

    fn from_str_radix(s: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        T::from_str_radix(s, radix).map(Counted)
    }
}

impl<T: LinalgScalar> LinalgScalar for Counted<T> {
    #[inline]
    fn modulus(self) -> Self {
        Counted(self.0.modulus())
    }

    #[inline]
    fn lsqrt(self) -> Self {
        Counted(self.0.lsqrt())
    }

    #[inline]
    fn lepsilon() -> Self {
        Counted(T::lepsilon())
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        Counted(T::from_f64(v))
    }
}

// ── Formatting ──────────────────────────────────────────────────────

impl<T: fmt::Display> fmt::Display for Counted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl<T: FromStr> FromStr for Counted<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Counted)
    }
}
