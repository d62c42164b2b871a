//! Test matrix synthesis.
//!
//! Every generator fills a [`SkylineMatrix`] and hands it to the target
//! format through [`Generated`], so a fixed seed produces the same values
//! whatever format is asked for.
//!
//! Band offsets follow the `(i, i + d)` convention: `-1` is the first
//! subdiagonal, `2` the second superdiagonal. Offset `0` is ignored and
//! offsets with `|d| >= n` are dropped. Every row's envelope is
//! `min(i, max |d|)` wide; positions inside it on unselected bands are zero.

use core::any::type_name;

use log::debug;
use rand::distributions::Distribution;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::dense::DenseMatrix;
use crate::skyline::SkylineMatrix;
use crate::sym::RowColumnSymMatrix;
use crate::traits::{LinalgScalar, Scalar};

/// A matrix format the generators can produce.
pub trait Generated<T>: Sized {
    /// Symmetric targets get the band set mirrored before drawing.
    const SYMMETRIC: bool = false;

    /// Convert the generated skyline into this format.
    fn from_skyline(s: SkylineMatrix<T>) -> Self;
}

impl<T: Scalar> Generated<T> for SkylineMatrix<T> {
    fn from_skyline(s: SkylineMatrix<T>) -> Self {
        s
    }
}

impl<T: Scalar> Generated<T> for DenseMatrix<T> {
    fn from_skyline(s: SkylineMatrix<T>) -> Self {
        DenseMatrix::from(&s)
    }
}

impl<T: Scalar> Generated<T> for RowColumnSymMatrix<T> {
    const SYMMETRIC: bool = true;

    fn from_skyline(s: SkylineMatrix<T>) -> Self {
        RowColumnSymMatrix::from_skyline_lower(&s)
    }
}

/// Random matrix generator owning its random engine.
///
/// ```
/// use linsolve::{DenseMatrix, MatrixGenerator, SkylineMatrix};
/// use rand::distributions::{Distribution, Uniform};
///
/// let dist = Uniform::new_inclusive(-4, 0).map(f64::from);
/// let bands = [1, -1, 2, -2];
///
/// let s: SkylineMatrix<f64> =
///     MatrixGenerator::seeded(7).diagonally_dominant(8, 1.0, &bands, &dist);
/// let d: DenseMatrix<f64> =
///     MatrixGenerator::seeded(7).diagonally_dominant(8, 1.0, &bands, &dist);
/// assert_eq!(DenseMatrix::from(&s), d);
/// ```
#[derive(Debug, Clone)]
pub struct MatrixGenerator<R = ChaCha8Rng> {
    rng: R,
}

impl MatrixGenerator<ChaCha8Rng> {
    /// Generator backed by a `ChaCha8Rng` seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> MatrixGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Strictly diagonally dominant matrix on the selected bands.
    ///
    /// Off-diagonal values are drawn from `dist` in row order, one draw per
    /// mirrored pair of positions, and copied to every selected position of
    /// the pair. The diagonal is then `di[i] = Σ_j |a_ij| + dominance`, so a
    /// small `dominance` gives a poorly conditioned matrix.
    pub fn diagonally_dominant<T, M>(
        &mut self,
        n: usize,
        dominance: T,
        bands: &[isize],
        dist: &impl Distribution<T>,
    ) -> M
    where
        T: LinalgScalar,
        M: Generated<T>,
    {
        let set = BandSet::new(n, bands, M::SYMMETRIC);
        let mut s = set.fill(n, |_, _| dist.sample(&mut self.rng));

        let mut sums = vec![T::zero(); n];
        for i in 0..n {
            let start = i - s.row_len(i);
            for k in 0..s.row_len(i) {
                let j = start + k;
                sums[i] = sums[i] + s.al[s.ia[i] + k].modulus();
                sums[j] = sums[j] + s.au[s.ia[i] + k].modulus();
            }
        }
        for (d, sum) in s.di.iter_mut().zip(sums) {
            *d = sum + dominance;
        }

        debug!(
            "generated diagonally dominant {}: n = {}, envelope width = {}, dominance = {}",
            type_name::<M>(),
            n,
            set.width,
            dominance
        );
        M::from_skyline(s)
    }
}

/// Hilbert entries `1 / (i + j + 1)` on the diagonal and the selected bands.
///
/// Deterministic; the full Hilbert matrix is `bands = [±1, ..., ±(n-1)]`.
///
/// ```
/// use linsolve::generate::hilbert;
/// use linsolve::DenseMatrix;
///
/// let h: DenseMatrix<f64> = hilbert(3, &[1, -1, 2, -2]);
/// assert_eq!(h[(0, 0)], 1.0);
/// assert_eq!(h[(2, 1)], 0.25);
/// assert_eq!(h[(0, 2)], 1.0 / 3.0);
/// ```
pub fn hilbert<T, M>(n: usize, bands: &[isize]) -> M
where
    T: LinalgScalar,
    M: Generated<T>,
{
    let entry = |i: usize, j: usize| T::one() / T::from_f64((i + j + 1) as f64);
    let set = BandSet::new(n, bands, M::SYMMETRIC);
    let mut s = set.fill(n, &entry);
    for (i, d) in s.di.iter_mut().enumerate() {
        *d = entry(i, i);
    }
    debug!(
        "generated hilbert {}: n = {}, envelope width = {}",
        type_name::<M>(),
        n,
        set.width
    );
    M::from_skyline(s)
}

/// Selected bands, indexed by distance from the diagonal.
#[derive(Debug)]
struct BandSet {
    lower: Vec<bool>,
    upper: Vec<bool>,
    width: usize,
}

impl BandSet {
    fn new(n: usize, bands: &[isize], mirror: bool) -> Self {
        let mut lower = vec![false; n.max(1)];
        let mut upper = vec![false; n.max(1)];
        let mut width = 0;
        for &d in bands {
            let m = d.unsigned_abs();
            if m == 0 || m >= n {
                continue;
            }
            width = width.max(m);
            if d < 0 || mirror {
                lower[m] = true;
            }
            if d > 0 || mirror {
                upper[m] = true;
            }
        }
        Self { lower, upper, width }
    }

    /// Skyline with a zero diagonal and `value(i, j)` on selected positions.
    ///
    /// `value` is called once per lower position `(i, j)` whose pair is
    /// selected on either side, rows first, columns ascending.
    fn fill<T: Scalar>(&self, n: usize, mut value: impl FnMut(usize, usize) -> T) -> SkylineMatrix<T> {
        let mut ia = Vec::with_capacity(n + 1);
        let mut al = Vec::new();
        let mut au = Vec::new();
        ia.push(0);

        for i in 0..n {
            for j in i - i.min(self.width)..i {
                let d = i - j;
                let (lo, up) = (self.lower[d], self.upper[d]);
                let v = if lo || up { value(i, j) } else { T::zero() };
                al.push(if lo { v } else { T::zero() });
                au.push(if up { v } else { T::zero() });
            }
            ia.push(al.len());
        }

        SkylineMatrix {
            ia,
            di: vec![T::zero(); n],
            al,
            au,
        }
    }
}
