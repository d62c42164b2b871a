use crate::dense::DenseMatrix;
use crate::traits::LinalgScalar;
use crate::vector::dot_slices;

/// Gaussian elimination with partial pivoting, in place.
///
/// Rows are never moved: `perm` is filled with a logical row order and every
/// row access goes through it, so a pivot swap costs O(1). On return, row
/// `perm[k]` holds the k-th row of U in columns `k..n`; entries left of the
/// diagonal are stale and must not be read.
///
/// If `b` is given, the same row operations are applied to it (indexed by
/// physical row, like `a`).
///
/// Returns the number of pivot swaps performed.
///
/// No zero-pivot check is made: a singular matrix produces non-finite values.
pub fn gauss_eliminate_in_place<T: LinalgScalar>(
    a: &mut DenseMatrix<T>,
    perm: &mut [usize],
    mut b: Option<&mut [T]>,
) -> usize {
    let n = a.dims();
    debug_assert_eq!(n, perm.len(), "permutation length must match matrix size");
    if let Some(b) = b.as_deref() {
        debug_assert_eq!(n, b.len(), "rhs length must match matrix size");
    }

    for (i, p) in perm.iter_mut().enumerate() {
        *p = i;
    }

    let mut swaps = 0;
    for k in 0..n.saturating_sub(1) {
        let m = select_pivot(a, perm, k);
        if m != k {
            perm.swap(k, m);
            swaps += 1;
        }

        let pivot_row = perm[k];
        for &row in &perm[k + 1..] {
            let (target, source) = two_rows_mut(&mut a.data, n, row, pivot_row);
            let t = target[k] / source[k];
            if let Some(b) = b.as_deref_mut() {
                b[row] = b[row] - t * b[pivot_row];
            }
            for (x, &y) in target[k + 1..].iter_mut().zip(source[k + 1..].iter()) {
                *x = *x - t * y;
            }
        }
    }

    swaps
}

/// Back substitution on a matrix reduced by [`gauss_eliminate_in_place`].
///
/// `b` is the right-hand side after elimination, `x` receives the solution.
/// Each `x[k]` is resolved bottom-up from the already known `x[k+1..]`.
pub fn gauss_back_substitute<T: LinalgScalar>(
    a: &DenseMatrix<T>,
    perm: &[usize],
    b: &[T],
    x: &mut [T],
) {
    let n = a.dims();
    for k in (0..n).rev() {
        let row = a.row_slice(perm[k]);
        let s = dot_slices(&row[k + 1..], &x[k + 1..]);
        x[k] = (b[perm[k]] - s) / row[k];
    }
}

/// Determinant of a matrix reduced by [`gauss_eliminate_in_place`].
pub fn gauss_det<T: LinalgScalar>(a: &DenseMatrix<T>, perm: &[usize], swaps: usize) -> T {
    let mut d = if swaps % 2 == 0 { T::one() } else { -T::one() };
    for (k, &row) in perm.iter().enumerate() {
        d = d * a[(row, k)];
    }
    d
}

/// Inverse by cofactor expansion: `inv[i][j] = (-1)^(i+j) det(minor(j, i)) / det(A)`.
///
/// Every cofactor is an independent elimination, so this is only meant for
/// small validation matrices.
pub fn cofactor_inverse<T: LinalgScalar>(a: &DenseMatrix<T>) -> DenseMatrix<T> {
    let det = a.clone().det();
    DenseMatrix::from_fn(a.dims(), |i, j| {
        let c = a.minor(j, i).det();
        let c = if (i + j) % 2 == 0 { c } else { -c };
        c / det
    })
}

/// Pick the pivot position for column `k` among `perm[k..]`.
///
/// Finds the first smallest and the last largest candidate value and keeps
/// whichever has the larger modulus; ties go to the largest.
fn select_pivot<T: LinalgScalar>(a: &DenseMatrix<T>, perm: &[usize], k: usize) -> usize {
    let mut min_pos = k;
    let mut max_pos = k;
    let mut min_val = a[(perm[k], k)];
    let mut max_val = min_val;

    for (pos, &row) in perm.iter().enumerate().skip(k + 1) {
        let v = a[(row, k)];
        if v < min_val {
            min_val = v;
            min_pos = pos;
        }
        if v >= max_val {
            max_val = v;
            max_pos = pos;
        }
    }

    if min_val.modulus() > max_val.modulus() {
        min_pos
    } else {
        max_pos
    }
}

/// Borrow row `target` mutably and row `source` immutably. Requires
/// `target != source`.
#[inline]
fn two_rows_mut<T>(data: &mut [T], n: usize, target: usize, source: usize) -> (&mut [T], &[T]) {
    debug_assert_ne!(target, source);
    if target < source {
        let (lo, hi) = data.split_at_mut(source * n);
        (&mut lo[target * n..(target + 1) * n], &hi[..n])
    } else {
        let (lo, hi) = data.split_at_mut(target * n);
        (&mut hi[..n], &lo[source * n..(source + 1) * n])
    }
}
