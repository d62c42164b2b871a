use crate::traits::LinalgScalar;
use crate::vector::dot_slices;

/// Envelope LU factorization, in place.
///
/// Storage follows [`SkylineMatrix`](crate::SkylineMatrix): row `i` keeps its
/// lower entries in `al[ia[i]..ia[i + 1]]` for columns `i - len_i .. i`, and
/// column `i` keeps its upper entries at the same positions of `au`.
///
/// On return `A = L U` where `L` is lower triangular with diagonal `di` and
/// off-diagonal `al`, and `U` is unit upper triangular with off-diagonal `au`.
/// Fill-in never leaves the envelope, so the work is proportional to the sum
/// of squared envelope lengths.
///
/// No pivoting: the matrix must admit a pivot-free factorization (for example
/// strict diagonal dominance). A zero pivot yields non-finite values.
pub fn skyline_lu_in_place<T: LinalgScalar>(
    ia: &[usize],
    di: &mut [T],
    al: &mut [T],
    au: &mut [T],
) {
    let n = di.len();
    debug_assert_eq!(ia.len(), n + 1, "ia must have n + 1 entries");
    debug_assert_eq!(al.len(), ia[n]);
    debug_assert_eq!(au.len(), ia[n]);

    for i in 0..n {
        let row = ia[i];
        let len_i = ia[i + 1] - row;
        let si = i - len_i;

        for jo in 0..len_i {
            let j = si + jo;
            let len_j = ia[j + 1] - ia[j];
            // Columns shared by row i of L and column j of U (and vice versa)
            // end at j; their count is bounded by both envelopes.
            let overlap = jo.min(len_j);
            let ib = row + jo - overlap;
            let jb = ia[j + 1] - overlap;

            let s = dot_slices(&al[ib..ib + overlap], &au[jb..jb + overlap]);
            al[row + jo] = al[row + jo] - s;

            let s = dot_slices(&au[ib..ib + overlap], &al[jb..jb + overlap]);
            au[row + jo] = (au[row + jo] - s) / di[j];
        }

        let s = dot_slices(&al[row..row + len_i], &au[row..row + len_i]);
        di[i] = di[i] - s;
    }
}

/// Solve `L U x = b` with factors produced by [`skyline_lu_in_place`].
///
/// Forward substitution runs row-wise over `al`, back substitution runs
/// column-wise over `au` so both sweep the envelope once.
pub fn skyline_lu_solve<T: LinalgScalar>(ia: &[usize], di: &[T], al: &[T], au: &[T], b: &[T], x: &mut [T]) {
    let n = di.len();
    debug_assert_eq!(b.len(), n, "rhs length mismatch");
    debug_assert_eq!(x.len(), n, "solution length mismatch");

    // L y = b
    for i in 0..n {
        let len_i = ia[i + 1] - ia[i];
        let si = i - len_i;
        let s = dot_slices(&al[ia[i]..ia[i + 1]], &x[si..i]);
        x[i] = (b[i] - s) / di[i];
    }

    // U x = y
    for i in (0..n).rev() {
        let len_i = ia[i + 1] - ia[i];
        let si = i - len_i;
        let xi = x[i];
        for (xk, &u) in x[si..i].iter_mut().zip(&au[ia[i]..ia[i + 1]]) {
            *xk = *xk - u * xi;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn tridiagonal_factor() {
        // [[4, 1, 0], [2, 5, 1], [0, 3, 6]]
        let ia = [0, 0, 1, 2];
        let mut di = [4.0_f64, 5.0, 6.0];
        let mut al = [2.0, 3.0];
        let mut au = [1.0, 1.0];
        skyline_lu_in_place(&ia, &mut di, &mut al, &mut au);

        // l11 = 4, u12 = 1/4, l21 = 2, l22 = 5 - 2/4 = 4.5
        assert!((di[0] - 4.0).abs() < TOL);
        assert!((au[0] - 0.25).abs() < TOL);
        assert!((al[0] - 2.0).abs() < TOL);
        assert!((di[1] - 4.5).abs() < TOL);
        // u23 = 1/4.5, l32 = 3, l33 = 6 - 3/4.5
        assert!((au[1] - 1.0 / 4.5).abs() < TOL);
        assert!((al[1] - 3.0).abs() < TOL);
        assert!((di[2] - (6.0 - 3.0 / 4.5)).abs() < TOL);
    }

    #[test]
    fn uneven_envelopes() {
        // Row 2 reaches column 0, row 1 only its diagonal, row 3 reaches column 1.
        // [[5, 0, 1, 0],
        //  [0, 6, 2, 1],
        //  [2, 1, 7, 3],
        //  [0, 2, 1, 8]]
        let ia = [0, 0, 0, 2, 4];
        let di_orig = [5.0, 6.0, 7.0, 8.0];
        let al_orig = [2.0, 1.0, 2.0, 1.0];
        let au_orig = [1.0, 2.0, 1.0, 3.0];
        let mut di = di_orig;
        let mut al = al_orig;
        let mut au = au_orig;
        skyline_lu_in_place(&ia, &mut di, &mut al, &mut au);

        let x_star = [1.0, -2.0, 3.0, 0.5];
        let a = [
            [5.0, 0.0, 1.0, 0.0],
            [0.0, 6.0, 2.0, 1.0],
            [2.0, 1.0, 7.0, 3.0],
            [0.0, 2.0, 1.0, 8.0],
        ];
        let b: Vec<f64> = a
            .iter()
            .map(|r| r.iter().zip(&x_star).map(|(a, x)| a * x).sum())
            .collect();
        let mut x = [0.0; 4];
        skyline_lu_solve(&ia, &di, &al, &au, &b, &mut x);
        for i in 0..4 {
            assert!((x[i] - x_star[i]).abs() < 1e-12, "x[{}] = {}", i, x[i]);
        }
    }

    #[test]
    fn diagonal_only() {
        let ia = [0, 0, 0];
        let mut di = [2.0, 4.0];
        skyline_lu_in_place(&ia, &mut di, &mut [], &mut []);
        let mut x = [0.0; 2];
        skyline_lu_solve(&ia, &di, &[], &[], &[1.0, 1.0], &mut x);
        assert_eq!(x, [0.5, 0.25]);
    }
}
