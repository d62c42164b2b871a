use log::{debug, trace, warn};

use crate::traits::{LinalgScalar, LinearOperator};
use crate::vector::Vector;

/// Settings for the Conjugate Gradient solver.
#[derive(Debug, Clone, Copy)]
pub struct CgSettings<T> {
    /// Stop once `‖r‖ / ‖b‖ < epsilon`.
    pub epsilon: T,
    /// Iteration cap is `max_iter_factor * n`.
    pub max_iter_factor: usize,
}

impl<T: LinalgScalar> Default for CgSettings<T> {
    fn default() -> Self {
        Self {
            epsilon: T::from_f64(1e-7),
            max_iter_factor: 1000,
        }
    }
}

/// Outcome of a Conjugate Gradient run.
///
/// Reaching the iteration cap is not an error: `x` holds the last iterate and
/// `converged` is `false`.
#[derive(Debug, Clone)]
pub struct CgResult<T> {
    /// Final iterate.
    pub x: Vector<T>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// `‖r‖ / ‖b‖` at exit.
    pub residual_ratio: T,
    /// Whether `residual_ratio < epsilon` or the residual vanished exactly.
    pub converged: bool,
}

/// Solve `A x = b` by classical (unpreconditioned) Conjugate Gradient.
///
/// ```text
/// x = 0, r = b, z = r
/// while ‖r‖² / ‖b‖² >= eps² and r != 0 and k < cap:
///     α = (r·r) / (z·Az)
///     x += α z
///     r -= α Az
///     β = (r'·r') / (r·r)
///     z = r' + β z
/// ```
///
/// Only `A * z` is needed, so any [`LinearOperator`] works. `A` must be
/// symmetric positive definite; nothing checks this and an indefinite matrix
/// diverges or produces NaNs.
///
/// An exactly zero residual ends the loop even when `epsilon` is 0, so the
/// exact solution is returned rather than a `0 / 0` step.
///
/// ```
/// use linsolve::linalg::{conjugate_gradient, CgSettings};
/// use linsolve::{DenseMatrix, Vector};
///
/// let a = DenseMatrix::from_rows(2, &[4.0_f64, 1.0, 1.0, 3.0]);
/// let b = Vector::from_slice(&[1.0, 2.0]);
/// let r = conjugate_gradient(&a, &b, &CgSettings::default());
/// assert!(r.converged);
/// assert!((r.x[0] - 1.0 / 11.0).abs() < 1e-9);
/// assert!((r.x[1] - 7.0 / 11.0).abs() < 1e-9);
/// ```
pub fn conjugate_gradient<T, A>(a: &A, b: &Vector<T>, settings: &CgSettings<T>) -> CgResult<T>
where
    T: LinalgScalar,
    A: LinearOperator<T> + ?Sized,
{
    let n = a.dims();
    assert_eq!(b.len(), n, "rhs length {} does not match dimension {}", b.len(), n);

    let max_iter = settings.max_iter_factor * n;
    let eps2 = settings.epsilon * settings.epsilon;
    let bb = b.norm_squared();

    let mut x = Vector::zeros(n);
    if bb == T::zero() {
        debug!("cg: n = {}, zero rhs, nothing to do", n);
        return CgResult {
            x,
            iterations: 0,
            residual_ratio: T::zero(),
            converged: true,
        };
    }

    let mut r = b.clone();
    let mut z = r.clone();
    let mut rr = bb;
    let mut ratio2 = T::one();
    let mut iterations = 0;

    while iterations < max_iter && ratio2 >= eps2 && rr > T::zero() {
        let az = a.mul_vec(&z);
        let alpha = rr / z.dot(&az);
        x += &z * alpha;
        r -= &az * alpha;

        let rr_new = r.norm_squared();
        let beta = rr_new / rr;
        z = &r + &(z * beta);
        rr = rr_new;

        iterations += 1;
        ratio2 = rr / bb;
        trace!("cg iteration {}: |r|/|b| = {}", iterations, ratio2.lsqrt());
    }

    let residual_ratio = ratio2.lsqrt();
    let converged = ratio2 < eps2 || rr == T::zero();
    if converged {
        debug!(
            "cg: n = {}, converged in {} iterations, |r|/|b| = {}",
            n, iterations, residual_ratio
        );
    } else {
        warn!(
            "cg: n = {}, stopped at iteration cap {} with |r|/|b| = {}",
            n, max_iter, residual_ratio
        );
    }

    CgResult {
        x,
        iterations,
        residual_ratio,
        converged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DenseMatrix;

    #[test]
    fn default_settings() {
        let s = CgSettings::<f64>::default();
        assert_eq!(s.epsilon, 1e-7);
        assert_eq!(s.max_iter_factor, 1000);
    }

    #[test]
    fn spd_dense_operator() {
        let a = DenseMatrix::from_rows(3, &[4.0_f64, 1.0, 0.0, 1.0, 3.0, 1.0, 0.0, 1.0, 2.0]);
        let x_star = Vector::from_slice(&[1.0, -1.0, 2.0]);
        let b = &a * &x_star;
        let r = conjugate_gradient(&a, &b, &CgSettings::default());
        assert!(r.converged);
        assert!(r.iterations <= 3 + 1);
        for i in 0..3 {
            assert!((r.x[i] - x_star[i]).abs() < 1e-6);
        }
    }

    #[test]
    fn zero_rhs_returns_immediately() {
        let a = DenseMatrix::<f64>::eye(4);
        let r = conjugate_gradient(&a, &Vector::zeros(4), &CgSettings::default());
        assert_eq!(r.iterations, 0);
        assert!(r.converged);
        assert_eq!(r.x, Vector::zeros(4));
    }

    fn hilbert_dense(n: usize) -> DenseMatrix<f64> {
        DenseMatrix::from_fn(n, |i, j| 1.0 / (i + j + 1) as f64)
    }

    #[test]
    fn cap_stops_the_loop() {
        // Hilbert n = 8 is far from 1e-30 after n steps in floating point.
        let n = 8;
        let a = hilbert_dense(n);
        let b = Vector::fill(n, 1.0);
        let settings = CgSettings {
            epsilon: 1e-30,
            max_iter_factor: 1,
        };
        let r = conjugate_gradient(&a, &b, &settings);
        assert_eq!(r.iterations, settings.max_iter_factor * n, "cap ends the loop");
        assert!(!r.converged);
        assert!(r.residual_ratio.is_finite());
        assert!(r.x.iter().all(|v| v.is_finite()));

        let settings = CgSettings {
            max_iter_factor: 2,
            ..settings
        };
        let r = conjugate_gradient(&a, &b, &settings);
        assert_eq!(r.iterations, 2 * n);
        assert!(!r.converged);
    }

    #[test]
    fn exact_solution_with_zero_epsilon() {
        let a = DenseMatrix::from_rows(2, &[2.0_f64, 0.0, 0.0, 2.0]);
        let b = Vector::from_slice(&[2.0, 2.0]);
        let settings = CgSettings {
            epsilon: 0.0,
            ..CgSettings::default()
        };
        let r = conjugate_gradient(&a, &b, &settings);
        assert_eq!(r.iterations, 1);
        assert!(r.converged, "zero residual counts as converged");
        assert_eq!(r.residual_ratio, 0.0);
        assert_eq!(r.x, Vector::from_slice(&[1.0, 1.0]));
    }

    #[test]
    fn underflowing_epsilon_keeps_exact_solution() {
        // 1e-300 squared is 0 in f64.
        let a = DenseMatrix::<f64>::eye(3);
        let b = Vector::from_slice(&[1.0, -2.0, 3.0]);
        let settings = CgSettings {
            epsilon: 1e-300,
            max_iter_factor: 5,
        };
        let r = conjugate_gradient(&a, &b, &settings);
        assert!(r.converged);
        assert_eq!(r.iterations, 1);
        assert_eq!(r.x, b);
    }
}
