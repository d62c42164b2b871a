//! # linsolve
//!
//! Square matrices in three storage formats with the solver that suits each,
//! plus generators that produce the same test matrix in every format.
//!
//! ## Quick start
//!
//! ```
//! use linsolve::{DenseMatrix, MatrixGenerator, RowColumnSymMatrix, SkylineMatrix, Vector};
//! use rand::distributions::{Distribution, Uniform};
//!
//! let dist = Uniform::new_inclusive(-4, 0).map(f64::from);
//! let bands = [1, -1, 2, -2];
//!
//! // Same seed, same matrix, three formats.
//! let sky: SkylineMatrix<f64> = MatrixGenerator::seeded(1).diagonally_dominant(20, 1.0, &bands, &dist);
//! let sym: RowColumnSymMatrix<f64> = MatrixGenerator::seeded(1).diagonally_dominant(20, 1.0, &bands, &dist);
//! let dense = DenseMatrix::from(&sky);
//! assert_eq!(DenseMatrix::from(&sym), dense);
//!
//! let x_star = Vector::from_fn(20, |i| (i + 1) as f64);
//! let b = &dense * &x_star;
//!
//! let x = sky.solve(&b);         // envelope LU
//! assert!((&x - &x_star).norm() < 1e-9);
//! let x = sym.solve(&b);         // Conjugate Gradient
//! assert!((&x - &x_star).norm() < 1e-3);
//! let x = dense.solve(&b);       // Gaussian elimination
//! assert!((&x - &x_star).norm() < 1e-9);
//! ```
//!
//! ## Modules
//!
//! - [`vector`]: [`Vector<T>`] with elementwise arithmetic, dot product and
//!   norms.
//! - [`dense`]: row-major [`DenseMatrix<T>`]. Gaussian elimination with
//!   partial pivoting through an index permutation (rows never move),
//!   determinant, cofactor inverse.
//! - [`skyline`]: profile-format [`SkylineMatrix<T>`]. In-place envelope LU
//!   ([`SkylineLu`]) without pivoting, for diagonally dominant systems.
//! - [`sym`]: [`RowColumnSymMatrix<T>`] storing each off-diagonal pair once.
//!   Solved by Conjugate Gradient, configured by [`CgSettings`].
//! - [`linalg`]: the free-function kernels behind the above.
//! - [`generate`]: diagonally dominant and Hilbert test matrices.
//! - [`counted`]: [`Counted<T>`], a scalar that counts its arithmetic.
//! - [`io`]: text persistence through [`Persist`].
//! - [`logging`]: terminal logger setup.
//! - [`traits`]: element traits and the format-independent [`MatrixRef`],
//!   [`LinearOperator`] and [`LinearSolve`] interfaces.
//!
//! ## Ownership of destructive solves
//!
//! `DenseMatrix::solve`, `DenseMatrix::det`, `SkylineMatrix::lu` and
//! `SkylineMatrix::solve` overwrite the matrix storage, so they take `self`
//! by value. Clone first to keep the original.
//!
//! Numeric preconditions (non-singular input, pivot-free stability for the
//! skyline format, positive definiteness for CG) are the caller's
//! responsibility and are not checked.

pub mod counted;
pub mod dense;
pub mod generate;
pub mod io;
pub mod linalg;
pub mod logging;
pub mod skyline;
pub mod sym;
pub mod traits;
pub mod vector;

pub use counted::Counted;
pub use dense::DenseMatrix;
pub use generate::{Generated, MatrixGenerator};
pub use io::{Persist, PersistError};
pub use linalg::{CgResult, CgSettings};
pub use skyline::{SkylineLu, SkylineMatrix};
pub use sym::RowColumnSymMatrix;
pub use traits::{solve, LinalgScalar, LinearOperator, LinearSolve, MatrixRef, Scalar};
pub use vector::Vector;
