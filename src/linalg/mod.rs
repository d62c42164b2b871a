//! Free-function kernels behind the matrix types.
//!
//! Each kernel works on raw storage (`&mut DenseMatrix`, envelope slices,
//! any [`LinearOperator`](crate::traits::LinearOperator)) so it can be reused
//! in place; the matrix types wrap them in `solve`/`det`/`lu` methods.

pub mod cg;
pub mod gauss;
pub mod skyline_lu;

pub use cg::{conjugate_gradient, CgResult, CgSettings};
pub use gauss::{gauss_back_substitute, gauss_det, gauss_eliminate_in_place};
pub use skyline_lu::{skyline_lu_in_place, skyline_lu_solve};
