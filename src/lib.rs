//! # elimr
//!
//! **Classical elimination algorithms over dense real matrices.**
//!
//! elimr implements three elimination-based algorithms with auditable
//! intermediate states: Gauss-Jordan solving of linear systems, matrix
//! inversion via augmented-identity row reduction, and determinant
//! computation by triangularization.
//!
//! ## Features
//!
//! - **Solving**: reduced row-echelon form with rank analysis classifying
//!   systems as unique, infinite, or inconsistent
//! - **Inversion**: `(A | I) -> (I | A^-1)` with a typed failure for
//!   singular input
//! - **Determinant**: pivot-product accumulation with row-swap parity
//! - **Step traces**: every row operation can be streamed to an observer
//!   for step-by-step narration, without affecting results
//! - **f32/f64**: algorithms are generic over `num_traits::Float`
//!
//! ## Quick Start
//!
//! ```
//! use elimr::prelude::*;
//!
//! // 2x + y = 5, x - y = 1, as an augmented matrix
//! let system = Matrix::from_rows(&[vec![2.0, 1.0, 5.0], vec![1.0, -1.0, 1.0]])?;
//! assert_eq!(solve(&system)?, SolveOutcome::Unique(vec![2.0, 1.0]));
//!
//! let a = Matrix::from_rows(&[vec![2.0, 0.0], vec![0.0, 2.0]])?;
//! assert_eq!(determinant(&a)?, 4.0);
//! assert_eq!(invert(&a)?.row(0), &[0.5, 0.0]);
//! # Ok::<(), elimr::error::Error>(())
//! ```
//!
//! ## Numerical Contract
//!
//! Pivot selection uses exact-zero comparison: any nonzero value, however
//! small, is a valid pivot, and only exact `0.0` triggers a row swap
//! search. This reproduces the classical textbook procedure exactly and
//! keeps results deterministic and testable; it is not a numerically robust
//! strategy for ill-conditioned input. Rank computation is the one
//! tolerance-based routine, since it runs on already-rounded reduced
//! values. Inputs must be finite; NaN/infinity behavior is unspecified.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod error;
pub mod matrix;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::elimination::{
        determinant, determinant_traced, invert, invert_traced, rank, solve, solve_traced,
        EliminationStep, RowOp, SolveOutcome, StepSink,
    };
    pub use crate::error::{Error, Result};
    pub use crate::matrix::Matrix;
}
