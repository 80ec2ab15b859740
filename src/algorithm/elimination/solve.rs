//! Gauss-Jordan linear system solver
//!
//! Reduces an augmented matrix `[A | b]` to reduced row-echelon form with
//! row swaps for pivoting, then classifies the system by comparing the rank
//! of the coefficient block with the rank of the full augmented matrix.

use num_traits::Float;

use super::helpers::{rank, validate_augmented};
use super::pivot::find_pivot;
use super::row_ops::RowOps;
use super::trace::StepSink;
use crate::error::Result;
use crate::matrix::Matrix;

/// Classification of a linear system after Gauss-Jordan reduction.
///
/// Exactly one variant is produced per call. `Infinite` and `Inconsistent`
/// are first-class outcomes of well-formed input, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome<T> {
    /// The system has exactly one solution
    Unique(Vec<T>),
    /// The coefficient matrix is rank-deficient; infinitely many solutions
    Infinite,
    /// The equations contradict each other; no solution
    Inconsistent,
}

/// Solve a linear system given as an augmented matrix.
///
/// The input must have shape `n x (n + 1)`: `n` equations in `n` variables
/// with the right-hand side as the last column. The caller's matrix is not
/// modified. Inputs must be finite; NaN/infinity behavior is unspecified.
pub fn solve<T: Float>(augmented: &Matrix<T>) -> Result<SolveOutcome<T>> {
    solve_inner(augmented, None)
}

/// [`solve`], reporting every row operation to `sink`.
pub fn solve_traced<T: Float>(
    augmented: &Matrix<T>,
    sink: &mut dyn StepSink<T>,
) -> Result<SolveOutcome<T>> {
    solve_inner(augmented, Some(sink))
}

fn solve_inner<T: Float>(
    augmented: &Matrix<T>,
    sink: Option<&mut dyn StepSink<T>>,
) -> Result<SolveOutcome<T>> {
    let n = validate_augmented(augmented)?;
    let mut m = augmented.clone();

    {
        let mut ops = RowOps::new(&mut m, None, sink);
        for i in 0..n {
            if ops.matrix()[(i, i)] == T::zero() {
                match find_pivot(ops.matrix(), i + 1, i) {
                    Some(k) => ops.swap(i, k),
                    None => {
                        let coefficients_zero =
                            (0..n).all(|j| ops.matrix()[(i, j)] == T::zero());
                        if coefficients_zero {
                            if ops.matrix()[(i, n)] == T::zero() {
                                // Redundant equation; consistent with
                                // infinitely many solutions.
                                continue;
                            }
                            // 0 = nonzero
                            return Ok(SolveOutcome::Inconsistent);
                        }
                        // No pivot in this column; the row still carries
                        // later coefficients, leave it for the rank check.
                        continue;
                    }
                }
            }

            let pivot = ops.matrix()[(i, i)];
            ops.scale(i, pivot);
            for j in 0..n {
                if j != i {
                    let factor = ops.matrix()[(j, i)];
                    ops.eliminate(j, i, factor);
                }
            }
        }
    }

    // Ranks are recomputed on the reduced form rather than tracked through
    // the loop: skipped all-zero rows leave no other bookkeeping behind.
    let mut coefficients = Matrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            coefficients[(i, j)] = m[(i, j)];
        }
    }
    let coefficient_rank = rank(&coefficients);
    if coefficient_rank < n {
        return Ok(SolveOutcome::Infinite);
    }
    if coefficient_rank < rank(&m) {
        return Ok(SolveOutcome::Inconsistent);
    }
    Ok(SolveOutcome::Unique((0..n).map(|i| m[(i, n)]).collect()))
}
