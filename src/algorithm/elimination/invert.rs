//! Matrix inversion via augmented-identity reduction
//!
//! Reduces `(A | I)` to `(I | A^-1)`: a companion identity matrix receives
//! every row operation applied to the working copy of `A`. When the working
//! copy reaches the identity, the companion holds the inverse.

use num_traits::Float;

use super::helpers::validate_square;
use super::pivot::find_pivot;
use super::row_ops::RowOps;
use super::trace::StepSink;
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Invert a square matrix.
///
/// Fails with [`Error::NotInvertible`] when a column has no nonzero pivot
/// candidate at or below the diagonal, or when the final identity check on
/// the reduced working matrix fails. Never returns a partial inverse. The
/// caller's matrix is not modified. Inputs must be finite; NaN/infinity
/// behavior is unspecified.
pub fn invert<T: Float>(matrix: &Matrix<T>) -> Result<Matrix<T>> {
    invert_inner(matrix, None)
}

/// [`invert`], reporting every row operation to `sink`.
///
/// Recorded steps carry snapshots of both halves of the augmented pair.
pub fn invert_traced<T: Float>(
    matrix: &Matrix<T>,
    sink: &mut dyn StepSink<T>,
) -> Result<Matrix<T>> {
    invert_inner(matrix, Some(sink))
}

fn invert_inner<T: Float>(
    matrix: &Matrix<T>,
    sink: Option<&mut dyn StepSink<T>>,
) -> Result<Matrix<T>> {
    let n = validate_square(matrix)?;
    let mut work = matrix.clone();
    let mut inverse = Matrix::identity(n);

    {
        let mut ops = RowOps::new(&mut work, Some(&mut inverse), sink);
        for i in 0..n {
            if ops.matrix()[(i, i)] == T::zero() {
                match find_pivot(ops.matrix(), i + 1, i) {
                    Some(k) => ops.swap(i, k),
                    None => return Err(Error::NotInvertible),
                }
            }

            let pivot = ops.matrix()[(i, i)];
            ops.scale(i, pivot);
            for j in 0..n {
                if j == i {
                    continue;
                }
                let factor = ops.matrix()[(j, i)];
                if factor != T::zero() {
                    ops.eliminate(j, i, factor);
                }
            }
        }
    }

    // The pivot guard above should make failure here unreachable; the check
    // stays so a bogus inverse can never escape.
    if !is_identity(&work) {
        return Err(Error::NotInvertible);
    }
    Ok(inverse)
}

/// Whether `m` equals the identity within `sqrt(epsilon)` per entry
/// (about 1.5e-8 for f64).
fn is_identity<T: Float>(m: &Matrix<T>) -> bool {
    let tol = T::epsilon().sqrt();
    let n = m.rows();
    for i in 0..n {
        for j in 0..n {
            let expected = if i == j { T::one() } else { T::zero() };
            if (m[(i, j)] - expected).abs() > tol {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identity_tolerance() {
        let mut m: Matrix<f64> = Matrix::identity(2);
        assert!(is_identity(&m));
        m[(0, 1)] = 1e-12;
        assert!(is_identity(&m));
        m[(0, 1)] = 1e-6;
        assert!(!is_identity(&m));
    }
}
