//! Determinant by upper-triangularization
//!
//! Forward elimination only: each column is cleared below the diagonal and
//! rows above are left untouched, since only the product of the diagonal
//! pivots matters. Rows are never normalized here, unlike the solver and
//! inverter; the pivot value is multiplied into the running determinant
//! directly and each row swap flips its sign.

use num_traits::Float;

use super::helpers::validate_square;
use super::pivot::find_pivot;
use super::row_ops::RowOps;
use super::trace::StepSink;
use crate::error::Result;
use crate::matrix::Matrix;

/// Determinant of a square matrix.
///
/// A singular matrix yields `Ok(0.0)` — zero is a meaningful determinant,
/// not a failure. The caller's matrix is not modified. Inputs must be
/// finite; NaN/infinity behavior is unspecified.
pub fn determinant<T: Float>(matrix: &Matrix<T>) -> Result<T> {
    determinant_inner(matrix, None)
}

/// [`determinant`], reporting every row operation to `sink`.
pub fn determinant_traced<T: Float>(matrix: &Matrix<T>, sink: &mut dyn StepSink<T>) -> Result<T> {
    determinant_inner(matrix, Some(sink))
}

fn determinant_inner<T: Float>(
    matrix: &Matrix<T>,
    sink: Option<&mut dyn StepSink<T>>,
) -> Result<T> {
    let n = validate_square(matrix)?;
    if matrix.as_slice().iter().all(|&v| v == T::zero()) {
        return Ok(T::zero());
    }

    let mut m = matrix.clone();
    let mut det = T::one();
    let mut swap_count = 0usize;

    let mut ops = RowOps::new(&mut m, None, sink);
    for i in 0..n {
        if ops.matrix()[(i, i)] == T::zero() {
            match find_pivot(ops.matrix(), i + 1, i) {
                Some(k) => {
                    ops.swap(i, k);
                    swap_count += 1;
                }
                // No pivot anywhere at or below the diagonal: singular.
                None => return Ok(T::zero()),
            }
        }

        let pivot = ops.matrix()[(i, i)];
        det = det * pivot;
        for j in (i + 1)..n {
            let factor = ops.matrix()[(j, i)] / pivot;
            ops.eliminate(j, i, factor);
        }
    }

    if swap_count % 2 == 1 {
        det = -det;
    }
    Ok(det)
}
