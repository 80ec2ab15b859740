//! Validation utilities and rank computation

use num_traits::Float;

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Validate the matrix is square, returning its dimension.
pub fn validate_square<T: Float>(matrix: &Matrix<T>) -> Result<usize> {
    if !matrix.is_square() {
        return Err(Error::ShapeMismatch {
            expected: vec![matrix.rows(), matrix.rows()],
            got: vec![matrix.rows(), matrix.cols()],
        });
    }
    Ok(matrix.rows())
}

/// Validate the matrix is in augmented form (`cols == rows + 1`), returning
/// the number of variables.
pub fn validate_augmented<T: Float>(matrix: &Matrix<T>) -> Result<usize> {
    if matrix.cols() != matrix.rows() + 1 {
        return Err(Error::ShapeMismatch {
            expected: vec![matrix.rows(), matrix.rows() + 1],
            got: vec![matrix.rows(), matrix.cols()],
        });
    }
    Ok(matrix.rows())
}

/// Rank of a matrix by row-echelon pivot counting.
///
/// Forward elimination with partial pivoting (largest absolute value in the
/// column), counting pivots above the relative tolerance
/// `max(rows, cols) * epsilon * max_abs_entry`. Unlike the exact-zero pivot
/// contract of the elimination entry points, rank uses a tolerance because
/// it runs on values already rounded by a previous reduction pass.
pub fn rank<T: Float>(matrix: &Matrix<T>) -> usize {
    let mut m = matrix.clone();
    let (rows, cols) = (m.rows(), m.cols());

    let mut max_abs = T::zero();
    for &v in m.as_slice() {
        if v.abs() > max_abs {
            max_abs = v.abs();
        }
    }
    if max_abs == T::zero() {
        return 0;
    }
    let dim = T::from(rows.max(cols)).unwrap_or_else(T::one);
    let tol = dim * T::epsilon() * max_abs;

    let mut rank = 0;
    let mut pivot_row = 0;
    for col in 0..cols {
        if pivot_row == rows {
            break;
        }
        let mut best = pivot_row;
        for r in (pivot_row + 1)..rows {
            if m[(r, col)].abs() > m[(best, col)].abs() {
                best = r;
            }
        }
        if m[(best, col)].abs() <= tol {
            continue;
        }
        m.swap_rows(pivot_row, best);
        for r in (pivot_row + 1)..rows {
            let factor = m[(r, col)] / m[(pivot_row, col)];
            m.sub_scaled_row(r, pivot_row, factor);
        }
        rank += 1;
        pivot_row += 1;
    }
    rank
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_square() {
        assert_eq!(validate_square(&Matrix::<f64>::identity(3)).unwrap(), 3);
        let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0]]).unwrap();
        assert!(validate_square(&m).is_err());
    }

    #[test]
    fn test_validate_augmented() {
        let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        assert_eq!(validate_augmented(&m).unwrap(), 2);
        assert!(validate_augmented(&Matrix::<f64>::identity(3)).is_err());
    }

    #[test]
    fn test_rank_full() {
        assert_eq!(rank(&Matrix::<f64>::identity(4)), 4);
    }

    #[test]
    fn test_rank_deficient() {
        // Second row is twice the first
        let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        assert_eq!(rank(&m), 1);
    }

    #[test]
    fn test_rank_zero_matrix() {
        assert_eq!(rank(&Matrix::<f64>::zeros(3, 3)), 0);
    }

    #[test]
    fn test_rank_rectangular() {
        let m = Matrix::from_rows(&[
            vec![1.0, 0.0, 2.0],
            vec![0.0, 1.0, 3.0],
        ])
        .unwrap();
        assert_eq!(rank(&m), 2);
    }
}
