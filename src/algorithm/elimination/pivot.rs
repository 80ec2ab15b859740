//! Pivot row search

use num_traits::Float;

use crate::matrix::Matrix;

/// Find a usable pivot row for `col`, scanning rows `start_row..` downward.
///
/// Returns the first row at or below `start_row` whose entry in `col` is
/// nonzero, or `None` when the column has no pivot candidate left. Scanning
/// strictly downward is load-bearing: rows above `start_row` are already
/// fully reduced, and a swap must only ever pull a later row up so the
/// finished prefix is never disturbed.
///
/// The comparison is exact (`!= 0`), not epsilon-tolerant: any nonzero
/// value, however small, is accepted as a pivot. See the crate docs for the
/// numerical trade-off.
pub fn find_pivot<T: Float>(matrix: &Matrix<T>, start_row: usize, col: usize) -> Option<usize> {
    (start_row..matrix.rows()).find(|&r| matrix[(r, col)] != T::zero())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_first_nonzero_below() {
        let m = Matrix::from_rows(&[
            vec![0.0, 1.0],
            vec![0.0, 2.0],
            vec![3.0, 0.0],
        ])
        .unwrap();
        assert_eq!(find_pivot(&m, 0, 0), Some(2));
        assert_eq!(find_pivot(&m, 1, 1), Some(1));
    }

    #[test]
    fn test_never_scans_upward() {
        let m = Matrix::from_rows(&[vec![5.0, 0.0], vec![0.0, 1.0]]).unwrap();
        assert_eq!(find_pivot(&m, 1, 0), None);
    }

    #[test]
    fn test_tiny_values_are_pivots() {
        let m = Matrix::from_rows(&[vec![1e-300, 1.0]]).unwrap();
        assert_eq!(find_pivot(&m, 0, 0), Some(0));
    }

    #[test]
    fn test_exact_zero_is_not() {
        let m = Matrix::from_rows(&[vec![0.0, 1.0]]).unwrap();
        assert_eq!(find_pivot(&m, 0, 0), None);
    }
}
