//! Common test utilities
#![allow(dead_code)]

use elimr::prelude::*;

/// Build an f64 matrix from row slices, panicking on bad shape
pub fn mat(rows: &[&[f64]]) -> Matrix<f64> {
    let rows: Vec<Vec<f64>> = rows.iter().map(|r| r.to_vec()).collect();
    Matrix::from_rows(&rows).unwrap()
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Dense matrix product, for reconstruction checks
pub fn matmul(a: &Matrix<f64>, b: &Matrix<f64>) -> Matrix<f64> {
    assert_eq!(a.cols(), b.rows());
    let rows: Vec<Vec<f64>> = (0..a.rows())
        .map(|i| {
            (0..b.cols())
                .map(|j| (0..a.cols()).map(|k| a[(i, k)] * b[(k, j)]).sum())
                .collect()
        })
        .collect();
    Matrix::from_rows(&rows).unwrap()
}

/// Residuals `A x - b` for an augmented system and a candidate solution
pub fn residuals(augmented: &Matrix<f64>, solution: &[f64]) -> Vec<f64> {
    let n = augmented.rows();
    assert_eq!(solution.len(), n);
    (0..n)
        .map(|i| {
            let lhs: f64 = (0..n).map(|j| augmented[(i, j)] * solution[j]).sum();
            lhs - augmented[(i, n)]
        })
        .collect()
}
