//! Dense row-major matrix storage
//!
//! [`Matrix`] is the only data structure the elimination algorithms operate
//! on: a rectangular block of floating-point values stored in a single flat
//! buffer with `row * cols + col` indexing. Every algorithm entry point
//! clones the caller's matrix before mutating, so a `Matrix` handed to
//! `solve`/`invert`/`determinant` is never modified.

use std::fmt;
use std::ops::{Index, IndexMut};

use num_traits::Float;

use crate::error::{Error, Result};

/// Dense row-major matrix of floating-point values.
///
/// Generic over [`Float`] so the same kernels serve `f32` and `f64`;
/// documented behavior and tolerances target `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Float> Matrix<T> {
    /// Build a matrix from a slice of rows.
    ///
    /// Fails with [`Error::EmptyMatrix`] on zero rows or zero columns and
    /// with [`Error::JaggedRows`] when row lengths differ.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        if rows.is_empty() || rows[0].is_empty() {
            return Err(Error::EmptyMatrix);
        }
        let cols = rows[0].len();
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::JaggedRows {
                    row: i,
                    expected: cols,
                    got: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Build a matrix from a flat row-major slice.
    pub fn from_slice(data: &[T], rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyMatrix);
        }
        if data.len() != rows * cols {
            return Err(Error::ShapeMismatch {
                expected: vec![rows, cols],
                got: vec![data.len()],
            });
        }
        Ok(Self {
            data: data.to_vec(),
            rows,
            cols,
        })
    }

    /// All-zero matrix of the given shape.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// The n-by-n identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the matrix is square.
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// The flat row-major buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Copy out the matrix as a vector of rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.rows).map(|i| self.row(i).to_vec()).collect()
    }

    /// Transposed copy of the matrix.
    pub fn transpose(&self) -> Self {
        let mut data = vec![T::zero(); self.data.len()];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Exchange rows `i` and `k` in place.
    pub(crate) fn swap_rows(&mut self, i: usize, k: usize) {
        if i == k {
            return;
        }
        for j in 0..self.cols {
            self.data.swap(i * self.cols + j, k * self.cols + j);
        }
    }

    /// Divide row `i` by `divisor` in place.
    pub(crate) fn divide_row(&mut self, i: usize, divisor: T) {
        for v in &mut self.data[i * self.cols..(i + 1) * self.cols] {
            *v = *v / divisor;
        }
    }

    /// `row target -= factor * row source`, in place.
    pub(crate) fn sub_scaled_row(&mut self, target: usize, source: usize, factor: T) {
        for j in 0..self.cols {
            let s = self.data[source * self.cols + j];
            let t = &mut self.data[target * self.cols + j];
            *t = *t - factor * s;
        }
    }
}

impl<T: Float> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        &self.data[i * self.cols + j]
    }
}

impl<T: Float> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        &mut self.data[i * self.cols + j]
    }
}

impl<T: Float + fmt::Display> fmt::Display for Matrix<T> {
    /// Fixed-width rendering, one line per row, cells as `{:8.3}`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            let mut first = true;
            for j in 0..self.cols {
                if !first {
                    write!(f, "  ")?;
                }
                write!(f, "{:8.3}", self[(i, j)])?;
                first = false;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
