//! Primitive in-place row operations, mirrored across matrix halves
//!
//! [`RowOps`] wraps the working matrix together with an optional companion
//! matrix and an optional step sink. Inversion attaches the identity as the
//! companion so every operation lands on both halves through one code path;
//! the solver and determinant run with no companion. Each applied operation
//! is reported to the sink, when one is attached, as an
//! [`EliminationStep`](super::trace::EliminationStep) carrying post-state
//! snapshots.

use num_traits::Float;

use super::trace::{EliminationStep, RowOp, StepSink};
use crate::matrix::Matrix;

/// Row-operation executor over a working matrix and its optional companion.
pub struct RowOps<'a, 's, T> {
    working: &'a mut Matrix<T>,
    companion: Option<&'a mut Matrix<T>>,
    sink: Option<&'s mut dyn StepSink<T>>,
}

impl<'a, 's, T: Float> RowOps<'a, 's, T> {
    /// Attach to a working matrix, with optional companion and sink.
    pub fn new(
        working: &'a mut Matrix<T>,
        companion: Option<&'a mut Matrix<T>>,
        sink: Option<&'s mut dyn StepSink<T>>,
    ) -> Self {
        Self {
            working,
            companion,
            sink,
        }
    }

    /// Read-only view of the working matrix.
    pub fn matrix(&self) -> &Matrix<T> {
        self.working
    }

    /// Exchange rows `i` and `k` in every attached half.
    pub fn swap(&mut self, i: usize, k: usize) {
        self.working.swap_rows(i, k);
        if let Some(c) = self.companion.as_deref_mut() {
            c.swap_rows(i, k);
        }
        self.record(RowOp::Swap { row: i, with: k });
    }

    /// Divide row `i` by `pivot` in every attached half.
    pub fn scale(&mut self, i: usize, pivot: T) {
        self.working.divide_row(i, pivot);
        if let Some(c) = self.companion.as_deref_mut() {
            c.divide_row(i, pivot);
        }
        self.record(RowOp::Scale { row: i, pivot });
    }

    /// `target -= factor * source` in every attached half.
    pub fn eliminate(&mut self, target: usize, source: usize, factor: T) {
        self.working.sub_scaled_row(target, source, factor);
        if let Some(c) = self.companion.as_deref_mut() {
            c.sub_scaled_row(target, source, factor);
        }
        self.record(RowOp::Eliminate {
            target,
            source,
            factor,
        });
    }

    fn record(&mut self, op: RowOp<T>) {
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.record(EliminationStep {
                op,
                matrix: self.working.clone(),
                companion: self.companion.as_deref().cloned(),
            });
        }
    }
}
