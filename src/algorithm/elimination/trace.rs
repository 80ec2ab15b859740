//! Step-trace types for observing an elimination run
//!
//! Every row operation an algorithm applies can be reported to a
//! [`StepSink`] as an [`EliminationStep`]: the operation that ran plus a
//! snapshot of the matrix afterwards (and of the companion matrix during
//! inversion). The trace is strictly one-way: algorithms write to it and
//! never read it back, so recording cannot change a result.

use std::fmt;

use num_traits::Float;

use crate::matrix::Matrix;

/// A single primitive row operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RowOp<T> {
    /// Rows `row` and `with` were exchanged.
    Swap {
        /// The pivot row that received the swap
        row: usize,
        /// The later row pulled up into its place
        with: usize,
    },
    /// Row `row` was divided by `pivot`, making the pivot entry 1.
    Scale {
        /// The normalized row
        row: usize,
        /// The pivot value the row was divided by
        pivot: T,
    },
    /// `target -= factor * source`, clearing the pivot column of `target`.
    Eliminate {
        /// The row that was modified
        target: usize,
        /// The pivot row used to clear it
        source: usize,
        /// The multiple of the pivot row that was subtracted
        factor: T,
    },
}

/// One recorded elimination step: the operation and the state it produced.
#[derive(Debug, Clone, PartialEq)]
pub struct EliminationStep<T> {
    /// The row operation that was applied
    pub op: RowOp<T>,
    /// Snapshot of the working matrix after the operation
    pub matrix: Matrix<T>,
    /// Snapshot of the companion matrix (inversion only)
    pub companion: Option<Matrix<T>>,
}

/// Receiver for elimination steps.
///
/// Implemented for `Vec<EliminationStep<T>>` so a plain vector works as a
/// trace buffer; hosts that stream narration can implement it directly.
pub trait StepSink<T> {
    /// Record one step. Must not influence the algorithm that called it.
    fn record(&mut self, step: EliminationStep<T>);
}

impl<T> StepSink<T> for Vec<EliminationStep<T>> {
    fn record(&mut self, step: EliminationStep<T>) {
        self.push(step);
    }
}

impl<T: Float + fmt::Display> fmt::Display for RowOp<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RowOp::Swap { row, with } => write!(f, "Swapped row {row} with row {with}"),
            RowOp::Scale { row, pivot } => write!(f, "Normalized row {row} by pivot {pivot}"),
            RowOp::Eliminate {
                target,
                source,
                factor,
            } => write!(f, "Eliminated row {target} using row {source} (factor: {factor})"),
        }
    }
}

impl<T: Float + fmt::Display> fmt::Display for EliminationStep<T> {
    /// Didactic narration: the operation line followed by the resulting
    /// matrix (and companion matrix, when present) as `{:8.3}` grids.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.op)?;
        write!(f, "{}", self.matrix)?;
        if let Some(companion) = &self.companion {
            writeln!(f, "Companion:")?;
            write!(f, "{companion}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_sink_collects() {
        let mut trace: Vec<EliminationStep<f64>> = Vec::new();
        trace.record(EliminationStep {
            op: RowOp::Swap { row: 0, with: 2 },
            matrix: Matrix::identity(2),
            companion: None,
        });
        assert_eq!(trace.len(), 1);
        assert_eq!(trace[0].op, RowOp::Swap { row: 0, with: 2 });
    }

    #[test]
    fn test_narration_format() {
        let step = EliminationStep {
            op: RowOp::Eliminate {
                target: 1,
                source: 0,
                factor: 2.0,
            },
            matrix: Matrix::from_rows(&[vec![1.0, 0.5], vec![0.0, 1.0]]).unwrap(),
            companion: None,
        };
        let text = step.to_string();
        assert!(text.starts_with("Eliminated row 1 using row 0 (factor: 2)"));
        assert!(text.contains("   1.000"));
        assert!(text.contains("   0.500"));
    }
}
