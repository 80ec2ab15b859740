//! Elimination-based dense linear algebra
//!
//! Three independent algorithms sharing one structural idiom — forward
//! elimination with row swaps for pivoting — with distinct stopping
//! conditions and return contracts:
//!
//! - `solve`: Gauss-Jordan reduction of an augmented system, classifying it
//!   as unique, infinite, or inconsistent ([`SolveOutcome`])
//! - `invert`: augmented-identity reduction `(A | I) -> (I | A^-1)`
//! - `determinant`: upper-triangularization tracking the pivot product and
//!   row-swap parity
//!
//! Each call operates on a private copy of the input and retains no state.
//! Every entry point has a `_traced` variant that reports each row
//! operation to a [`StepSink`] for step-by-step narration; the trace is a
//! side channel the algorithms never read back.
//!
//! # Module Structure
//!
//! - `pivot`: downward pivot row search
//! - `row_ops`: swap/scale/eliminate primitives, mirrored across halves
//! - `trace`: step records and the sink trait
//! - `helpers`: shape validation and rank computation
//! - `solve`, `invert`, `determinant`: the three entry points

pub mod determinant;
pub mod helpers;
pub mod invert;
pub mod pivot;
pub mod row_ops;
pub mod solve;
pub mod trace;

pub use determinant::{determinant, determinant_traced};
pub use helpers::{rank, validate_augmented, validate_square};
pub use invert::{invert, invert_traced};
pub use pivot::find_pivot;
pub use row_ops::RowOps;
pub use solve::{solve, solve_traced, SolveOutcome};
pub use trace::{EliminationStep, RowOp, StepSink};
