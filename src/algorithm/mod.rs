//! Numerical algorithms

pub mod elimination;
