//! Numerical utilities for the composition curves: interpolation and smoothing.

pub mod interp;
pub mod smooth;

pub use interp::*;
pub use smooth::*;
