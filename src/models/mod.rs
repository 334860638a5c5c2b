//! Theoretical composition models for the mass-radius diagram.

pub mod composition;

pub use composition::*;
