//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - catalog rows (`PlanetRecord`) and their display classification
//! - the highlighted target planet and composition model identifiers
//! - run configuration for each subcommand

pub mod types;

pub use types::*;
