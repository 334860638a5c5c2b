//! `warm-worlds` library crate.
//!
//! The binary (`ww`) is a thin wrapper around this library so that:
//!
//! - the TSM ranking and figure builders are testable without the archive
//! - figures are plain values that can be inspected before rendering

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod metric;
pub mod models;
pub mod plot;
pub mod report;
