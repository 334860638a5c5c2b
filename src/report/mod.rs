//! Reporting: the ranked TSM table printed to the terminal.

pub mod format;

pub use format::*;
