//! Input/output helpers.
//!
//! - catalog CSV ingest (`ingest`)
//! - ranked TSM exports (CSV/JSON) (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
