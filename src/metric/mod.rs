//! Derived per-planet metrics.
//!
//! - TSM computation, scalar and column-wise (`tsm`)
//! - deduplicated, metric-ordered traversal (`order`)
//! - characterized / TESS classification (`classify`)
//!
//! Everything here is pure and in-memory: missing inputs skip a row, bad
//! arithmetic yields non-finite values, nothing returns an error.

pub mod classify;
pub mod order;
pub mod tsm;

pub use classify::*;
pub use order::*;
pub use tsm::*;
