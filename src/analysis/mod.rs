//! Analysis modules.
//!
//! Pure aggregation over in-memory roadmap records. Loading and
//! presentation live elsewhere.

pub mod aggregator;

pub use aggregator::*;
