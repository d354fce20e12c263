//! Piefolio Core - allocation, drift and rebalancing analysis.
//!
//! This crate contains the client-side analysis engine behind the
//! Piefolio dashboard: filtering, grouping, drift computation, ranking
//! and pie-chart geometry over already-fetched holdings snapshots.
//! Everything is a pure, synchronous transform; fetching, rendering and
//! persistence live elsewhere.

pub mod allocation;
pub mod charts;
pub mod constants;
pub mod errors;
pub mod holdings;
pub mod ranking;
pub mod rebalancing;
pub mod utils;

// Re-export common types from the domain modules
pub use allocation::*;
pub use charts::*;
pub use holdings::*;
pub use ranking::*;
pub use rebalancing::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
