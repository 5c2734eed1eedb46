//! Distributed all-pairs shortest paths on unweighted directed graphs.
//!
//! The distance matrix is squared in the min-plus semiring until a round changes
//! nothing. A fixed group of workers runs the same loop in lock-step: each one
//! owns a static block of columns, recomputes it from its own replica of the
//! matrix, and the blocks are gathered back into every replica after each round.

pub mod apsp;
pub mod comm;
pub mod constants;
pub mod engine;
pub mod error;
pub mod layout;
pub mod matrix;
pub mod params;

pub use apsp::{ApspResult, shortest_paths};
pub use error::ApspError;

#[cfg(test)]
pub(crate) mod test_utils;
