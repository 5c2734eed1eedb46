use thiserror::Error;

use crate::constants::Distance;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApspError {
    #[error("At least one worker is required")]
    NoWorkers,
    #[error("Number of workers ({workers}) exceeds dimension of matrix ({nodes})")]
    TooManyWorkers { workers: usize, nodes: usize },
    #[error("Graph has no nodes")]
    EmptyGraph,
    #[error("Matrix is not square: row {row} has {len} entries, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("Matrix has dimension {actual}, expected {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("Adjacency entry ({row}, {col}) is {value}, expected 0 or 1")]
    InvalidEdge {
        row: usize,
        col: usize,
        value: Distance,
    },
    #[error("Padded dimension {0} is too large for the distance type")]
    DimensionTooLarge(usize),
    #[error("Buffer has {actual} entries, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
    #[error("Rank {rank} is out of range for a group of {size} workers")]
    RankOutOfRange { rank: usize, size: usize },
    #[error("Group has {actual} workers but the layout was built for {expected}")]
    GroupSizeMismatch { expected: usize, actual: usize },
    #[error("Rank 0 must supply the adjacency matrix")]
    MissingInput,
    #[error("Failed to spawn worker {rank}")]
    Spawn { rank: usize },
    #[error("Worker {rank} panicked")]
    WorkerPanicked { rank: usize },
    #[error("Computation aborted by a peer worker")]
    Aborted,
}

impl ApspError {
    /// `Aborted` is a consequence of another rank failing, never a root cause.
    pub fn is_aborted(&self) -> bool {
        matches!(self, ApspError::Aborted)
    }
}
