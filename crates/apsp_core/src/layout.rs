use std::ops::Range;

use crate::{constants::Distance, error::ApspError};

/// Static partition of the padded distance matrix into equal column blocks.
///
/// With `t` workers and `n` nodes, every block is `c = ceil(n / t)` columns wide
/// and the matrix is padded to `m = t * c`. Rank `r` owns columns `[r*c, (r+1)*c)`
/// for the whole computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockLayout {
    nodes: usize,
    workers: usize,
    block_width: usize,
    padded: usize,
    sentinel: Distance,
}

impl BlockLayout {
    pub fn new(nodes: usize, workers: usize) -> Result<Self, ApspError> {
        if nodes == 0 {
            return Err(ApspError::EmptyGraph);
        }
        if workers == 0 {
            return Err(ApspError::NoWorkers);
        }
        if workers > nodes {
            return Err(ApspError::TooManyWorkers { workers, nodes });
        }

        let block_width = nodes.div_ceil(workers);
        let padded = block_width * workers;

        // sentinel + sentinel must not wrap, and m * m must be addressable
        let sentinel = padded
            .checked_add(1)
            .and_then(|s| Distance::try_from(s).ok())
            .filter(|s| s.checked_mul(2).is_some())
            .ok_or(ApspError::DimensionTooLarge(padded))?;
        padded
            .checked_mul(padded)
            .ok_or(ApspError::DimensionTooLarge(padded))?;

        Ok(Self {
            nodes,
            workers,
            block_width,
            padded,
            sentinel,
        })
    }

    pub fn nodes(&self) -> usize {
        self.nodes
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// `c`, the number of columns owned by each worker.
    pub fn block_width(&self) -> usize {
        self.block_width
    }

    /// `m`, the padded dimension.
    pub fn padded(&self) -> usize {
        self.padded
    }

    pub fn is_padded(&self) -> bool {
        self.padded != self.nodes
    }

    /// "Effectively unreachable": longer than any shortest path in an `m`-node graph.
    pub fn sentinel(&self) -> Distance {
        self.sentinel
    }

    pub fn matrix_len(&self) -> usize {
        self.padded * self.padded
    }

    /// Number of entries in one column block (`c * m`).
    pub fn block_len(&self) -> usize {
        self.block_width * self.padded
    }

    pub fn columns_of(&self, rank: usize) -> Range<usize> {
        rank * self.block_width..(rank + 1) * self.block_width
    }

    /// Flat range of the rank's block inside the column-major padded buffer.
    pub fn block_range(&self, rank: usize) -> Range<usize> {
        rank * self.block_len()..(rank + 1) * self.block_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_split() {
        let layout = BlockLayout::new(8, 4).unwrap();
        assert_eq!(layout.block_width(), 2);
        assert_eq!(layout.padded(), 8);
        assert!(!layout.is_padded());
        assert_eq!(layout.sentinel(), 9);
        assert_eq!(layout.columns_of(3), 6..8);
        assert_eq!(layout.block_range(1), 16..32);
    }

    #[test]
    fn test_uneven_split_is_padded() {
        let layout = BlockLayout::new(10, 4).unwrap();
        assert_eq!(layout.block_width(), 3);
        assert_eq!(layout.padded(), 12);
        assert!(layout.is_padded());
        assert_eq!(layout.sentinel(), 13);
        assert_eq!(layout.block_len(), 36);
        assert_eq!(layout.matrix_len(), 144);
    }

    #[test]
    fn test_single_worker() {
        let layout = BlockLayout::new(5, 1).unwrap();
        assert_eq!(layout.block_width(), 5);
        assert_eq!(layout.padded(), 5);
        assert_eq!(layout.columns_of(0), 0..5);
    }

    #[test]
    fn test_rejects_invalid_configuration() {
        assert_eq!(
            BlockLayout::new(3, 4),
            Err(ApspError::TooManyWorkers {
                workers: 4,
                nodes: 3
            })
        );
        assert_eq!(BlockLayout::new(3, 0), Err(ApspError::NoWorkers));
        assert_eq!(BlockLayout::new(0, 1), Err(ApspError::EmptyGraph));
    }

    #[test]
    fn test_rejects_sentinel_overflow() {
        let nodes = Distance::MAX as usize;
        assert_eq!(
            BlockLayout::new(nodes, 1),
            Err(ApspError::DimensionTooLarge(nodes))
        );
    }
}
