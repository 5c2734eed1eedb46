use crate::{
    constants::{Distance, NO_PATH},
    error::ApspError,
};

use super::square_matrix::SquareMatrix;

/// Copies an `n x n` matrix into the top-left corner of a zero-filled,
/// column-major `m x m` buffer, assuming `m >= n`.
///
/// Padded nodes have no edges, so they never lie on a real shortest path.
pub fn pad(matrix: &SquareMatrix, padded: usize) -> Vec<Distance> {
    let n = matrix.dimension();
    debug_assert!(padded >= n);

    if padded == n {
        return matrix.as_column_major().to_vec();
    }

    let mut buffer = vec![NO_PATH; padded * padded];
    for (col, target) in buffer.chunks_exact_mut(padded).take(n).enumerate() {
        target[..n].copy_from_slice(matrix.column(col));
    }
    buffer
}

/// Extracts the top-left `n x n` block of a column-major `m x m` buffer.
pub fn unpad(
    buffer: Vec<Distance>,
    nodes: usize,
    padded: usize,
) -> Result<SquareMatrix, ApspError> {
    if buffer.len() != padded * padded {
        return Err(ApspError::BufferSize {
            expected: padded * padded,
            actual: buffer.len(),
        });
    }

    let values = if padded == nodes {
        buffer
    } else {
        buffer
            .chunks_exact(padded)
            .take(nodes)
            .flat_map(|column| column[..nodes].iter().copied())
            .collect()
    };

    SquareMatrix::from_column_major(nodes, values)
}
