use serde::{Deserialize, Serialize};

use crate::{
    constants::{Distance, EDGE, NO_PATH},
    error::ApspError,
};

/// Dense square matrix of distances in the caller convention (0 = no edge / no path).
///
/// Values are stored column-major, so column `j` is the contiguous slice
/// `values[j*n..(j+1)*n]`. Serialized as a list of rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Distance>>", into = "Vec<Vec<Distance>>")]
pub struct SquareMatrix {
    dimension: usize,
    values: Vec<Distance>,
}

/// 0/1 input graph, `(i, j) == 1` iff there is an edge from `i` to `j`.
pub type AdjacencyMatrix = SquareMatrix;

/// Shortest path lengths, `(i, j) == 0` when `j` is unreachable from `i`.
pub type DistanceMatrix = SquareMatrix;

impl SquareMatrix {
    pub fn zeros(dimension: usize) -> Self {
        Self {
            dimension,
            values: vec![NO_PATH; dimension * dimension],
        }
    }

    pub fn from_rows(rows: Vec<Vec<Distance>>) -> Result<Self, ApspError> {
        let dimension = rows.len();
        let mut values = vec![NO_PATH; dimension * dimension];

        for (i, row) in rows.iter().enumerate() {
            if row.len() != dimension {
                return Err(ApspError::NotSquare {
                    row: i,
                    len: row.len(),
                    expected: dimension,
                });
            }
            for (j, &value) in row.iter().enumerate() {
                values[j * dimension + i] = value;
            }
        }

        Ok(Self { dimension, values })
    }

    pub fn from_column_major(dimension: usize, values: Vec<Distance>) -> Result<Self, ApspError> {
        if values.len() != dimension * dimension {
            return Err(ApspError::BufferSize {
                expected: dimension * dimension,
                actual: values.len(),
            });
        }
        Ok(Self { dimension, values })
    }

    /// Builds an adjacency matrix from a list of directed edges.
    pub fn from_edges(dimension: usize, edges: &[(usize, usize)]) -> Self {
        let mut matrix = Self::zeros(dimension);
        for &(from, to) in edges {
            matrix.set(from, to, EDGE);
        }
        matrix
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn get(&self, row: usize, col: usize) -> Distance {
        self.values[col * self.dimension + row]
    }

    pub fn set(&mut self, row: usize, col: usize, value: Distance) {
        self.values[col * self.dimension + row] = value;
    }

    /// Shortest path length from `from` to `to`, `None` when unreachable.
    pub fn distance(&self, from: usize, to: usize) -> Option<Distance> {
        match self.get(from, to) {
            NO_PATH if from != to => None,
            value => Some(value),
        }
    }

    pub fn column(&self, col: usize) -> &[Distance] {
        &self.values[col * self.dimension..(col + 1) * self.dimension]
    }

    pub fn as_column_major(&self) -> &[Distance] {
        &self.values
    }

    pub fn to_rows(&self) -> Vec<Vec<Distance>> {
        (0..self.dimension)
            .map(|i| (0..self.dimension).map(|j| self.get(i, j)).collect())
            .collect()
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.dimension).all(|i| (0..i).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Checks the unweighted adjacency convention: every entry is 0 or 1.
    /// The diagonal is ignored, self-distance is always 0.
    pub fn validate_adjacency(&self) -> Result<(), ApspError> {
        for col in 0..self.dimension {
            for (row, &value) in self.column(col).iter().enumerate() {
                if row != col && value != NO_PATH && value != EDGE {
                    return Err(ApspError::InvalidEdge { row, col, value });
                }
            }
        }
        Ok(())
    }
}

impl TryFrom<Vec<Vec<Distance>>> for SquareMatrix {
    type Error = ApspError;

    fn try_from(rows: Vec<Vec<Distance>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<SquareMatrix> for Vec<Vec<Distance>> {
    fn from(matrix: SquareMatrix) -> Self {
        matrix.to_rows()
    }
}
