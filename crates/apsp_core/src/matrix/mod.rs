pub mod infinity;
pub mod padding;
pub mod square_matrix;
pub mod transpose;

pub use square_matrix::{AdjacencyMatrix, DistanceMatrix, SquareMatrix};
