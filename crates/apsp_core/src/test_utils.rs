use crate::matrix::AdjacencyMatrix;

/// `0 -> 1 -> ... -> n-1`
pub fn path_graph(n: usize) -> AdjacencyMatrix {
    let edges: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
    AdjacencyMatrix::from_edges(n, &edges)
}
