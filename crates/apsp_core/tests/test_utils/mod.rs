#![allow(dead_code)]

use std::collections::VecDeque;

use apsp_core::{
    constants::{Distance, NO_PATH},
    matrix::{AdjacencyMatrix, DistanceMatrix},
};
use rand::{Rng, SeedableRng, rngs::SmallRng};

pub fn path_graph(n: usize) -> AdjacencyMatrix {
    let edges: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
    AdjacencyMatrix::from_edges(n, &edges)
}

/// `count` complete directed cliques of `size` nodes, with no edges between them.
pub fn disjoint_cliques(count: usize, size: usize) -> AdjacencyMatrix {
    let mut edges = Vec::new();
    for clique in 0..count {
        let offset = clique * size;
        for i in 0..size {
            for j in 0..size {
                if i != j {
                    edges.push((offset + i, offset + j));
                }
            }
        }
    }
    AdjacencyMatrix::from_edges(count * size, &edges)
}

/// G(n, p): every ordered pair `(i, j)`, `i != j`, is an edge with probability `p`.
pub fn random_graph(n: usize, p: f64, seed: u64) -> AdjacencyMatrix {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if i != j && rng.random_bool(p) {
                edges.push((i, j));
            }
        }
    }
    AdjacencyMatrix::from_edges(n, &edges)
}

/// Same distribution as [`random_graph`] but every edge goes both ways.
pub fn random_undirected_graph(n: usize, p: f64, seed: u64) -> AdjacencyMatrix {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.random_bool(p) {
                edges.push((i, j));
                edges.push((j, i));
            }
        }
    }
    AdjacencyMatrix::from_edges(n, &edges)
}

/// Reference solution: one breadth-first search per source.
pub fn bfs_distances(graph: &AdjacencyMatrix) -> DistanceMatrix {
    let n = graph.dimension();
    let mut distances = DistanceMatrix::zeros(n);

    for source in 0..n {
        let mut seen: Vec<Option<Distance>> = vec![None; n];
        seen[source] = Some(0);
        let mut queue = VecDeque::from([source]);

        while let Some(node) = queue.pop_front() {
            let distance = seen[node].unwrap_or(0);
            for next in 0..n {
                if graph.get(node, next) != NO_PATH && seen[next].is_none() {
                    seen[next] = Some(distance + 1);
                    queue.push_back(next);
                }
            }
        }

        for (target, distance) in seen.into_iter().enumerate() {
            distances.set(source, target, distance.unwrap_or(NO_PATH));
        }
    }

    distances
}
