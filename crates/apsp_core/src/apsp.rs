use tracing::info;

use crate::{
    comm::{Communicator, LocalGroup},
    constants::ROOT_RANK,
    engine::worker::run_rank,
    error::ApspError,
    layout::BlockLayout,
    matrix::{AdjacencyMatrix, DistanceMatrix},
    params::ApspParams,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApspResult {
    /// `(i, j)` is the shortest path length from `i` to `j`, 0 when unreachable.
    pub distances: DistanceMatrix,
    /// Number of min-plus rounds run, including the final round that changed nothing.
    pub rounds: usize,
    /// `false` only when a round limit stopped the loop first.
    pub converged: bool,
}

/// All-pairs shortest paths of an unweighted directed graph, computed by a
/// group of worker threads in lock-step.
pub fn shortest_paths(
    adjacency: &AdjacencyMatrix,
    params: &ApspParams,
) -> Result<ApspResult, ApspError> {
    let nodes = adjacency.dimension();
    let workers = params.workers.for_nodes(nodes);
    let layout = BlockLayout::new(nodes, workers)?;

    info!(
        nodes,
        workers,
        padded = layout.padded(),
        block_width = layout.block_width(),
        "Computing all-pairs shortest paths"
    );

    let group = LocalGroup::new(workers)?;
    let results = group.run(|comm| {
        let input = (comm.rank() == ROOT_RANK).then_some(adjacency);
        run_rank(comm, &layout, input, &params.termination)
    });

    let result = root_result(results)?;

    info!(
        rounds = result.rounds,
        converged = result.converged,
        "Finished all-pairs shortest paths"
    );

    Ok(result)
}

/// Picks the root's result, reporting the first root-cause error in preference
/// to the `Aborted` errors it caused on other ranks.
fn root_result(
    results: Vec<Result<Option<ApspResult>, ApspError>>,
) -> Result<ApspResult, ApspError> {
    let mut root = None;
    let mut aborted = false;

    for result in results {
        match result {
            Ok(Some(result)) => root = Some(result),
            Ok(None) => {}
            Err(error) if error.is_aborted() => aborted = true,
            Err(error) => return Err(error),
        }
    }

    match root {
        Some(result) if !aborted => Ok(result),
        _ => Err(ApspError::Aborted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        matrix::SquareMatrix,
        params::{Termination, Workers},
        test_utils::path_graph,
    };

    #[test]
    fn test_four_node_path_single_worker() {
        let params = ApspParams::with_workers(1);
        let result = shortest_paths(&path_graph(4), &params).unwrap();

        assert_eq!(
            result.distances.to_rows(),
            vec![
                vec![0, 1, 2, 3],
                vec![0, 0, 1, 2],
                vec![0, 0, 0, 1],
                vec![0, 0, 0, 0],
            ]
        );
        assert!(result.converged);
    }

    #[test]
    fn test_too_many_workers() {
        let params = ApspParams::with_workers(5);
        assert_eq!(
            shortest_paths(&path_graph(4), &params),
            Err(ApspError::TooManyWorkers {
                workers: 5,
                nodes: 4
            })
        );
    }

    #[test]
    fn test_auto_workers_on_tiny_graph() {
        let params = ApspParams {
            workers: Workers::Auto,
            termination: Termination::Converged,
        };
        let result = shortest_paths(&path_graph(2), &params).unwrap();
        assert_eq!(result.distances.to_rows(), vec![vec![0, 1], vec![0, 0]]);
    }

    #[test]
    fn test_invalid_edge_is_reported_from_root() {
        let mut graph = path_graph(4);
        graph.set(3, 0, 2);

        assert_eq!(
            shortest_paths(&graph, &ApspParams::with_workers(2)),
            Err(ApspError::InvalidEdge {
                row: 3,
                col: 0,
                value: 2
            })
        );
    }

    #[test]
    fn test_empty_graph() {
        assert_eq!(
            shortest_paths(&SquareMatrix::zeros(0), &ApspParams::default()),
            Err(ApspError::EmptyGraph)
        );
    }

    #[test]
    fn test_root_result_prefers_root_cause() {
        let results = vec![
            Err(ApspError::Aborted),
            Err(ApspError::WorkerPanicked { rank: 1 }),
            Ok(None),
        ];
        assert_eq!(
            root_result(results),
            Err(ApspError::WorkerPanicked { rank: 1 })
        );
    }
}
