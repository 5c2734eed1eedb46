use crate::{
    apsp::ApspResult,
    comm::Communicator,
    constants::{Distance, ROOT_RANK},
    error::ApspError,
    layout::BlockLayout,
    matrix::{
        AdjacencyMatrix,
        infinity::{deinfinitize, infinitize},
        padding::{pad, unpad},
    },
    params::Termination,
};

use super::convergence::converge;

/// Per-rank entry point for any process group.
///
/// Every rank of `comm` calls this with the same `layout` and `termination`.
/// The root (rank 0) supplies the adjacency matrix and receives the distance
/// matrix; every other rank passes `None` and receives `None`. A rank that fails
/// aborts the group before returning.
pub fn run_rank<C: Communicator>(
    comm: &C,
    layout: &BlockLayout,
    input: Option<&AdjacencyMatrix>,
    termination: &Termination,
) -> Result<Option<ApspResult>, ApspError> {
    let result = run(comm, layout, input, termination);

    if let Err(error) = &result
        && !error.is_aborted()
    {
        comm.abort();
    }

    result
}

fn run<C: Communicator>(
    comm: &C,
    layout: &BlockLayout,
    input: Option<&AdjacencyMatrix>,
    termination: &Termination,
) -> Result<Option<ApspResult>, ApspError> {
    if comm.size() != layout.workers() {
        return Err(ApspError::GroupSizeMismatch {
            expected: layout.workers(),
            actual: comm.size(),
        });
    }

    let is_root = comm.rank() == ROOT_RANK;

    let mut matrix = if is_root {
        prepare(input.ok_or(ApspError::MissingInput)?, layout)?
    } else {
        // Filled by the initial broadcast
        vec![0; layout.matrix_len()]
    };

    let report = converge(comm, layout, &mut matrix, termination)?;

    if !is_root {
        return Ok(None);
    }

    deinfinitize(layout.padded(), &mut matrix);
    let distances = unpad(matrix, layout.nodes(), layout.padded())?;

    Ok(Some(ApspResult {
        distances,
        rounds: report.rounds,
        converged: report.converged,
    }))
}

/// Pads the caller's matrix to `m x m` and switches to the sentinel convention.
fn prepare(input: &AdjacencyMatrix, layout: &BlockLayout) -> Result<Vec<Distance>, ApspError> {
    if input.dimension() != layout.nodes() {
        return Err(ApspError::DimensionMismatch {
            expected: layout.nodes(),
            actual: input.dimension(),
        });
    }
    input.validate_adjacency()?;

    let mut matrix = pad(input, layout.padded());
    infinitize(layout.padded(), &mut matrix, layout.sentinel());
    Ok(matrix)
}
