use tracing::{debug, warn};

use crate::{
    comm::Communicator,
    constants::{Distance, ROOT_RANK},
    error::ApspError,
    layout::BlockLayout,
    matrix::transpose::transpose_into,
    params::Termination,
};

use super::optimizer::optimize_block;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Broadcasting,
    Transposing,
    Optimizing,
    ReducingFlag { has_update: bool },
    Redistributing { any_update: bool },
    Done { converged: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopReport {
    pub rounds: usize,
    pub converged: bool,
}

/// Lock-step min-plus squaring of the padded, infinitized matrix.
///
/// Every rank of the group must call this with the same `layout` and
/// `termination`. Only the root's `matrix` is read on entry; the others are
/// overwritten by the initial broadcast. On return every rank holds the same,
/// final matrix.
///
/// The root's matrix must already be infinitized: entries are either path
/// lengths up to `layout.padded()` or `layout.sentinel()`, with a zero diagonal.
pub fn converge<C: Communicator>(
    comm: &C,
    layout: &BlockLayout,
    matrix: &mut Vec<Distance>,
    termination: &Termination,
) -> Result<LoopReport, ApspError> {
    let rank = comm.rank();
    let mut transposed = vec![0; layout.matrix_len()];
    let mut block = vec![0; layout.block_len()];

    let mut rounds = 0;
    let mut phase = RoundPhase::Broadcasting;

    loop {
        phase = match phase {
            RoundPhase::Broadcasting => {
                comm.broadcast(matrix, ROOT_RANK)?;
                if matrix.len() != layout.matrix_len() {
                    return Err(ApspError::BufferSize {
                        expected: layout.matrix_len(),
                        actual: matrix.len(),
                    });
                }

                if termination.round_limit_reached(rounds) {
                    RoundPhase::Done { converged: false }
                } else {
                    RoundPhase::Transposing
                }
            }
            RoundPhase::Transposing => {
                transpose_into(layout.padded(), matrix, &mut transposed);
                RoundPhase::Optimizing
            }
            RoundPhase::Optimizing => {
                rounds += 1;
                let has_update = optimize_block(layout, rank, matrix, &transposed, &mut block);
                RoundPhase::ReducingFlag { has_update }
            }
            RoundPhase::ReducingFlag { has_update } => {
                let any_update = comm.all_reduce_or(has_update)?;
                debug!(round = rounds, has_update, any_update, "Reduced update flag");
                RoundPhase::Redistributing { any_update }
            }
            RoundPhase::Redistributing { any_update } => {
                comm.all_gather(&block, matrix)?;

                if !any_update {
                    RoundPhase::Done { converged: true }
                } else if termination.round_limit_reached(rounds) {
                    if rank == ROOT_RANK {
                        warn!(rounds, "Stopped before convergence");
                    }
                    RoundPhase::Done { converged: false }
                } else {
                    RoundPhase::Transposing
                }
            }
            RoundPhase::Done { converged } => return Ok(LoopReport { rounds, converged }),
        };
    }
}
