use std::{
    panic::{self, AssertUnwindSafe},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread,
};

use parking_lot::RwLock;
use tracing::{info_span, warn};

use crate::{constants::Distance, error::ApspError};

use super::{
    Communicator,
    barrier::{CancellableBarrier, WaitResult},
};

/// In-process worker group: every rank is a scoped OS thread.
///
/// Collectives publish each rank's contribution into shared slots, meet at the
/// barrier, read the combined result and meet again before the slots can be
/// reused. A group that has been aborted stays aborted.
pub struct LocalGroup {
    shared: Arc<Shared>,
}

struct Shared {
    size: usize,
    barrier: CancellableBarrier,
    staging: RwLock<Vec<Distance>>,
    flags: Vec<AtomicBool>,
    blocks: Vec<RwLock<Vec<Distance>>>,
}

#[derive(Clone)]
pub struct LocalCommunicator {
    rank: usize,
    shared: Arc<Shared>,
}

impl LocalGroup {
    pub fn new(size: usize) -> Result<Self, ApspError> {
        if size == 0 {
            return Err(ApspError::NoWorkers);
        }

        Ok(Self {
            shared: Arc::new(Shared {
                size,
                barrier: CancellableBarrier::new(size),
                staging: RwLock::new(Vec::new()),
                flags: (0..size).map(|_| AtomicBool::new(false)).collect(),
                blocks: (0..size).map(|_| RwLock::new(Vec::new())).collect(),
            }),
        })
    }

    pub fn size(&self) -> usize {
        self.shared.size
    }

    pub fn communicator(&self, rank: usize) -> Result<LocalCommunicator, ApspError> {
        if rank >= self.size() {
            return Err(ApspError::RankOutOfRange {
                rank,
                size: self.size(),
            });
        }

        Ok(LocalCommunicator {
            rank,
            shared: Arc::clone(&self.shared),
        })
    }

    /// Runs `work` once per rank, each on its own named thread, and returns the
    /// per-rank results in rank order.
    ///
    /// A rank that fails or panics aborts the group so its peers stop at their
    /// next collective instead of waiting forever.
    pub fn run<T, F>(&self, work: F) -> Vec<Result<T, ApspError>>
    where
        T: Send,
        F: Fn(&LocalCommunicator) -> Result<T, ApspError> + Sync,
    {
        let work = &work;

        thread::scope(|s| {
            let handles: Vec<_> = (0..self.size())
                .map(|rank| {
                    let comm = LocalCommunicator {
                        rank,
                        shared: Arc::clone(&self.shared),
                    };

                    let spawned = thread::Builder::new()
                        .name(format!("apsp-worker-{rank}"))
                        .spawn_scoped(s, move || {
                            let _span = info_span!("worker", rank).entered();

                            match panic::catch_unwind(AssertUnwindSafe(|| work(&comm))) {
                                Ok(Ok(value)) => Ok(value),
                                Ok(Err(error)) => {
                                    if !error.is_aborted() {
                                        warn!("Worker failed, aborting group: {}", error);
                                        comm.abort();
                                    }
                                    Err(error)
                                }
                                Err(_) => {
                                    warn!("Worker panicked, aborting group");
                                    comm.abort();
                                    Err(ApspError::WorkerPanicked { rank })
                                }
                            }
                        });

                    spawned.map_err(|_| {
                        warn!("Failed to spawn worker {}, aborting group", rank);
                        self.shared.barrier.cancel();
                        ApspError::Spawn { rank }
                    })
                })
                .collect();

            handles
                .into_iter()
                .enumerate()
                .map(|(rank, handle)| {
                    handle.and_then(|handle| {
                        handle
                            .join()
                            .unwrap_or(Err(ApspError::WorkerPanicked { rank }))
                    })
                })
                .collect()
        })
    }
}

impl LocalCommunicator {
    fn sync(&self) -> Result<(), ApspError> {
        match self.shared.barrier.wait() {
            WaitResult::Cancelled => Err(ApspError::Aborted),
            WaitResult::Leader | WaitResult::Follower => Ok(()),
        }
    }

    fn concat_blocks(&self, expected: usize, out: &mut Vec<Distance>) -> Result<(), ApspError> {
        let blocks: Vec<_> = self.shared.blocks.iter().map(|slot| slot.read()).collect();

        if let Some(mismatch) = blocks.iter().find(|block| block.len() != expected) {
            return Err(ApspError::BufferSize {
                expected,
                actual: mismatch.len(),
            });
        }

        out.clear();
        out.reserve(expected * blocks.len());
        for block in &blocks {
            out.extend_from_slice(block);
        }
        Ok(())
    }
}

impl Communicator for LocalCommunicator {
    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.shared.size
    }

    fn broadcast(&self, buffer: &mut Vec<Distance>, root: usize) -> Result<(), ApspError> {
        if root >= self.size() {
            return Err(ApspError::RankOutOfRange {
                rank: root,
                size: self.size(),
            });
        }

        if self.rank == root {
            let mut staging = self.shared.staging.write();
            staging.clear();
            staging.extend_from_slice(buffer);
        }

        self.sync()?;

        if self.rank != root {
            let staging = self.shared.staging.read();
            buffer.clear();
            buffer.extend_from_slice(&staging);
        }

        self.sync()?;

        if self.rank == root {
            *self.shared.staging.write() = Vec::new();
        }

        Ok(())
    }

    fn all_reduce_or(&self, flag: bool) -> Result<bool, ApspError> {
        self.shared.flags[self.rank].store(flag, Ordering::Release);

        self.sync()?;
        let any = self
            .shared
            .flags
            .iter()
            .any(|flag| flag.load(Ordering::Acquire));
        self.sync()?;

        Ok(any)
    }

    fn all_gather(&self, block: &[Distance], out: &mut Vec<Distance>) -> Result<(), ApspError> {
        {
            let mut slot = self.shared.blocks[self.rank].write();
            slot.clear();
            slot.extend_from_slice(block);
        }

        self.sync()?;
        let gathered = self.concat_blocks(block.len(), out);
        self.sync()?;

        gathered
    }

    fn abort(&self) {
        self.shared.barrier.cancel();
    }
}
