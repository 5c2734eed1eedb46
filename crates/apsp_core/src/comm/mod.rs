//! Fixed-size process group with the collectives used by the convergence loop.
//!
//! Every collective is a synchronization point: no rank returns from it before all
//! ranks have entered it. A failed rank calls [`Communicator::abort`], after which
//! every collective on every rank returns [`ApspError::Aborted`].

pub mod barrier;
pub mod local_group;

pub use local_group::{LocalCommunicator, LocalGroup};

use crate::{constants::Distance, error::ApspError};

pub trait Communicator {
    fn rank(&self) -> usize;

    fn size(&self) -> usize;

    /// Replaces every rank's `buffer` with a copy of `root`'s buffer.
    fn broadcast(&self, buffer: &mut Vec<Distance>, root: usize) -> Result<(), ApspError>;

    /// Logical OR of `flag` across all ranks, identical on every rank.
    fn all_reduce_or(&self, flag: bool) -> Result<bool, ApspError>;

    /// Concatenates every rank's `block` in rank order into `out` on every rank.
    /// All blocks must have the same length.
    fn all_gather(&self, block: &[Distance], out: &mut Vec<Distance>) -> Result<(), ApspError>;

    /// Fails the whole group. Not retryable.
    fn abort(&self);
}
