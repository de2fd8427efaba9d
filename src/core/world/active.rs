use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::core::error::{ApiError, ApiResult};

/// Generation counter shared by a facade and the worlds it hands out.
#[derive(Debug, Default)]
pub(crate) struct EpochClock(AtomicU64);

impl EpochClock {
    pub(crate) fn current(&self) -> u64 {
        self.0.load(Ordering::Acquire)
    }

    /// Returns the new epoch.
    pub(crate) fn advance(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Release) + 1
    }
}

/// A world tied to the facade epoch it was created in.
///
/// The interface handle only supports one world at a time, so any later
/// selection or world creation makes this one stale. `get` refuses stale
/// worlds; `into_inner` drops the check and leaves staleness to the caller.
#[derive(Debug)]
pub struct ActiveWorld<W> {
    world: W,
    epoch: u64,
    clock: Arc<EpochClock>,
}

impl<W> ActiveWorld<W> {
    pub(crate) fn new(world: W, epoch: u64, clock: Arc<EpochClock>) -> Self {
        Self {
            world,
            epoch,
            clock,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn is_current(&self) -> bool {
        self.clock.current() == self.epoch
    }

    pub fn get(&self) -> ApiResult<&W> {
        self.check()?;
        Ok(&self.world)
    }

    pub fn get_mut(&mut self) -> ApiResult<&mut W> {
        self.check()?;
        Ok(&mut self.world)
    }

    pub fn into_inner(self) -> W {
        self.world
    }

    fn check(&self) -> ApiResult<()> {
        let current = self.clock.current();
        if current != self.epoch {
            return Err(ApiError::StaleWorld {
                created: self.epoch,
                current,
            });
        }
        Ok(())
    }
}
