//! Epoch counter guarding delivery of scheduled events.

use std::cell::Cell;
use std::sync::Arc;

use parking_lot::ReentrantMutex;
use tokio::sync::Notify;

/// Shared run counter. A run may deliver only while the counter still
/// equals the value it was issued.
///
/// The lock is reentrant: a sink may cancel or supersede its own run from
/// inside a delivery, and the rest of that run's events are dropped.
#[derive(Debug)]
pub(crate) struct Epoch {
    current: ReentrantMutex<Cell<u64>>,
    wake: Notify,
}

impl Epoch {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self {
            current: ReentrantMutex::new(Cell::new(0)),
            wake: Notify::new(),
        })
    }

    /// Starts a new run, invalidating every earlier one. Returns the value
    /// issued to the new run.
    pub(crate) fn advance(&self) -> u64 {
        let issued = {
            let current = self.current.lock();
            current.set(current.get() + 1);
            current.get()
        };
        self.wake.notify_waiters();
        issued
    }

    /// Invalidates the run holding `issued` if it is still current.
    /// Returns `false` when it was already stale.
    pub(crate) fn invalidate(&self, issued: u64) -> bool {
        {
            let current = self.current.lock();
            if current.get() != issued {
                return false;
            }
            current.set(issued + 1);
        }
        self.wake.notify_waiters();
        true
    }

    pub(crate) fn is_current(&self, issued: u64) -> bool {
        self.current.lock().get() == issued
    }

    /// Runs `deliver` while holding the lock, only if `issued` is current.
    ///
    /// Holding the lock means an `invalidate` from another thread that has
    /// returned can never be followed by a delivery from the invalidated run.
    pub(crate) fn deliver_if_current<R>(&self, issued: u64, deliver: impl FnOnce() -> R) -> Option<R> {
        let current = self.current.lock();
        if current.get() != issued {
            return None;
        }
        let out = deliver();
        drop(current);
        Some(out)
    }

    /// Resolves on the next `advance`/`invalidate`. May also resolve
    /// spuriously for a run that is still current; callers re-check.
    pub(crate) async fn changed(&self) {
        self.wake.notified().await;
    }
}

/// Per-run view of an [`Epoch`].
#[derive(Debug, Clone)]
pub(crate) struct RunGuard {
    epoch: Arc<Epoch>,
    issued: u64,
}

impl RunGuard {
    pub(crate) fn new(epoch: Arc<Epoch>, issued: u64) -> Self {
        Self { epoch, issued }
    }

    pub(crate) fn epoch(&self) -> &Arc<Epoch> {
        &self.epoch
    }

    pub(crate) fn issued(&self) -> u64 {
        self.issued
    }

    pub(crate) fn is_current(&self) -> bool {
        self.epoch.is_current(self.issued)
    }

    pub(crate) fn deliver<R>(&self, deliver: impl FnOnce() -> R) -> Option<R> {
        self.epoch.deliver_if_current(self.issued, deliver)
    }

    pub(crate) async fn changed(&self) {
        self.epoch.changed().await;
    }
}
