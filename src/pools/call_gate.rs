//! Re-entrancy guard for mutating pool operations.
//!
//! A pool calls out to asset collaborators in the middle of an operation,
//! and a collaborator may call straight back into the pool. The gate admits
//! one mutating call at a time:
//!
//! - a call from **another thread** waits until the in-flight one finishes;
//! - a call from the **same thread** (a callback) is rejected with
//!   [`AmmError::ReentrantCall`].
//!
//! The "in flight" flag lives behind a re-entrant mutex so the nested call
//! can observe it instead of deadlocking. [`CallPermit`] clears it on drop,
//! on every exit path.

use std::cell::Cell;

use parking_lot::{ReentrantMutex, ReentrantMutexGuard};
use tracing::warn;

use crate::error::{AmmError, Result};

/// Per-pool "currently executing" flag.
#[derive(Debug, Default)]
pub(crate) struct CallGate {
    in_flight: ReentrantMutex<Cell<bool>>,
}

/// Proof that the holder is the only mutating call on the pool.
#[derive(Debug)]
pub(crate) struct CallPermit<'a> {
    guard: ReentrantMutexGuard<'a, Cell<bool>>,
}

impl CallGate {
    /// Enters the gate, blocking while another thread holds it.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::ReentrantCall`] if this thread is already inside.
    pub(crate) fn enter(&self, operation: &'static str) -> Result<CallPermit<'_>> {
        let guard = self.in_flight.lock();
        if guard.get() {
            warn!(operation, "re-entrant call rejected");
            return Err(AmmError::ReentrantCall);
        }
        guard.set(true);
        Ok(CallPermit { guard })
    }
}

impl Drop for CallPermit<'_> {
    fn drop(&mut self) {
        self.guard.set(false);
    }
}
