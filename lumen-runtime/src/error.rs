//! Bounded-wait failures
//!
//! Neither error ever leaves the task that hit it: a lock timeout is
//! answered with the last known sample, a queue timeout with the previous
//! frame. They exist so the tasks can log what happened.

/// A bounded wait ran out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SyncError {
    /// Sensor store lock not acquired within its bound
    LockTimeout,
    /// No sample arrived on the pipe within the wait
    QueueTimeout,
}
