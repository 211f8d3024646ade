//! Sampler-to-renderer handoff
//!
//! A single-slot channel where publishing overwrites any unconsumed sample.
//! The renderer only cares about the most recent reading, and the sampler
//! must never block on a slow display.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{with_timeout, Duration};
use lumen_core::SensorSample;

use crate::error::SyncError;

/// Latest-value pipe from the sampler to the renderer
pub struct SamplePipe<M: RawMutex> {
    slot: Signal<M, SensorSample>,
}

impl<M: RawMutex> SamplePipe<M> {
    /// Create an empty pipe
    pub const fn new() -> Self {
        Self {
            slot: Signal::new(),
        }
    }

    /// Publish a sample, replacing any that has not been consumed
    pub fn publish(&self, sample: SensorSample) {
        self.slot.signal(sample);
    }

    /// Wait up to `timeout` for a sample and take it
    pub async fn consume(&self, timeout: Duration) -> Option<SensorSample> {
        self.receive(timeout).await.ok()
    }

    /// Like [`consume`](Self::consume), reporting the timeout as an error
    pub async fn receive(&self, timeout: Duration) -> Result<SensorSample, SyncError> {
        with_timeout(timeout, self.slot.wait())
            .await
            .map_err(|_| SyncError::QueueTimeout)
    }

    /// Take a pending sample without waiting
    #[cfg(test)]
    pub(crate) fn try_consume(&self) -> Option<SensorSample> {
        self.slot.try_take()
    }

    /// Whether a sample is waiting
    #[cfg(test)]
    pub(crate) fn pending(&self) -> bool {
        self.slot.signaled()
    }
}

impl<M: RawMutex> Default for SamplePipe<M> {
    fn default() -> Self {
        Self::new()
    }
}
