//! Mutex-guarded sensor cache
//!
//! The store is the only datum shared by every task. It also serializes
//! hardware access: [`SensorStore::acquire`] runs the three conversions
//! while holding the lock, so the analog front end is never driven from two
//! tasks at once.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};
use embassy_time::{with_timeout, Duration};
use lumen_core::SensorSample;
use lumen_hal::SensorBus;

use crate::error::SyncError;

/// Latest sensor sample, shared by all tasks
pub struct SensorStore<M: RawMutex> {
    sample: Mutex<M, SensorSample>,
    lock_timeout: Duration,
}

impl<M: RawMutex> SensorStore<M> {
    /// Create a store holding an all-zero sample
    ///
    /// `lock_timeout` bounds every read and acquisition.
    pub const fn new(lock_timeout: Duration) -> Self {
        Self {
            sample: Mutex::new(SensorSample::new(0, 0, 0)),
            lock_timeout,
        }
    }

    /// Replace the stored sample
    ///
    /// Waits for the lock without a bound; holders only keep it for the
    /// length of one acquisition.
    pub async fn write(&self, sample: SensorSample) {
        *self.sample.lock().await = sample;
    }

    /// Convert all channels under the lock and store the result
    pub async fn acquire<B: SensorBus>(&self, bus: &mut B) -> Result<SensorSample, SyncError> {
        let mut guard = self.lock_bounded().await?;
        let sample = SensorSample::acquire(bus);
        *guard = sample;
        Ok(sample)
    }

    /// Read the stored sample, giving up after the lock timeout
    pub async fn try_read(&self) -> Result<SensorSample, SyncError> {
        let guard = self.lock_bounded().await?;
        Ok(*guard)
    }

    /// Create a reader that remembers the last sample it saw
    pub fn reader(&self) -> StoreReader<'_, M> {
        StoreReader {
            store: self,
            last: SensorSample::default(),
        }
    }

    /// Hold the lock from a test to force timeouts elsewhere
    #[cfg(test)]
    pub(crate) async fn sample_lock_for_test(&self) -> MutexGuard<'_, M, SensorSample> {
        self.sample.lock().await
    }

    async fn lock_bounded(&self) -> Result<MutexGuard<'_, M, SensorSample>, SyncError> {
        with_timeout(self.lock_timeout, self.sample.lock())
            .await
            .map_err(|_| SyncError::LockTimeout)
    }
}

/// Result of a reader's bounded read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadOutcome {
    /// Lock acquired, sample is current
    Fresh(SensorSample),
    /// Lock timed out, sample is the last one this reader saw
    Stale(SensorSample),
}

impl ReadOutcome {
    /// The sample to act on, fresh or not
    pub fn sample(&self) -> SensorSample {
        match self {
            ReadOutcome::Fresh(sample) | ReadOutcome::Stale(sample) => *sample,
        }
    }

    /// Whether the read fell back to a remembered sample
    pub fn is_stale(&self) -> bool {
        matches!(self, ReadOutcome::Stale(_))
    }
}

/// Per-task read handle with last-known-value fallback
pub struct StoreReader<'a, M: RawMutex> {
    store: &'a SensorStore<M>,
    last: SensorSample,
}

impl<M: RawMutex> StoreReader<'_, M> {
    /// Read the store; on lock timeout return the last observed sample
    pub async fn read(&mut self) -> ReadOutcome {
        match self.store.try_read().await {
            Ok(sample) => {
                self.last = sample;
                ReadOutcome::Fresh(sample)
            }
            Err(_) => ReadOutcome::Stale(self.last),
        }
    }
}
