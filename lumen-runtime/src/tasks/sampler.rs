//! Sensor acquisition

use embassy_sync::blocking_mutex::raw::RawMutex;
use lumen_core::SensorSample;
use lumen_hal::SensorBus;

use crate::error::SyncError;
use crate::pipe::SamplePipe;
use crate::store::SensorStore;

/// Refreshes the store and feeds the renderer
pub struct SamplerTask<'a, M: RawMutex, B> {
    store: &'a SensorStore<M>,
    pipe: &'a SamplePipe<M>,
    bus: B,
}

impl<'a, M: RawMutex, B: SensorBus> SamplerTask<'a, M, B> {
    pub fn new(store: &'a SensorStore<M>, pipe: &'a SamplePipe<M>, bus: B) -> Self {
        Self { store, pipe, bus }
    }

    /// Acquire a sample and publish it
    ///
    /// On lock timeout nothing is converted or published this cycle.
    pub async fn run_once(&mut self) -> Result<SensorSample, SyncError> {
        let sample = self.store.acquire(&mut self.bus).await?;
        self.pipe.publish(sample);
        Ok(sample)
    }
}
