//! Sensor sampling task

use defmt::*;
use embassy_time::Ticker;
use lumen_runtime::tasks::SamplerTask;

use crate::channels::{ms, CONFIG, PIPE, STORE};
use crate::sensors::SensorInputs;

/// Sampler task - refreshes the store and feeds the renderer
#[embassy_executor::task]
pub async fn sampler_task(bus: SensorInputs) {
    info!("Sampler task started");

    let mut sampler = SamplerTask::new(&STORE, &PIPE, bus);
    let mut ticker = Ticker::every(ms(CONFIG.timing.sample_period_ms));

    loop {
        match sampler.run_once().await {
            Ok(sample) => trace!("Sampled {}", sample),
            Err(e) => warn!("Sample skipped: {}", e),
        }
        ticker.next().await;
    }
}
