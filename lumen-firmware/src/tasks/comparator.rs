//! Temperature alert task
//!
//! Spawned on the medium-priority interrupt executor so the alert keeps
//! blinking while the display and serial tasks are busy.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::Ticker;
use lumen_core::control::IndicatorAction;
use lumen_drivers::output::Indicator;
use lumen_runtime::tasks::ComparatorTask;

use crate::channels::{ms, CONFIG, STORE};

/// Comparator task - blinks the indicator while temperature exceeds the dial
#[embassy_executor::task]
pub async fn comparator_task(indicator: Indicator<Output<'static>>) {
    info!("Comparator task started");

    let mut task = ComparatorTask::new(&STORE, CONFIG.indicator_idle_high, indicator);
    let mut ticker = Ticker::every(ms(CONFIG.timing.comparator_period_ms));
    let mut alerting = false;

    loop {
        let cycle = task.run_once().await;

        let now_alerting = cycle.action == IndicatorAction::Toggle;
        if now_alerting != alerting {
            let sample = cycle.reading.sample();
            info!(
                "Temperature alert {} (NTC {} vs POT {})",
                if now_alerting { "raised" } else { "cleared" },
                sample.temperature,
                sample.dial
            );
            alerting = now_alerting;
        }

        ticker.next().await;
    }
}
