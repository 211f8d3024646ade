//! Backlight control task

use defmt::*;
use embassy_rp::pwm::PwmOutput;
use embassy_time::Ticker;
use lumen_core::control::BacklightEvent;
use lumen_drivers::output::PwmBacklight;
use lumen_runtime::tasks::BacklightTask;

use crate::channels::{ms, BACKLIGHT_TIMEOUT, CONFIG, STORE};

/// Backlight task - dims with ambient light, switches off when the dial idles
#[embassy_executor::task]
pub async fn backlight_task(backlight: PwmBacklight<PwmOutput<'static>>) {
    info!("Backlight task started");

    let mut task = BacklightTask::new(&STORE, &BACKLIGHT_TIMEOUT, CONFIG.dimming, backlight);
    let mut ticker = Ticker::every(ms(CONFIG.timing.backlight_period_ms));

    loop {
        let cycle = task.run_once().await;

        if cycle.reading.is_stale() {
            warn!("Backlight: store busy, using last sample");
        }
        match cycle.update.event {
            Some(BacklightEvent::WokeUp) => info!("Backlight on (dial moved)"),
            Some(BacklightEvent::TimedOut) => info!("Backlight off (inactivity)"),
            Some(BacklightEvent::ExpiryDiscarded) => {
                debug!("Backlight timeout expired with dial change, staying on")
            }
            None => {}
        }
        trace!("Backlight duty {}", cycle.update.duty);

        ticker.next().await;
    }
}
