//! Timer tasks
//!
//! These run on the highest-priority interrupt executor. Each only touches
//! atomics or a signal, so they never wait on the store.

use defmt::*;
use embassy_time::Ticker;
use lumen_runtime::{ModeTimer, ScrollTimer, TimeoutOutcome};

use crate::channels::{ms, BACKLIGHT_TIMEOUT, CONFIG, UI};

/// Display mode rotation
#[embassy_executor::task]
pub async fn mode_timer_task() {
    let mut timer = ModeTimer::new(&UI);
    let mut ticker = Ticker::every(ms(CONFIG.timing.mode_period_ms));

    loop {
        ticker.next().await;
        let mode = timer.fire();
        trace!("Mode {}", mode);
    }
}

/// Banner scrolling
#[embassy_executor::task]
pub async fn scroll_timer_task() {
    let mut timer = ScrollTimer::new(CONFIG.scroll_text, &UI);
    let mut ticker = Ticker::every(ms(CONFIG.timing.scroll_period_ms));

    loop {
        ticker.next().await;
        let cursor = timer.fire();
        trace!("Scroll {}", cursor);
    }
}

/// One-shot backlight inactivity timer, re-armed on request
#[embassy_executor::task]
pub async fn backlight_timeout_task() {
    let timeout = ms(CONFIG.timing.backlight_timeout_ms);

    loop {
        match BACKLIGHT_TIMEOUT.run_once(timeout).await {
            TimeoutOutcome::Expired => debug!("Backlight timeout expired"),
            TimeoutOutcome::Canceled => trace!("Backlight timeout canceled"),
        }
    }
}
