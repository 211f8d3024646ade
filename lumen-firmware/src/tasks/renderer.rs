//! LCD render task

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::Delay;
use lumen_drivers::display::Hd44780;
use lumen_runtime::tasks::{RenderOutcome, RendererTask};

use crate::channels::{ms, CONFIG, PIPE, UI};

/// Character LCD on GPIO pins with the embassy delay
pub type Lcd = Hd44780<Output<'static>, Delay>;

/// Renderer task - waits for samples and redraws both lines
///
/// The pipe wait bounds each cycle, so no ticker is needed.
#[embassy_executor::task]
pub async fn renderer_task(lcd: Lcd) {
    info!("Renderer task started");

    let mut renderer = RendererTask::new(
        &PIPE,
        &UI,
        CONFIG.scroll_text,
        ms(CONFIG.timing.render_wait_ms),
        lcd,
    );

    loop {
        match renderer.run_once().await {
            Ok(RenderOutcome::Fresh(mode)) => trace!("Rendered {}", mode),
            Ok(RenderOutcome::Reused) => debug!("No sample within wait, primary line kept"),
            Err(_) => warn!("LCD write failed"),
        }
    }
}
