//! Serial diagnostics task

use defmt::*;
use embassy_rp::uart::{Blocking, UartTx};
use embassy_time::Ticker;
use lumen_drivers::serial::SerialPort;
use lumen_runtime::tasks::ReporterTask;

use crate::channels::{ms, CONFIG, STORE};

/// Blocking UART transmitter
pub type Serial = SerialPort<UartTx<'static, Blocking>>;

/// Reporter task - writes one tab-separated line per period
#[embassy_executor::task]
pub async fn reporter_task(serial: Serial) {
    info!("Reporter task started");

    let mut reporter = ReporterTask::new(&STORE, serial);
    let mut ticker = Ticker::every(ms(CONFIG.timing.report_period_ms));

    loop {
        match reporter.run_once().await {
            Ok(reading) if reading.is_stale() => warn!("Reported stale sample {}", reading.sample()),
            Ok(_) => {}
            Err(e) => warn!("Serial write failed: {}", Debug2Format(&e)),
        }
        ticker.next().await;
    }
}
