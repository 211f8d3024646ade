//! Diagnostic serial report

use embassy_sync::blocking_mutex::raw::RawMutex;
use lumen_core::report::report_line;
use lumen_hal::SerialLine;

use crate::store::{ReadOutcome, SensorStore, StoreReader};

/// Writes the latest sample to the serial line
pub struct ReporterTask<'a, M: RawMutex, S> {
    reader: StoreReader<'a, M>,
    serial: S,
}

impl<'a, M: RawMutex, S: SerialLine> ReporterTask<'a, M, S> {
    pub fn new(store: &'a SensorStore<M>, serial: S) -> Self {
        Self {
            reader: store.reader(),
            serial,
        }
    }

    /// Read the store and write one report line
    ///
    /// A stale read is still reported; a write error is returned and the
    /// next cycle tries again with a newer sample.
    pub async fn run_once(&mut self) -> Result<ReadOutcome, S::Error> {
        let reading = self.reader.read().await;
        self.serial.write_line(&report_line(&reading.sample()))?;
        Ok(reading)
    }
}
