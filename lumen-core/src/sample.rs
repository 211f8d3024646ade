//! Sensor sample snapshot

use lumen_hal::{SensorBus, SensorChannel};

/// One reading of all three analog channels
///
/// Samples are plain `Copy` values: once produced they never change, so a
/// reader always holds a complete snapshot taken in a single acquisition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorSample {
    /// Ambient light (LDR)
    pub light: u16,
    /// Temperature (NTC)
    pub temperature: u16,
    /// Dial position (potentiometer)
    pub dial: u16,
}

impl SensorSample {
    /// Create a sample from raw channel readings
    pub const fn new(light: u16, temperature: u16, dial: u16) -> Self {
        Self {
            light,
            temperature,
            dial,
        }
    }

    /// Acquire all three channels from the sensor bus
    ///
    /// Channels are converted in [`SensorChannel::ALL`] order. The caller is
    /// responsible for holding exclusive access to the bus.
    pub fn acquire<B: SensorBus>(bus: &mut B) -> Self {
        Self {
            light: bus.acquire(SensorChannel::Light),
            temperature: bus.acquire(SensorChannel::Temperature),
            dial: bus.acquire(SensorChannel::Dial),
        }
    }

    /// Raw reading of one channel
    pub const fn channel(&self, channel: SensorChannel) -> u16 {
        match channel {
            SensorChannel::Light => self.light,
            SensorChannel::Temperature => self.temperature,
            SensorChannel::Dial => self.dial,
        }
    }
}
