//! Analog sensor front end

/// One of the three multiplexed analog inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorChannel {
    /// Light-dependent resistor (ambient light)
    Light,
    /// NTC thermistor
    Temperature,
    /// Potentiometer dial
    Dial,
}

impl SensorChannel {
    /// All channels in acquisition order
    pub const ALL: [SensorChannel; 3] = [
        SensorChannel::Light,
        SensorChannel::Temperature,
        SensorChannel::Dial,
    ];
}

/// Blocking analog acquisition
///
/// A single conversion on the selected channel. The call is synchronous and
/// has bounded latency. Callers must serialize access: the multiplexer is
/// shared, so two conversions must never overlap.
pub trait SensorBus {
    /// Convert one channel and return the raw reading
    fn acquire(&mut self, channel: SensorChannel) -> u16;
}
