//! Sensor bus over a fallible converter
//!
//! Chip ADCs can fail a conversion; the panel logic cannot tell a failed
//! read from a real zero. [`HoldLastBus`] keeps the last good reading per
//! channel and repeats it when a conversion fails, so a single glitch never
//! looks like a dial movement or a dark room.

use lumen_hal::{SensorBus, SensorChannel};

/// One-shot conversion of an analog channel
pub trait Converter {
    type Error;

    fn convert(&mut self, channel: SensorChannel) -> Result<u16, Self::Error>;
}

/// [`SensorBus`] that repeats the last good reading on conversion errors
pub struct HoldLastBus<C> {
    converter: C,
    last: [u16; 3],
}

impl<C: Converter> HoldLastBus<C> {
    /// Wrap a converter; channels read 0 until their first good conversion
    pub fn new(converter: C) -> Self {
        Self {
            converter,
            last: [0; 3],
        }
    }
}

impl<C: Converter> SensorBus for HoldLastBus<C> {
    fn acquire(&mut self, channel: SensorChannel) -> u16 {
        let slot = &mut self.last[slot(channel)];
        if let Ok(value) = self.converter.convert(channel) {
            *slot = value;
        }
        *slot
    }
}

const fn slot(channel: SensorChannel) -> usize {
    match channel {
        SensorChannel::Light => 0,
        SensorChannel::Temperature => 1,
        SensorChannel::Dial => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Converter that replays scripted results, `None` meaning a failed read
    struct Scripted {
        results: VecDeque<(SensorChannel, Option<u16>)>,
    }

    impl Scripted {
        fn new(results: &[(SensorChannel, Option<u16>)]) -> Self {
            Self {
                results: results.iter().copied().collect(),
            }
        }
    }

    impl Converter for Scripted {
        type Error = ();

        fn convert(&mut self, channel: SensorChannel) -> Result<u16, ()> {
            let (expected, result) = self.results.pop_front().ok_or(())?;
            assert_eq!(expected, channel);
            result.ok_or(())
        }
    }

    #[test]
    fn test_failed_dial_read_repeats_last_value() {
        let mut bus = HoldLastBus::new(Scripted::new(&[
            (SensorChannel::Dial, Some(100)),
            (SensorChannel::Dial, None),
            (SensorChannel::Dial, Some(150)),
        ]));

        assert_eq!(bus.acquire(SensorChannel::Dial), 100);
        // A glitch must not read as a dial move to 0
        assert_eq!(bus.acquire(SensorChannel::Dial), 100);
        assert_eq!(bus.acquire(SensorChannel::Dial), 150);
    }

    #[test]
    fn test_channels_hold_independently() {
        let mut bus = HoldLastBus::new(Scripted::new(&[
            (SensorChannel::Light, Some(3000)),
            (SensorChannel::Temperature, Some(500)),
            (SensorChannel::Light, None),
            (SensorChannel::Temperature, None),
        ]));

        bus.acquire(SensorChannel::Light);
        bus.acquire(SensorChannel::Temperature);

        assert_eq!(bus.acquire(SensorChannel::Light), 3000);
        assert_eq!(bus.acquire(SensorChannel::Temperature), 500);
    }

    #[test]
    fn test_zero_before_first_good_read() {
        let mut bus = HoldLastBus::new(Scripted::new(&[(SensorChannel::Light, None)]));
        assert_eq!(bus.acquire(SensorChannel::Light), 0);
    }
}
