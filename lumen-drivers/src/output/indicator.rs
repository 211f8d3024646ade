//! Indicator LED driver
//!
//! embedded-hal output pins cannot always report their level, so the
//! driver tracks it and implements toggling itself.

use embedded_hal::digital::OutputPin as EhOutputPin;
use lumen_hal::OutputPin;

/// Indicator LED on a push-pull output
pub struct Indicator<P> {
    pin: P,
    high: bool,
}

impl<P: EhOutputPin> Indicator<P> {
    /// Wrap a pin and drive it to an initial level
    pub fn new(mut pin: P, high: bool) -> Self {
        let _ = if high { pin.set_high() } else { pin.set_low() };
        Self { pin, high }
    }
}

impl<P: EhOutputPin> OutputPin for Indicator<P> {
    fn set_high(&mut self) {
        if self.pin.set_high().is_ok() {
            self.high = true;
        }
    }

    fn set_low(&mut self) {
        if self.pin.set_low().is_ok() {
            self.high = false;
        }
    }

    fn toggle(&mut self) {
        if self.high {
            self.set_low();
        } else {
            self.set_high();
        }
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::BusLog;

    #[test]
    fn test_toggle_tracks_level() {
        let log = BusLog::new();
        let mut led = Indicator::new(log.pin(0), true);
        assert!(led.is_set_high());

        led.toggle();
        assert!(led.is_set_low());
        led.toggle();
        assert!(led.is_set_high());
    }

    #[test]
    fn test_set_state() {
        let log = BusLog::new();
        let mut led = Indicator::new(log.pin(0), false);
        led.set_state(true);
        assert!(led.is_set_high());
        led.set_state(false);
        assert!(led.is_set_low());
    }
}
