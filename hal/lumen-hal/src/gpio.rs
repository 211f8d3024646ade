//! Digital and PWM output abstractions
//!
//! Provides traits for the indicator LED and the backlight brightness
//! driver.

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Toggle the pin state
    fn toggle(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Duty-cycle output (PWM compare register)
///
/// Duty is expressed on an 8-bit scale: 0 is fully off, 255 fully on.
/// Writes take effect immediately.
pub trait DutyOutput {
    /// Apply a new duty cycle
    fn set_duty(&mut self, duty: u8);

    /// Duty cycle currently applied
    fn duty(&self) -> u8;
}
