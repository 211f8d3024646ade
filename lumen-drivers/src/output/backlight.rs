//! PWM backlight driver
//!
//! Maps the 8-bit duty scale onto the channel's native resolution.

use embedded_hal::pwm::SetDutyCycle;
use lumen_hal::DutyOutput;

/// Backlight brightness on a PWM channel
pub struct PwmBacklight<P> {
    pwm: P,
    duty: u8,
}

impl<P: SetDutyCycle> PwmBacklight<P> {
    /// Wrap a PWM channel, starting dark
    pub fn new(mut pwm: P) -> Self {
        let _ = pwm.set_duty_cycle_fully_off();
        Self { pwm, duty: 0 }
    }
}

impl<P: SetDutyCycle> DutyOutput for PwmBacklight<P> {
    fn set_duty(&mut self, duty: u8) {
        // PWM channels on our targets are infallible; a failed write keeps
        // the previous duty and is retried on the next cycle
        if self
            .pwm
            .set_duty_cycle_fraction(u16::from(duty), u16::from(u8::MAX))
            .is_ok()
        {
            self.duty = duty;
        }
    }

    fn duty(&self) -> u8 {
        self.duty
    }
}
