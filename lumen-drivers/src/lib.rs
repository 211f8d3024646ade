//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the collaborator traits
//! defined in lumen-hal, built on the `embedded-hal` and `embedded-io`
//! ecosystem traits so they work with any chip HAL:
//!
//! - Character display (HD44780, 4-bit parallel)
//! - Serial line over any `embedded_io::Write`
//! - PWM backlight over `embedded_hal::pwm::SetDutyCycle`
//! - Indicator LED over `embedded_hal::digital::OutputPin`
//! - Sensor bus that rides out failed conversions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
pub mod output;
pub mod sensor;
pub mod serial;

#[cfg(test)]
mod mock;
