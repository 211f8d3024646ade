//! Display mode rotation
//!
//! The primary line cycles through the three channels. Each timer firing
//! advances the mode by one, wrapping after the dial.

use lumen_hal::SensorChannel;

/// Which sensor value the primary line shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DisplayMode {
    /// Ambient light (LDR)
    #[default]
    Light = 0,
    /// Temperature (NTC)
    Temperature = 1,
    /// Dial (potentiometer)
    Dial = 2,
}

impl DisplayMode {
    /// Mode after this one
    pub const fn next(self) -> Self {
        match self {
            DisplayMode::Light => DisplayMode::Temperature,
            DisplayMode::Temperature => DisplayMode::Dial,
            DisplayMode::Dial => DisplayMode::Light,
        }
    }

    /// Encode as a single byte for atomic publication
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Decode from a published byte
    ///
    /// Unknown values fall back to `Light`.
    pub const fn from_u8(value: u8) -> Self {
        match value {
            1 => DisplayMode::Temperature,
            2 => DisplayMode::Dial,
            _ => DisplayMode::Light,
        }
    }

    /// Sensor channel displayed in this mode
    pub const fn channel(self) -> SensorChannel {
        match self {
            DisplayMode::Light => SensorChannel::Light,
            DisplayMode::Temperature => SensorChannel::Temperature,
            DisplayMode::Dial => SensorChannel::Dial,
        }
    }

    /// Label printed in front of the value
    pub const fn label(self) -> &'static str {
        match self {
            DisplayMode::Light => "LDR",
            DisplayMode::Temperature => "NTC",
            DisplayMode::Dial => "POT",
        }
    }
}

/// Timer-driven mode selector
#[derive(Debug, Clone, Default)]
pub struct ModeRotator {
    mode: DisplayMode,
}

impl ModeRotator {
    /// Create a rotator starting at `Light`
    pub const fn new() -> Self {
        Self {
            mode: DisplayMode::Light,
        }
    }

    /// Timer firing: advance to the next mode and return it
    pub fn fire(&mut self) -> DisplayMode {
        self.mode = self.mode.next();
        self.mode
    }

    /// Current mode
    pub fn current(&self) -> DisplayMode {
        self.mode
    }
}
