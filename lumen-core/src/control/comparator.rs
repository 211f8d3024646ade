//! Temperature-over-dial comparator
//!
//! Runs at elevated priority so the alert keeps blinking even when the UI
//! tasks are busy. While the temperature reading is above the dial setting
//! the indicator toggles every cycle; otherwise it rests at its idle level.

use crate::sample::SensorSample;

/// What to do with the indicator this cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorAction {
    /// Alerting: flip the indicator
    Toggle,
    /// Not alerting: drive the idle level
    Rest { high: bool },
}

/// Comparator configuration and evaluation
#[derive(Debug, Clone, Copy)]
pub struct Comparator {
    idle_high: bool,
}

impl Comparator {
    /// Create a comparator with the given idle level
    pub const fn new(idle_high: bool) -> Self {
        Self { idle_high }
    }

    /// Check whether a sample is in the alert condition
    pub fn alerting(&self, sample: &SensorSample) -> bool {
        sample.temperature > sample.dial
    }

    /// Decide the indicator action for a sample
    pub fn evaluate(&self, sample: &SensorSample) -> IndicatorAction {
        if self.alerting(sample) {
            IndicatorAction::Toggle
        } else {
            IndicatorAction::Rest {
                high: self.idle_high,
            }
        }
    }
}
