//! Panel-level configuration

use super::timing::Timing;

/// Banner shown on the second display line
pub const SCROLL_TEXT: &str = "DTEK0068 Embedded Microprocessor Systems";

/// Backlight dimming curve
///
/// Maps the ambient light reading to a PWM duty. The curve is linear and
/// non-increasing: a brighter room gives a dimmer backlight. While the
/// backlight is on the duty never drops below `min_duty`, so a zero duty
/// always means "switched off".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dimming {
    /// Full-scale light reading (12-bit ADC)
    pub adc_max: u16,
    /// Duty in complete darkness
    pub max_duty: u8,
    /// Duty at full-scale light (must be non-zero)
    pub min_duty: u8,
}

impl Dimming {
    /// Default curve for the RP2040 12-bit ADC
    pub const DEFAULT: Dimming = Dimming {
        adc_max: 4095,
        max_duty: 255,
        min_duty: 16,
    };

    /// Backlight duty for a light reading
    pub fn duty_for(&self, light: u16) -> u8 {
        let max = self.max_duty.max(1);
        let min = self.min_duty.clamp(1, max);
        let adc_max = u32::from(self.adc_max.max(1));

        let light = u32::from(light).min(adc_max);
        let span = u32::from(max - min);
        let dimmed = span * light / adc_max;

        max - dimmed as u8
    }
}

impl Default for Dimming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete panel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    /// Task and timer periods
    pub timing: Timing,
    /// Backlight dimming curve
    pub dimming: Dimming,
    /// Banner text for the scrolling line (ASCII)
    pub scroll_text: &'static str,
    /// Indicator level while the comparator is not alerting
    ///
    /// The on-board LED is active-low, so "idle" is a high output.
    pub indicator_idle_high: bool,
}

impl PanelConfig {
    /// Default configuration used by the shipped firmware
    pub const DEFAULT: PanelConfig = PanelConfig {
        timing: Timing::DEFAULT,
        dimming: Dimming::DEFAULT,
        scroll_text: SCROLL_TEXT,
        indicator_idle_high: true,
    };
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
