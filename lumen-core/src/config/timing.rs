//! Task and timer periods
//!
//! All periods and bounds are in milliseconds; the firmware converts them
//! to embassy durations.

/// Periods, bounded waits and timeouts for every activity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Sampler cycle
    pub sample_period_ms: u32,
    /// Longest the renderer waits for a fresh sample before redrawing
    pub render_wait_ms: u32,
    /// Display mode rotation timer period
    pub mode_period_ms: u32,
    /// Banner scroll timer period (5 characters per second)
    pub scroll_period_ms: u32,
    /// Backlight controller cycle
    pub backlight_period_ms: u32,
    /// Dial inactivity before the backlight switches off
    pub backlight_timeout_ms: u32,
    /// Serial diagnostic report period
    pub report_period_ms: u32,
    /// Comparator cycle
    pub comparator_period_ms: u32,
    /// Bound on sensor store lock acquisition
    pub lock_timeout_ms: u32,
}

impl Timing {
    /// Default timing used by the shipped firmware
    pub const DEFAULT: Timing = Timing {
        sample_period_ms: 100,
        render_wait_ms: 100,
        mode_period_ms: 660,
        scroll_period_ms: 200,
        backlight_period_ms: 100,
        backlight_timeout_ms: 10_000,
        report_period_ms: 1_000,
        comparator_period_ms: 100,
        lock_timeout_ms: 100,
    };

    /// Number of backlight cycles that fit in the inactivity timeout
    pub const fn backlight_timeout_cycles(&self) -> u32 {
        if self.backlight_period_ms == 0 {
            return 0;
        }
        self.backlight_timeout_ms.div_ceil(self.backlight_period_ms)
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}
