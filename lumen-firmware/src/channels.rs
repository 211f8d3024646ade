//! Shared state between tasks
//!
//! Every shared object is a static so tasks on all three executors can hold
//! `'static` references to it.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_time::Duration;
use lumen_core::config::PanelConfig;
use lumen_runtime::{BacklightTimeout, SamplePipe, SensorStore, UiState};

/// Panel configuration (compile-time)
pub const CONFIG: PanelConfig = PanelConfig::DEFAULT;

/// Latest sensor sample, written by the sampler
pub static STORE: SensorStore<CriticalSectionRawMutex> =
    SensorStore::new(ms(CONFIG.timing.lock_timeout_ms));

/// Newest sample for the renderer
pub static PIPE: SamplePipe<CriticalSectionRawMutex> = SamplePipe::new();

/// Display mode and scroll position, written by the UI timers
pub static UI: UiState = UiState::new();

/// Backlight inactivity timer requests and expiry flag
pub static BACKLIGHT_TIMEOUT: BacklightTimeout<CriticalSectionRawMutex> = BacklightTimeout::new();

/// Milliseconds from the config into an embassy duration
pub const fn ms(millis: u32) -> Duration {
    Duration::from_millis(millis as u64)
}
