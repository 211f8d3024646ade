//! Display state written by the UI timers
//!
//! Each field has exactly one writer (its timer) and is read by the
//! renderer. Word-sized atomics are enough; no lock is involved.

use lumen_core::ui::DisplayMode;
use portable_atomic::{AtomicU8, AtomicUsize, Ordering};

/// Current display mode and scroll position
pub struct UiState {
    mode: AtomicU8,
    scroll_position: AtomicUsize,
}

impl UiState {
    /// Light mode, scroll at the start of the text
    pub const fn new() -> Self {
        Self {
            mode: AtomicU8::new(DisplayMode::Light.as_u8()),
            scroll_position: AtomicUsize::new(0),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        DisplayMode::from_u8(self.mode.load(Ordering::Relaxed))
    }

    pub fn set_mode(&self, mode: DisplayMode) {
        self.mode.store(mode.as_u8(), Ordering::Relaxed);
    }

    pub fn scroll_position(&self) -> usize {
        self.scroll_position.load(Ordering::Relaxed)
    }

    pub fn set_scroll_position(&self, position: usize) {
        self.scroll_position.store(position, Ordering::Relaxed);
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
