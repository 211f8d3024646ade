//! Periodic UI timer handlers
//!
//! Each handler owns its state machine and publishes the result to
//! [`UiState`]. The firmware calls `fire` from an interrupt-priority ticker.

use lumen_core::ui::{DisplayMode, ModeRotator, ScrollCursor, ScrollDriver};

use crate::ui::UiState;

/// Display mode rotation timer
pub struct ModeTimer<'a> {
    rotator: ModeRotator,
    ui: &'a UiState,
}

impl<'a> ModeTimer<'a> {
    /// Start at `Light` and publish it
    pub fn new(ui: &'a UiState) -> Self {
        let rotator = ModeRotator::new();
        ui.set_mode(rotator.current());
        Self { rotator, ui }
    }

    pub fn fire(&mut self) -> DisplayMode {
        let mode = self.rotator.fire();
        self.ui.set_mode(mode);
        mode
    }
}

/// Banner scroll timer
pub struct ScrollTimer<'a> {
    driver: ScrollDriver,
    ui: &'a UiState,
}

impl<'a> ScrollTimer<'a> {
    /// Start at position 0 and publish it
    pub fn new(text: &'static str, ui: &'a UiState) -> Self {
        let driver = ScrollDriver::new(text);
        ui.set_scroll_position(driver.cursor().position);
        Self { driver, ui }
    }

    pub fn fire(&mut self) -> ScrollCursor {
        let cursor = self.driver.fire();
        self.ui.set_scroll_position(cursor.position);
        cursor
    }
}
