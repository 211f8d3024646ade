//! Banner scrolling
//!
//! A fixed-width window bounces across the banner text. The cursor position
//! is the index of the leftmost visible character and always stays within
//! `[0, len - width]`.

use lumen_hal::LINE_WIDTH;

/// Direction the window is moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollDirection {
    /// Towards the end of the text
    #[default]
    Forward,
    /// Towards the start of the text
    Backward,
}

/// Window position and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScrollCursor {
    /// Index of the leftmost visible character
    pub position: usize,
    /// Direction of the next step
    pub direction: ScrollDirection,
}

/// Timer-driven scroll state machine over a fixed text
#[derive(Debug, Clone)]
pub struct ScrollDriver {
    text: &'static str,
    width: usize,
    cursor: ScrollCursor,
}

impl ScrollDriver {
    /// Create a driver with the standard display width
    pub const fn new(text: &'static str) -> Self {
        Self::with_width(text, LINE_WIDTH)
    }

    /// Create a driver with a custom window width
    pub const fn with_width(text: &'static str, width: usize) -> Self {
        Self {
            text,
            width,
            cursor: ScrollCursor {
                position: 0,
                direction: ScrollDirection::Forward,
            },
        }
    }

    /// Largest valid position (`len - width`, or 0 for short texts)
    pub fn max_position(&self) -> usize {
        self.text.len().saturating_sub(self.width)
    }

    /// Timer firing: update direction at the bounds, then step once
    ///
    /// Returns the new cursor.
    pub fn fire(&mut self) -> ScrollCursor {
        let max = self.max_position();
        if max == 0 {
            // Text fits the window, nothing to scroll
            return self.cursor;
        }

        if self.cursor.position >= max {
            self.cursor.direction = ScrollDirection::Backward;
        } else if self.cursor.position == 0 {
            self.cursor.direction = ScrollDirection::Forward;
        }

        match self.cursor.direction {
            ScrollDirection::Forward => self.cursor.position += 1,
            ScrollDirection::Backward => self.cursor.position -= 1,
        }

        self.cursor
    }

    /// Current cursor
    pub fn cursor(&self) -> ScrollCursor {
        self.cursor
    }

    /// Currently visible part of the text
    pub fn window(&self) -> &'static str {
        super::screen::scroll_window(self.text, self.cursor.position, self.width)
    }
}
