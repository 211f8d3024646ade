//! Character display abstraction
//!
//! A 16x2 text display. Line 0 shows the selected sensor value, line 1
//! the scrolling banner.

/// Number of characters per display line
pub const LINE_WIDTH: usize = 16;

/// Display line selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayLine {
    /// Top line (row 0)
    Primary,
    /// Bottom line (row 1)
    Secondary,
}

impl DisplayLine {
    /// Hardware row index
    pub const fn row(self) -> u8 {
        match self {
            DisplayLine::Primary => 0,
            DisplayLine::Secondary => 1,
        }
    }
}

/// Trait for two-line character displays
pub trait CharacterDisplay {
    /// Error type for display operations
    type Error;

    /// Clear both lines and home the cursor
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Write text at the start of a line
    ///
    /// Text longer than [`LINE_WIDTH`] is truncated by the implementation.
    fn write_line(&mut self, line: DisplayLine, text: &str) -> Result<(), Self::Error>;
}
