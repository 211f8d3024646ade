//! Display line formatting

use core::fmt::Write;

use heapless::String;
use lumen_hal::LINE_WIDTH;

use super::mode::DisplayMode;
use crate::sample::SensorSample;

/// One display line of text
pub type Line = String<LINE_WIDTH>;

/// Format the primary line for the current mode
///
/// Produces e.g. `"LDR value: 300"`. The widest value (`65535`) still fits
/// the 16-character line.
pub fn primary_line(mode: DisplayMode, sample: &SensorSample) -> Line {
    let mut line = Line::new();
    let value = sample.channel(mode.channel());
    // Cannot overflow: 3-char label + 8 fixed chars + at most 5 digits
    let _ = write!(line, "{} value: {}", mode.label(), value);
    line
}

/// Visible slice of a scrolling text
///
/// Returns `text[position .. position + width]`, clipped to the text.
/// Positions past the end give an empty window.
pub fn scroll_window(text: &str, position: usize, width: usize) -> &str {
    let start = position.min(text.len());
    let end = position.saturating_add(width).min(text.len());
    text.get(start..end).unwrap_or("")
}
