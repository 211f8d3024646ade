//! Display-side state machines and formatting
//!
//! The mode rotator and the scroll driver are advanced by periodic timers;
//! the renderer only reads their current value.

pub mod mode;
pub mod screen;
pub mod scroll;

pub use mode::{DisplayMode, ModeRotator};
pub use screen::{primary_line, scroll_window, Line};
pub use scroll::{ScrollCursor, ScrollDirection, ScrollDriver};
