//! Configuration types
//!
//! All values are compile-time defaults. The panel has no persistent or
//! remote configuration; boards override fields before spawning tasks.

pub mod panel;
pub mod timing;

pub use panel::{Dimming, PanelConfig, SCROLL_TEXT};
pub use timing::Timing;
