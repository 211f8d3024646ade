//! Backlight and indicator outputs

pub mod backlight;
pub mod indicator;

pub use backlight::PwmBacklight;
pub use indicator::Indicator;
