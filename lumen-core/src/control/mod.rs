//! Output control logic
//!
//! Pure per-cycle state machines. The owning tasks feed them sensor
//! samples and apply the returned outputs to hardware.

pub mod backlight;
pub mod comparator;

pub use backlight::{
    BacklightController, BacklightEvent, BacklightState, BacklightUpdate, TimeoutRequest,
};
pub use comparator::{Comparator, IndicatorAction};
