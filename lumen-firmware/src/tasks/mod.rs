//! Embassy async tasks
//!
//! Each task wraps one `lumen_runtime` step in a periodic loop and logs
//! what the step reports. None of them return.

pub mod backlight;
pub mod comparator;
pub mod renderer;
pub mod reporter;
pub mod sampler;
pub mod timers;

pub use backlight::backlight_task;
pub use comparator::comparator_task;
pub use renderer::{renderer_task, Lcd};
pub use reporter::{reporter_task, Serial};
pub use sampler::sampler_task;
pub use timers::{backlight_timeout_task, mode_timer_task, scroll_timer_task};
