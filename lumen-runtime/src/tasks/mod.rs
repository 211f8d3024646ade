//! One cycle of each periodic activity
//!
//! Every task is a struct holding its shared references and its hardware,
//! with an async `run_once` that performs exactly one period's work and
//! returns what happened. The firmware loops these with a `Ticker` and logs
//! the outcomes.

pub mod backlight;
pub mod comparator;
pub mod renderer;
pub mod reporter;
pub mod sampler;

pub use backlight::{BacklightCycle, BacklightTask};
pub use comparator::{ComparatorCycle, ComparatorTask};
pub use renderer::{RenderOutcome, RendererTask};
pub use reporter::ReporterTask;
pub use sampler::SamplerTask;
