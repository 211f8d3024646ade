//! Shared-resource plumbing for the sensor panel
//!
//! Everything that more than one schedulable context touches lives here:
//!
//! - [`store::SensorStore`] - mutex-guarded latest sample with bounded waits
//! - [`pipe::SamplePipe`] - single-slot overwrite handoff to the renderer
//! - [`ui::UiState`] - atomics written by the mode and scroll timers
//! - [`timeout::BacklightTimeout`] - one-shot inactivity timer handoff
//!
//! The [`tasks`] module holds one cycle of each activity as a `run_once`
//! step, generic over the lumen-hal collaborators. The firmware wraps each
//! step in an executor task with its own period and logging.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod error;
pub mod pipe;
pub mod store;
pub mod tasks;
pub mod timeout;
pub mod timers;
pub mod ui;

#[cfg(test)]
mod testing;

pub use error::SyncError;
pub use pipe::SamplePipe;
pub use store::{ReadOutcome, SensorStore, StoreReader};
pub use timeout::{BacklightTimeout, TimeoutOutcome};
pub use timers::{ModeTimer, ScrollTimer};
pub use ui::UiState;
