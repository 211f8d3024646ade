//! Lumen Hardware Abstraction Layer
//!
//! This crate defines the collaborator traits the panel logic talks to.
//! Everything behind these traits is blocking, synchronous and has a
//! fixed latency; the application code never sees registers or pins.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  lumen-runtime / lumen-firmware tasks   │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumen-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ lumen-drivers │       │ board adapter │
//! │ (LCD, PWM...) │       │   (RP2040)    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`sensor::SensorBus`] - Analog front end (light, temperature, dial)
//! - [`display::CharacterDisplay`] - Two-line character display
//! - [`serial::SerialLine`] - Line-oriented diagnostic output
//! - [`gpio::OutputPin`], [`gpio::DutyOutput`] - Indicator and backlight

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod gpio;
pub mod sensor;
pub mod serial;

// Re-export key traits at crate root for convenience
pub use display::{CharacterDisplay, DisplayLine, LINE_WIDTH};
pub use gpio::{DutyOutput, OutputPin};
pub use sensor::{SensorBus, SensorChannel};
pub use serial::SerialLine;
