//! Board-agnostic core logic for the sensor panel firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware or on the async runtime:
//!
//! - Sensor sample snapshot type
//! - Display mode rotation and banner scrolling state machines
//! - Backlight dimming and inactivity shutoff state machine
//! - Over-threshold comparator
//! - Display and serial line formatting
//! - Timing and dimming configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod report;
pub mod sample;
pub mod ui;

pub use sample::SensorSample;
