//! Backlight controller
//!
//! Blends two behaviours:
//!
//! - Continuous dimming: while on, the duty follows the ambient light
//!   reading every cycle.
//! - Inactivity shutoff: when the dial has not moved for the full timeout,
//!   the backlight switches off. Any dial movement cancels the timeout and
//!   switches it back on.
//!
//! The one-shot timer itself lives outside this type. The controller tells
//! the owner when to arm or cancel it, and the owner reports an expiry as
//! the `expired` flag on the next cycle.

use crate::config::Dimming;

/// Request for the one-shot inactivity timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeoutRequest {
    /// Start the timeout from now
    Arm,
    /// Stop a pending timeout
    Cancel,
}

/// Notable transitions, for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BacklightEvent {
    /// Dial moved while the backlight was off
    WokeUp,
    /// Inactivity timeout switched the backlight off
    TimedOut,
    /// Timeout expired in the same cycle as a dial change; the change won
    ExpiryDiscarded,
}

/// Controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BacklightState {
    /// Backlight currently lit
    pub on: bool,
    /// Dial reading from the previous cycle
    pub last_dial: u16,
    /// Inactivity timeout is running
    pub timeout_armed: bool,
}

/// Outputs of one controller cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BacklightUpdate {
    /// Duty to apply (0 = off)
    pub duty: u8,
    /// Timer request to forward, if any
    pub timeout: Option<TimeoutRequest>,
    /// Transition worth logging, if any
    pub event: Option<BacklightEvent>,
}

/// Backlight state machine
#[derive(Debug, Clone)]
pub struct BacklightController {
    state: BacklightState,
    dimming: Dimming,
}

impl BacklightController {
    /// Create a controller with the backlight on and no timeout armed
    pub const fn new(dimming: Dimming) -> Self {
        Self {
            state: BacklightState {
                on: true,
                last_dial: 0,
                timeout_armed: false,
            },
            dimming,
        }
    }

    /// Current state
    pub fn state(&self) -> BacklightState {
        self.state
    }

    /// Run one control cycle
    ///
    /// # Arguments
    /// - `light`: ambient light reading
    /// - `dial`: dial reading
    /// - `expired`: the inactivity timer fired since the previous cycle
    pub fn update(&mut self, light: u16, dial: u16, expired: bool) -> BacklightUpdate {
        let dial_changed = dial != self.state.last_dial;
        let mut event = None;
        let mut timeout = None;

        // An expiry only counts if we still consider the timer armed. A late
        // expiry racing a cancel from the previous cycle is dropped here.
        if expired && self.state.timeout_armed {
            self.state.timeout_armed = false;
            if dial_changed {
                event = Some(BacklightEvent::ExpiryDiscarded);
            } else if self.state.on {
                self.state.on = false;
                event = Some(BacklightEvent::TimedOut);
            }
        }

        if dial_changed {
            if self.state.timeout_armed {
                timeout = Some(TimeoutRequest::Cancel);
                self.state.timeout_armed = false;
            }
            if !self.state.on {
                event = Some(BacklightEvent::WokeUp);
            }
            self.state.on = true;
            self.state.last_dial = dial;
        } else if self.state.on && !self.state.timeout_armed {
            timeout = Some(TimeoutRequest::Arm);
            self.state.timeout_armed = true;
        }

        let duty = if self.state.on {
            self.dimming.duty_for(light)
        } else {
            0
        };

        BacklightUpdate {
            duty,
            timeout,
            event,
        }
    }
}
