//! One-shot backlight inactivity timer
//!
//! The backlight task sends [`TimeoutRequest`]s; a timer task runs
//! [`BacklightTimeout::run_once`] in a loop. Expiry is reported through a
//! flag the backlight task consumes at the start of its next cycle, so the
//! decision to switch off is always made by the backlight task itself.

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Timer};
use lumen_core::control::TimeoutRequest;
use portable_atomic::{AtomicBool, Ordering};

/// How a timer run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeoutOutcome {
    /// The full duration elapsed without a cancel
    Expired,
    /// A cancel arrived first
    Canceled,
}

/// Request channel and expiry flag for the inactivity timer
pub struct BacklightTimeout<M: RawMutex> {
    requests: Signal<M, TimeoutRequest>,
    expired: AtomicBool,
}

impl<M: RawMutex> BacklightTimeout<M> {
    pub const fn new() -> Self {
        Self {
            requests: Signal::new(),
            expired: AtomicBool::new(false),
        }
    }

    /// Send a request to the timer task
    ///
    /// A newer request replaces one the timer has not seen yet.
    pub fn request(&self, request: TimeoutRequest) {
        self.requests.signal(request);
    }

    /// Consume the expiry flag
    ///
    /// Returns `true` at most once per expiry.
    pub fn take_expired(&self) -> bool {
        self.expired
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Wait for an arm request, then time one run
    ///
    /// Another `Arm` while running restarts the countdown.
    pub async fn run_once(&self, duration: Duration) -> TimeoutOutcome {
        while self.requests.wait().await != TimeoutRequest::Arm {}

        loop {
            match select(Timer::after(duration), self.requests.wait()).await {
                Either::First(()) => {
                    self.expired.store(true, Ordering::Release);
                    return TimeoutOutcome::Expired;
                }
                Either::Second(TimeoutRequest::Cancel) => return TimeoutOutcome::Canceled,
                Either::Second(TimeoutRequest::Arm) => {}
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn force_expired(&self) {
        self.expired.store(true, Ordering::Release);
    }

    #[cfg(test)]
    pub(crate) fn take_request(&self) -> Option<TimeoutRequest> {
        self.requests.try_take()
    }
}

impl<M: RawMutex> Default for BacklightTimeout<M> {
    fn default() -> Self {
        Self::new()
    }
}
