//! Backlight dimming and inactivity switch-off

use embassy_sync::blocking_mutex::raw::RawMutex;
use lumen_core::config::Dimming;
use lumen_core::control::{BacklightController, BacklightUpdate};
use lumen_hal::DutyOutput;

use crate::store::{ReadOutcome, SensorStore, StoreReader};
use crate::timeout::BacklightTimeout;

/// Result of one backlight cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BacklightCycle {
    pub reading: ReadOutcome,
    pub update: BacklightUpdate,
}

/// Runs the backlight controller against the store and the timeout
pub struct BacklightTask<'a, M: RawMutex, P> {
    reader: StoreReader<'a, M>,
    timeout: &'a BacklightTimeout<M>,
    controller: BacklightController,
    output: P,
}

impl<'a, M: RawMutex, P: DutyOutput> BacklightTask<'a, M, P> {
    pub fn new(
        store: &'a SensorStore<M>,
        timeout: &'a BacklightTimeout<M>,
        dimming: Dimming,
        output: P,
    ) -> Self {
        Self {
            reader: store.reader(),
            timeout,
            controller: BacklightController::new(dimming),
            output,
        }
    }

    /// Read, decide, forward any timer request and apply the duty
    pub async fn run_once(&mut self) -> BacklightCycle {
        let reading = self.reader.read().await;
        let sample = reading.sample();

        let expired = self.timeout.take_expired();
        let update = self.controller.update(sample.light, sample.dial, expired);

        if let Some(request) = update.timeout {
            self.timeout.request(request);
        }
        self.output.set_duty(update.duty);

        BacklightCycle { reading, update }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeDuty;
    use crate::timeout::TimeoutOutcome;
    use embassy_futures::block_on;
    use embassy_futures::join::join;
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use embassy_time::{Duration, Instant, Timer};
    use lumen_core::control::{BacklightEvent, TimeoutRequest};
    use lumen_core::SensorSample;

    type Store = SensorStore<CriticalSectionRawMutex>;
    type Timeout = BacklightTimeout<CriticalSectionRawMutex>;

    #[test]
    fn test_arms_after_first_quiet_cycle() {
        let store = Store::new(Duration::from_millis(10));
        let timeout = Timeout::new();
        let mut task = BacklightTask::new(&store, &timeout, Dimming::DEFAULT, FakeDuty::default());
        block_on(store.write(SensorSample::new(200, 0, 100)));

        let first = block_on(task.run_once());
        assert!(first.update.duty > 0);
        assert_eq!(first.update.timeout, None);
        assert_eq!(timeout.take_request(), None);

        let second = block_on(task.run_once());
        assert_eq!(second.update.timeout, Some(TimeoutRequest::Arm));
        assert_eq!(timeout.take_request(), Some(TimeoutRequest::Arm));
    }

    #[test]
    fn test_dial_change_cancels_pending_timeout() {
        let store = Store::new(Duration::from_millis(10));
        let timeout = Timeout::new();
        let mut task = BacklightTask::new(&store, &timeout, Dimming::DEFAULT, FakeDuty::default());

        block_on(store.write(SensorSample::new(200, 0, 100)));
        block_on(task.run_once());
        block_on(task.run_once());
        assert_eq!(timeout.take_request(), Some(TimeoutRequest::Arm));

        block_on(store.write(SensorSample::new(200, 0, 150)));
        let cycle = block_on(task.run_once());
        assert_eq!(cycle.update.timeout, Some(TimeoutRequest::Cancel));
        assert!(cycle.update.duty > 0);

        let cycle = block_on(task.run_once());
        assert_eq!(cycle.update.timeout, Some(TimeoutRequest::Arm));
    }

    #[test]
    fn test_dial_change_beats_same_cycle_expiry() {
        let store = Store::new(Duration::from_millis(10));
        let timeout = Timeout::new();
        let mut task = BacklightTask::new(&store, &timeout, Dimming::DEFAULT, FakeDuty::default());

        block_on(store.write(SensorSample::new(200, 0, 100)));
        block_on(task.run_once());
        block_on(task.run_once());

        timeout.force_expired();
        block_on(store.write(SensorSample::new(200, 0, 150)));
        let cycle = block_on(task.run_once());

        assert_eq!(cycle.update.event, Some(BacklightEvent::ExpiryDiscarded));
        assert!(cycle.update.duty > 0);
        assert!(task.output.history.iter().all(|&duty| duty > 0));
    }

    #[test]
    fn test_expiry_switches_off_once_and_dial_wakes() {
        let store = Store::new(Duration::from_millis(10));
        let timeout = Timeout::new();
        let mut task = BacklightTask::new(&store, &timeout, Dimming::DEFAULT, FakeDuty::default());

        block_on(store.write(SensorSample::new(200, 0, 100)));
        block_on(task.run_once());
        block_on(task.run_once());

        timeout.force_expired();
        let cycle = block_on(task.run_once());
        assert_eq!(cycle.update.event, Some(BacklightEvent::TimedOut));
        assert_eq!(cycle.update.duty, 0);

        // Stays off without re-arming
        for _ in 0..5 {
            let cycle = block_on(task.run_once());
            assert_eq!(cycle.update.duty, 0);
            assert_eq!(cycle.update.timeout, None);
        }

        block_on(store.write(SensorSample::new(200, 0, 101)));
        let cycle = block_on(task.run_once());
        assert_eq!(cycle.update.event, Some(BacklightEvent::WokeUp));
        assert!(cycle.update.duty > 0);
    }

    #[test]
    fn test_real_timer_switches_off_after_timeout() {
        const TIMEOUT: Duration = Duration::from_millis(20);
        const PERIOD: Duration = Duration::from_millis(2);

        let store = Store::new(Duration::from_millis(10));
        let timeout = Timeout::new();
        let mut task = BacklightTask::new(&store, &timeout, Dimming::DEFAULT, FakeDuty::default());
        block_on(store.write(SensorSample::new(200, 0, 100)));

        let cycles = async {
            let mut armed_at = None;
            let mut off_at = None;
            let mut transitions = 0;
            let mut last_duty = u8::MAX;

            for _ in 0..40 {
                let cycle = task.run_once().await;
                let now = Instant::now();
                if cycle.update.timeout == Some(TimeoutRequest::Arm) {
                    armed_at = Some(now);
                }
                if cycle.update.duty == 0 && last_duty != 0 {
                    transitions += 1;
                    off_at = Some(now);
                }
                last_duty = cycle.update.duty;
                Timer::after(PERIOD).await;
            }
            (armed_at, off_at, transitions)
        };

        let (outcome, (armed_at, off_at, transitions)) =
            block_on(join(timeout.run_once(TIMEOUT), cycles));

        assert_eq!(outcome, TimeoutOutcome::Expired);
        assert_eq!(transitions, 1);
        let (armed_at, off_at) = (armed_at.unwrap(), off_at.unwrap());
        assert!(off_at - armed_at >= TIMEOUT);
    }
}
