//! Temperature alert indicator

use embassy_sync::blocking_mutex::raw::RawMutex;
use lumen_core::control::{Comparator, IndicatorAction};
use lumen_hal::OutputPin;

use crate::store::{ReadOutcome, SensorStore, StoreReader};

/// Result of one comparator cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ComparatorCycle {
    pub reading: ReadOutcome,
    pub action: IndicatorAction,
}

/// Blinks the indicator while the temperature exceeds the dial
pub struct ComparatorTask<'a, M: RawMutex, P> {
    reader: StoreReader<'a, M>,
    comparator: Comparator,
    indicator: P,
}

impl<'a, M: RawMutex, P: OutputPin> ComparatorTask<'a, M, P> {
    pub fn new(store: &'a SensorStore<M>, idle_high: bool, indicator: P) -> Self {
        Self {
            reader: store.reader(),
            comparator: Comparator::new(idle_high),
            indicator,
        }
    }

    pub async fn run_once(&mut self) -> ComparatorCycle {
        let reading = self.reader.read().await;
        let action = self.comparator.evaluate(&reading.sample());

        match action {
            IndicatorAction::Toggle => self.indicator.toggle(),
            IndicatorAction::Rest { high } => self.indicator.set_state(high),
        }

        ComparatorCycle { reading, action }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakePin;
    use embassy_futures::block_on;
    use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
    use embassy_time::Duration;
    use lumen_core::SensorSample;

    #[test]
    fn test_blinks_while_hot() {
        let store = SensorStore::<CriticalSectionRawMutex>::new(Duration::from_millis(10));
        let mut task = ComparatorTask::new(&store, true, FakePin::default());
        block_on(store.write(SensorSample::new(0, 600, 500)));

        let mut levels = Vec::new();
        for _ in 0..4 {
            let cycle = block_on(task.run_once());
            assert_eq!(cycle.action, IndicatorAction::Toggle);
            levels.push(task.indicator.high);
        }

        assert_eq!(levels, [true, false, true, false]);
        assert_eq!(task.indicator.toggles, 4);
    }

    #[test]
    fn test_rests_at_idle_level_when_cool() {
        let store = SensorStore::<CriticalSectionRawMutex>::new(Duration::from_millis(10));
        let mut task = ComparatorTask::new(&store, true, FakePin::default());

        block_on(store.write(SensorSample::new(0, 600, 500)));
        block_on(task.run_once());

        // Equal is not above
        block_on(store.write(SensorSample::new(0, 500, 500)));
        let cycle = block_on(task.run_once());

        assert_eq!(cycle.action, IndicatorAction::Rest { high: true });
        assert!(task.indicator.high);
        assert_eq!(task.indicator.toggles, 1);
    }
}
