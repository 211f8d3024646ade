//! Recording collaborators for host tests

use std::string::String;
use std::vec::Vec;

use core::convert::Infallible;

use lumen_core::SensorSample;
use lumen_hal::{CharacterDisplay, DisplayLine, DutyOutput, OutputPin, SensorBus, SensorChannel};

/// Sensor bus that returns a fixed sample
pub struct ScriptedBus {
    pub sample: SensorSample,
    pub conversions: usize,
}

impl ScriptedBus {
    pub fn new(sample: SensorSample) -> Self {
        Self {
            sample,
            conversions: 0,
        }
    }
}

impl SensorBus for ScriptedBus {
    fn acquire(&mut self, channel: SensorChannel) -> u16 {
        self.conversions += 1;
        self.sample.channel(channel)
    }
}

/// Display that keeps the current content of both lines
#[derive(Default)]
pub struct RecordingDisplay {
    pub primary: String,
    pub secondary: String,
    pub clears: usize,
    pub writes: Vec<(DisplayLine, String)>,
}

impl CharacterDisplay for RecordingDisplay {
    type Error = Infallible;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.clears += 1;
        self.primary.clear();
        self.secondary.clear();
        Ok(())
    }

    fn write_line(&mut self, line: DisplayLine, text: &str) -> Result<(), Self::Error> {
        match line {
            DisplayLine::Primary => self.primary = text.into(),
            DisplayLine::Secondary => self.secondary = text.into(),
        }
        self.writes.push((line, text.into()));
        Ok(())
    }
}

/// Serial line that collects written lines
#[derive(Default)]
pub struct RecordingSerial {
    pub lines: Vec<String>,
}

impl lumen_hal::SerialLine for RecordingSerial {
    type Error = Infallible;

    fn write_line(&mut self, text: &str) -> Result<(), Self::Error> {
        self.lines.push(text.into());
        Ok(())
    }
}

/// Duty output with history
#[derive(Default)]
pub struct FakeDuty {
    pub history: Vec<u8>,
}

impl DutyOutput for FakeDuty {
    fn set_duty(&mut self, duty: u8) {
        self.history.push(duty);
    }

    fn duty(&self) -> u8 {
        self.history.last().copied().unwrap_or(0)
    }
}

/// Output pin that counts toggles
#[derive(Default)]
pub struct FakePin {
    pub high: bool,
    pub toggles: usize,
}

impl OutputPin for FakePin {
    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn toggle(&mut self) {
        self.toggles += 1;
        self.high = !self.high;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
