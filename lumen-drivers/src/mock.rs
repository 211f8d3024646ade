//! Recording doubles for embedded-hal and embedded-io traits

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;
use std::vec::Vec;

const RS: usize = 0;
const EN: usize = 1;

/// Shared log of pin transitions, indexed by pin id
#[derive(Clone, Default)]
pub struct BusLog {
    events: Rc<RefCell<Vec<(usize, bool)>>>,
}

impl BusLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pin(&self, id: usize) -> LoggedPin {
        LoggedPin {
            id,
            log: self.clone(),
        }
    }

    /// `(rs, nibble)` latched on every rising edge of EN
    pub fn strobed_nibbles(&self) -> Vec<(bool, u8)> {
        let mut levels = [false; 6];
        let mut nibbles = Vec::new();
        for &(id, high) in self.events.borrow().iter() {
            levels[id] = high;
            if id == EN && high {
                let nibble = (0..4).fold(0u8, |acc, bit| acc | (u8::from(levels[2 + bit]) << bit));
                nibbles.push((levels[RS], nibble));
            }
        }
        nibbles
    }

    /// Strobed nibbles paired into `(rs, byte)`, skipping `skip` raw nibbles
    pub fn bytes_after(&self, skip: usize) -> Vec<(bool, u8)> {
        self.strobed_nibbles()[skip..]
            .chunks(2)
            .map(|pair| (pair[0].0, (pair[0].1 << 4) | pair[1].1))
            .collect()
    }

    pub fn strobed_bytes(&self) -> Vec<(bool, u8)> {
        self.bytes_after(0)
    }
}

pub struct LoggedPin {
    id: usize,
    log: BusLog,
}

impl embedded_hal::digital::ErrorType for LoggedPin {
    type Error = Infallible;
}

impl embedded_hal::digital::OutputPin for LoggedPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.events.borrow_mut().push((self.id, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.events.borrow_mut().push((self.id, true));
        Ok(())
    }
}

pub struct NoDelay;

impl embedded_hal::delay::DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// PWM channel remembering the last raw duty
pub struct FakePwm {
    pub max: u16,
    pub raw: u16,
}

impl embedded_hal::pwm::ErrorType for FakePwm {
    type Error = Infallible;
}

impl embedded_hal::pwm::SetDutyCycle for FakePwm {
    fn max_duty_cycle(&self) -> u16 {
        self.max
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.raw = duty;
        Ok(())
    }
}

/// Byte sink collecting everything written
#[derive(Default)]
pub struct ByteSink {
    pub bytes: Vec<u8>,
    pub flushes: usize,
}

impl embedded_io::ErrorType for ByteSink {
    type Error = Infallible;
}

impl embedded_io::Write for ByteSink {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.bytes.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}
