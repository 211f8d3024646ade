//! ADC front end
//!
//! LDR, NTC and potentiometer dividers on the three ADC-capable GPIOs.
//! Conversions are blocking; the store lock already serializes callers.

use defmt::*;
use embassy_rp::adc::{Adc, Blocking, Channel, Error};
use lumen_drivers::sensor::{Converter, HoldLastBus};
use lumen_hal::SensorChannel;

/// Sensor bus handed to the sampler; failed conversions repeat the last value
pub type SensorInputs = HoldLastBus<AdcChannels>;

/// The three sensor inputs on the RP2040 ADC
pub struct AdcChannels {
    adc: Adc<'static, Blocking>,
    light: Channel<'static>,
    temperature: Channel<'static>,
    dial: Channel<'static>,
}

impl AdcChannels {
    pub fn new(
        adc: Adc<'static, Blocking>,
        light: Channel<'static>,
        temperature: Channel<'static>,
        dial: Channel<'static>,
    ) -> Self {
        Self {
            adc,
            light,
            temperature,
            dial,
        }
    }
}

impl Converter for AdcChannels {
    type Error = Error;

    fn convert(&mut self, channel: SensorChannel) -> Result<u16, Error> {
        let input = match channel {
            SensorChannel::Light => &mut self.light,
            SensorChannel::Temperature => &mut self.temperature,
            SensorChannel::Dial => &mut self.dial,
        };

        self.adc.blocking_read(input).inspect_err(|e| {
            warn!("ADC conversion failed on {}: {}, keeping last reading", channel, e)
        })
    }
}
