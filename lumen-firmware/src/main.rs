//! Lumen - Sensor Panel Controller Firmware
//!
//! Main firmware binary for RP2040-based sensor panels. Reads a light
//! sensor, a thermistor and a dial, shows them on a 16x2 character LCD,
//! dims the LCD backlight with ambient light and switches it off when the
//! dial has not moved for a while.
//!
//! Three executors give three priority levels:
//! - `SWI_IRQ_0` interrupt executor: UI timers and the backlight timeout
//! - `SWI_IRQ_1` interrupt executor: temperature comparator
//! - thread-mode executor: sampler, renderer, backlight, reporter

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::adc::{Adc, Channel};
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_rp::uart::{Config as UartConfig, UartTx};
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use lumen_drivers::display::{Hd44780, Hd44780Pins};
use lumen_drivers::output::{Indicator, PwmBacklight};
use lumen_drivers::serial::SerialPort;

use crate::channels::CONFIG;
use crate::sensors::{AdcChannels, SensorInputs};

mod channels;
mod sensors;
mod tasks;

// Timers: highest priority used by the application
static EXECUTOR_TIMERS: InterruptExecutor = InterruptExecutor::new();
// Comparator: above the thread-mode tasks, below the timers
static EXECUTOR_ALERT: InterruptExecutor = InterruptExecutor::new();

// Backlight power enable must stay driven for the life of the firmware
static BACKLIGHT_ENABLE: StaticCell<Output<'static>> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_0() {
    EXECUTOR_TIMERS.on_interrupt()
}

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_ALERT.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lumen firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Sensor dividers (board wiring: LDR=GPIO26, NTC=GPIO27, POT=GPIO28)
    let adc = Adc::new_blocking(p.ADC, embassy_rp::adc::Config::default());
    let bus = SensorInputs::new(AdcChannels::new(
        adc,
        Channel::new_pin(p.PIN_26, Pull::None),
        Channel::new_pin(p.PIN_27, Pull::None),
        Channel::new_pin(p.PIN_28, Pull::None),
    ));
    info!("ADC initialized");

    // Character LCD, 4-bit bus (RS=GPIO6, EN=GPIO7, D4..D7=GPIO8..11)
    let pins = Hd44780Pins {
        rs: Output::new(p.PIN_6, Level::Low),
        en: Output::new(p.PIN_7, Level::Low),
        data: [
            Output::new(p.PIN_8, Level::Low),
            Output::new(p.PIN_9, Level::Low),
            Output::new(p.PIN_10, Level::Low),
            Output::new(p.PIN_11, Level::Low),
        ],
    };
    let mut lcd = Hd44780::new(pins, Delay);
    if lcd.init().is_err() {
        warn!("LCD init failed, continuing without a clean display");
    }
    info!("LCD initialized");

    // Backlight: power enable on GPIO17, brightness PWM on GPIO16 (slice 0 A)
    BACKLIGHT_ENABLE.init(Output::new(p.PIN_17, Level::High));
    let mut pwm_config = PwmConfig::default();
    pwm_config.top = u8::MAX as u16;
    let (pwm_a, _) = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, pwm_config).split();
    let Some(pwm_a) = pwm_a else {
        error!("Backlight PWM channel unavailable");
        return;
    };
    let backlight = PwmBacklight::new(pwm_a);
    info!("Backlight initialized");

    // Diagnostics UART (TX=GPIO0, 9600 baud)
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = 9600;
    let serial = SerialPort::new(UartTx::new_blocking(p.UART0, p.PIN_0, uart_config));
    info!("UART initialized for diagnostics");

    // Alert LED on GPIO15, wired active-low
    let indicator = Indicator::new(
        Output::new(p.PIN_15, Level::High),
        CONFIG.indicator_idle_high,
    );

    // Start the interrupt executors (lower number = higher priority)
    interrupt::SWI_IRQ_0.set_priority(Priority::P1);
    let timers = EXECUTOR_TIMERS.start(interrupt::SWI_IRQ_0);
    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let alert = EXECUTOR_ALERT.start(interrupt::SWI_IRQ_1);

    // Spawn tasks
    timers.spawn(unwrap!(tasks::mode_timer_task()));
    timers.spawn(unwrap!(tasks::scroll_timer_task()));
    timers.spawn(unwrap!(tasks::backlight_timeout_task()));
    alert.spawn(unwrap!(tasks::comparator_task(indicator)));
    spawner.spawn(unwrap!(tasks::sampler_task(bus)));
    spawner.spawn(unwrap!(tasks::renderer_task(lcd)));
    spawner.spawn(unwrap!(tasks::backlight_task(backlight)));
    spawner.spawn(unwrap!(tasks::reporter_task(serial)));

    info!("All tasks spawned, firmware running");
}
