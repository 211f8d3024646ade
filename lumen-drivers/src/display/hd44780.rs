//! HD44780 character LCD driver
//!
//! Drives a 16x2 HD44780-compatible module in 4-bit mode with the R/W line
//! tied low (write-only). Timing uses fixed delays instead of polling the
//! busy flag.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use lumen_hal::{CharacterDisplay, DisplayLine, LINE_WIDTH};

/// HD44780 commands
mod cmd {
    pub const CLEAR: u8 = 0x01;
    pub const ENTRY_MODE_INCREMENT: u8 = 0x06;
    pub const DISPLAY_ON: u8 = 0x0C;
    pub const DISPLAY_OFF: u8 = 0x08;
    pub const FUNCTION_4BIT_2LINE: u8 = 0x28;
    pub const SET_DDRAM_ADDR: u8 = 0x80;
}

/// DDRAM address of the first character of each row
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

/// Execution time of ordinary commands and data writes
const SHORT_DELAY_US: u32 = 50;
/// Execution time of clear
const LONG_DELAY_US: u32 = 2_000;

/// Pins of the 4-bit parallel interface
pub struct Hd44780Pins<P> {
    /// Register select (low = command, high = data)
    pub rs: P,
    /// Enable strobe
    pub en: P,
    /// Data bits 4..7
    pub data: [P; 4],
}

/// HD44780 LCD driver
pub struct Hd44780<P, D> {
    pins: Hd44780Pins<P>,
    delay: D,
}

impl<P, D> Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Create a driver; call [`Hd44780::init`] before use
    pub fn new(pins: Hd44780Pins<P>, delay: D) -> Self {
        Self { pins, delay }
    }

    /// Run the 4-bit power-on initialization sequence
    pub fn init(&mut self) -> Result<(), P::Error> {
        // Wait for the controller's own reset after Vcc rises
        self.delay.delay_ms(50);
        self.pins.rs.set_low()?;

        // Three 8-bit function sets, then switch to 4-bit
        self.write_nibble(0x03)?;
        self.delay.delay_us(4_500);
        self.write_nibble(0x03)?;
        self.delay.delay_us(150);
        self.write_nibble(0x03)?;
        self.delay.delay_us(150);
        self.write_nibble(0x02)?;
        self.delay.delay_us(SHORT_DELAY_US);

        self.command(cmd::FUNCTION_4BIT_2LINE)?;
        self.command(cmd::DISPLAY_OFF)?;
        self.command(cmd::CLEAR)?;
        self.delay.delay_us(LONG_DELAY_US);
        self.command(cmd::ENTRY_MODE_INCREMENT)?;
        self.command(cmd::DISPLAY_ON)?;
        Ok(())
    }

    /// Move the cursor to a row and column
    pub fn set_cursor(&mut self, row: u8, col: u8) -> Result<(), P::Error> {
        let offset = ROW_OFFSETS[(row as usize).min(ROW_OFFSETS.len() - 1)];
        // Each row holds 40 characters of DDRAM
        self.command(cmd::SET_DDRAM_ADDR | (offset + col.min(39)))
    }

    /// Write ASCII text at the cursor, at most one line's worth
    ///
    /// Non-ASCII bytes are replaced by `?`, one per byte.
    pub fn write_str(&mut self, text: &str) -> Result<(), P::Error> {
        for byte in text.bytes().take(LINE_WIDTH) {
            let byte = if byte.is_ascii() { byte } else { b'?' };
            self.data(byte)?;
        }
        Ok(())
    }

    fn command(&mut self, value: u8) -> Result<(), P::Error> {
        self.pins.rs.set_low()?;
        self.write_byte(value)
    }

    fn data(&mut self, value: u8) -> Result<(), P::Error> {
        self.pins.rs.set_high()?;
        self.write_byte(value)
    }

    fn write_byte(&mut self, value: u8) -> Result<(), P::Error> {
        self.write_nibble(value >> 4)?;
        self.write_nibble(value & 0x0F)?;
        self.delay.delay_us(SHORT_DELAY_US);
        Ok(())
    }

    fn write_nibble(&mut self, nibble: u8) -> Result<(), P::Error> {
        for (bit, pin) in self.pins.data.iter_mut().enumerate() {
            if nibble & (1 << bit) != 0 {
                pin.set_high()?;
            } else {
                pin.set_low()?;
            }
        }
        self.pins.en.set_high()?;
        self.delay.delay_us(1);
        self.pins.en.set_low()?;
        self.delay.delay_us(1);
        Ok(())
    }
}

impl<P, D> CharacterDisplay for Hd44780<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    type Error = P::Error;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.command(cmd::CLEAR)?;
        self.delay.delay_us(LONG_DELAY_US);
        Ok(())
    }

    fn write_line(&mut self, line: DisplayLine, text: &str) -> Result<(), Self::Error> {
        self.set_cursor(line.row(), 0)?;
        self.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{BusLog, LoggedPin, NoDelay};

    fn lcd(log: &BusLog) -> Hd44780<LoggedPin, NoDelay> {
        let pins = Hd44780Pins {
            rs: log.pin(0),
            en: log.pin(1),
            data: [log.pin(2), log.pin(3), log.pin(4), log.pin(5)],
        };
        Hd44780::new(pins, NoDelay)
    }

    #[test]
    fn test_write_line_addresses_rows() {
        let log = BusLog::new();
        let mut lcd = lcd(&log);

        lcd.write_line(DisplayLine::Secondary, "A").unwrap();

        let bytes = log.strobed_bytes();
        assert_eq!(bytes, vec![(false, 0x80 | 0x40), (true, b'A')]);
    }

    #[test]
    fn test_write_line_truncates() {
        let log = BusLog::new();
        let mut lcd = lcd(&log);

        lcd.write_line(DisplayLine::Primary, "0123456789ABCDEFGHIJ").unwrap();

        let bytes = log.strobed_bytes();
        // Cursor command + 16 characters
        assert_eq!(bytes.len(), 17);
        assert_eq!(bytes[0], (false, 0x80));
        assert_eq!(bytes[16], (true, b'F'));
    }

    #[test]
    fn test_write_line_truncates_multibyte_text() {
        let log = BusLog::new();
        let mut lcd = lcd(&log);

        // Byte 16 falls inside the 'é', which is not a char boundary
        lcd.write_line(DisplayLine::Primary, "012345678901234é-tail").unwrap();

        let bytes = log.strobed_bytes();
        assert_eq!(bytes.len(), 17);
        assert_eq!(bytes[15], (true, b'4'));
        assert_eq!(bytes[16], (true, b'?'));
    }

    #[test]
    fn test_clear_is_command() {
        let log = BusLog::new();
        let mut lcd = lcd(&log);

        lcd.clear().unwrap();

        assert_eq!(log.strobed_bytes(), vec![(false, 0x01)]);
    }

    #[test]
    fn test_init_ends_with_display_on() {
        let log = BusLog::new();
        let mut lcd = lcd(&log);

        lcd.init().unwrap();

        let nibbles = log.strobed_nibbles();
        // Four raw nibbles for the 4-bit handshake
        assert_eq!(&nibbles[..4], &[(false, 0x3), (false, 0x3), (false, 0x3), (false, 0x2)]);
        let bytes = log.bytes_after(4);
        assert_eq!(
            bytes,
            vec![(false, 0x28), (false, 0x08), (false, 0x01), (false, 0x06), (false, 0x0C)]
        );
    }
}
