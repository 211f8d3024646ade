//! Serial line over any `embedded_io::Write`

use embedded_io::Write;
use lumen_hal::SerialLine;

/// Blocking line writer
///
/// Writes the line bytes verbatim and flushes, so a line is on the wire
/// before the next task runs.
pub struct SerialPort<W> {
    tx: W,
}

impl<W: Write> SerialPort<W> {
    /// Wrap a transmitter
    pub fn new(tx: W) -> Self {
        Self { tx }
    }
}

impl<W: Write> SerialLine for SerialPort<W> {
    type Error = W::Error;

    fn write_line(&mut self, text: &str) -> Result<(), Self::Error> {
        self.tx.write_all(text.as_bytes())?;
        self.tx.flush()
    }
}
