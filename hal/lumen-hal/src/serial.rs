//! Serial diagnostic output

/// Line-oriented serial transmitter
///
/// Blocks until the line has been handed to the transmitter. The caller
/// supplies any line terminator it needs.
pub trait SerialLine {
    /// Error type for transmit operations
    type Error;

    /// Write one line of text
    fn write_line(&mut self, text: &str) -> Result<(), Self::Error>;
}
