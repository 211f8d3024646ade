//! Serial diagnostic report formatting

use core::fmt::Write;

use heapless::String;

use crate::sample::SensorSample;

/// Capacity of one report line
///
/// Worst case is three 5-digit values: 34 characters.
pub const REPORT_LEN: usize = 40;

/// One formatted report line including the CRLF terminator
pub type ReportLine = String<REPORT_LEN>;

/// Format a sample as a tab-separated report line
///
/// Example: `"LDR: 300\tNTC: 500\tPOT: 100\r\n"`
pub fn report_line(sample: &SensorSample) -> ReportLine {
    let mut line = ReportLine::new();
    let _ = write!(
        line,
        "LDR: {}\tNTC: {}\tPOT: {}\r\n",
        sample.light, sample.temperature, sample.dial
    );
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_format() {
        let line = report_line(&SensorSample::new(300, 500, 100));
        assert_eq!(line.as_str(), "LDR: 300\tNTC: 500\tPOT: 100\r\n");
    }

    #[test]
    fn test_report_widest_values_fit() {
        let line = report_line(&SensorSample::new(u16::MAX, u16::MAX, u16::MAX));
        assert!(line.ends_with("\r\n"));
        assert_eq!(line.len(), 34);
    }
}
