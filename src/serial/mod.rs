//! Dual-UART management.
//!
//! RTL8720DN boards expose two UARTs with distinct jobs: LOG_UART carries
//! debug/PC traffic over the USB bridge, LP_UART talks to an external
//! device. [`DualSerial`] owns both, each at its own baud rate.
//!
//! The data channel's bounded reads are cooperative polling loops: the
//! target has no blocking-read-with-timeout primitive, so each loop
//! re-checks elapsed time against the deadline on every iteration and
//! yields for a millisecond when no byte is waiting. Hitting the deadline
//! is not an error — the caller gets whatever arrived, possibly nothing.

use crate::board::BoardCapabilities;
use crate::clock::Clock;
use std::fmt;

/// Settle delay after opening the ports, for USB enumeration.
const BEGIN_SETTLE_MS: u64 = 100;

/// Poll yield while waiting for data.
const POLL_IDLE_MS: u64 = 1;

/// UART driver seam.
///
/// Implemented by the platform layer on hardware and by `MockSerialPort`
/// in tests.
pub trait SerialPort {
    /// Apply a baud rate and (re)open the port.
    fn set_baud(&mut self, baud: u32);

    /// Bytes currently buffered for reading.
    fn available(&self) -> usize;

    /// Pop one buffered byte, if any.
    fn read_byte(&mut self) -> Option<u8>;

    /// Queue bytes for transmission.
    fn write(&mut self, data: &[u8]);

    /// Drain the transmit buffer.
    fn flush(&mut self);
}

/// Manager for the log and data UART channels.
///
/// Constructed unconfigured; [`DualSerial::begin`] applies the baud rates
/// and marks the pair live for the rest of the process lifetime. One
/// instance per process, driven from the single control thread.
pub struct DualSerial<L: SerialPort, D: SerialPort, C: Clock> {
    log: L,
    data: D,
    clock: C,
    log_baud: u32,
    data_baud: u32,
    live: bool,
}

impl<L: SerialPort, D: SerialPort, C: Clock> DualSerial<L, D, C> {
    pub fn new(log: L, data: D, clock: C) -> Self {
        Self {
            log,
            data,
            clock,
            log_baud: 0,
            data_baud: 0,
            live: false,
        }
    }

    /// Configure both channels. Calling again re-applies configuration.
    pub fn begin(&mut self, log_baud: u32, data_baud: u32) {
        self.log_baud = log_baud;
        self.data_baud = data_baud;
        self.log.set_baud(log_baud);
        self.data.set_baud(data_baud);
        self.live = true;
        self.clock.sleep_ms(BEGIN_SETTLE_MS);
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn log_baud(&self) -> u32 {
        self.log_baud
    }

    pub fn data_baud(&self) -> u32 {
        self.data_baud
    }

    /// Direct access to the underlying log port.
    pub fn log_port(&self) -> &L {
        &self.log
    }

    pub fn log_port_mut(&mut self) -> &mut L {
        &mut self.log
    }

    /// Direct access to the underlying data port.
    pub fn data_port(&self) -> &D {
        &self.data
    }

    pub fn data_port_mut(&mut self) -> &mut D {
        &mut self.data
    }

    // ---- log channel (write-only) ----

    pub fn log_write(&mut self, text: &str) {
        self.log.write(text.as_bytes());
    }

    pub fn log_line(&mut self, text: &str) {
        self.log.write(text.as_bytes());
        self.log.write(b"\n");
    }

    /// Formatted write, `log_fmt(format_args!(...))`.
    pub fn log_fmt(&mut self, args: fmt::Arguments<'_>) {
        self.log_write(&args.to_string());
    }

    /// Dump the board capability report plus channel configuration.
    pub fn log_board_info(&mut self, caps: &BoardCapabilities) {
        let log_baud = self.log_baud;
        let data_baud = self.data_baud;
        self.log_line(&caps.to_string());
        self.log_fmt(format_args!("LOG_UART Baud: {}\n", log_baud));
        self.log_fmt(format_args!("DATA_UART Baud: {}\n", data_baud));
    }

    pub fn flush_log(&mut self) {
        self.log.flush();
    }

    // ---- data channel ----

    pub fn data_available(&self) -> bool {
        self.data.available() > 0
    }

    /// Read one line from the data channel.
    ///
    /// Accumulates bytes until `\n` (not included) or until `timeout_ms`
    /// elapses, whichever comes first. `\r` is stripped. Returns whatever
    /// accumulated — possibly an empty string. An empty result does not
    /// distinguish "nothing arrived" from "empty line".
    pub fn read_line(&mut self, timeout_ms: u64) -> String {
        let mut line = String::new();
        let start = self.clock.now_ms();

        while self.clock.elapsed_since(start) < timeout_ms {
            match self.data.read_byte() {
                Some(b'\n') => break,
                Some(b'\r') => {}
                Some(byte) => line.push(byte as char),
                None => self.clock.sleep_ms(POLL_IDLE_MS),
            }
        }

        line
    }

    /// Pop one byte from the data channel without waiting.
    pub fn read_byte(&mut self) -> Option<u8> {
        self.data.read_byte()
    }

    /// Fill `buf` from the data channel.
    ///
    /// Stops when `buf` is full or `timeout_ms` elapses. Returns the
    /// number of bytes written.
    pub fn read_bytes(&mut self, buf: &mut [u8], timeout_ms: u64) -> usize {
        let mut count = 0;
        let start = self.clock.now_ms();

        while count < buf.len() && self.clock.elapsed_since(start) < timeout_ms {
            match self.data.read_byte() {
                Some(byte) => {
                    buf[count] = byte;
                    count += 1;
                }
                None => self.clock.sleep_ms(POLL_IDLE_MS),
            }
        }

        count
    }

    pub fn write_data(&mut self, data: &[u8]) {
        self.data.write(data);
    }

    pub fn write_data_str(&mut self, text: &str) {
        self.data.write(text.as_bytes());
    }

    /// Write `text` followed by the line terminator.
    pub fn write_data_line(&mut self, text: &str) {
        self.data.write(text.as_bytes());
        self.data.write(b"\n");
    }

    /// Discard everything currently buffered on the data channel.
    pub fn flush_input(&mut self) {
        while self.data.read_byte().is_some() {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{FakeClock, MockSerialPort};

    fn serial() -> DualSerial<MockSerialPort, MockSerialPort, FakeClock> {
        let mut s = DualSerial::new(MockSerialPort::new(), MockSerialPort::new(), FakeClock::new());
        s.begin(115_200, 9_600);
        s
    }

    #[test]
    fn test_begin_applies_bauds() {
        let s = serial();
        assert!(s.is_live());
        assert_eq!(s.log_baud(), 115_200);
        assert_eq!(s.data_baud(), 9_600);
        assert_eq!(s.log.baud(), Some(115_200));
        assert_eq!(s.data.baud(), Some(9_600));
    }

    #[test]
    fn test_begin_twice_reapplies() {
        let mut s = serial();
        s.begin(57_600, 19_200);
        assert_eq!(s.log.baud(), Some(57_600));
        assert_eq!(s.data.baud(), Some(19_200));
    }

    #[test]
    fn test_read_line_stops_at_terminator() {
        let mut s = serial();
        s.data.queue_input(b"hello\nworld");
        assert_eq!(s.read_line(1_000), "hello");
        // The rest stays buffered for the next read.
        assert!(s.data_available());
        assert_eq!(s.read_line(1_000), "world");
    }

    #[test]
    fn test_read_line_strips_carriage_return() {
        let mut s = serial();
        s.data.queue_input(b"ok\r\n");
        assert_eq!(s.read_line(1_000), "ok");
    }

    #[test]
    fn test_read_line_times_out_empty() {
        let mut s = serial();
        let start = s.clock.now_ms();
        let line = s.read_line(100);
        assert_eq!(line, "");
        // The wait ran the full deadline, no early return.
        assert!(s.clock.now_ms() - start >= 100);
    }

    #[test]
    fn test_read_line_partial_at_timeout() {
        let mut s = serial();
        s.data.queue_input(b"partial");
        assert_eq!(s.read_line(50), "partial");
    }

    #[test]
    fn test_read_byte_without_data() {
        let mut s = serial();
        assert_eq!(s.read_byte(), None);
        s.data.queue_input(&[0x42]);
        assert_eq!(s.read_byte(), Some(0x42));
    }

    #[test]
    fn test_read_bytes_fills_buffer_early() {
        let mut s = serial();
        s.data.queue_input(b"abcdef");
        let mut buf = [0u8; 4];
        let start = s.clock.now_ms();
        assert_eq!(s.read_bytes(&mut buf, 1_000), 4);
        assert_eq!(&buf, b"abcd");
        // Full buffer returns immediately, not at the deadline.
        assert_eq!(s.clock.now_ms(), start);
    }

    #[test]
    fn test_read_bytes_partial_at_timeout() {
        let mut s = serial();
        s.data.queue_input(b"xy");
        let mut buf = [0u8; 8];
        assert_eq!(s.read_bytes(&mut buf, 30), 2);
        assert_eq!(&buf[..2], b"xy");
    }

    #[test]
    fn test_flush_input_discards_everything() {
        let mut s = serial();
        s.data.queue_input(b"stale data\n");
        s.flush_input();
        assert!(!s.data_available());
    }

    #[test]
    fn test_log_writes() {
        let mut s = serial();
        s.log_line("boot");
        s.log_fmt(format_args!("adc={}", 7));
        assert_eq!(s.log.written(), b"boot\nadc=7");
    }

    #[test]
    fn test_data_write_line_terminates() {
        let mut s = serial();
        s.write_data_line("PING");
        assert_eq!(s.data.written(), b"PING\n");
    }

    #[test]
    fn test_log_board_info_mentions_bauds() {
        let mut s = serial();
        s.log_board_info(&crate::board::NICEMCU_8720_V1);
        let text = String::from_utf8(s.log.written().to_vec()).unwrap();
        assert!(text.contains("Board: NICEMCU_8720_v1"));
        assert!(text.contains("LOG_UART Baud: 115200"));
        assert!(text.contains("DATA_UART Baud: 9600"));
    }
}
