//! Test doubles for the hardware seams.
//!
//! Everything the crate talks to — the radio stack, the UARTs, GPIO, the
//! ADC, the clock — is a trait, and this module provides scriptable
//! in-memory implementations of each. Unit tests use them to assert exact
//! timeout boundaries and pin-level writes without hardware or wall-clock
//! delays; the `monitor` demo binary wires them into a full simulated
//! board.
//!
//! Available with the `mocks` feature (and always for the crate's own
//! tests).

use crate::clock::Clock;
use crate::hardware::AdcReader;
use crate::led::GpioOutput;
use crate::serial::SerialPort;
use crate::wireless::{LinkStatus, NetworkRecord, WifiRadio};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

/// Manual clock. `sleep_ms` advances time instead of blocking, so waits
/// complete instantly while the loops under test still observe the exact
/// durations they asked for. Clones share the same time.
#[derive(Debug, Clone)]
pub struct FakeClock {
    now: Rc<Cell<u64>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            now: Rc::new(Cell::new(0)),
        }
    }

    /// Move time forward without a sleeper.
    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }

    fn sleep_ms(&self, ms: u64) {
        self.advance(ms);
    }
}

/// In-memory UART with a scripted input queue and captured output.
#[derive(Debug, Default)]
pub struct MockSerialPort {
    baud: Option<u32>,
    input: VecDeque<u8>,
    output: Vec<u8>,
    flushes: usize,
}

impl MockSerialPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append bytes to the receive queue.
    pub fn queue_input(&mut self, bytes: &[u8]) {
        self.input.extend(bytes);
    }

    /// Everything written to the port so far.
    pub fn written(&self) -> &[u8] {
        &self.output
    }

    pub fn baud(&self) -> Option<u32> {
        self.baud
    }

    pub fn flushes(&self) -> usize {
        self.flushes
    }
}

impl SerialPort for MockSerialPort {
    fn set_baud(&mut self, baud: u32) {
        self.baud = Some(baud);
    }

    fn available(&self) -> usize {
        self.input.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.input.pop_front()
    }

    fn write(&mut self, data: &[u8]) {
        self.output.extend_from_slice(data);
    }

    fn flush(&mut self) {
        self.flushes += 1;
    }
}

/// GPIO recorder: remembers the last level per pin and the full write log.
#[derive(Debug, Default)]
pub struct MockGpio {
    levels: HashMap<u8, bool>,
    writes: Vec<(u8, bool)>,
}

impl MockGpio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last level driven on `pin`, if any.
    pub fn level(&self, pin: u8) -> Option<bool> {
        self.levels.get(&pin).copied()
    }

    /// Chronological `(pin, level)` write log.
    pub fn writes(&self) -> &[(u8, bool)] {
        &self.writes
    }
}

impl GpioOutput for MockGpio {
    fn set_level(&mut self, pin: u8, high: bool) {
        self.levels.insert(pin, high);
        self.writes.push((pin, high));
    }
}

/// ADC stub returning a fixed value, recording which pins were sampled.
#[derive(Debug, Default)]
pub struct MockAdc {
    value: u16,
    reads: Vec<u8>,
}

impl MockAdc {
    pub fn with_value(value: u16) -> Self {
        Self {
            value,
            reads: Vec::new(),
        }
    }

    /// Pins sampled so far, in order.
    pub fn reads(&self) -> Vec<u8> {
        self.reads.clone()
    }
}

impl AdcReader for MockAdc {
    fn read(&mut self, pin: u8) -> u16 {
        self.reads.push(pin);
        self.value
    }
}

/// Scriptable radio stack.
///
/// The link status can be set directly or scripted as a sequence that is
/// consumed one entry per [`WifiRadio::link_status`] call (the last entry
/// then sticks), which is how tests make a connect attempt succeed after
/// a chosen number of polls.
#[derive(Debug)]
pub struct MockRadio {
    status_script: RefCell<VecDeque<LinkStatus>>,
    link: Cell<LinkStatus>,
    scan_records: Vec<NetworkRecord>,
    ap_result: bool,
    join_calls: Vec<(String, Option<String>)>,
    leave_calls: usize,
    ap_calls: Vec<(String, Option<String>, u8)>,
    concurrent_enabled: bool,
    power_save_disabled: bool,
    rssi: i32,
    ssid: String,
    ip: String,
    gateway: String,
    mask: String,
    mac: String,
}

impl Default for MockRadio {
    fn default() -> Self {
        Self {
            status_script: RefCell::new(VecDeque::new()),
            link: Cell::new(LinkStatus::NotConnected),
            scan_records: Vec::new(),
            ap_result: true,
            join_calls: Vec::new(),
            leave_calls: 0,
            ap_calls: Vec::new(),
            concurrent_enabled: false,
            power_save_disabled: false,
            rssi: -55,
            ssid: String::new(),
            ip: "192.168.1.50".to_string(),
            gateway: "192.168.1.1".to_string(),
            mask: "255.255.255.0".to_string(),
            mac: "A4:CF:12:00:00:01".to_string(),
        }
    }
}

impl MockRadio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Force the live link status.
    pub fn set_link_status(&self, status: LinkStatus) {
        self.status_script.borrow_mut().clear();
        self.link.set(status);
    }

    /// Script a status per upcoming `link_status` call; the final entry
    /// remains in effect afterwards.
    pub fn script_status(&self, sequence: &[LinkStatus]) {
        *self.status_script.borrow_mut() = sequence.iter().copied().collect();
    }

    /// Make a join attempt succeed after `polls` status queries.
    pub fn connect_after_polls(&self, polls: usize) {
        let mut script: VecDeque<LinkStatus> =
            std::iter::repeat(LinkStatus::NotConnected).take(polls).collect();
        script.push_back(LinkStatus::Connected);
        *self.status_script.borrow_mut() = script;
    }

    pub fn set_scan_records(&mut self, records: Vec<NetworkRecord>) {
        self.scan_records = records;
    }

    pub fn set_ap_result(&mut self, ok: bool) {
        self.ap_result = ok;
    }

    pub fn set_rssi(&mut self, rssi: i32) {
        self.rssi = rssi;
    }

    pub fn join_calls(&self) -> &[(String, Option<String>)] {
        &self.join_calls
    }

    pub fn leave_calls(&self) -> usize {
        self.leave_calls
    }

    pub fn ap_calls(&self) -> &[(String, Option<String>, u8)] {
        &self.ap_calls
    }

    pub fn concurrent_enabled(&self) -> bool {
        self.concurrent_enabled
    }

    pub fn power_save_disabled(&self) -> bool {
        self.power_save_disabled
    }
}

impl WifiRadio for MockRadio {
    fn join(&mut self, ssid: &str, passphrase: Option<&str>) {
        self.join_calls
            .push((ssid.to_string(), passphrase.map(str::to_string)));
        self.ssid = ssid.to_string();
    }

    fn leave(&mut self) {
        self.leave_calls += 1;
        self.status_script.borrow_mut().clear();
        self.link.set(LinkStatus::NotConnected);
    }

    fn link_status(&self) -> LinkStatus {
        if let Some(next) = self.status_script.borrow_mut().pop_front() {
            self.link.set(next);
        }
        self.link.get()
    }

    fn scan_networks(&mut self) -> usize {
        self.scan_records.len()
    }

    fn network_info(&self, index: usize) -> Option<NetworkRecord> {
        self.scan_records.get(index).cloned()
    }

    fn rssi(&self) -> i32 {
        self.rssi
    }

    fn current_ssid(&self) -> String {
        self.ssid.clone()
    }

    fn local_ip(&self) -> String {
        self.ip.clone()
    }

    fn gateway_ip(&self) -> String {
        self.gateway.clone()
    }

    fn subnet_mask(&self) -> String {
        self.mask.clone()
    }

    fn mac_address(&self) -> String {
        self.mac.clone()
    }

    fn start_access_point(&mut self, ssid: &str, passphrase: Option<&str>, channel: u8) -> bool {
        self.ap_calls
            .push((ssid.to_string(), passphrase.map(str::to_string), channel));
        self.ap_result
    }

    fn enable_concurrent_mode(&mut self) {
        self.concurrent_enabled = true;
    }

    fn disable_power_save(&mut self) {
        self.power_save_disabled = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_clock_shared_between_clones() {
        let a = FakeClock::new();
        let b = a.clone();
        a.sleep_ms(250);
        assert_eq!(b.now_ms(), 250);
    }

    #[test]
    fn test_status_script_consumed_then_sticks() {
        let radio = MockRadio::new();
        radio.script_status(&[LinkStatus::NotConnected, LinkStatus::Connected]);
        assert_eq!(radio.link_status(), LinkStatus::NotConnected);
        assert_eq!(radio.link_status(), LinkStatus::Connected);
        assert_eq!(radio.link_status(), LinkStatus::Connected);
    }

    #[test]
    fn test_leave_resets_link() {
        let mut radio = MockRadio::new();
        radio.set_link_status(LinkStatus::Connected);
        radio.leave();
        assert_eq!(radio.link_status(), LinkStatus::NotConnected);
        assert_eq!(radio.leave_calls(), 1);
    }
}
