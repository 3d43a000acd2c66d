//! Wireless connectivity management.
//!
//! The RTL8720DN carries dual-band WiFi and BLE 5.0 behind one radio.
//! [`Wireless`] composes the two sub-state machines and the pair of
//! enabled flags that gate them:
//!
//! - [`wifi`] - station/AP state machine over the radio seam
//! - [`ble`] - BLE role/state machine (placeholder surface)
//! - [`radio`] - the consumed radio-stack capability interface
//!
//! Everything blocks on the single control thread; waits are bounded
//! only by their caller-supplied timeouts.

pub mod ble;
pub mod radio;
pub mod wifi;

pub use ble::{BleError, BleModule, BleRole, BleState, DEFAULT_DEVICE_NAME};
pub use radio::{EncryptionType, LinkStatus, NetworkRecord, WifiRadio};
pub use wifi::{WifiMode, WifiModule, WifiState};

use crate::clock::Clock;
use crate::config::{ApConfig, WifiCredentials};
use log::{info, warn};
use std::fmt::Write as _;

/// Top-level connectivity manager.
///
/// One instance per process. Constructed with both subsystems disabled;
/// [`Wireless::begin`] arms the requested ones, [`Wireless::end`] tears
/// both down unconditionally.
pub struct Wireless<R: WifiRadio, C: Clock> {
    wifi: WifiModule<R, C>,
    ble: BleModule<C>,
    wifi_enabled: bool,
    ble_enabled: bool,
}

impl<R: WifiRadio, C: Clock> Wireless<R, C> {
    pub fn new(radio: R, clock: C) -> Self {
        Self {
            wifi: WifiModule::new(radio, clock.clone()),
            ble: BleModule::new(clock),
            wifi_enabled: false,
            ble_enabled: false,
        }
    }

    /// Arm the requested subsystems.
    ///
    /// WiFi comes up in station mode; BLE starts under the default device
    /// name as Peripheral (rerun [`BleModule::begin`] to change either).
    pub fn begin(&mut self, enable_wifi: bool, enable_ble: bool) {
        self.wifi_enabled = enable_wifi;
        self.ble_enabled = enable_ble;

        if self.wifi_enabled {
            self.wifi.begin_station();
            info!("[Wireless] WiFi initialized (Station mode)");
        }

        if self.ble_enabled {
            self.ble.begin(DEFAULT_DEVICE_NAME, BleRole::Peripheral);
        }
    }

    /// Tear everything down: disconnect WiFi, deactivate BLE, clear both
    /// enabled flags. Valid regardless of current sub-states.
    pub fn end(&mut self) {
        if self.wifi_enabled {
            self.wifi.disconnect();
            self.wifi_enabled = false;
        }

        if self.ble_enabled {
            self.ble.end();
            self.ble_enabled = false;
        }
    }

    pub fn is_wifi_enabled(&self) -> bool {
        self.wifi_enabled
    }

    pub fn is_ble_enabled(&self) -> bool {
        self.ble_enabled
    }

    // ---- WiFi ----

    /// Join a network. Fails immediately if WiFi was not enabled, leaving
    /// the sub-state untouched; otherwise see [`WifiModule::connect`].
    pub fn connect_wifi(&mut self, credentials: &WifiCredentials, timeout_ms: u64) -> bool {
        if !self.wifi_enabled {
            warn!("[Wireless] WiFi not enabled!");
            return false;
        }
        self.wifi.connect(credentials, timeout_ms)
    }

    /// Drop the association. Valid from any state.
    pub fn disconnect_wifi(&mut self) {
        self.wifi.disconnect();
    }

    /// Bring up an access point. Requires WiFi enabled; never touches the
    /// station sub-state.
    pub fn begin_access_point(&mut self, config: &ApConfig) -> bool {
        if !self.wifi_enabled {
            warn!("[Wireless] WiFi not enabled!");
            return false;
        }
        self.wifi.begin_access_point(config)
    }

    pub fn set_wifi_mode(&mut self, mode: WifiMode) {
        self.wifi.set_mode(mode);
    }

    /// Live link status (see [`WifiModule::is_connected`]).
    pub fn is_wifi_connected(&self) -> bool {
        self.wifi.is_connected()
    }

    pub fn wifi_state(&self) -> WifiState {
        self.wifi.state()
    }

    pub fn scan_networks(&mut self) -> usize {
        self.wifi.scan_networks()
    }

    /// The station module, for the info surface (SSID, IPs, scan details).
    pub fn wifi(&self) -> &WifiModule<R, C> {
        &self.wifi
    }

    pub fn wifi_mut(&mut self) -> &mut WifiModule<R, C> {
        &mut self.wifi
    }

    // ---- BLE ----

    pub fn ble(&self) -> &BleModule<C> {
        &self.ble
    }

    pub fn ble_mut(&mut self) -> &mut BleModule<C> {
        &mut self.ble
    }

    pub fn ble_state(&self) -> BleState {
        self.ble.state()
    }

    // ---- status ----

    /// Multi-line human-readable status dump. Debugging aid only; the
    /// layout is not a stable contract.
    pub fn status_report(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "================================");
        let _ = writeln!(out, "     Wireless Status");
        let _ = writeln!(out, "================================");

        let _ = writeln!(out, "[WiFi]");
        let _ = writeln!(
            out,
            "  Enabled: {}",
            if self.wifi_enabled { "Yes" } else { "No" }
        );
        if self.wifi_enabled {
            let _ = writeln!(out, "  State: {}", self.wifi.state());
            if self.wifi.state() == WifiState::Connected {
                let _ = writeln!(out, "  SSID: {}", self.wifi.ssid());
                let _ = writeln!(out, "  IP: {}", self.wifi.local_ip());
                let _ = writeln!(out, "  RSSI: {} dBm", self.wifi.rssi());
            }
        }

        let _ = writeln!(out, "[BLE]");
        let _ = writeln!(
            out,
            "  Enabled: {}",
            if self.ble_enabled { "Yes" } else { "No" }
        );
        if self.ble_enabled {
            let _ = writeln!(out, "  Device: {}", self.ble.device_name());
            let _ = writeln!(out, "  Role: {}", self.ble.role());
            let _ = writeln!(out, "  State: {}", self.ble.state());
        }

        let _ = write!(out, "================================");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{FakeClock, MockRadio};

    fn manager() -> Wireless<MockRadio, FakeClock> {
        Wireless::new(MockRadio::new(), FakeClock::new())
    }

    #[test]
    fn test_constructed_disabled_and_idle() {
        let w = manager();
        assert!(!w.is_wifi_enabled());
        assert!(!w.is_ble_enabled());
        assert_eq!(w.wifi_state(), WifiState::Disconnected);
        assert_eq!(w.ble_state(), BleState::Idle);
    }

    #[test]
    fn test_connect_rejected_while_wifi_disabled() {
        let mut w = manager();
        let creds = WifiCredentials::new("Net", Some("password123"));
        assert!(!w.connect_wifi(&creds, 10_000));
        // State untouched: still Disconnected, not Connecting.
        assert_eq!(w.wifi_state(), WifiState::Disconnected);
        assert!(w.wifi.radio().join_calls().is_empty());
    }

    #[test]
    fn test_begin_arms_subsystems_independently() {
        let mut w = manager();
        w.begin(true, false);
        assert!(w.is_wifi_enabled());
        assert!(!w.is_ble_enabled());
        assert!(!w.ble().is_active());

        let mut w = manager();
        w.begin(false, true);
        assert!(!w.is_wifi_enabled());
        assert!(w.ble().is_active());
        assert_eq!(w.ble().device_name(), DEFAULT_DEVICE_NAME);
        assert_eq!(w.ble().role(), BleRole::Peripheral);
    }

    #[test]
    fn test_begin_drops_stale_association() {
        let mut w = manager();
        w.wifi.radio().set_link_status(LinkStatus::Connected);
        w.begin(true, false);
        assert_eq!(w.wifi.radio().leave_calls(), 1);
    }

    #[test]
    fn test_connect_after_begin() {
        let mut w = manager();
        w.begin(true, false);
        w.wifi.radio().connect_after_polls(1);
        let creds = WifiCredentials::new("Net", Some("password123"));
        assert!(w.connect_wifi(&creds, 10_000));
        assert_eq!(w.wifi_state(), WifiState::Connected);
        assert!(w.is_wifi_connected());
    }

    #[test]
    fn test_end_tears_down_both() {
        let mut w = manager();
        w.begin(true, true);
        w.wifi.radio().set_link_status(LinkStatus::Connected);
        let creds = WifiCredentials::open("Net");
        w.connect_wifi(&creds, 1_000);
        w.ble_mut().start_advertising().unwrap();

        w.end();
        assert!(!w.is_wifi_enabled());
        assert!(!w.is_ble_enabled());
        assert_eq!(w.wifi_state(), WifiState::Disconnected);
        assert_eq!(w.ble_state(), BleState::Idle);
        assert!(!w.ble().is_active());
    }

    #[test]
    fn test_end_from_error_state() {
        let mut w = manager();
        w.begin(true, false);
        w.connect_wifi(&WifiCredentials::open("x"), 0);
        assert_eq!(w.wifi_state(), WifiState::Error);
        w.end();
        assert_eq!(w.wifi_state(), WifiState::Disconnected);
    }

    #[test]
    fn test_end_when_never_begun() {
        let mut w = manager();
        w.end();
        assert!(!w.is_wifi_enabled());
        assert_eq!(w.wifi.radio().leave_calls(), 0);
    }

    #[test]
    fn test_ap_rejected_while_disabled() {
        let mut w = manager();
        assert!(!w.begin_access_point(&ApConfig::new("Setup", None, 1)));
        assert!(w.wifi.radio().ap_calls().is_empty());
    }

    #[test]
    fn test_ap_after_begin() {
        let mut w = manager();
        w.begin(true, false);
        assert!(w.begin_access_point(&ApConfig::new("Setup", Some("configure-me"), 6)));
        assert_eq!(w.wifi_state(), WifiState::Disconnected);
    }

    #[test]
    fn test_status_report_disabled() {
        let w = manager();
        let report = w.status_report();
        assert!(report.contains("Wireless Status"));
        assert!(report.contains("[WiFi]"));
        assert!(report.contains("[BLE]"));
        assert!(!report.contains("State:"));
    }

    #[test]
    fn test_status_report_connected() {
        let mut w = manager();
        w.begin(true, true);
        w.wifi.radio().set_link_status(LinkStatus::Connected);
        w.connect_wifi(&WifiCredentials::new("HomeNet", Some("password123")), 1_000);

        let report = w.status_report();
        assert!(report.contains("State: Connected"));
        assert!(report.contains("SSID: HomeNet"));
        assert!(report.contains("IP: 192.168.1.50"));
        assert!(report.contains("Role: Peripheral"));
    }
}
