//! WiFi station and AP control.
//!
//! The station lifecycle is a small state machine: Disconnected ->
//! Connecting -> Connected, with Error as the terminal outcome of a
//! timed-out connect. The connect loop blocks, polling the radio's link
//! status against a caller-supplied deadline; there is no automatic
//! retry and no cancellation other than the deadline itself.
//!
//! The cached [`WifiState`] reflects the outcome of the last explicit
//! operation. [`WifiModule::is_connected`] reads the radio's live status
//! instead, so the two can transiently disagree — e.g. after the AP drops
//! an association the cached state still says Connected until the caller
//! acts on it.

use super::radio::{LinkStatus, NetworkRecord, WifiRadio};
use crate::clock::Clock;
use crate::config::{ApConfig, WifiCredentials};
use log::{info, warn};
use std::fmt;

/// Link-status poll interval during a connect attempt.
const CONNECT_POLL_MS: u64 = 500;

/// Settle delay after dropping a stale association.
const DISCONNECT_SETTLE_MS: u64 = 100;

/// Settle delay for radio driver readiness at startup.
const DRIVER_SETTLE_MS: u64 = 500;

/// Station sub-state. Tracks explicit operations, not the live link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WifiState {
    Disconnected,
    Connecting,
    Connected,
    Error,
}

impl fmt::Display for WifiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disconnected => "Disconnected",
            Self::Connecting => "Connecting",
            Self::Connected => "Connected",
            Self::Error => "Error",
        };
        write!(f, "{}", name)
    }
}

/// WiFi operating mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WifiMode {
    /// Client joining an existing access point.
    Station,
    /// Hosting a network for other clients.
    AccessPoint,
    /// Both at once.
    StationAp,
}

/// Station/AP controller over the radio seam.
pub struct WifiModule<R: WifiRadio, C: Clock> {
    radio: R,
    clock: C,
    state: WifiState,
}

impl<R: WifiRadio, C: Clock> WifiModule<R, C> {
    pub fn new(radio: R, clock: C) -> Self {
        Self {
            radio,
            clock,
            state: WifiState::Disconnected,
        }
    }

    /// Prepare station mode.
    ///
    /// The SDK starts the driver lazily, so this only drops a stale
    /// association and waits for the driver to settle.
    pub fn begin_station(&mut self) {
        if self.radio.link_status() == LinkStatus::Connected {
            self.radio.leave();
            self.clock.sleep_ms(DISCONNECT_SETTLE_MS);
        }
        self.clock.sleep_ms(DRIVER_SETTLE_MS);
    }

    /// Join a network, blocking until associated or `timeout_ms` elapses.
    ///
    /// Success leaves the state Connected and returns `true`. A timeout
    /// leaves the state Error and returns `false`; retrying is the
    /// caller's decision.
    pub fn connect(&mut self, credentials: &WifiCredentials, timeout_ms: u64) -> bool {
        self.state = WifiState::Connecting;
        info!("[Wireless] Connecting to: {}", credentials.ssid);

        self.radio.join(
            credentials.ssid.as_str(),
            credentials.passphrase.as_ref().map(|p| p.as_str()),
        );

        let start = self.clock.now_ms();
        loop {
            if self.radio.link_status() == LinkStatus::Connected {
                self.state = WifiState::Connected;
                info!("[Wireless] Connected, IP: {}", self.radio.local_ip());
                return true;
            }
            if self.clock.elapsed_since(start) >= timeout_ms {
                warn!("[Wireless] Connection timeout after {} ms", timeout_ms);
                self.state = WifiState::Error;
                return false;
            }
            self.clock.sleep_ms(CONNECT_POLL_MS);
        }
    }

    /// Drop the association. Valid from any state, including Error.
    pub fn disconnect(&mut self) {
        self.radio.leave();
        self.state = WifiState::Disconnected;
        info!("[Wireless] WiFi disconnected");
    }

    /// Live link status from the radio, not the cached state.
    pub fn is_connected(&self) -> bool {
        self.radio.link_status() == LinkStatus::Connected
    }

    /// Cached sub-state: the outcome of the last explicit operation.
    pub fn state(&self) -> WifiState {
        self.state
    }

    /// Switch operating mode.
    ///
    /// Station drops an existing association without touching the cached
    /// state; AP mode is configured by [`WifiModule::begin_access_point`];
    /// StationAp enables the radio's concurrent mode.
    pub fn set_mode(&mut self, mode: WifiMode) {
        match mode {
            WifiMode::Station => {
                if self.radio.link_status() == LinkStatus::Connected {
                    self.radio.leave();
                }
            }
            WifiMode::AccessPoint => {}
            WifiMode::StationAp => self.radio.enable_concurrent_mode(),
        }
    }

    /// Bring up an access point.
    ///
    /// A passphrase below the WPA2 minimum starts an open AP (see
    /// [`ApConfig::wpa2_passphrase`]). This path never touches the
    /// station sub-state.
    pub fn begin_access_point(&mut self, config: &ApConfig) -> bool {
        let passphrase = config.wpa2_passphrase();
        if config.passphrase.is_some() && passphrase.is_none() {
            warn!(
                "[Wireless] AP passphrase below WPA2 minimum, starting open network: {}",
                config.ssid
            );
        }
        let ok = self.radio.start_access_point(
            config.ssid.as_str(),
            passphrase.map(|p| p.as_str()),
            config.channel,
        );
        if ok {
            info!("[Wireless] AP started: {}", config.ssid);
        } else {
            warn!("[Wireless] AP start failed: {}", config.ssid);
        }
        ok
    }

    /// Scan for networks; returns the number found.
    pub fn scan_networks(&mut self) -> usize {
        info!("[Wireless] Scanning networks...");
        let count = self.radio.scan_networks();
        info!("[Wireless] Found {} network(s)", count);
        count
    }

    /// Details of scan result `index`.
    pub fn network_info(&self, index: usize) -> Option<NetworkRecord> {
        self.radio.network_info(index)
    }

    /// RSSI of the current association; 0 when not connected.
    pub fn rssi(&self) -> i32 {
        if !self.is_connected() {
            return 0;
        }
        self.radio.rssi()
    }

    pub fn ssid(&self) -> String {
        self.radio.current_ssid()
    }

    pub fn local_ip(&self) -> String {
        self.radio.local_ip()
    }

    pub fn gateway_ip(&self) -> String {
        self.radio.gateway_ip()
    }

    pub fn subnet_mask(&self) -> String {
        self.radio.subnet_mask()
    }

    pub fn mac_address(&self) -> String {
        self.radio.mac_address()
    }

    pub fn disable_power_save(&mut self) {
        self.radio.disable_power_save();
    }

    /// Direct access to the underlying radio stack.
    pub fn radio(&self) -> &R {
        &self.radio
    }

    pub fn radio_mut(&mut self) -> &mut R {
        &mut self.radio
    }
}
