//! Radio stack interface.
//!
//! The vendor WiFi/BLE stack is consumed as a black box through
//! [`WifiRadio`]. The platform layer implements it over the SDK;
//! `MockRadio` implements it in memory for host tests. Nothing in this
//! crate performs 802.11 association itself — the trait supplies
//! connect/scan/status primitives ready-made.

use std::fmt;

/// Live association state as reported by the radio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    Connected,
    NotConnected,
}

/// One scan result entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRecord {
    pub ssid: String,
    pub rssi: i32,
    pub encryption: EncryptionType,
}

/// Security mode of a scanned network.
///
/// The numeric codes are the radio SDK's security identifiers; anything
/// outside the known table maps to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncryptionType {
    Open,
    Wep,
    Wpa,
    Wpa2,
    WpaWpa2Mixed,
    Wpa2Enterprise,
    Wpa3,
    Unknown,
}

impl EncryptionType {
    /// Map an SDK security code.
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => Self::Open,
            1 => Self::Wep,
            2 => Self::Wpa,
            3 => Self::Wpa2,
            4 => Self::WpaWpa2Mixed,
            5 => Self::Wpa2Enterprise,
            6 => Self::Wpa3,
            _ => Self::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Wep => "WEP",
            Self::Wpa => "WPA",
            Self::Wpa2 => "WPA2",
            Self::WpaWpa2Mixed => "WPA/WPA2",
            Self::Wpa2Enterprise => "WPA2-E",
            Self::Wpa3 => "WPA3",
            Self::Unknown => "Unknown",
        }
    }
}

impl From<u8> for EncryptionType {
    fn from(code: u8) -> Self {
        Self::from_code(code)
    }
}

impl fmt::Display for EncryptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Capability interface of the vendor radio stack.
///
/// Address getters return the radio's formatted dotted/hex strings; when
/// no association exists their content is SDK-defined (typically zeros),
/// not an error.
pub trait WifiRadio {
    /// Begin associating with `ssid`. Non-blocking: completion is observed
    /// through [`WifiRadio::link_status`].
    fn join(&mut self, ssid: &str, passphrase: Option<&str>);

    /// Drop the current association, if any.
    fn leave(&mut self);

    /// Live association state.
    fn link_status(&self) -> LinkStatus;

    /// Blocking network scan; returns the number of networks found.
    fn scan_networks(&mut self) -> usize;

    /// Details of scan result `index`, when in range.
    fn network_info(&self, index: usize) -> Option<NetworkRecord>;

    /// Signal strength of the current association, dBm.
    fn rssi(&self) -> i32;

    /// SSID of the current association.
    fn current_ssid(&self) -> String;

    fn local_ip(&self) -> String;

    fn gateway_ip(&self) -> String;

    fn subnet_mask(&self) -> String;

    fn mac_address(&self) -> String;

    /// Bring up an access point. A `None` passphrase means an open AP.
    fn start_access_point(&mut self, ssid: &str, passphrase: Option<&str>, channel: u8) -> bool;

    /// Enable concurrent station + AP operation.
    fn enable_concurrent_mode(&mut self);

    /// Turn off WiFi power saving.
    fn disable_power_save(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encryption_table() {
        assert_eq!(EncryptionType::from_code(0), EncryptionType::Open);
        assert_eq!(EncryptionType::from_code(1), EncryptionType::Wep);
        assert_eq!(EncryptionType::from_code(2), EncryptionType::Wpa);
        assert_eq!(EncryptionType::from_code(3), EncryptionType::Wpa2);
        assert_eq!(EncryptionType::from_code(4), EncryptionType::WpaWpa2Mixed);
        assert_eq!(EncryptionType::from_code(5), EncryptionType::Wpa2Enterprise);
        assert_eq!(EncryptionType::from_code(6), EncryptionType::Wpa3);
    }

    #[test]
    fn test_unknown_codes_map_to_unknown() {
        for code in 7..=255u8 {
            assert_eq!(EncryptionType::from_code(code), EncryptionType::Unknown);
        }
    }

    #[test]
    fn test_encryption_names() {
        assert_eq!(EncryptionType::Open.name(), "Open");
        assert_eq!(EncryptionType::WpaWpa2Mixed.name(), "WPA/WPA2");
        assert_eq!(EncryptionType::Wpa3.to_string(), "WPA3");
        assert_eq!(EncryptionType::Unknown.name(), "Unknown");
    }
}
