//! WiFi credential types.
//!
//! The radio stack stores credentials in fixed-size buffers, so network
//! names and passphrases have hard byte bounds. Over-long input is
//! silently truncated to fit — not rejected — matching the radio's own
//! behavior. Truncation happens once, at construction, so every
//! downstream path sees an in-bounds value.
//!
//! # Example
//!
//! ```
//! use rtl8720_bsp::config::WifiCredentials;
//!
//! let creds = WifiCredentials::new("HomeNetwork", Some("correct horse"));
//! assert_eq!(creds.ssid.as_str(), "HomeNetwork");
//! assert!(!creds.is_open());
//!
//! let open = WifiCredentials::open("CoffeeShop");
//! assert!(open.is_open());
//! ```

use log::debug;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Maximum network name length in bytes, per IEEE 802.11.
pub const MAX_SSID_LEN: usize = 32;

/// Maximum passphrase length in bytes, per WPA2.
pub const MAX_PASSPHRASE_LEN: usize = 64;

/// Minimum WPA2 passphrase length in bytes.
pub const MIN_PASSPHRASE_LEN: usize = 8;

/// Truncate to `max` bytes, backing up to a UTF-8 character boundary.
fn bounded(input: &str, max: usize, what: &str) -> String {
    if input.len() <= max {
        return input.to_string();
    }
    let mut end = max;
    while !input.is_char_boundary(end) {
        end -= 1;
    }
    debug!("{} truncated from {} to {} bytes", what, input.len(), end);
    input[..end].to_string()
}

/// Network name, bounded to [`MAX_SSID_LEN`] bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ssid(String);

impl Ssid {
    /// Build an SSID, truncating over-long input.
    pub fn new(name: &str) -> Self {
        Self(bounded(name, MAX_SSID_LEN, "SSID"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Ssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Ssid {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// Passphrase, bounded to [`MAX_PASSPHRASE_LEN`] bytes.
///
/// The backing storage is wiped on drop. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Passphrase(String);

impl Passphrase {
    /// Build a passphrase, truncating over-long input.
    pub fn new(secret: &str) -> Self {
        Self(bounded(secret, MAX_PASSPHRASE_LEN, "passphrase"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the passphrase meets the WPA2 minimum length.
    pub fn meets_wpa2_minimum(&self) -> bool {
        self.0.len() >= MIN_PASSPHRASE_LEN
    }
}

impl fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Passphrase(<{} bytes>)", self.0.len())
    }
}

impl From<&str> for Passphrase {
    fn from(secret: &str) -> Self {
        Self::new(secret)
    }
}

/// Station-mode credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WifiCredentials {
    pub ssid: Ssid,
    pub passphrase: Option<Passphrase>,
}

impl WifiCredentials {
    pub fn new(ssid: &str, passphrase: Option<&str>) -> Self {
        Self {
            ssid: Ssid::new(ssid),
            passphrase: passphrase.map(Passphrase::new),
        }
    }

    /// Credentials for an open network.
    pub fn open(ssid: &str) -> Self {
        Self::new(ssid, None)
    }

    pub fn is_open(&self) -> bool {
        self.passphrase.is_none()
    }
}

/// Access-point configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApConfig {
    pub ssid: Ssid,
    pub passphrase: Option<Passphrase>,
    /// 2.4 GHz channel, 1-13.
    pub channel: u8,
}

impl ApConfig {
    pub fn new(ssid: &str, passphrase: Option<&str>, channel: u8) -> Self {
        Self {
            ssid: Ssid::new(ssid),
            passphrase: passphrase.map(Passphrase::new),
            channel,
        }
    }

    /// The passphrase to hand the radio for a WPA2 AP.
    ///
    /// A passphrase shorter than [`MIN_PASSPHRASE_LEN`] bytes is treated
    /// as no passphrase at all: the AP comes up open. This rule applies
    /// only to AP mode; station connects pass short passphrases through
    /// unchanged.
    pub fn wpa2_passphrase(&self) -> Option<&Passphrase> {
        self.passphrase.as_ref().filter(|p| p.meets_wpa2_minimum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ssid_within_bound_kept() {
        let ssid = Ssid::new("HomeNetwork");
        assert_eq!(ssid.as_str(), "HomeNetwork");
        assert_eq!(ssid.len(), 11);
    }

    #[test]
    fn test_ssid_at_bound_kept() {
        let name = "a".repeat(MAX_SSID_LEN);
        assert_eq!(Ssid::new(&name).len(), MAX_SSID_LEN);
    }

    #[test]
    fn test_ssid_over_bound_truncated() {
        let name = "a".repeat(MAX_SSID_LEN + 5);
        let ssid = Ssid::new(&name);
        assert_eq!(ssid.len(), MAX_SSID_LEN);
        assert_eq!(ssid.as_str(), &name[..MAX_SSID_LEN]);
    }

    #[test]
    fn test_ssid_truncation_respects_char_boundary() {
        // 31 ASCII bytes followed by a 3-byte character: a cut at 32
        // would split the character, so the whole character is dropped.
        let name = format!("{}\u{20AC}", "a".repeat(31));
        let ssid = Ssid::new(&name);
        assert_eq!(ssid.len(), 31);
        assert!(ssid.as_str().is_char_boundary(ssid.len()));
    }

    #[test]
    fn test_passphrase_over_bound_truncated() {
        let secret = "p".repeat(MAX_PASSPHRASE_LEN * 2);
        let pass = Passphrase::new(&secret);
        assert_eq!(pass.len(), MAX_PASSPHRASE_LEN);
    }

    #[test]
    fn test_passphrase_wpa2_minimum() {
        assert!(Passphrase::new("12345678").meets_wpa2_minimum());
        assert!(!Passphrase::new("1234567").meets_wpa2_minimum());
    }

    #[test]
    fn test_passphrase_debug_redacted() {
        let pass = Passphrase::new("supersecret");
        let printed = format!("{:?}", pass);
        assert!(!printed.contains("supersecret"));
        assert!(printed.contains("11 bytes"));
    }

    #[test]
    fn test_open_credentials() {
        let creds = WifiCredentials::open("CoffeeShop");
        assert!(creds.is_open());
        assert_eq!(creds.ssid.as_str(), "CoffeeShop");
    }

    #[test]
    fn test_ap_short_passphrase_is_open() {
        let ap = ApConfig::new("DeviceSetup", Some("short"), 6);
        assert!(ap.passphrase.is_some());
        assert!(ap.wpa2_passphrase().is_none());
    }

    #[test]
    fn test_ap_valid_passphrase_kept() {
        let ap = ApConfig::new("DeviceSetup", Some("longenough"), 6);
        assert_eq!(ap.wpa2_passphrase().map(|p| p.as_str()), Some("longenough"));
    }

    #[test]
    fn test_ap_no_passphrase() {
        let ap = ApConfig::new("DeviceSetup", None, 1);
        assert!(ap.wpa2_passphrase().is_none());
    }
}
