//! Wireless configuration types.
//!
//! Platform-independent credential types with the radio stack's fixed
//! buffer bounds baked in. Everything here is host-testable.

mod credentials;

pub use credentials::{
    ApConfig, Passphrase, Ssid, WifiCredentials, MAX_PASSPHRASE_LEN, MAX_SSID_LEN,
    MIN_PASSPHRASE_LEN,
};
