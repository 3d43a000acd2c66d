//! Board-support library for RTL8720DN boards.
//!
//! Supports the NICEMCU_8720_v1 and BW16-Kit v1.2 boards through one
//! compile-time-selected capability descriptor (features `board-nicemcu`
//! / `board-bw16kit`), plus managers for the dual UART pair, the RGB
//! status LED and WiFi/BLE connectivity.
//!
//! All hardware is reached through trait seams ([`hardware::AdcReader`],
//! [`serial::SerialPort`], [`led::GpioOutput`], [`wireless::WifiRadio`],
//! [`clock::Clock`]), so the whole crate is testable on the host; the
//! `mocks` feature provides in-memory implementations of every seam.

pub mod board;
pub mod clock;
pub mod config;
pub mod hardware;
pub mod led;
pub mod serial;
pub mod wireless;

#[cfg(any(test, feature = "mocks"))]
pub mod mock;

// Re-export commonly used items
pub use board::{BoardCapabilities, BoardVariant, PinRole};
pub use clock::{Clock, SystemClock};
pub use config::{ApConfig, WifiCredentials};
pub use hardware::{AdcReader, Hardware, ADC_FULL_SCALE};
pub use led::{Color, RgbLed};
pub use serial::DualSerial;
pub use wireless::{BleRole, BleState, WifiState, Wireless};
