//! BLE role/state machine.
//!
//! The BLE radio side of the SDK is not wired up yet; this module keeps
//! the role and connection state machine correct so application code can
//! be written against the final surface. Scans block for the requested
//! window and report zero devices — the zero count is contractual, not a
//! stub to be papered over with fake results. `connect` always fails.

use crate::clock::Clock;
use log::{info, warn};
use std::fmt;

/// Default advertised device name.
pub const DEFAULT_DEVICE_NAME: &str = "RTL8720DN";

/// BLE connection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BleState {
    Idle,
    Advertising,
    Scanning,
    Connected,
    Disconnected,
}

impl fmt::Display for BleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "Idle",
            Self::Advertising => "Advertising",
            Self::Scanning => "Scanning",
            Self::Connected => "Connected",
            Self::Disconnected => "Disconnected",
        };
        write!(f, "{}", name)
    }
}

/// BLE role, fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BleRole {
    /// GATT server: sensors, beacons.
    Peripheral,
    /// GATT client: phones, gateways.
    Central,
}

impl fmt::Display for BleRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Peripheral => "Peripheral",
            Self::Central => "Central",
        };
        write!(f, "{}", name)
    }
}

/// Failure modes of BLE operations.
///
/// Rejected operations leave the state machine untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BleError {
    /// Operation requires the other role.
    WrongRole { required: BleRole },
    /// BLE has not been activated via `begin`.
    Inactive,
    /// Not implemented in this hardware revision's firmware.
    Unsupported,
}

impl fmt::Display for BleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongRole { required } => write!(f, "operation requires {} role", required),
            Self::Inactive => write!(f, "BLE not active"),
            Self::Unsupported => write!(f, "BLE operation not supported"),
        }
    }
}

impl std::error::Error for BleError {}

/// BLE controller.
pub struct BleModule<C: Clock> {
    clock: C,
    state: BleState,
    role: BleRole,
    device_name: String,
    active: bool,
}

impl<C: Clock> BleModule<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            state: BleState::Idle,
            role: BleRole::Peripheral,
            device_name: DEFAULT_DEVICE_NAME.to_string(),
            active: false,
        }
    }

    /// Activate BLE under `name` with a fixed `role`.
    pub fn begin(&mut self, name: &str, role: BleRole) {
        self.device_name = name.to_string();
        self.role = role;
        self.state = BleState::Idle;
        self.active = true;
        info!("[BLE] Initialized as: {} ({})", self.device_name, self.role);
    }

    /// Deactivate BLE and return to Idle.
    pub fn end(&mut self) {
        self.state = BleState::Idle;
        self.active = false;
        info!("[BLE] Disabled");
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn state(&self) -> BleState {
        self.state
    }

    pub fn role(&self) -> BleRole {
        self.role
    }

    pub fn device_name(&self) -> &str {
        &self.device_name
    }

    /// Start advertising. Peripheral role only.
    pub fn start_advertising(&mut self) -> Result<(), BleError> {
        self.check_role(BleRole::Peripheral)?;
        self.state = BleState::Advertising;
        info!("[BLE] Advertising started");
        Ok(())
    }

    /// Stop advertising; no-op unless currently advertising.
    pub fn stop_advertising(&mut self) {
        if self.state == BleState::Advertising {
            self.state = BleState::Idle;
            info!("[BLE] Advertising stopped");
        }
    }

    /// Scan for `duration_secs`, blocking the caller for the full window.
    ///
    /// Central role only. Returns the number of devices discovered, which
    /// is always 0 until the radio side is wired up.
    pub fn start_scan(&mut self, duration_secs: u8) -> Result<usize, BleError> {
        self.check_role(BleRole::Central)?;

        self.state = BleState::Scanning;
        info!("[BLE] Scanning for {} seconds...", duration_secs);
        self.clock.sleep_ms(u64::from(duration_secs) * 1_000);
        self.state = BleState::Idle;

        Ok(0)
    }

    /// Connect to a device by address. Always fails until the radio side
    /// is wired up; the state machine is untouched.
    pub fn connect(&mut self, address: &str) -> Result<(), BleError> {
        if !self.active {
            warn!("[BLE] connect rejected: not active");
            return Err(BleError::Inactive);
        }
        warn!("[BLE] connect to {} unsupported", address);
        Err(BleError::Unsupported)
    }

    /// Drop any connection. Unconditional.
    pub fn disconnect(&mut self) {
        self.state = BleState::Disconnected;
        info!("[BLE] Disconnected");
    }

    pub fn is_connected(&self) -> bool {
        self.state == BleState::Connected
    }

    fn check_role(&self, required: BleRole) -> Result<(), BleError> {
        if !self.active {
            warn!("[BLE] operation rejected: not active");
            return Err(BleError::Inactive);
        }
        if self.role != required {
            warn!("[BLE] operation rejected: requires {} role", required);
            return Err(BleError::WrongRole { required });
        }
        Ok(())
    }
}
