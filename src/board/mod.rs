//! Board capability descriptors.
//!
//! The two supported RTL8720DN boards expose different pin counts, ADC
//! channels and LED polarities. Each variant is described by an immutable
//! [`BoardCapabilities`] value; exactly one is selected at build time via
//! the `board-nicemcu` / `board-bw16kit` cargo features and returned by
//! [`active`]. Consumers only ever see the uniform descriptor interface —
//! no board-specific conditionals outside this module.
//!
//! Several physical pins serve multiple peripheral roles at once (the SPI
//! pins double as the RGB LED and PWM outputs on both boards). The pin
//! table keeps one entry per role, so the aliasing stays visible through
//! [`BoardCapabilities::roles_on_pin`] instead of being deduplicated away.

mod bw16kit;
mod nicemcu;

pub use bw16kit::BW16_KIT_V1_2;
pub use nicemcu::NICEMCU_8720_V1;

use std::fmt;

#[cfg(all(feature = "board-nicemcu", feature = "board-bw16kit"))]
compile_error!(
    "features `board-nicemcu` and `board-bw16kit` are mutually exclusive; enable at most one"
);

/// The two supported hardware variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardVariant {
    /// NICEMCU_8720_v1: 15 GPIO, 3 ADC, dual I2C, CH340C USB bridge.
    NiceMcuV1,
    /// B&T BW16-Kit v1.2: 13 GPIO, 1 ADC, single I2C.
    Bw16KitV1_2,
}

impl BoardVariant {
    /// Short tag used in log output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NiceMcuV1 => "nicemcu",
            Self::Bw16KitV1_2 => "bw16kit",
        }
    }
}

impl fmt::Display for BoardVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Named pin roles.
///
/// A role maps to at most one pin per board; one pin may carry several
/// roles. Roles absent on a board simply have no table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinRole {
    LedRed,
    LedGreen,
    LedBlue,
    LogTx,
    LogRx,
    DataTx,
    DataRx,
    I2cSda,
    I2cScl,
    HsI2cSda,
    HsI2cScl,
    SpiMosi,
    SpiMiso,
    SpiSclk,
    SpiSs,
    Adc0,
    Adc1,
    Adc2,
    Pwm0,
    Pwm1,
    Pwm1Alt,
    Pwm4,
    Pwm5,
    Pwm7,
    Pwm12,
    Pwm13,
    SwdData,
    SwdClk,
    IrTx,
    IrRx,
}

/// Pin pair for an I2C bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct I2cPins {
    pub sda: u8,
    pub scl: u8,
}

/// Pin triple for the RGB LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbPins {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Immutable descriptor of one board variant.
///
/// Fully populated at construction; every getter is total over the data it
/// exposes, and feature-dependent lookups return `Option` so that querying
/// an absent capability is representable only as `None`, never as a bogus
/// pin number.
#[derive(Debug)]
pub struct BoardCapabilities {
    pub name: &'static str,
    pub variant: BoardVariant,
    pub gpio_count: u8,
    pub adc_count: u8,
    pub pwm_count: u8,
    pub i2c_bus_count: u8,
    pub has_high_speed_i2c: bool,
    pub has_low_power_i2c: bool,
    pub has_rgb_led: bool,
    pub led_active_low: bool,
    pin_map: &'static [(PinRole, u8)],
}

impl BoardCapabilities {
    pub(crate) const fn new(
        name: &'static str,
        variant: BoardVariant,
        gpio_count: u8,
        adc_count: u8,
        pwm_count: u8,
        i2c_bus_count: u8,
        has_high_speed_i2c: bool,
        has_low_power_i2c: bool,
        has_rgb_led: bool,
        led_active_low: bool,
        pin_map: &'static [(PinRole, u8)],
    ) -> Self {
        Self {
            name,
            variant,
            gpio_count,
            adc_count,
            pwm_count,
            i2c_bus_count,
            has_high_speed_i2c,
            has_low_power_i2c,
            has_rgb_led,
            led_active_low,
            pin_map,
        }
    }

    /// Pin assigned to `role`, if the role exists on this board.
    pub fn pin(&self, role: PinRole) -> Option<u8> {
        self.pin_map
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, pin)| *pin)
    }

    /// All roles carried by the given physical pin.
    pub fn roles_on_pin(&self, pin: u8) -> impl Iterator<Item = PinRole> + '_ {
        self.pin_map
            .iter()
            .filter(move |(_, p)| *p == pin)
            .map(|(r, _)| *r)
    }

    /// Roles that share a physical pin with `role` (excluding `role` itself).
    ///
    /// Useful for flagging conflicting concurrent use, e.g. driving the RGB
    /// LED while the SPI bus is active.
    pub fn shared_roles(&self, role: PinRole) -> Vec<PinRole> {
        match self.pin(role) {
            Some(pin) => self.roles_on_pin(pin).filter(|r| *r != role).collect(),
            None => Vec::new(),
        }
    }

    /// Whether more than one role is muxed onto this pin.
    pub fn is_pin_shared(&self, pin: u8) -> bool {
        self.roles_on_pin(pin).take(2).count() > 1
    }

    /// RGB LED pins, when the board carries an RGB LED.
    pub fn rgb_pins(&self) -> Option<RgbPins> {
        if !self.has_rgb_led {
            return None;
        }
        Some(RgbPins {
            red: self.pin(PinRole::LedRed)?,
            green: self.pin(PinRole::LedGreen)?,
            blue: self.pin(PinRole::LedBlue)?,
        })
    }

    /// Low-power I2C bus pins (the default bus), when present.
    pub fn lp_i2c_pins(&self) -> Option<I2cPins> {
        if !self.has_low_power_i2c {
            return None;
        }
        Some(I2cPins {
            sda: self.pin(PinRole::I2cSda)?,
            scl: self.pin(PinRole::I2cScl)?,
        })
    }

    /// High-speed I2C bus pins; `None` on boards without that bus.
    pub fn hs_i2c_pins(&self) -> Option<I2cPins> {
        if !self.has_high_speed_i2c {
            return None;
        }
        Some(I2cPins {
            sda: self.pin(PinRole::HsI2cSda)?,
            scl: self.pin(PinRole::HsI2cScl)?,
        })
    }

    /// Pin backing ADC channel `channel`, for channels below `adc_count`.
    pub fn adc_pin(&self, channel: u8) -> Option<u8> {
        if channel >= self.adc_count {
            return None;
        }
        let role = match channel {
            0 => PinRole::Adc0,
            1 => PinRole::Adc1,
            2 => PinRole::Adc2,
            _ => return None,
        };
        self.pin(role)
    }
}

impl fmt::Display for BoardCapabilities {
    /// Multi-line capability report. Debugging aid; the layout is not a
    /// stable contract.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "================================")?;
        writeln!(f, "Board: {}", self.name)?;
        writeln!(f, "GPIO Count: {}", self.gpio_count)?;
        writeln!(f, "ADC Count: {}", self.adc_count)?;
        writeln!(f, "PWM Count: {}", self.pwm_count)?;
        writeln!(f, "I2C Count: {}", self.i2c_bus_count)?;
        writeln!(f, "Has RGB LED: {}", if self.has_rgb_led { "Yes" } else { "No" })?;
        writeln!(
            f,
            "Has HS_I2C: {}",
            if self.has_high_speed_i2c { "Yes" } else { "No" }
        )?;
        write!(f, "================================")
    }
}

/// The descriptor selected for this build.
///
/// With neither board feature enabled, NICEMCU is the default (the build
/// script emits a warning in that case).
pub fn active() -> &'static BoardCapabilities {
    #[cfg(feature = "board-bw16kit")]
    {
        &BW16_KIT_V1_2
    }
    #[cfg(not(feature = "board-bw16kit"))]
    {
        &NICEMCU_8720_V1
    }
}
