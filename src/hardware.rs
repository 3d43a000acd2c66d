//! Board-level hardware access.
//!
//! [`Hardware`] wraps the active [`BoardCapabilities`] descriptor and the
//! raw ADC driver behind one accessor. It is the single source of truth
//! for "what does this board support" — other components take their pin
//! numbers and feature flags from here rather than reaching into the
//! descriptor tables themselves.

use crate::board::{BoardCapabilities, I2cPins, RgbPins};
use log::warn;

/// Full-scale ADC reading. The RTL8720DN ADC is 12-bit.
pub const ADC_FULL_SCALE: u16 = 4095;

/// Raw analog-input driver seam.
///
/// Implemented by the platform layer on hardware and by `MockAdc` in
/// tests; `pin` is a board pin index taken from the descriptor.
pub trait AdcReader {
    /// Sample the given pin. Values are in `0..=`[`ADC_FULL_SCALE`].
    fn read(&mut self, pin: u8) -> u16;
}

/// Process-wide hardware accessor.
///
/// One instance per process, constructed at startup from
/// [`crate::board::active`] and the platform ADC driver, then shared by
/// reference with every dependent component.
pub struct Hardware<A: AdcReader> {
    caps: &'static BoardCapabilities,
    adc: A,
}

impl<A: AdcReader> Hardware<A> {
    pub fn new(caps: &'static BoardCapabilities, adc: A) -> Self {
        Self { caps, adc }
    }

    /// The capability descriptor this accessor wraps.
    pub fn capabilities(&self) -> &'static BoardCapabilities {
        self.caps
    }

    pub fn board_name(&self) -> &'static str {
        self.caps.name
    }

    pub fn gpio_count(&self) -> u8 {
        self.caps.gpio_count
    }

    pub fn adc_count(&self) -> u8 {
        self.caps.adc_count
    }

    pub fn has_rgb_led(&self) -> bool {
        self.caps.has_rgb_led
    }

    pub fn has_high_speed_i2c(&self) -> bool {
        self.caps.has_high_speed_i2c
    }

    pub fn rgb_pins(&self) -> Option<RgbPins> {
        self.caps.rgb_pins()
    }

    pub fn lp_i2c_pins(&self) -> Option<I2cPins> {
        self.caps.lp_i2c_pins()
    }

    pub fn hs_i2c_pins(&self) -> Option<I2cPins> {
        self.caps.hs_i2c_pins()
    }

    /// Sample ADC channel `channel`.
    ///
    /// Channels are `0..adc_count`; anything else returns `None` rather
    /// than touching the driver. The value is in `0..=`[`ADC_FULL_SCALE`].
    pub fn read_analog(&mut self, channel: u8) -> Option<u16> {
        let Some(pin) = self.caps.adc_pin(channel) else {
            warn!(
                "ADC channel {} not available on {} ({} channels)",
                channel, self.caps.name, self.caps.adc_count
            );
            return None;
        };
        Some(self.adc.read(pin).min(ADC_FULL_SCALE))
    }
}
