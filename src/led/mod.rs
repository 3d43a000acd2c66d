//! RGB status LED.
//!
//! The LED is three GPIO lines encoding a 3-bit color (bit 2 = red,
//! bit 1 = green, bit 0 = blue). Boards differ in polarity: NICEMCU LEDs
//! are active low, BW16 active high. The inversion is confined to the
//! single pin-write helper here; callers always think in on/off terms.
//!
//! # Example
//!
//! ```
//! use rtl8720_bsp::led::Color;
//!
//! assert_eq!(Color::Yellow.bits(), 0b110); // red + green
//! assert_eq!(Color::from_bits(0), Color::None);
//! ```

use crate::board::RgbPins;
use crate::clock::Clock;
use std::fmt;

/// GPIO output driver seam.
///
/// Implemented by the platform layer on hardware and by `MockGpio` in
/// tests. `high` is the electrical level, after polarity is applied.
pub trait GpioOutput {
    fn set_level(&mut self, pin: u8, high: bool);
}

/// 3-bit LED color: bit 2 = red, bit 1 = green, bit 0 = blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    None = 0b000,
    Blue = 0b001,
    Green = 0b010,
    Cyan = 0b011,
    Red = 0b100,
    Magenta = 0b101,
    Yellow = 0b110,
    White = 0b111,
}

impl Color {
    /// The three primaries, in cycle order.
    pub const PRIMARIES: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

    /// All seven on-states, in cycle order.
    pub const ALL: [Color; 7] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Cyan,
        Color::Magenta,
        Color::White,
    ];

    pub fn bits(self) -> u8 {
        self as u8
    }

    /// Decode the low three bits; anything above bit 2 is ignored.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0b001 => Color::Blue,
            0b010 => Color::Green,
            0b011 => Color::Cyan,
            0b100 => Color::Red,
            0b101 => Color::Magenta,
            0b110 => Color::Yellow,
            0b111 => Color::White,
            _ => Color::None,
        }
    }

    pub fn red_on(self) -> bool {
        self.bits() & 0b100 != 0
    }

    pub fn green_on(self) -> bool {
        self.bits() & 0b010 != 0
    }

    pub fn blue_on(self) -> bool {
        self.bits() & 0b001 != 0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::None => "None",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Cyan => "Cyan",
            Color::Red => "Red",
            Color::Magenta => "Magenta",
            Color::Yellow => "Yellow",
            Color::White => "White",
        };
        write!(f, "{}", name)
    }
}

/// RGB LED driver.
///
/// Pin assignments and polarity come from the board descriptor at
/// construction and never change. The current color is cached and
/// readable via [`RgbLed::color`].
pub struct RgbLed<G: GpioOutput, C: Clock> {
    gpio: G,
    clock: C,
    pins: RgbPins,
    active_low: bool,
    current: Color,
}

impl<G: GpioOutput, C: Clock> RgbLed<G, C> {
    pub fn new(gpio: G, clock: C, pins: RgbPins, active_low: bool) -> Self {
        Self {
            gpio,
            clock,
            pins,
            active_low,
            current: Color::None,
        }
    }

    /// Drive all three channels dark, establishing a known state.
    pub fn begin(&mut self) {
        self.set_color(Color::None);
    }

    /// Set the LED to `color` and cache it.
    pub fn set_color(&mut self, color: Color) {
        self.current = color;
        self.write_channel(self.pins.red, color.red_on());
        self.write_channel(self.pins.green, color.green_on());
        self.write_channel(self.pins.blue, color.blue_on());
    }

    /// Set the three channels individually; the cached color is recomputed
    /// from the bits.
    pub fn set_rgb(&mut self, red: bool, green: bool, blue: bool) {
        let bits =
            (if red { 0b100 } else { 0 }) | (if green { 0b010 } else { 0 }) | u8::from(blue);
        self.set_color(Color::from_bits(bits));
    }

    pub fn off(&mut self) {
        self.set_color(Color::None);
    }

    /// Currently cached color.
    pub fn color(&self) -> Color {
        self.current
    }

    /// Show `color` for `duration_ms`, then turn off. Blocks the caller.
    pub fn flash(&mut self, color: Color, duration_ms: u64) {
        self.set_color(color);
        self.clock.sleep_ms(duration_ms);
        self.off();
    }

    /// Flash red, green, blue in order, each for `duration_ms`.
    pub fn cycle_primary(&mut self, duration_ms: u64) {
        for color in Color::PRIMARIES {
            self.flash(color, duration_ms);
        }
    }

    /// Flash all seven on-colors in order, each for `duration_ms`.
    pub fn cycle_all(&mut self, duration_ms: u64) {
        for color in Color::ALL {
            self.flash(color, duration_ms);
        }
    }

    // Polarity is applied here and nowhere else.
    fn write_channel(&mut self, pin: u8, on: bool) {
        self.gpio.set_level(pin, on != self.active_low);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{FakeClock, MockGpio};

    const PINS: RgbPins = RgbPins {
        red: 12,
        green: 11,
        blue: 10,
    };

    fn led(active_low: bool) -> RgbLed<MockGpio, FakeClock> {
        let mut led = RgbLed::new(MockGpio::new(), FakeClock::new(), PINS, active_low);
        led.begin();
        led
    }

    #[test]
    fn test_color_bits_roundtrip() {
        for bits in 0..8 {
            assert_eq!(Color::from_bits(bits).bits(), bits);
        }
    }

    #[test]
    fn test_from_bits_masks_high_bits() {
        assert_eq!(Color::from_bits(0b1111_1010), Color::Green);
    }

    #[test]
    fn test_set_color_caches() {
        let mut led = led(false);
        led.set_color(Color::Magenta);
        assert_eq!(led.color(), Color::Magenta);
        led.off();
        assert_eq!(led.color(), Color::None);
    }

    #[test]
    fn test_set_rgb_recomputes_bits() {
        let mut led = led(false);
        led.set_rgb(true, false, true);
        assert_eq!(led.color(), Color::Magenta);
        led.set_rgb(false, true, false);
        assert_eq!(led.color(), Color::Green);
        led.set_rgb(false, false, false);
        assert_eq!(led.color(), Color::None);
    }

    #[test]
    fn test_active_high_levels() {
        let mut led = led(false);
        led.set_color(Color::Yellow); // red + green on
        assert_eq!(led.gpio.level(12), Some(true));
        assert_eq!(led.gpio.level(11), Some(true));
        assert_eq!(led.gpio.level(10), Some(false));
    }

    #[test]
    fn test_active_low_inverts_every_level() {
        let mut led = led(true);
        led.set_color(Color::Yellow);
        assert_eq!(led.gpio.level(12), Some(false));
        assert_eq!(led.gpio.level(11), Some(false));
        assert_eq!(led.gpio.level(10), Some(true));
    }

    #[test]
    fn test_polarity_invisible_to_logical_state() {
        let mut high = led(false);
        let mut low = led(true);
        for color in Color::ALL {
            high.set_color(color);
            low.set_color(color);
            assert_eq!(high.color(), low.color());
            // Physical levels are exact inverses.
            for pin in [12, 11, 10] {
                assert_eq!(high.gpio.level(pin).map(|l| !l), low.gpio.level(pin));
            }
        }
    }

    #[test]
    fn test_off_yields_zero_regardless_of_prior() {
        let mut led = led(true);
        for color in Color::ALL {
            led.set_color(color);
            led.off();
            assert_eq!(led.color().bits(), 0);
        }
    }

    #[test]
    fn test_flash_blocks_for_duration_then_off() {
        let mut led = led(false);
        let start = led.clock.now_ms();
        led.flash(Color::Cyan, 250);
        assert_eq!(led.clock.now_ms() - start, 250);
        assert_eq!(led.color(), Color::None);
    }

    #[test]
    fn test_cycle_all_duration_and_order() {
        let mut led = led(false);
        let start = led.clock.now_ms();
        led.cycle_all(100);
        assert_eq!(led.clock.now_ms() - start, 700);
        assert_eq!(led.color(), Color::None);
        // Red first: its pin saw an on-level before green's.
        let writes = led.gpio.writes();
        let first_red_on = writes.iter().position(|w| *w == (12, true));
        let first_green_on = writes.iter().position(|w| *w == (11, true));
        assert!(first_red_on < first_green_on);
    }

    #[test]
    fn test_cycle_primary_duration() {
        let mut led = led(true);
        let start = led.clock.now_ms();
        led.cycle_primary(50);
        assert_eq!(led.clock.now_ms() - start, 150);
    }
}
