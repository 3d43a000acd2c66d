//! NICEMCU_8720_v1 board descriptor.
//!
//! RTL8720DN development board: 15 GPIO, 3 ADC channels, two I2C buses
//! (low-power plus high-speed), 7 PWM channels, CH340C USB bridge.
//! The RGB LED is active low.

use super::{BoardCapabilities, BoardVariant, PinRole};

// The SPI data/clock pins are muxed with the RGB LED and the first PWM
// channels; driving the LED while SPI is active will corrupt the bus.
static PIN_MAP: [(PinRole, u8); 29] = [
    (PinRole::LedRed, 12),
    (PinRole::LedGreen, 11),
    (PinRole::LedBlue, 10),
    (PinRole::LogTx, 0),
    (PinRole::LogRx, 1),
    (PinRole::DataTx, 5),
    (PinRole::DataRx, 4),
    (PinRole::I2cSda, 8),
    (PinRole::I2cScl, 7),
    (PinRole::HsI2cSda, 14),
    (PinRole::HsI2cScl, 13),
    (PinRole::SpiMosi, 12),
    (PinRole::SpiMiso, 11),
    (PinRole::SpiSclk, 10),
    (PinRole::SpiSs, 9),
    (PinRole::Adc0, 4),
    (PinRole::Adc1, 5),
    (PinRole::Adc2, 6),
    (PinRole::Pwm0, 12),
    (PinRole::Pwm1, 11),
    (PinRole::Pwm4, 7),
    (PinRole::Pwm5, 8),
    (PinRole::Pwm7, 3),
    (PinRole::Pwm12, 13),
    (PinRole::Pwm13, 14),
    (PinRole::SwdData, 2),
    (PinRole::SwdClk, 6),
    (PinRole::IrTx, 7),
    (PinRole::IrRx, 8),
];

/// NICEMCU_8720_v1 capability descriptor.
pub static NICEMCU_8720_V1: BoardCapabilities = BoardCapabilities::new(
    "NICEMCU_8720_v1",
    BoardVariant::NiceMcuV1,
    15, // gpio
    3,  // adc
    7,  // pwm
    2,  // i2c buses
    true,
    true,
    true,
    true, // LEDs are active low
    &PIN_MAP,
);
