//! B&T BW16-Kit v1.2 board descriptor.
//!
//! RTL8720DN development board: 13 GPIO, a single ADC channel, one I2C
//! bus, 5 PWM channels. The RGB LED is active high, and the physical
//! green/blue wiring is swapped relative to NICEMCU. The pins that serve
//! ADC channels 1 and 2 on NICEMCU carry the data UART here, so this
//! board has exactly one ADC channel.

use super::{BoardCapabilities, BoardVariant, PinRole};

// SWD_CLK rides the SPI MOSI / red LED pin on this board; debugging over
// SWD while the LED or SPI is driven will glitch the clock line.
static PIN_MAP: [(PinRole, u8); 23] = [
    (PinRole::LedRed, 12),
    (PinRole::LedGreen, 10),
    (PinRole::LedBlue, 11),
    (PinRole::LogTx, 0),
    (PinRole::LogRx, 1),
    (PinRole::DataTx, 4),
    (PinRole::DataRx, 5),
    (PinRole::I2cSda, 8),
    (PinRole::I2cScl, 7),
    (PinRole::SpiMosi, 12),
    (PinRole::SpiMiso, 11),
    (PinRole::SpiSclk, 10),
    (PinRole::SpiSs, 9),
    (PinRole::Adc0, 6),
    (PinRole::Pwm0, 12),
    (PinRole::Pwm1, 11),
    (PinRole::Pwm1Alt, 3),
    (PinRole::Pwm4, 7),
    (PinRole::Pwm5, 8),
    (PinRole::SwdData, 2),
    (PinRole::SwdClk, 12),
    (PinRole::IrTx, 7),
    (PinRole::IrRx, 8),
];

/// BW16-Kit v1.2 capability descriptor.
pub static BW16_KIT_V1_2: BoardCapabilities = BoardCapabilities::new(
    "BW16-Kit_v1.2",
    BoardVariant::Bw16KitV1_2,
    13, // gpio
    1,  // adc
    5,  // pwm
    1,  // i2c buses
    false,
    true,
    true,
    false, // LEDs are active high
    &PIN_MAP,
);
