//! Host demo: drives the full board-support stack against the mock seams.
//!
//! Run with `cargo run --bin monitor --features mocks`. Selects the board
//! from the usual `board-*` features and walks through the capability
//! report, ADC reads, an LED cycle, a simulated WiFi connect and scan,
//! and the BLE placeholder surface.

use log::{info, warn};
use rtl8720_bsp::mock::{MockAdc, MockGpio, MockRadio, MockSerialPort};
use rtl8720_bsp::wireless::{BleRole, EncryptionType, NetworkRecord};
use rtl8720_bsp::{
    board, ApConfig, Color, DualSerial, Hardware, RgbLed, SystemClock, WifiCredentials, Wireless,
};

fn platform_init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn main() {
    platform_init();

    info!("=== RTL8720 board monitor starting ===");

    let clock = SystemClock::new();
    let mut hardware = Hardware::new(board::active(), MockAdc::with_value(2_048));
    let caps = hardware.capabilities();

    // Serial pair: log over the USB bridge, data to an external device.
    let mut serial = DualSerial::new(MockSerialPort::new(), MockSerialPort::new(), clock.clone());
    serial.begin(115_200, 9_600);
    serial.log_board_info(caps);
    print!("{}", String::from_utf8_lossy(serial.log_port().written()));

    // Simulate a command arriving on the data channel.
    serial.data_port_mut().queue_input(b"PING\r\n");
    let line = serial.read_line(100);
    info!("Data channel received: {:?}", line);
    serial.write_data_line("PONG");

    // ADC sweep, including one channel past the board's range.
    for channel in 0..=hardware.adc_count() {
        match hardware.read_analog(channel) {
            Some(value) => info!("ADC channel {}: {}", channel, value),
            None => info!("ADC channel {}: unavailable", channel),
        }
    }

    // Shared-pin report: what else rides the RGB LED pins.
    if let Some(pins) = hardware.rgb_pins() {
        for pin in [pins.red, pins.green, pins.blue] {
            let roles: Vec<String> = caps.roles_on_pin(pin).map(|r| format!("{:?}", r)).collect();
            info!("Pin {} roles: {}", pin, roles.join(", "));
        }

        let mut led = RgbLed::new(MockGpio::new(), clock.clone(), pins, caps.led_active_low);
        led.begin();
        info!("Cycling primary colors...");
        led.cycle_primary(100);
        led.set_color(Color::White);
        info!("LED color: {}", led.color());
        led.off();
    }

    // Wireless: scripted radio, real timing.
    let mut radio = MockRadio::new();
    radio.set_scan_records(vec![
        NetworkRecord {
            ssid: "HomeNet".to_string(),
            rssi: -42,
            encryption: EncryptionType::Wpa2,
        },
        NetworkRecord {
            ssid: "CoffeeShop".to_string(),
            rssi: -77,
            encryption: EncryptionType::Open,
        },
    ]);

    let mut wireless = Wireless::new(radio, clock);
    wireless.begin(true, true);

    wireless.wifi().radio().connect_after_polls(2);
    let creds = WifiCredentials::new("HomeNet", Some("correct horse battery"));
    if wireless.connect_wifi(&creds, 10_000) {
        info!("MAC: {}", wireless.wifi().mac_address());
        info!("Gateway: {}", wireless.wifi().gateway_ip());
    }

    let found = wireless.scan_networks();
    for index in 0..found {
        if let Some(net) = wireless.wifi().network_info(index) {
            info!("  {} ({} dBm, {})", net.ssid, net.rssi, net.encryption);
        }
    }

    // BLE placeholder surface: advertising works, scans need Central role.
    if let Err(e) = wireless.ble_mut().start_scan(1) {
        warn!("BLE scan rejected: {}", e);
    }
    wireless.ble_mut().begin("monitor-demo", BleRole::Central);
    let devices = wireless.ble_mut().start_scan(1).unwrap_or(0);
    info!("BLE scan found {} device(s)", devices);

    println!("{}", wireless.status_report());

    // AP mode with an under-length passphrase comes up open.
    wireless.begin_access_point(&ApConfig::new("rtl8720-setup", Some("short"), 6));

    wireless.end();
    info!("=== monitor done ===");
}
