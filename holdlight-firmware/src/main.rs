//! Holdlight - Climbing Wall Problem Display Firmware
//!
//! Main firmware binary for RP2040-based boards. A phone app sends the
//! selected problem over a BLE UART module; the firmware lights the
//! matching holds on a WS2812 strip laid out behind the wall.
//!
//! Wiring:
//! - GPIO19 (PIO0 SM0, DMA CH0): strip data in
//! - GPIO0/GPIO1 (UART0): BLE module RX/TX
//! - GPIO2: BLE module STATE (high while connected)

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::{InterruptHandler as PioInterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use holdlight_core::{parse_config, Controller, WallConfig};
use holdlight_drivers::led::StripFrame;
use holdlight_drivers::self_test::{self, Chase};
use holdlight_drivers::transport::SerialBle;
use holdlight_hal::{LedSurface, Transport};

/// Embedded configuration (compiled into firmware)
/// Edit wall.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../wall.toml");

/// Pixels sent per frame, enough for a standard board with one LED per hold
const MAX_LEDS: usize = 256;

/// GPIO wired to the strip data line
const LED_DATA_PIN: u8 = 19;

/// Factory baud rate of common BLE UART modules
const BLE_BAUD: u32 = 9600;

/// Pause between polls when nothing was received
const IDLE_POLL_MS: u64 = 1;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => PioInterruptHandler<PIO0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 512]> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Holdlight firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();
    info!(
        "Board: {} ({} rows), {} relocations, brightness {}",
        config.board.name(),
        config.board.rows(),
        config.relocations.len(),
        config.brightness
    );
    if config.led_pin != LED_DATA_PIN {
        warn!(
            "wall.toml sets LED pin {}, strip data is wired to GPIO{}",
            config.led_pin, LED_DATA_PIN
        );
    }

    // LED strip on PIO0, fed by DMA
    let Pio { mut common, sm0, .. } = Pio::new(p.PIO0, Irqs);
    let program = PioWs2812Program::new(&mut common);
    let mut ws2812 =
        PioWs2812::<PIO0, 0, MAX_LEDS, _>::new(&mut common, sm0, p.DMA_CH0, p.PIN_19, &program);

    let needed = config.board.total_leds() as usize;
    if needed > MAX_LEDS {
        warn!(
            "Board needs {} LEDs, buffer holds {}; holds past the end stay dark",
            needed, MAX_LEDS
        );
    }
    let mut wall = Controller::from_config(&config, StripFrame::<MAX_LEDS>::new(needed));
    info!("LED strip: {} pixels", wall.surface().len());

    if config.self_test {
        info!("Running LED self test");
        let stride = config.board.led_offset_multiplier as usize;
        let mut chase = Chase::new(&self_test::DEFAULT_COLORS, stride);
        while matches!(chase.step(wall.surface_mut()), Ok(true)) {
            if let Some(pixels) = wall.surface_mut().take() {
                ws2812.write(pixels).await;
            }
            Timer::after_millis(self_test::DEFAULT_STEP_MS).await;
        }
    } else {
        wall.clear();
    }
    if let Some(pixels) = wall.surface_mut().take() {
        ws2812.write(pixels).await;
    }

    // BLE module on UART0
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = BLE_BAUD;
    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 512]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let state = Input::new(p.PIN_2, Pull::Down);

    let mut ble = SerialBle::new(uart, state);
    match ble.begin(config.ble_name.as_str()) {
        Ok(()) => info!("Advertising as {}", config.ble_name.as_str()),
        Err(e) => warn!("Failed to set BLE name: {}", Debug2Format(&e)),
    }

    info!("Waiting for the phone app to connect...");

    loop {
        match wall.poll(&mut ble) {
            Ok(0) => Timer::after_millis(IDLE_POLL_MS).await,
            Ok(count) => trace!("Processed {} chars", count),
            Err(e) => warn!("BLE read failed: {}", Debug2Format(&e)),
        }

        // Only the latest shown frame goes out
        if let Some(pixels) = wall.surface_mut().take() {
            ws2812.write(pixels).await;
        }
    }
}

/// Parse the embedded wall.toml, falling back to defaults
fn load_config() -> WallConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!("Loaded configuration from wall.toml");
            config
        }
        Err(e) => {
            error!("Invalid wall.toml ({}), using defaults", e);
            WallConfig::new()
        }
    }
}
