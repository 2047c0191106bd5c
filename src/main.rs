//! Status-LED firmware entry point
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  StatusInputs (GPIO)   EspI2cBus (I²C)   SystemClock     │
//! │        └──── HardwareAdapter ────┘      (tick + idle)    │
//! │                                                          │
//! │  ─────────────── Port Trait Boundary ─────────────────   │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │          IndicatorService (pure logic)             │  │
//! │  │   Breathing · Policy table · LED driver encoder    │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{AnyIOPin, Input, PinDriver, Pull};
use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::units::Hertz;
use log::info;

use openawelc::adapters::clock::SystemClock;
use openawelc::adapters::hardware::HardwareAdapter;
use openawelc::adapters::i2c_bus::EspI2cBus;
use openawelc::app::service::IndicatorService;
use openawelc::config::IndicatorConfig;
use openawelc::drivers::status_inputs::StatusInputs;
use openawelc::pins;

/// Claim a status input by GPIO number.
///
/// Claimed as an I/O pad: the internal pull resistors are only reachable
/// on pins that can also drive.
fn input(gpio: i32, pull: Option<Pull>) -> Result<PinDriver<'static, AnyIOPin, Input>> {
    // SAFETY: each pin number in `pins` is claimed exactly once, from main().
    let mut pin = PinDriver::input(unsafe { AnyIOPin::new(gpio) })?;
    if let Some(pull) = pull {
        pin.set_pull(pull)?;
    }
    Ok(pin)
}

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("openawelc v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Configuration ──────────────────────────────────────
    let config = IndicatorConfig::default();
    config.validate()?;
    let json = serde_json::to_string(&config).map_err(|e| anyhow::anyhow!("config encode: {e}"))?;
    info!("config: {}", json);

    // ── 3. Peripherals ────────────────────────────────────────
    let p = Peripherals::take()?;

    // Open-drain active-low lines need the pull-up; charger lines are driven.
    let status = StatusInputs::new(
        input(pins::COMPUTER_SLEEPING_GPIO, Some(Pull::Up))?,
        input(pins::LID_CLOSED_GPIO, Some(Pull::Up))?,
        input(pins::AC_POWER_GPIO, Some(Pull::Up))?,
        input(pins::BATTERY_CHARGING_GPIO, None)?,
        input(pins::BATTERY_LOW_GPIO, None)?,
    );

    let i2c = I2cDriver::new(
        p.i2c0,
        // SAFETY: SDA/SCL numbers are not used by any other driver.
        unsafe { AnyIOPin::new(pins::I2C_SDA_GPIO) },
        unsafe { AnyIOPin::new(pins::I2C_SCL_GPIO) },
        &I2cConfig::new().baudrate(Hertz(pins::I2C_BAUDRATE_HZ)),
    )?;
    let bus = EspI2cBus::new(i2c, config.bus_timeout_ms);

    let mut hw = HardwareAdapter::new(status, bus);
    let mut clock = SystemClock::new(config.wake_interval_ms);

    // ── 4. Indicator loop ─────────────────────────────────────
    let mut service = IndicatorService::new(&config);
    info!("System ready. Entering indicator loop.");
    service.run(&mut hw, &mut clock, &mut FreeRtos)
}
