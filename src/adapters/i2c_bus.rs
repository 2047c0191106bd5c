//! I²C bus adapters implementing [`BusPort`].
//!
//! - [`I2cBus`] wraps any `embedded-hal` 1.0 [`I2c`] implementation. The
//!   transfer bound is whatever the HAL enforces.
//! - `EspI2cBus` (ESP-IDF only) calls the IDF master driver directly so
//!   every write carries the configured timeout.

use embedded_hal::i2c::{Error as _, I2c};

use crate::app::ports::BusPort;
use crate::error::BusError;

/// Generic adapter over an `embedded-hal` I²C master.
pub struct I2cBus<I> {
    i2c: I,
}

impl<I: I2c> I2cBus<I> {
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> BusPort for I2cBus<I> {
    fn transmit(&mut self, address: u8, bytes: &[u8]) -> Result<(), BusError> {
        self.i2c
            .write(address, bytes)
            .map_err(|e| BusError::from(e.kind()))
    }
}

#[cfg(target_os = "espidf")]
pub use esp::EspI2cBus;

#[cfg(target_os = "espidf")]
mod esp {
    use esp_idf_hal::delay::TickType;
    use esp_idf_hal::i2c::I2cDriver;
    use esp_idf_svc::sys::ESP_ERR_TIMEOUT;

    use crate::app::ports::BusPort;
    use crate::error::BusError;

    /// IDF I²C master with a per-transfer timeout.
    pub struct EspI2cBus<'d> {
        driver: I2cDriver<'d>,
        timeout_ticks: u32,
    }

    impl<'d> EspI2cBus<'d> {
        pub fn new(driver: I2cDriver<'d>, timeout_ms: u32) -> Self {
            Self {
                driver,
                timeout_ticks: TickType::new_millis(u64::from(timeout_ms)).ticks(),
            }
        }
    }

    impl BusPort for EspI2cBus<'_> {
        fn transmit(&mut self, address: u8, bytes: &[u8]) -> Result<(), BusError> {
            self.driver
                .write(address, bytes, self.timeout_ticks)
                .map_err(|e| {
                    if e.code() == ESP_ERR_TIMEOUT as i32 {
                        BusError::Timeout
                    } else {
                        BusError::Other
                    }
                })
        }
    }
}
