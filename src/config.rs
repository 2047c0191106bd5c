//! System configuration parameters
//!
//! Bus addressing and timing for the indicator loop. Colours and intensity
//! factors are fixed in [`crate::indicator::policy`] and are not part of
//! the configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Core indicator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    // --- Bus ---
    /// 7-bit address that accepts the controller software-reset frame
    pub controller_reset_address: u8,
    /// 7-bit address of the PWM LED driver
    pub driver_address: u8,
    /// Upper bound for a single bus transfer (milliseconds)
    pub bus_timeout_ms: u32,
    /// Delay after each initialisation frame (milliseconds)
    pub settle_delay_ms: u32,

    // --- Breathing ---
    /// Period of the breathing envelope (milliseconds)
    pub breathing_period_ms: u32,

    // --- Timing ---
    /// Interval between timer wake-ups of the low-power wait (milliseconds)
    pub wake_interval_ms: u32,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            // Bus
            controller_reset_address: 0x6B,
            driver_address: 0x62,
            bus_timeout_ms: 100,
            settle_delay_ms: 100,

            // Breathing
            breathing_period_ms: 2000,

            // Timing
            wake_interval_ms: 10, // 100 Hz
        }
    }
}

impl IndicatorConfig {
    /// Reject values the loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.controller_reset_address > 0x7F || self.driver_address > 0x7F {
            return Err(Error::Config("bus address exceeds 7 bits"));
        }
        if self.controller_reset_address == self.driver_address {
            return Err(Error::Config("reset and driver addresses collide"));
        }
        if self.bus_timeout_ms == 0 {
            return Err(Error::Config("bus timeout must be non-zero"));
        }
        if self.breathing_period_ms == 0 {
            return Err(Error::Config("breathing period must be non-zero"));
        }
        if self.wake_interval_ms == 0 {
            return Err(Error::Config("wake interval must be non-zero"));
        }
        Ok(())
    }
}
