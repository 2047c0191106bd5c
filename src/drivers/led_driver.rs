//! PWM LED driver command encoder.
//!
//! The driver is a 16-channel I²C PWM controller with the common register
//! layout: `MODE1`/`MODE2` at 0x00/0x01, one 8-bit `PWMx` register per
//! channel starting at 0x02, and four `LEDOUTx` output-mode registers at
//! 0x14–0x17. Every command is a fixed two-byte `[register, value]` write.
//!
//! ## Initialisation
//!
//! ```text
//!  reset addr  ◀── [A5 5A]          software reset
//!  driver addr ◀── [00 01]          MODE1: defaults, oscillator normal
//!              ◀── [01 00]          MODE2: defaults
//!              ◀── [14 AA] … [17 AA] LEDOUT0-3: every channel in PWM mode
//! ```
//!
//! Each frame is followed by the settle delay. The sequence is idempotent.

use embedded_hal::delay::DelayNs;
use heapless::Vec;
use log::{info, warn};

use crate::app::ports::BusPort;
use crate::config::IndicatorConfig;
use crate::error::{Error, Result};
use crate::indicator::{IndicatorFrame, Zone};

// ── Registers ─────────────────────────────────────────────────

pub const REG_MODE1: u8 = 0x00;
pub const REG_MODE2: u8 = 0x01;
pub const REG_PWM0: u8 = 0x02;
pub const REG_LEDOUT0: u8 = 0x14;

/// Software-reset payload for the reset address.
pub const SOFTWARE_RESET: [u8; 2] = [0xA5, 0x5A];

const MODE1_OSC_NORMAL: u8 = 0x01;
const MODE2_DEFAULT: u8 = 0x00;
/// Two bits per channel, `0b10` = individual PWM control.
const LEDOUT_ALL_PWM: u8 = 0xAA;

/// Frames sent to the driver address after the software reset.
pub const SETUP_SEQUENCE: [[u8; 2]; 6] = [
    [REG_MODE1, MODE1_OSC_NORMAL],
    [REG_MODE2, MODE2_DEFAULT],
    [REG_LEDOUT0, LEDOUT_ALL_PWM],
    [REG_LEDOUT0 + 1, LEDOUT_ALL_PWM],
    [REG_LEDOUT0 + 2, LEDOUT_ALL_PWM],
    [REG_LEDOUT0 + 3, LEDOUT_ALL_PWM],
];

/// Channels written per frame across all zones.
pub const WIRED_CHANNELS: usize = {
    let mut total = 0;
    let mut i = 0;
    while i < Zone::ALL.len() {
        total += Zone::ALL[i].channel_count();
        i += 1;
    }
    total
};

/// One channel update: `(channel index, value)`.
pub type ChannelWrite = (u8, u8);

/// Outcome of writing a full indicator frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WriteOutcome {
    pub attempted: u8,
    pub failed: u8,
}

/// Encodes channel updates into bus frames for the LED driver.
#[derive(Debug, Clone)]
pub struct LedDriver {
    reset_address: u8,
    address: u8,
    settle_delay_ms: u32,
}

impl LedDriver {
    pub fn new(config: &IndicatorConfig) -> Self {
        Self {
            reset_address: config.controller_reset_address,
            address: config.driver_address,
            settle_delay_ms: config.settle_delay_ms,
        }
    }

    /// PWM register for a driver channel. Only the low nibble is significant.
    pub const fn register(channel: u8) -> u8 {
        REG_PWM0 + (channel & 0x0F)
    }

    /// Write one channel's PWM value.
    pub fn send(&self, bus: &mut impl BusPort, channel: u8, value: u8) -> Result<()> {
        bus.transmit(self.address, &[Self::register(channel), value])?;
        Ok(())
    }

    /// Run the one-time reset and setup sequence.
    ///
    /// Every frame is attempted even if an earlier one failed; the error
    /// only reports that at least one frame was lost.
    pub fn initialise(&self, bus: &mut impl BusPort, delay: &mut impl DelayNs) -> Result<()> {
        let mut failed = 0u8;

        if let Err(e) = bus.transmit(self.reset_address, &SOFTWARE_RESET) {
            warn!("led_driver: software reset to {:#04x} failed: {}", self.reset_address, e);
            failed += 1;
        }
        delay.delay_ms(self.settle_delay_ms);

        for cmd in &SETUP_SEQUENCE {
            if let Err(e) = bus.transmit(self.address, cmd) {
                warn!("led_driver: setup write {:02x?} failed: {}", cmd, e);
                failed += 1;
            }
            delay.delay_ms(self.settle_delay_ms);
        }

        if failed > 0 {
            return Err(Error::Init("LED driver setup incomplete"));
        }
        info!("led_driver: configured at {:#04x}", self.address);
        Ok(())
    }

    /// Channel writes for a frame, scaled, in zone order.
    pub fn plan(frame: &IndicatorFrame) -> Vec<ChannelWrite, WIRED_CHANNELS> {
        let mut writes = Vec::new();
        for zone in Zone::ALL {
            let rgb = frame.zone(zone).scaled().channels();
            for &base in zone.channel_groups() {
                for (offset, value) in (0u8..).zip(rgb) {
                    let pushed = writes.push((base + offset, value));
                    debug_assert!(pushed.is_ok(), "zone wiring exceeds WIRED_CHANNELS");
                }
            }
        }
        writes
    }

    /// Send every channel of `frame`. Failed writes are logged and skipped;
    /// the next frame resends the full state.
    pub fn write_frame(&self, bus: &mut impl BusPort, frame: &IndicatorFrame) -> WriteOutcome {
        let mut outcome = WriteOutcome::default();
        for (channel, value) in Self::plan(frame) {
            outcome.attempted += 1;
            if let Err(e) = self.send(bus, channel, value) {
                warn!(
                    "led_driver: write to register {:#04x} (channel {}) failed: {}",
                    Self::register(channel),
                    channel,
                    e
                );
                outcome.failed += 1;
            }
        }
        outcome
    }
}
