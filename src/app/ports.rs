//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ IndicatorService (domain)
//! ```
//!
//! Driven adapters (GPIO sampler, I²C bus, platform clock, host management
//! interface) implement these traits. The
//! [`IndicatorService`](super::service::IndicatorService) consumes them via
//! generics, so the domain core never touches hardware directly.

use crate::error::BusError;
use crate::indicator::StatusSnapshot;

// ───────────────────────────────────────────────────────────────
// Status port (driven adapter: GPIO → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this once per iteration.
pub trait StatusPort {
    /// Read all five status lines and normalise them to active-high.
    fn sample(&mut self) -> StatusSnapshot;
}

// ───────────────────────────────────────────────────────────────
// Bus port (driven adapter: domain → LED driver)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the two-wire bus.
pub trait BusPort {
    /// Write `bytes` to the 7-bit `address`, blocking until the transfer
    /// completes or the implementation's timeout elapses.
    fn transmit(&mut self, address: u8, bytes: &[u8]) -> Result<(), BusError>;
}

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: platform timer ↔ domain)
// ───────────────────────────────────────────────────────────────

/// Monotonic tick source plus the loop's low-power wait point.
pub trait ClockPort {
    /// Milliseconds since boot. Wraps at `u32::MAX`.
    fn now_ms(&self) -> u32;

    /// Suspend until the next timer wake-up.
    fn wait_for_tick(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Management port (host side: OS → platform firmware)
// ───────────────────────────────────────────────────────────────

/// Vendor system-management call interface on the host.
pub trait ManagementPort {
    /// Invoke management `method` with a single 32-bit argument and return
    /// the method's 32-bit output.
    fn invoke(&mut self, method: u32, arg: u32) -> Result<u32, ManagementError>;
}

/// Errors from [`ManagementPort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagementError {
    /// Platform status code of the failed call.
    pub status: u32,
}

impl core::fmt::Display for ManagementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "management call failed (status={:#x})", self.status)
    }
}
