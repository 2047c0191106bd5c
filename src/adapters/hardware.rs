//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! Owns the status sampler and the bus, exposing them through
//! [`StatusPort`] and [`BusPort`] so the service can take both through a
//! single `&mut` borrow.

use crate::app::ports::{BusPort, StatusPort};
use crate::error::BusError;
use crate::indicator::StatusSnapshot;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<S, B> {
    status: S,
    bus: B,
}

impl<S, B> HardwareAdapter<S, B> {
    pub fn new(status: S, bus: B) -> Self {
        Self { status, bus }
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }
}

// ── StatusPort implementation ─────────────────────────────────

impl<S: StatusPort, B> StatusPort for HardwareAdapter<S, B> {
    fn sample(&mut self) -> StatusSnapshot {
        self.status.sample()
    }
}

// ── BusPort implementation ────────────────────────────────────

impl<S, B: BusPort> BusPort for HardwareAdapter<S, B> {
    fn transmit(&mut self, address: u8, bytes: &[u8]) -> Result<(), BusError> {
        self.bus.transmit(address, bytes)
    }
}
