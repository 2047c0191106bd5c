//! Application service: the hexagonal core.
//!
//! [`IndicatorService`] owns the loop phase, the breathing envelope and the
//! LED driver encoder. All I/O flows through port traits injected at call
//! sites, making the loop testable with mock adapters.
//!
//! ```text
//!  StatusPort ──▶ ┌──────────────────────────┐ ──▶ BusPort
//!                 │    IndicatorService      │
//!  tick (ms)  ──▶ │  Breathing · Policy      │
//!                 └──────────────────────────┘
//! ```
//!
//! Two phases: `Init` runs the LED driver reset/setup once, then `Running`
//! repeats forever. There is no error phase; a bad iteration is corrected
//! by the next one resending the full frame.

use embedded_hal::delay::DelayNs;
use log::{info, trace, warn};

use crate::config::IndicatorConfig;
use crate::drivers::led_driver::LedDriver;
use crate::indicator::{Breathing, PolicyRow, StatusSnapshot};

use super::ports::{BusPort, ClockPort, StatusPort};

/// Loop phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Init,
    Running,
}

/// What one iteration did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    pub tick_ms: u32,
    pub status: StatusSnapshot,
    pub brightness: u8,
    pub row: PolicyRow,
    pub writes_attempted: u8,
    pub writes_failed: u8,
}

// ───────────────────────────────────────────────────────────────
// IndicatorService
// ───────────────────────────────────────────────────────────────

pub struct IndicatorService {
    phase: Phase,
    breathing: Breathing,
    driver: LedDriver,
}

impl IndicatorService {
    /// Construct the service. Does **not** touch the bus; call
    /// [`start`](Self::start) next.
    pub fn new(config: &IndicatorConfig) -> Self {
        Self {
            phase: Phase::Init,
            breathing: Breathing::new(config.breathing_period_ms),
            driver: LedDriver::new(config),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Initialise the LED driver and enter `Running`.
    ///
    /// Setup failures are logged, not fatal. The sequence is idempotent, so
    /// calling `start` again simply reruns it.
    pub fn start(&mut self, bus: &mut impl BusPort, delay: &mut impl DelayNs) {
        if let Err(e) = self.driver.initialise(bus, delay) {
            warn!("IndicatorService: {}", e);
        }
        self.phase = Phase::Running;
        info!("IndicatorService running (period={}ms)", self.breathing.period_ms());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full cycle: sample → brightness → policy → bus.
    ///
    /// The `hw` parameter satisfies **both** [`StatusPort`] and
    /// [`BusPort`], keeping the port boundary explicit with one borrow.
    /// Ticking before [`start`](Self::start) still writes the frame but
    /// leaves the phase at `Init`, so [`run`](Self::run) will configure
    /// the driver.
    pub fn tick(&mut self, hw: &mut (impl StatusPort + BusPort), tick_ms: u32) -> FrameReport {
        if self.phase == Phase::Init {
            warn!("IndicatorService: tick at t={}ms before start; LED driver not configured", tick_ms);
        }

        let status = hw.sample();
        let brightness = self.breathing.brightness(tick_ms);
        let row = PolicyRow::classify(&status);
        let frame = row.frame(brightness);
        let outcome = self.driver.write_frame(hw, &frame);

        if outcome.failed > 0 {
            warn!(
                "IndicatorService: {}/{} LED writes failed at t={}ms",
                outcome.failed, outcome.attempted, tick_ms
            );
        }
        trace!("t={} | {} | row={:?} b={}", tick_ms, status, row, brightness);

        FrameReport {
            tick_ms,
            status,
            brightness,
            row,
            writes_attempted: outcome.attempted,
            writes_failed: outcome.failed,
        }
    }

    /// Run forever: initialise once, then tick and sleep.
    pub fn run(
        &mut self,
        hw: &mut (impl StatusPort + BusPort),
        clock: &mut impl ClockPort,
        delay: &mut impl DelayNs,
    ) -> ! {
        if self.phase == Phase::Init {
            self.start(hw, delay);
        }
        loop {
            let _ = self.tick(hw, clock.now_ms());
            clock.wait_for_tick();
        }
    }
}
