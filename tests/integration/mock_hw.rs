//! Mock hardware for integration tests.
//!
//! Records every bus frame and delay so tests can assert on the full
//! command history without touching real GPIO/I²C peripherals.

use embedded_hal::delay::DelayNs;
use openawelc::app::ports::{BusPort, ClockPort, ManagementError, ManagementPort, StatusPort};
use openawelc::error::BusError;
use openawelc::indicator::StatusSnapshot;

// ── Bus frame record ──────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub address: u8,
    pub register: u8,
    pub value: u8,
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub status: StatusSnapshot,
    pub frames: Vec<Frame>,
    /// Transmits numbered (0-based) in this list time out.
    pub fail_on: Vec<usize>,
    transmits: usize,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new(status: StatusSnapshot) -> Self {
        Self {
            status,
            frames: Vec::new(),
            fail_on: Vec::new(),
            transmits: 0,
        }
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Last value written to a PWM register on `address`.
    pub fn register(&self, address: u8, register: u8) -> Option<u8> {
        self.frames
            .iter()
            .rev()
            .find(|f| f.address == address && f.register == register)
            .map(|f| f.value)
    }
}

impl StatusPort for MockHardware {
    fn sample(&mut self) -> StatusSnapshot {
        self.status
    }
}

impl BusPort for MockHardware {
    fn transmit(&mut self, address: u8, bytes: &[u8]) -> Result<(), BusError> {
        assert_eq!(bytes.len(), 2, "every LED driver command is two bytes");
        let n = self.transmits;
        self.transmits += 1;
        if self.fail_on.contains(&n) {
            return Err(BusError::Timeout);
        }
        self.frames.push(Frame {
            address,
            register: bytes[0],
            value: bytes[1],
        });
        Ok(())
    }
}

// ── MockDelay ─────────────────────────────────────────────────

#[derive(Default)]
pub struct MockDelay {
    pub waits_ms: Vec<u32>,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waits_ms.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waits_ms.push(ms);
    }
}

// ── MockClock ─────────────────────────────────────────────────

#[allow(dead_code)]
pub struct MockClock {
    pub now: u32,
    pub step_ms: u32,
    pub waits: usize,
}

#[allow(dead_code)]
impl MockClock {
    pub fn new(start: u32, step_ms: u32) -> Self {
        Self {
            now: start,
            step_ms,
            waits: 0,
        }
    }
}

impl ClockPort for MockClock {
    fn now_ms(&self) -> u32 {
        self.now
    }

    fn wait_for_tick(&mut self) {
        self.now = self.now.wrapping_add(self.step_ms);
        self.waits += 1;
    }
}

// ── MockManagement ────────────────────────────────────────────

/// Records `(method, arg)` calls and replays scripted results.
#[allow(dead_code)]
pub struct MockManagement {
    pub calls: Vec<(u32, u32)>,
    pub results: Vec<Result<u32, ManagementError>>,
}

#[allow(dead_code)]
impl MockManagement {
    pub fn succeeding() -> Self {
        Self::scripted(vec![Ok(0), Ok(0), Ok(0)])
    }

    pub fn scripted(results: Vec<Result<u32, ManagementError>>) -> Self {
        Self {
            calls: Vec::new(),
            results,
        }
    }
}

impl ManagementPort for MockManagement {
    fn invoke(&mut self, method: u32, arg: u32) -> Result<u32, ManagementError> {
        let idx = self.calls.len();
        self.calls.push((method, arg));
        self.results.get(idx).copied().unwrap_or(Ok(0))
    }
}
