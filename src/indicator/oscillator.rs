//! Breathing brightness envelope.
//!
//! `b = exp(sin(2π · t / P))` swings between `1/e` and `e`; subtracting
//! 0.368 and multiplying by 42.546 maps that onto roughly `0..=100`.
//! The exponential of a sine lingers near the trough and rises quickly
//! to the peak, which reads as a natural "breathing" pulse.

use core::f32::consts::TAU;

/// Default envelope period.
pub const DEFAULT_PERIOD_MS: u32 = 2000;

const OFFSET: f32 = 0.368;
const GAIN: f32 = 42.546;

/// Brightness at `tick_ms` for the default period.
pub fn brightness(tick_ms: u32) -> u8 {
    Breathing::default().brightness(tick_ms)
}

/// Periodic exponential-of-sine envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breathing {
    period_ms: u32,
}

impl Default for Breathing {
    fn default() -> Self {
        Self {
            period_ms: DEFAULT_PERIOD_MS,
        }
    }
}

impl Breathing {
    /// A zero period falls back to [`DEFAULT_PERIOD_MS`].
    pub fn new(period_ms: u32) -> Self {
        let period_ms = if period_ms == 0 { DEFAULT_PERIOD_MS } else { period_ms };
        Self { period_ms }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    /// Brightness level (0–255) at an absolute tick.
    pub fn brightness(&self, tick_ms: u32) -> u8 {
        // Reduce first so tick rollover and large ticks keep full f32 precision.
        let phase = (tick_ms % self.period_ms) as f32 / self.period_ms as f32;
        let b = (TAU * phase).sin().exp();
        (GAIN * (b - OFFSET)).round().clamp(0.0, 255.0) as u8
    }
}
