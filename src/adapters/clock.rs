//! Platform clock adapter.
//!
//! Provides the monotonic millisecond tick and the loop's low-power wait.
//!
//! - **`target_os = "espidf"`**: ticks come from `esp_timer_get_time()`;
//!   the wait is a FreeRTOS delay, during which the idle task executes
//!   `WAITI` until the next tick interrupt.
//! - **`not(target_os = "espidf")`**: uses `std::time::Instant` and
//!   `std::thread::sleep` for host-side simulation.

use crate::app::ports::ClockPort;

/// Clock for the indicator loop.
pub struct SystemClock {
    wake_interval_ms: u32,
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl SystemClock {
    pub fn new(wake_interval_ms: u32) -> Self {
        Self {
            wake_interval_ms,
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }

    /// Microseconds since boot (monotonic).
    #[cfg(target_os = "espidf")]
    pub fn uptime_us(&self) -> u64 {
        // SAFETY: esp_timer_get_time reads the free-running system timer.
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64
    }

    /// Microseconds since boot (monotonic).
    #[cfg(not(target_os = "espidf"))]
    pub fn uptime_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }
}

impl ClockPort for SystemClock {
    fn now_ms(&self) -> u32 {
        // Truncation gives the wrapping 32-bit tick the envelope expects.
        (self.uptime_us() / 1000) as u32
    }

    #[cfg(target_os = "espidf")]
    fn wait_for_tick(&mut self) {
        esp_idf_hal::delay::FreeRtos::delay_ms(self.wake_interval_ms);
    }

    #[cfg(not(target_os = "espidf"))]
    fn wait_for_tick(&mut self) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(self.wake_interval_ms)));
    }
}
