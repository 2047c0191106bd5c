//! Host status line sampler.
//!
//! Five digital inputs from the laptop mainboard. The sleep, lid and AC
//! lines are open-drain and active-LOW; the charger and battery-low lines
//! are active-HIGH on this board revision. The lines are debounced
//! upstream, so each call is a plain level read.

use embedded_hal::digital::InputPin;
use log::warn;

use crate::app::ports::StatusPort;
use crate::indicator::StatusSnapshot;

/// Electrical level that means "asserted" for a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    ActiveLow,
    ActiveHigh,
}

/// The five status inputs, each any [`InputPin`].
pub struct StatusInputs<S, L, A, C, B> {
    sleeping: S,
    lid: L,
    ac_power: A,
    charging: C,
    battery_low: B,
}

impl<S, L, A, C, B> StatusInputs<S, L, A, C, B>
where
    S: InputPin,
    L: InputPin,
    A: InputPin,
    C: InputPin,
    B: InputPin,
{
    pub const SLEEPING_POLARITY: Polarity = Polarity::ActiveLow;
    pub const LID_POLARITY: Polarity = Polarity::ActiveLow;
    pub const AC_POLARITY: Polarity = Polarity::ActiveLow;
    pub const CHARGING_POLARITY: Polarity = Polarity::ActiveHigh;
    pub const BATTERY_LOW_POLARITY: Polarity = Polarity::ActiveHigh;

    pub fn new(sleeping: S, lid: L, ac_power: A, charging: C, battery_low: B) -> Self {
        Self {
            sleeping,
            lid,
            ac_power,
            charging,
            battery_low,
        }
    }

    /// Read every line once.
    pub fn read(&mut self) -> StatusSnapshot {
        StatusSnapshot {
            sleeping: asserted(&mut self.sleeping, Self::SLEEPING_POLARITY, "sleeping"),
            lid_closed: asserted(&mut self.lid, Self::LID_POLARITY, "lid"),
            ac_present: asserted(&mut self.ac_power, Self::AC_POLARITY, "ac_power"),
            charging: asserted(&mut self.charging, Self::CHARGING_POLARITY, "charging"),
            battery_low: asserted(&mut self.battery_low, Self::BATTERY_LOW_POLARITY, "battery_low"),
        }
    }
}

/// A failed read counts as deasserted.
fn asserted(pin: &mut impl InputPin, polarity: Polarity, name: &str) -> bool {
    let level = match polarity {
        Polarity::ActiveLow => pin.is_low(),
        Polarity::ActiveHigh => pin.is_high(),
    };
    level.unwrap_or_else(|e| {
        warn!("status: {} read failed: {:?}", name, e);
        false
    })
}

impl<S, L, A, C, B> StatusPort for StatusInputs<S, L, A, C, B>
where
    S: InputPin,
    L: InputPin,
    A: InputPin,
    C: InputPin,
    B: InputPin,
{
    fn sample(&mut self) -> StatusSnapshot {
        self.read()
    }
}
