//! Host status snapshot.

use core::fmt;

/// A point-in-time view of the five host status lines, normalised so that
/// `true` always means "asserted" regardless of electrical polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct StatusSnapshot {
    /// Host is in a sleep state.
    pub sleeping: bool,
    /// Laptop lid is closed.
    pub lid_closed: bool,
    /// AC adapter is plugged in.
    pub ac_present: bool,
    /// Battery is being charged.
    pub charging: bool,
    /// Battery charge is below the low threshold.
    pub battery_low: bool,
}

impl fmt::Display for StatusSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |on: bool| if on { '1' } else { '0' };
        write!(
            f,
            "sleep={} lid={} ac={} chg={} low={}",
            flag(self.sleeping),
            flag(self.lid_closed),
            flag(self.ac_present),
            flag(self.charging),
            flag(self.battery_low),
        )
    }
}
