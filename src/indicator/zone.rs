//! Physical LED zones and their driver channel wiring.
//!
//! | Zone        | Driver channels            |
//! |-------------|----------------------------|
//! | `Ring`      | 0–2 (pair A), 3–5 (pair B) |
//! | `LidHead`   | 6–8                        |
//! | `PowerHead` | 12–14                      |
//!
//! Channels 9–11 are not wired to any zone and are never written.

/// Logical indicator target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    LidHead,
    PowerHead,
    Ring,
}

impl Zone {
    /// Every zone, in transmit order.
    pub const ALL: [Self; 3] = [Self::LidHead, Self::PowerHead, Self::Ring];

    /// First channel of each red/green/blue group belonging to the zone.
    ///
    /// The ring is two physical LED pairs driven with the same colour.
    pub const fn channel_groups(self) -> &'static [u8] {
        match self {
            Self::LidHead => &[6],
            Self::PowerHead => &[12],
            Self::Ring => &[0, 3],
        }
    }

    /// Number of driver channels the zone occupies.
    pub const fn channel_count(self) -> usize {
        self.channel_groups().len() * 3
    }
}
