//! Status-to-colour decision table.
//!
//! Rows are checked top to bottom and the first match wins:
//!
//! | Row              | sleep | lid | chg | ac  | low | lid head          | power head         |
//! |------------------|-------|-----|-----|-----|-----|-------------------|--------------------|
//! | `AsleepLidClosed`| yes   | yes |  –  |  –  |  –  | (b,b,b) @0.2      | off                |
//! | `Asleep`         | yes   | no  |  –  |  –  |  –  | (b,b,b) @0.2      | (b,b,b) @0.66      |
//! | `Charging`       | no    |  –  | yes |  –  |  –  | (0,240,240) @0.66 | (240,165,0) @0.66  |
//! | `OnAcPower`      | no    |  –  | no  | yes |  –  | (0,240,240) @0.66 | (0,240,240) @0.66  |
//! | `BatteryLow`     | no    |  –  | no  | no  | yes | (0,240,240) @0.66 | (240,0,0) @0.66    |
//! | `OnBattery`      | no    |  –  | no  | no  | no  | (0,240,240) @0.66 | (0,240,0) @0.66    |
//!
//! `b` is the breathing brightness. The ring is off in every row.

use super::color::{Color, Intensity};
use super::status::StatusSnapshot;
use super::zone::Zone;

/// The LEDs are very bright at full value; these tone them down.
pub const SLEEPING_INTENSITY: Intensity = Intensity::from_const(0.2);
pub const RUNNING_INTENSITY: Intensity = Intensity::from_const(0.66);

pub const COLOUR_LID_AWAKE: Color = Color::new(0, 240, 240); // Cyan
pub const COLOUR_CHARGING: Color = Color::new(240, 165, 0); // Amber
pub const COLOUR_AC_POWER: Color = Color::new(0, 240, 240); // Cyan
pub const COLOUR_BATTERY_LOW: Color = Color::new(240, 0, 0); // Red
pub const COLOUR_ON_BATTERY: Color = Color::new(0, 240, 0); // Green

/// Colour for one zone together with the dimming applied before transmit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneColor {
    pub color: Color,
    pub intensity: Intensity,
}

impl ZoneColor {
    pub const OFF: Self = Self::full(Color::OFF);

    pub const fn new(color: Color, intensity: Intensity) -> Self {
        Self { color, intensity }
    }

    pub const fn full(color: Color) -> Self {
        Self::new(color, Intensity::FULL)
    }

    /// The channel values that go on the wire.
    pub fn scaled(&self) -> Color {
        self.color.scale(self.intensity)
    }
}

/// Colours for all three zones, pre-scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorFrame {
    pub lid_head: ZoneColor,
    pub power_head: ZoneColor,
    pub ring: ZoneColor,
}

impl IndicatorFrame {
    pub fn zone(&self, zone: Zone) -> ZoneColor {
        match zone {
            Zone::LidHead => self.lid_head,
            Zone::PowerHead => self.power_head,
            Zone::Ring => self.ring,
        }
    }
}

/// One row of the decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyRow {
    AsleepLidClosed,
    Asleep,
    Charging,
    OnAcPower,
    BatteryLow,
    OnBattery,
}

impl PolicyRow {
    /// Select the first matching row for `status`.
    ///
    /// Sleeping dominates lid state; charging dominates AC and battery-low.
    pub fn classify(status: &StatusSnapshot) -> Self {
        match (status.sleeping, status.lid_closed) {
            (true, true) => Self::AsleepLidClosed,
            (true, false) => Self::Asleep,
            (false, _) if status.charging => Self::Charging,
            (false, _) if status.ac_present => Self::OnAcPower,
            (false, _) if status.battery_low => Self::BatteryLow,
            (false, _) => Self::OnBattery,
        }
    }

    /// Zone colours for this row at the given breathing brightness.
    pub fn frame(self, brightness: u8) -> IndicatorFrame {
        let breathing = Color::white(brightness);
        let awake = |power: Color| IndicatorFrame {
            lid_head: ZoneColor::new(COLOUR_LID_AWAKE, RUNNING_INTENSITY),
            power_head: ZoneColor::new(power, RUNNING_INTENSITY),
            ring: ZoneColor::OFF,
        };

        match self {
            Self::AsleepLidClosed => IndicatorFrame {
                lid_head: ZoneColor::new(breathing, SLEEPING_INTENSITY),
                power_head: ZoneColor::OFF,
                ring: ZoneColor::OFF,
            },
            Self::Asleep => IndicatorFrame {
                lid_head: ZoneColor::new(breathing, SLEEPING_INTENSITY),
                power_head: ZoneColor::new(breathing, RUNNING_INTENSITY),
                ring: ZoneColor::OFF,
            },
            Self::Charging => awake(COLOUR_CHARGING),
            Self::OnAcPower => awake(COLOUR_AC_POWER),
            Self::BatteryLow => awake(COLOUR_BATTERY_LOW),
            Self::OnBattery => awake(COLOUR_ON_BATTERY),
        }
    }
}

/// Evaluate the decision table.
pub fn evaluate(status: &StatusSnapshot, brightness: u8) -> IndicatorFrame {
    PolicyRow::classify(status).frame(brightness)
}
