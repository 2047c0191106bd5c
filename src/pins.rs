//! GPIO / peripheral pin assignments for the indicator controller board.
//!
//! Single source of truth: the firmware entry point builds every pin
//! driver from these numbers.

// ---------------------------------------------------------------------------
// Host status lines
// ---------------------------------------------------------------------------

/// Computer-sleeping signal. LOW = host asleep.
pub const COMPUTER_SLEEPING_GPIO: i32 = 4;
/// Lid switch. LOW = lid closed.
pub const LID_CLOSED_GPIO: i32 = 5;
/// AC adapter detect. LOW = adapter present.
pub const AC_POWER_GPIO: i32 = 6;
/// Battery charger status. HIGH = charging.
pub const BATTERY_CHARGING_GPIO: i32 = 7;
/// Battery low warning. HIGH = battery low.
pub const BATTERY_LOW_GPIO: i32 = 15;

// ---------------------------------------------------------------------------
// I²C bus to the LED driver
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 8;
pub const I2C_SCL_GPIO: i32 = 9;
/// Standard-mode bus clock.
pub const I2C_BAUDRATE_HZ: u32 = 100_000;
