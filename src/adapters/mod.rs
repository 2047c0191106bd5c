//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements            | Connects to                |
//! |------------|-----------------------|----------------------------|
//! | `clock`    | ClockPort             | System timer, idle wait    |
//! | `hardware` | StatusPort + BusPort  | Status inputs + I²C bus    |
//! | `i2c_bus`  | BusPort               | `embedded-hal` / IDF I²C   |

pub mod clock;
pub mod hardware;
pub mod i2c_bus;
