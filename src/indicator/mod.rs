//! Indicator domain: pure logic, zero I/O.
//!
//! The breathing envelope, the status snapshot, and the decision table
//! that turns them into per-zone colours. Nothing in here touches
//! hardware, so every rule is testable on the host.

pub mod color;
pub mod oscillator;
pub mod policy;
pub mod status;
pub mod zone;

pub use color::{Color, Intensity};
pub use oscillator::{Breathing, brightness};
pub use policy::{IndicatorFrame, PolicyRow, ZoneColor, evaluate};
pub use status::StatusSnapshot;
pub use zone::Zone;
