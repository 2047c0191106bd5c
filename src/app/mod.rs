//! Application core: loop orchestration and port traits.
//!
//! The indicator loop lives in [`service`]. All interaction with hardware
//! happens through **port traits** defined in [`ports`], keeping this
//! layer fully testable without real peripherals.

pub mod ports;
pub mod service;
