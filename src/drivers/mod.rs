//! Peripheral drivers: the LED driver command encoder and the status inputs.

pub mod led_driver;
pub mod status_inputs;
