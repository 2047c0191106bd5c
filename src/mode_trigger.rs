//! Host-side run/DFU mode trigger.
//!
//! The host flips the lighting controller between normal execution and its
//! DFU bootloader through one vendor management method that toggles two
//! control lines wired to the controller. Each command is three calls with a
//! 50 ms settle between them:
//!
//! | Command | Step 1 | Step 2 | Step 3 |
//! |---------|--------|--------|--------|
//! | `Dfu`   | 1      | 256    | 257    |
//! | `Run`   | 1      | 0      | 257    |
//!
//! The third call must report 0. A failed call aborts the sequence; lines
//! already toggled are left as they are.

use embedded_hal::delay::DelayNs;
use log::{error, info, warn};

use crate::app::ports::ManagementPort;
use crate::error::ModeError;

/// Management method id for the firmware-update GPIO control.
pub const FWUPDATE_GPIO_METHOD: u32 = 32;

/// Settle time between handshake steps.
pub const STEP_SETTLE_MS: u32 = 50;

/// Requested controller mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeCommand {
    Dfu,
    Run,
}

impl ModeCommand {
    /// Parse a single line of user input. Anything not starting with
    /// `"dfu"` means run.
    pub fn parse(input: &str) -> Self {
        if input.starts_with("dfu") { Self::Dfu } else { Self::Run }
    }

    /// Arguments for the three management calls.
    pub const fn steps(self) -> [u32; 3] {
        match self {
            Self::Dfu => [1, 256, 257],
            Self::Run => [1, 0, 257],
        }
    }
}

/// Run the handshake for `command`.
pub fn apply(
    port: &mut impl ManagementPort,
    delay: &mut impl DelayNs,
    command: ModeCommand,
) -> Result<(), ModeError> {
    let result = handshake(port, delay, command);
    match (&result, command) {
        (Ok(()), ModeCommand::Dfu) => warn!("mode_trigger: controller in DFU mode, be careful"),
        (Ok(()), ModeCommand::Run) => info!("mode_trigger: controller running"),
        (Err(e), _) => error!("mode_trigger: {:?} failed: {}", command, e),
    }
    result
}

fn handshake(
    port: &mut impl ManagementPort,
    delay: &mut impl DelayNs,
    command: ModeCommand,
) -> Result<(), ModeError> {
    let [first, second, last] = command.steps();

    for (step, arg) in [(1u8, first), (2, second)] {
        port.invoke(FWUPDATE_GPIO_METHOD, arg)
            .map_err(|e| ModeError::StepFailed { step, status: e.status })?;
        delay.delay_ms(STEP_SETTLE_MS);
    }

    let out = port
        .invoke(FWUPDATE_GPIO_METHOD, last)
        .map_err(|e| ModeError::StepFailed { step: 3, status: e.status })?;
    if out != 0 {
        return Err(ModeError::UnexpectedStatus(out));
    }
    Ok(())
}
