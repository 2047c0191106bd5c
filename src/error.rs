//! Unified error types for the indicator firmware.
//!
//! A single `Error` enum that every subsystem converts into. All variants
//! are `Copy` so they can be handed to the log macros and returned from
//! the loop without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A two-wire bus transfer failed.
    Bus(BusError),
    /// LED controller initialisation did not complete cleanly.
    Init(&'static str),
    /// Configuration is invalid.
    Config(&'static str),
    /// The host-side run/DFU handshake failed.
    Mode(ModeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "bus: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Mode(e) => write!(f, "mode: {e}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Bus errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// The transfer did not complete within the configured bound.
    Timeout,
    /// The addressed device did not acknowledge.
    Nack,
    /// Another master won arbitration.
    ArbitrationLost,
    /// Any other HAL-reported failure.
    Other,
}

impl fmt::Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => write!(f, "transfer timed out"),
            Self::Nack => write!(f, "no acknowledge"),
            Self::ArbitrationLost => write!(f, "arbitration lost"),
            Self::Other => write!(f, "bus fault"),
        }
    }
}

impl From<embedded_hal::i2c::ErrorKind> for BusError {
    fn from(kind: embedded_hal::i2c::ErrorKind) -> Self {
        use embedded_hal::i2c::ErrorKind;
        match kind {
            ErrorKind::NoAcknowledge(_) => Self::Nack,
            ErrorKind::ArbitrationLoss => Self::ArbitrationLost,
            _ => Self::Other,
        }
    }
}

impl From<BusError> for Error {
    fn from(e: BusError) -> Self {
        Self::Bus(e)
    }
}

// ---------------------------------------------------------------------------
// Mode trigger errors
// ---------------------------------------------------------------------------

/// Failures of the three-step run/DFU handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeError {
    /// Management call number `step` (1-based) was rejected with `status`.
    StepFailed { step: u8, status: u32 },
    /// The final call succeeded but reported a non-zero result.
    UnexpectedStatus(u32),
}

impl fmt::Display for ModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StepFailed { step, status } => {
                write!(f, "handshake step {step} failed (status={status:#x})")
            }
            Self::UnexpectedStatus(out) => write!(f, "unknown controller status: {out}"),
        }
    }
}

impl From<ModeError> for Error {
    fn from(e: ModeError) -> Self {
        Self::Mode(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
