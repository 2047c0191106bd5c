//! Integration tests for the host-side run/DFU handshake.

use crate::mock_hw::{MockDelay, MockManagement};
use openawelc::app::ports::ManagementError;
use openawelc::error::ModeError;
use openawelc::mode_trigger::{self, FWUPDATE_GPIO_METHOD, ModeCommand};

#[test]
fn dfu_handshake_sequence() {
    let mut port = MockManagement::succeeding();
    let mut delay = MockDelay::default();

    let result = mode_trigger::apply(&mut port, &mut delay, ModeCommand::parse("dfu"));

    assert_eq!(result, Ok(()));
    assert_eq!(
        port.calls,
        vec![
            (FWUPDATE_GPIO_METHOD, 1),
            (FWUPDATE_GPIO_METHOD, 256),
            (FWUPDATE_GPIO_METHOD, 257),
        ]
    );
    assert_eq!(delay.waits_ms, vec![50, 50]);
}

#[test]
fn run_handshake_sequence() {
    let mut port = MockManagement::succeeding();
    let mut delay = MockDelay::default();

    let result = mode_trigger::apply(&mut port, &mut delay, ModeCommand::parse("run\n"));

    assert_eq!(result, Ok(()));
    let args: Vec<u32> = port.calls.iter().map(|&(_, arg)| arg).collect();
    assert_eq!(args, vec![1, 0, 257]);
}

#[test]
fn failed_step_aborts_without_rollback() {
    let mut port = MockManagement::scripted(vec![Ok(0), Err(ManagementError { status: 0x5 })]);
    let mut delay = MockDelay::default();

    let result = mode_trigger::apply(&mut port, &mut delay, ModeCommand::Dfu);

    assert_eq!(result, Err(ModeError::StepFailed { step: 2, status: 0x5 }));
    assert_eq!(port.calls.len(), 2, "step 3 must not be attempted");
    assert_eq!(delay.waits_ms, vec![50]);
}

#[test]
fn nonzero_final_status_is_reported() {
    let mut port = MockManagement::scripted(vec![Ok(0), Ok(0), Ok(2)]);
    let mut delay = MockDelay::default();

    let result = mode_trigger::apply(&mut port, &mut delay, ModeCommand::Run);

    assert_eq!(result, Err(ModeError::UnexpectedStatus(2)));
    assert_eq!(port.calls.len(), 3);
}

#[test]
fn intermediate_outputs_are_ignored() {
    let mut port = MockManagement::scripted(vec![Ok(7), Ok(9), Ok(0)]);
    let mut delay = MockDelay::default();
    assert!(mode_trigger::apply(&mut port, &mut delay, ModeCommand::Dfu).is_ok());
}
