//! Integration tests for IndicatorService.
//!
//! Exercises the full loop iteration through mock adapters: status
//! sampling, breathing, policy, and the bus frames that reach the driver.

use crate::mock_hw::{Frame, MockDelay, MockHardware};
use openawelc::app::ports::ClockPort;
use openawelc::app::service::{IndicatorService, Phase};
use openawelc::config::IndicatorConfig;
use openawelc::drivers::led_driver::SETUP_SEQUENCE;
use openawelc::indicator::{PolicyRow, StatusSnapshot};

const DRIVER: u8 = 0x62;
const RESET: u8 = 0x6B;

fn started(status: StatusSnapshot) -> (IndicatorService, MockHardware) {
    let mut hw = MockHardware::new(status);
    let mut svc = IndicatorService::new(&IndicatorConfig::default());
    svc.start(&mut hw, &mut MockDelay::default());
    hw.clear();
    (svc, hw)
}

fn frame(register: u8, value: u8) -> Frame {
    Frame {
        address: DRIVER,
        register,
        value,
    }
}

#[test]
fn start_runs_setup_once_and_enters_running() {
    let mut hw = MockHardware::new(StatusSnapshot::default());
    let mut delay = MockDelay::default();
    let mut svc = IndicatorService::new(&IndicatorConfig::default());
    assert_eq!(svc.phase(), Phase::Init);

    svc.start(&mut hw, &mut delay);

    assert_eq!(svc.phase(), Phase::Running);
    assert_eq!(hw.frames.len(), 7);
    assert_eq!(
        hw.frames[0],
        Frame {
            address: RESET,
            register: 0xA5,
            value: 0x5A
        }
    );
    for (sent, [register, value]) in hw.frames[1..].iter().zip(SETUP_SEQUENCE) {
        assert_eq!(*sent, frame(register, value));
    }
    assert_eq!(delay.waits_ms, vec![100; 7]);
}

#[test]
fn start_survives_bus_timeouts() {
    let mut hw = MockHardware::new(StatusSnapshot::default());
    hw.fail_on = vec![0, 2];
    let mut svc = IndicatorService::new(&IndicatorConfig::default());
    svc.start(&mut hw, &mut MockDelay::default());
    assert_eq!(svc.phase(), Phase::Running);
    assert_eq!(hw.frames.len(), 5);
}

#[test]
fn tick_before_start_writes_frame_and_stays_in_init() {
    let mut hw = MockHardware::new(StatusSnapshot::default());
    let mut svc = IndicatorService::new(&IndicatorConfig::default());

    let report = svc.tick(&mut hw, 0);

    assert_eq!(svc.phase(), Phase::Init);
    assert_eq!(report.writes_attempted, 12);
    assert_eq!(hw.frames.len(), 12);
    assert!(hw.frames.iter().all(|f| f.address == DRIVER));

    svc.start(&mut hw, &mut MockDelay::default());
    assert_eq!(svc.phase(), Phase::Running);
    assert_eq!(hw.frames[12].address, RESET);
}

#[test]
fn awake_on_ac_at_tick_zero() {
    let (mut svc, mut hw) = started(StatusSnapshot {
        ac_present: true,
        ..StatusSnapshot::default()
    });

    let report = svc.tick(&mut hw, 0);

    assert_eq!(report.brightness, 27);
    assert_eq!(report.row, PolicyRow::OnAcPower);
    assert_eq!(report.writes_attempted, 12);
    assert_eq!(report.writes_failed, 0);
    assert_eq!(
        hw.frames,
        vec![
            // lid head, channels 6–8
            frame(8, 0),
            frame(9, 158),
            frame(10, 158),
            // power head, channels 12–14
            frame(14, 0),
            frame(15, 158),
            frame(16, 158),
            // ring pairs A and B, channels 0–5
            frame(2, 0),
            frame(3, 0),
            frame(4, 0),
            frame(5, 0),
            frame(6, 0),
            frame(7, 0),
        ]
    );
}

#[test]
fn reserved_registers_never_written() {
    let (mut svc, mut hw) = started(StatusSnapshot {
        sleeping: true,
        ..StatusSnapshot::default()
    });
    for t in (0..4000).step_by(97) {
        svc.tick(&mut hw, t);
    }
    assert!(hw.frames.iter().all(|f| !(11..=13).contains(&f.register)));
}

#[test]
fn asleep_lid_closed_breathes_lid_only() {
    let (mut svc, mut hw) = started(StatusSnapshot {
        sleeping: true,
        lid_closed: true,
        charging: true,
        ..StatusSnapshot::default()
    });

    let report = svc.tick(&mut hw, 500);

    assert_eq!(report.row, PolicyRow::AsleepLidClosed);
    let expected_lid = (f32::from(report.brightness) * 0.2) as u8;
    for reg in 8..=10 {
        assert_eq!(hw.register(DRIVER, reg), Some(expected_lid));
    }
    for reg in 14..=16 {
        assert_eq!(hw.register(DRIVER, reg), Some(0));
    }
}

#[test]
fn charging_wins_over_ac_and_battery_low() {
    let (mut svc, mut hw) = started(StatusSnapshot {
        charging: true,
        ac_present: true,
        battery_low: true,
        ..StatusSnapshot::default()
    });

    svc.tick(&mut hw, 1234);

    assert_eq!(hw.register(DRIVER, 14), Some(158));
    assert_eq!(hw.register(DRIVER, 15), Some(108));
    assert_eq!(hw.register(DRIVER, 16), Some(0));
}

#[test]
fn failed_write_is_skipped_and_next_tick_resends() {
    let (mut svc, mut hw) = started(StatusSnapshot::default());
    // 7 setup transmits already happened; fail the 4th write of this frame.
    hw.fail_on = vec![7 + 3];

    let report = svc.tick(&mut hw, 0);
    assert_eq!(report.writes_failed, 1);
    assert_eq!(hw.frames.len(), 11);
    assert_eq!(hw.register(DRIVER, 14), None);

    hw.clear();
    let report = svc.tick(&mut hw, 10);
    assert_eq!(report.writes_failed, 0);
    assert_eq!(hw.frames.len(), 12);
    assert_eq!(hw.register(DRIVER, 14), Some(0));
}

#[test]
fn status_change_is_picked_up_next_iteration() {
    let (mut svc, mut hw) = started(StatusSnapshot::default());
    assert_eq!(svc.tick(&mut hw, 0).row, PolicyRow::OnBattery);

    hw.status.battery_low = true;
    assert_eq!(svc.tick(&mut hw, 10).row, PolicyRow::BatteryLow);
    assert_eq!(hw.register(DRIVER, 14), Some(158));
    assert_eq!(hw.register(DRIVER, 15), Some(0));
}

#[test]
fn clock_driven_iterations_follow_envelope() {
    use crate::mock_hw::MockClock;

    let (mut svc, mut hw) = started(StatusSnapshot {
        sleeping: true,
        ..StatusSnapshot::default()
    });
    let mut clock = MockClock::new(0, 250);
    let mut levels = Vec::new();
    for _ in 0..8 {
        levels.push(svc.tick(&mut hw, clock.now_ms()).brightness);
        clock.wait_for_tick();
    }
    // Two full periods sampled at quarter steps repeat exactly.
    assert_eq!(levels[..4], levels[4..]);
    assert_eq!(clock.waits, 8);
}
