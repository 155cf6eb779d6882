//! Pace domain: tests for the ramp.

use approx::assert_relative_eq;

use super::{PaceRamp, PaceTuning};

fn ramp() -> PaceRamp {
    PaceRamp::new(PaceTuning {
        initial: 1.0,
        step: 0.1,
        interval: 2.0,
        max: 1.25,
    })
}

#[test]
fn test_ramp_starts_at_initial() {
    assert_relative_eq!(ramp().multiplier(), 1.0);
}

#[test]
fn test_ramp_steps_each_interval() {
    let mut ramp = ramp();
    assert!(!ramp.tick(1.5));
    assert_relative_eq!(ramp.multiplier(), 1.0);

    assert!(ramp.tick(0.5));
    assert_relative_eq!(ramp.multiplier(), 1.1);
}

#[test]
fn test_ramp_catches_up_on_long_tick() {
    let mut ramp = ramp();
    ramp.tick(4.0);
    assert_relative_eq!(ramp.multiplier(), 1.2, epsilon = 1e-6);
}

#[test]
fn test_ramp_caps_at_max() {
    let mut ramp = ramp();
    for _ in 0..20 {
        ramp.tick(2.0);
    }
    assert_relative_eq!(ramp.multiplier(), 1.25);
    assert!(!ramp.tick(100.0));
}

#[test]
fn test_reset_restores_initial() {
    let mut ramp = ramp();
    ramp.tick(3.0);
    ramp.reset();
    assert_relative_eq!(ramp.multiplier(), 1.0);

    // Partial progress is discarded too
    assert!(!ramp.tick(1.5));
}
