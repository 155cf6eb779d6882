//! Locomotion domain: tests for the actor state machine and slide timing.

use approx::assert_relative_eq;
use bevy::prelude::*;

use super::{
    ActorLocomotion, ActorState, GroundProbe, GroundSample, HitboxKind, HitboxState, LaneTable,
    LayerMask, LocomotionSignal, LocomotionTuning, NoGround, Tick,
};
use crate::input::{Intent, LaneDirection};

/// Infinite horizontal plane at `height`.
struct FlatGround {
    height: f32,
}

impl GroundProbe for FlatGround {
    fn cast(&self, origin: Vec3, _: Dir3, max_distance: f32, layers: LayerMask) -> Option<f32> {
        let distance = origin.y - self.height;
        (layers.intersects(LayerMask::GROUND) && (0.0..=max_distance).contains(&distance))
            .then_some(distance)
    }
}

/// Flat ground seen from the default probe offset.
const ON_GROUND: GroundSample = GroundSample {
    distance: Some(0.1),
};

fn actor(tuning: &LocomotionTuning) -> ActorLocomotion {
    ActorLocomotion::new(tuning.lane_table())
}

fn tick(now: f64, dt: f32) -> Tick {
    Tick { dt, now }
}

fn count(signals: &[LocomotionSignal], wanted: LocomotionSignal) -> usize {
    signals.iter().filter(|signal| **signal == wanted).count()
}

// -----------------------------------------------------------------------------
// Forward motion
// -----------------------------------------------------------------------------

#[test]
fn test_forward_distance_three_ticks() {
    let tuning = LocomotionTuning::default();
    let mut actor = actor(&tuning);

    let mut previous = actor.state().forward_distance;
    for i in 0..3 {
        actor.step(&tuning, tick(i as f64, 1.0), &[], ON_GROUND);
        assert!(actor.state().forward_distance > previous);
        previous = actor.state().forward_distance;
    }

    assert_relative_eq!(actor.state().forward_distance, 15.0);
}

#[test]
fn test_forward_distance_keeps_advancing_on_long_runs() {
    let tuning = LocomotionTuning::default();
    let lanes = tuning.lane_table();
    let start = 3_000_000.0;
    let mut actor = ActorLocomotion::from_state(
        ActorState {
            forward_distance: start,
            ..ActorState::new(&lanes)
        },
        lanes,
    );

    let dt = 1.0 / 60.0;
    let mut previous = start;
    for i in 0..60 {
        actor.step(&tuning, tick(f64::from(i) * f64::from(dt), dt), &[], ON_GROUND);
        assert!(actor.state().forward_distance > previous);
        previous = actor.state().forward_distance;
    }

    assert_relative_eq!(previous - start, 5.0, epsilon = 1e-5);
}

// -----------------------------------------------------------------------------
// Lanes and yaw
// -----------------------------------------------------------------------------

#[test]
fn test_lane_stays_in_range() {
    let tuning = LocomotionTuning::default();
    let mut actor = actor(&tuning);
    let moves = [
        LaneDirection::Right,
        LaneDirection::Right,
        LaneDirection::Right,
        LaneDirection::Left,
        LaneDirection::Left,
        LaneDirection::Left,
        LaneDirection::Left,
    ];

    for (i, direction) in moves.into_iter().enumerate() {
        actor.step(
            &tuning,
            tick(i as f64 * 0.1, 0.1),
            &[Intent::ChangeLane(direction)],
            ON_GROUND,
        );
        assert!(actor.state().lane < LaneTable::COUNT);
    }
    assert_eq!(actor.state().lane, 0);
}

#[test]
fn test_lane_change_emits_signal_only_on_real_change() {
    let tuning = LocomotionTuning::default();
    let mut actor = actor(&tuning);
    let left = [Intent::ChangeLane(LaneDirection::Left)];

    let first = actor.step(&tuning, tick(0.0, 0.01), &left, ON_GROUND);
    assert_eq!(
        count(&first, LocomotionSignal::LaneChanged { from: 1, to: 0 }),
        1
    );

    let second = actor.step(&tuning, tick(0.01, 0.01), &left, ON_GROUND);
    assert!(
        !second
            .iter()
            .any(|signal| matches!(signal, LocomotionSignal::LaneChanged { .. }))
    );
}

#[test]
fn test_boundary_lane_change_still_sets_yaw_target() {
    let tuning = LocomotionTuning::default();
    let mut actor = actor(&tuning);
    let mut signals = Vec::new();

    actor.apply_intent(Intent::ChangeLane(LaneDirection::Right), &tuning, 0.0, &mut signals);
    actor.apply_intent(Intent::ChangeLane(LaneDirection::Right), &tuning, 0.0, &mut signals);
    assert_eq!(actor.state().lane, 2);
    assert_eq!(signals.len(), 1);

    // Already at the edge: lane unchanged, tilt re-armed anyway
    signals.clear();
    actor.apply_intent(Intent::ChangeLane(LaneDirection::Right), &tuning, 0.0, &mut signals);
    assert_eq!(actor.state().lane, 2);
    assert_relative_eq!(actor.state().target_yaw_degrees, tuning.yaw_angle);
    assert!(signals.is_empty());
}

#[test]
fn test_lane_change_yaw_tilts_then_returns() {
    let tuning = LocomotionTuning::default();
    let mut actor = actor(&tuning);
    let dt = 0.05;

    actor.step(
        &tuning,
        tick(0.0, dt),
        &[Intent::ChangeLane(LaneDirection::Left)],
        ON_GROUND,
    );
    assert_eq!(actor.state().lane, 0);
    assert_relative_eq!(actor.state().target_yaw_degrees, -tuning.yaw_angle);
    assert_relative_eq!(actor.state().current_yaw_degrees, -15.0);

    // 2 units at 10/s closes in four ticks of 0.05s
    for i in 1..4 {
        actor.step(&tuning, tick(i as f64 * 0.05, dt), &[], ON_GROUND);
    }
    assert_relative_eq!(actor.state().lateral_offset, tuning.left_lane_x);
    assert_relative_eq!(actor.state().target_yaw_degrees, 0.0);
    assert_relative_eq!(actor.state().current_yaw_degrees, -24.0);

    // 24 degrees back at 120/s: four more ticks
    for i in 4..8 {
        actor.step(&tuning, tick(i as f64 * 0.05, dt), &[], ON_GROUND);
    }
    assert_relative_eq!(actor.state().current_yaw_degrees, 0.0, epsilon = 1e-4);
}

// -----------------------------------------------------------------------------
// Ground and jumping
// -----------------------------------------------------------------------------

#[test]
fn test_probe_within_tolerance_is_grounded() {
    let tuning = LocomotionTuning::default();
    let mut actor = actor(&tuning);

    actor.step(&tuning, tick(0.0, 0.02), &[], GroundSample::hit(0.05));
    assert!(actor.state().grounded);
    assert_relative_eq!(actor.state().ground_distance, 0.05);

    actor.step(&tuning, tick(0.02, 0.02), &[], GroundSample::MISS);
    assert!(!actor.state().grounded);
    assert_eq!(actor.state().ground_distance, f32::INFINITY);
}

#[test]
fn test_ground_distance_just_past_tolerance_is_airborne() {
    let tuning = LocomotionTuning::default();
    let mut actor = actor(&tuning);

    actor.step(&tuning, tick(0.0, 0.02), &[], GroundSample::hit(0.10009));
    assert!(!actor.state().grounded);

    actor.step(&tuning, tick(0.02, 0.02), &[], GroundSample::hit(0.1));
    assert!(actor.state().grounded);
}

#[test]
fn test_sample_ground_miss_without_track() {
    let tuning = LocomotionTuning::default();
    let actor = actor(&tuning);
    assert_eq!(actor.sample_ground(&NoGround, &tuning), GroundSample::MISS);
}

#[test]
fn test_sample_ground_from_offset_origin() {
    let tuning = LocomotionTuning::default();
    let actor = actor(&tuning);
    let sample = actor.sample_ground(&FlatGround { height: 0.0 }, &tuning);
    assert_relative_eq!(sample.distance_or_infinity(), 0.1);
}

#[test]
fn test_landed_once_per_contact() {
    let tuning = LocomotionTuning::default();
    let mut actor = actor(&tuning);
    let samples = [
        GroundSample::hit(0.05),
        GroundSample::hit(0.05),
        GroundSample::hit(0.08),
        GroundSample::MISS,
        GroundSample::hit(3.0),
        GroundSample::hit(0.05),
        GroundSample::hit(0.05),
    ];

    let landed: Vec<usize> = samples
        .into_iter()
        .enumerate()
        .map(|(i, sample)| {
            let signals = actor.step(&tuning, tick(i as f64 * 0.02, 0.02), &[], sample);
            count(&signals, LocomotionSignal::Landed)
        })
        .collect();

    assert_eq!(landed, vec![1, 0, 0, 0, 0, 1, 0]);
}

#[test]
fn test_jump_cooldown_accepts_one_of_two() {
    let tuning = LocomotionTuning::default();
    let mut actor = actor(&tuning);
    let mut jumps = 0;

    actor.step(&tuning, tick(0.0, 0.01), &[], ON_GROUND);
    jumps += count(
        &actor.step(&tuning, tick(0.01, 0.01), &[Intent::Jump], ON_GROUND),
        LocomotionSignal::JumpStarted,
    );
    let velocity_after_first = actor.state().vertical_velocity;

    jumps += count(
        &actor.step(&tuning, tick(0.51, 0.01), &[Intent::Jump], ON_GROUND),
        LocomotionSignal::JumpStarted,
    );

    assert_eq!(jumps, 1);
    assert_relative_eq!(velocity_after_first, tuning.jump_force);
    assert_relative_eq!(actor.state().last_jump_time, 0.01);
}

#[test]
fn test_jump_accepted_after_cooldown() {
    let tuning = LocomotionTuning::default();
    let mut actor = actor(&tuning);

    actor.step(&tuning, tick(0.0, 0.01), &[], ON_GROUND);
    actor.step(&tuning, tick(0.01, 0.01), &[Intent::Jump], ON_GROUND);
    let signals = actor.step(&tuning, tick(1.5, 0.01), &[Intent::Jump], ON_GROUND);

    assert_eq!(count(&signals, LocomotionSignal::JumpStarted), 1);
    assert_relative_eq!(actor.state().last_jump_time, 1.5);
}

#[test]
fn test_jump_rejected_while_airborne() {
    let tuning = LocomotionTuning::default();
    let mut actor = actor(&tuning);

    let signals = actor.step(&tuning, tick(5.0, 0.01), &[Intent::Jump], GroundSample::MISS);
    assert!(signals.is_empty());
    assert!(actor.state().vertical_velocity < 0.0);
}

#[test]
fn test_jump_arc_never_sinks_below_ground() {
    let tuning = LocomotionTuning::default();
    let mut actor = actor(&tuning);
    let ground = FlatGround { height: 0.0 };
    let dt = 0.1;

    let mut landings = 0;
    let mut peak: f32 = 0.0;
    for i in 0..40 {
        let intents = if i == 1 { vec![Intent::Jump] } else { vec![] };
        let sample = actor.sample_ground(&ground, &tuning);
        let signals = actor.step(&tuning, tick(i as f64 * 0.1, dt), &intents, sample);

        if i > 1 {
            landings += count(&signals, LocomotionSignal::Landed);
        }
        peak = peak.max(actor.state().height);
        assert!(actor.state().height >= -1e-4, "sank to {}", actor.state().height);
    }

    assert_eq!(landings, 1);
    assert!(peak > 1.0);
    assert!(actor.state().grounded);
    assert_relative_eq!(actor.state().height, 0.0, epsilon = 1e-4);
    assert_relative_eq!(actor.state().vertical_velocity, 0.0);
}

#[test]
fn test_grounded_clears_downward_velocity() {
    let tuning = LocomotionTuning::default();
    let mut actor = actor(&tuning);

    actor.step(&tuning, tick(0.0, 0.1), &[], GroundSample::MISS);
    assert!(actor.state().vertical_velocity < 0.0);

    actor.step(&tuning, tick(0.1, 0.1), &[], ON_GROUND);
    assert_relative_eq!(actor.state().vertical_velocity, 0.0);
}

// -----------------------------------------------------------------------------
// Slide hitbox chain
// -----------------------------------------------------------------------------

#[test]
fn test_slide_restart_completes_one_chain() {
    let tuning = LocomotionTuning::default();
    let mut actor = actor(&tuning);
    let dt = 0.25;

    let mut ended_at = Vec::new();
    let mut resumed_at = Vec::new();
    for i in 0..12 {
        // Second slide lands at half the slide duration
        let intents = if i == 0 || i == 2 {
            vec![Intent::Slide]
        } else {
            vec![]
        };
        let signals = actor.step(&tuning, tick(i as f64 * 0.25, dt), &intents, ON_GROUND);
        if signals.contains(&LocomotionSignal::SlideEnded) {
            ended_at.push(i);
        }
        if signals.contains(&LocomotionSignal::RunningResumed) {
            resumed_at.push(i);
        }
    }

    assert_eq!(ended_at, vec![6]);
    assert_eq!(resumed_at, vec![6]);
    assert_eq!(actor.state().hitbox.state(), HitboxState::Running);
    assert_eq!(
        actor.state().hitbox.active_hitbox(),
        Some(HitboxKind::Running)
    );
}

#[test]
fn test_reactivation_gap_has_no_hitbox() {
    let tuning = LocomotionTuning {
        running_collider_reactivate_delay: 0.5,
        ..default()
    };
    let mut actor = actor(&tuning);
    let dt = 0.25;

    let mut active = Vec::new();
    for i in 0..8 {
        let intents = if i == 0 { vec![Intent::Slide] } else { vec![] };
        actor.step(&tuning, tick(i as f64 * 0.25, dt), &intents, ON_GROUND);
        active.push(actor.state().hitbox.active_hitbox());
    }

    let sliding = Some(HitboxKind::Sliding);
    let running = Some(HitboxKind::Running);
    assert_eq!(
        active,
        vec![
            sliding, sliding, sliding, sliding, None, None, running, running
        ]
    );
}

#[test]
fn test_slide_emits_started_immediately() {
    let tuning = LocomotionTuning::default();
    let mut actor = actor(&tuning);

    let signals = actor.step(&tuning, tick(0.0, 0.01), &[Intent::Slide], ON_GROUND);
    assert_eq!(count(&signals, LocomotionSignal::SlideStarted), 1);
    assert_eq!(actor.state().hitbox.state(), HitboxState::Sliding);
}

#[test]
fn test_long_tick_fires_whole_chain() {
    let tuning = LocomotionTuning {
        running_collider_reactivate_delay: 0.2,
        ..default()
    };
    let mut actor = actor(&tuning);

    actor.step(&tuning, tick(0.0, 0.0), &[Intent::Slide], ON_GROUND);
    let signals = actor.step(&tuning, tick(2.0, 2.0), &[], ON_GROUND);

    assert_eq!(
        signals,
        vec![LocomotionSignal::SlideEnded, LocomotionSignal::RunningResumed]
    );
}
