//! Locomotion domain: the actor state machine.
//!
//! `ActorLocomotion::step` is the whole per-tick transition. Within a tick the
//! order is fixed: pending hitbox switches, intents, ground check and vertical
//! integration, lateral and yaw integration, then the forward advance.

use bevy::prelude::*;
use serde::Serialize;

use crate::input::Intent;
use crate::locomotion::{
    GroundProbe, GroundSample, HitboxSwitch, LaneTable, LayerMask, LocomotionSignal,
    LocomotionTuning,
};

/// Tolerance for "arrived at the lane".
const ARRIVAL_EPSILON: f32 = 1e-4;

/// Time inputs for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Seconds since the previous tick.
    pub dt: f32,
    /// Monotonic clock in seconds.
    pub now: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorState {
    /// Accumulated run distance. Kept wide so long runs keep advancing.
    pub forward_distance: f64,
    pub lane: usize,
    pub lateral_offset: f32,
    pub target_yaw_degrees: f32,
    pub current_yaw_degrees: f32,
    pub vertical_velocity: f32,
    pub height: f32,
    pub grounded: bool,
    pub was_grounded: bool,
    /// Last probe distance, infinite on a miss.
    pub ground_distance: f32,
    pub last_jump_time: f64,
    pub hitbox: HitboxSwitch,
}

impl ActorState {
    pub fn new(lanes: &LaneTable) -> Self {
        Self {
            forward_distance: 0.0,
            lane: LaneTable::CENTER,
            lateral_offset: lanes.offset(LaneTable::CENTER),
            target_yaw_degrees: 0.0,
            current_yaw_degrees: 0.0,
            vertical_velocity: 0.0,
            height: 0.0,
            grounded: false,
            was_grounded: false,
            ground_distance: f32::INFINITY,
            last_jump_time: f64::NEG_INFINITY,
            hitbox: HitboxSwitch::default(),
        }
    }

    /// Feet position in the simulation frame, narrowed for probing.
    pub fn position(&self) -> Vec3 {
        Vec3::new(
            self.lateral_offset,
            self.height,
            self.forward_distance as f32,
        )
    }
}

#[derive(Component, Debug, Clone)]
pub struct ActorLocomotion {
    state: ActorState,
    lanes: LaneTable,
}

impl ActorLocomotion {
    pub fn new(lanes: LaneTable) -> Self {
        Self::from_state(ActorState::new(&lanes), lanes)
    }

    /// Resumes from a known state, e.g. a restored checkpoint.
    pub fn from_state(state: ActorState, lanes: LaneTable) -> Self {
        Self { state, lanes }
    }

    pub fn state(&self) -> &ActorState {
        &self.state
    }

    /// Casts the probe straight down from the configured offset above the feet.
    pub fn sample_ground(
        &self,
        probe: &impl GroundProbe,
        tuning: &LocomotionTuning,
    ) -> GroundSample {
        let origin = self.state.position() + tuning.ground_check_offset();
        probe
            .cast(origin, Dir3::NEG_Y, f32::INFINITY, LayerMask::GROUND)
            .map_or(GroundSample::MISS, GroundSample::hit)
    }

    pub fn step(
        &mut self,
        tuning: &LocomotionTuning,
        tick: Tick,
        intents: &[Intent],
        ground: GroundSample,
    ) -> Vec<LocomotionSignal> {
        let mut signals = Vec::new();

        self.state.hitbox.advance(tick.dt, tuning, &mut signals);

        for intent in intents {
            self.apply_intent(*intent, tuning, tick.now, &mut signals);
        }

        let surface_height = self.check_ground(ground, tuning, &mut signals);
        self.apply_vertical_movement(tuning, tick.dt, surface_height);
        self.move_lateral(tuning, tick.dt);
        self.apply_yaw(tuning, tick.dt);

        self.state.forward_distance += f64::from(tuning.forward_speed) * f64::from(tick.dt);

        signals
    }

    pub(crate) fn apply_intent(
        &mut self,
        intent: Intent,
        tuning: &LocomotionTuning,
        now: f64,
        signals: &mut Vec<LocomotionSignal>,
    ) {
        match intent {
            Intent::ChangeLane(direction) => {
                let from = self.state.lane;
                let step = direction.sign();
                self.state.lane = LaneTable::clamp_lane(from as i64 + i64::from(step));
                // Tilts even when the lane is already at the edge
                self.state.target_yaw_degrees = tuning.yaw_angle * f32::from(step);

                if self.state.lane != from {
                    signals.push(LocomotionSignal::LaneChanged {
                        from,
                        to: self.state.lane,
                    });
                }
            }
            Intent::Jump => self.try_jump(tuning, now, signals),
            Intent::Slide => self.state.hitbox.trigger_slide(tuning, signals),
        }
    }

    fn try_jump(
        &mut self,
        tuning: &LocomotionTuning,
        now: f64,
        signals: &mut Vec<LocomotionSignal>,
    ) {
        let cooled_down = now - self.state.last_jump_time >= f64::from(tuning.jump_cooldown);

        if self.state.grounded && cooled_down {
            self.state.vertical_velocity = tuning.jump_force;
            self.state.last_jump_time = now;
            debug!("Jump accepted at t={:.3}", now);
            signals.push(LocomotionSignal::JumpStarted);
        } else {
            trace!(
                "Jump dropped: grounded={}, cooled_down={}",
                self.state.grounded, cooled_down
            );
        }
    }

    /// Updates grounded flags from the sample. Returns the probed surface
    /// height under the actor, if any.
    fn check_ground(
        &mut self,
        ground: GroundSample,
        tuning: &LocomotionTuning,
        signals: &mut Vec<LocomotionSignal>,
    ) -> Option<f32> {
        let state = &mut self.state;
        state.was_grounded = state.grounded;
        state.ground_distance = ground.distance_or_infinity();
        state.grounded = state.ground_distance <= tuning.ground_check_distance;

        if state.grounded && !state.was_grounded {
            debug!("Landed: vertical_velocity={:.3}", state.vertical_velocity);
            signals.push(LocomotionSignal::Landed);
        } else if !state.grounded && state.was_grounded {
            debug!("Left ground: ground_distance={:.3}", state.ground_distance);
        }

        if state.grounded && state.vertical_velocity < 0.0 {
            state.vertical_velocity = 0.0;
        }

        ground
            .distance
            .map(|distance| state.height + tuning.ground_check_offset().y - distance)
    }

    fn apply_vertical_movement(
        &mut self,
        tuning: &LocomotionTuning,
        dt: f32,
        surface_height: Option<f32>,
    ) {
        let state = &mut self.state;
        if !state.grounded {
            state.vertical_velocity += tuning.gravity * dt;
        }
        state.height += state.vertical_velocity * dt;

        // Never integrate through the surface the probe saw
        if let Some(surface) = surface_height {
            if state.height < surface {
                state.height = surface;
            }
        }
    }

    fn move_lateral(&mut self, tuning: &LocomotionTuning, dt: f32) {
        let target = self.lanes.offset(self.state.lane);
        self.state.lateral_offset =
            move_towards(self.state.lateral_offset, target, tuning.lateral_speed * dt);

        if approximately(self.state.lateral_offset, target) {
            self.state.target_yaw_degrees = 0.0;
        }
    }

    fn apply_yaw(&mut self, tuning: &LocomotionTuning, dt: f32) {
        let speed = if approximately(self.state.target_yaw_degrees, 0.0) {
            tuning.return_yaw_speed
        } else {
            tuning.yaw_speed
        };

        self.state.current_yaw_degrees = move_towards(
            self.state.current_yaw_degrees,
            self.state.target_yaw_degrees,
            speed * dt,
        );
    }
}

/// Linear step from `current` toward `target`, never past it.
pub(crate) fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}

fn approximately(a: f32, b: f32) -> bool {
    (a - b).abs() <= ARRIVAL_EPSILON
}
