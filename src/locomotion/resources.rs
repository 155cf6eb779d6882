//! Locomotion domain: tuning and the lane table.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionTuning {
    /// Units per second along the forward axis.
    pub forward_speed: f32,
    /// Units per second while moving between lanes.
    pub lateral_speed: f32,
    pub left_lane_x: f32,
    pub right_lane_x: f32,
    /// Peak tilt in degrees while changing lanes.
    pub yaw_angle: f32,
    /// Degrees per second toward a non-zero tilt.
    pub yaw_speed: f32,
    /// Degrees per second back to centred.
    pub return_yaw_speed: f32,
    pub jump_force: f32,
    /// Must be negative.
    pub gravity: f32,
    pub ground_check_distance: f32,
    /// Probe origin relative to the actor's feet.
    pub ground_check_offset: [f32; 3],
    /// Seconds between accepted jumps.
    pub jump_cooldown: f32,
    /// Seconds the sliding hitbox stays active.
    pub sliding_collider_duration: f32,
    /// Seconds with no hitbox between the slide ending and running resuming.
    pub running_collider_reactivate_delay: f32,
    pub running_hitbox_half_extents: [f32; 3],
    pub sliding_hitbox_half_extents: [f32; 3],
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            forward_speed: 5.0,
            lateral_speed: 10.0,
            left_lane_x: -2.0,
            right_lane_x: 2.0,
            yaw_angle: 30.0,
            yaw_speed: 300.0,
            return_yaw_speed: 120.0,
            jump_force: 8.0,
            gravity: -20.0,
            ground_check_distance: 0.1,
            ground_check_offset: [0.0, 0.1, 0.0],
            jump_cooldown: 1.0,
            sliding_collider_duration: 1.0,
            running_collider_reactivate_delay: 0.0,
            running_hitbox_half_extents: [0.4, 0.9, 0.4],
            sliding_hitbox_half_extents: [0.4, 0.35, 0.7],
        }
    }
}

impl LocomotionTuning {
    pub fn ground_check_offset(&self) -> Vec3 {
        Vec3::from_array(self.ground_check_offset)
    }

    /// Apex height of a jump from flat ground: h = v^2 / (2|g|)
    pub fn jump_height(&self) -> f32 {
        self.jump_force * self.jump_force / (2.0 * self.gravity.abs())
    }

    pub fn lane_table(&self) -> LaneTable {
        LaneTable::new([self.left_lane_x, 0.0, self.right_lane_x])
    }
}

/// Lateral offsets of the three lanes, left to right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaneTable {
    offsets: [f32; LaneTable::COUNT],
}

impl LaneTable {
    pub const COUNT: usize = 3;
    pub const CENTER: usize = 1;

    pub fn new(offsets: [f32; Self::COUNT]) -> Self {
        Self { offsets }
    }

    /// Offset for `lane`, clamped into the table.
    pub fn offset(&self, lane: usize) -> f32 {
        self.offsets[Self::clamp_lane(lane as i64)]
    }

    pub fn clamp_lane(lane: i64) -> usize {
        lane.clamp(0, Self::COUNT as i64 - 1) as usize
    }
}
