//! Locomotion domain: runner entity components.

use bevy::prelude::*;

use crate::locomotion::{HitboxKind, LocomotionTuning};

#[derive(Component, Debug)]
pub struct Runner;

/// Visual model child of the runner; carries the yaw tilt.
#[derive(Component, Debug)]
pub struct RunnerModel;

/// Collision shape currently enabled on the runner, for collision consumers.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ActiveHitbox {
    pub kind: Option<HitboxKind>,
    pub half_extents: Vec3,
}

impl ActiveHitbox {
    pub fn from_kind(kind: Option<HitboxKind>, tuning: &LocomotionTuning) -> Self {
        let half_extents = match kind {
            Some(HitboxKind::Running) => Vec3::from_array(tuning.running_hitbox_half_extents),
            Some(HitboxKind::Sliding) => Vec3::from_array(tuning.sliding_hitbox_half_extents),
            None => Vec3::ZERO,
        };
        Self { kind, half_extents }
    }
}
