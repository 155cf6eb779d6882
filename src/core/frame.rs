//! Core domain: the simulation frame and its mapping onto Bevy world space.
//!
//! The simulation runs in a frame where +X is the right-hand lane direction,
//! +Y is up and +Z is forward, so an actor's forward distance is simply its Z.
//! Bevy is right-handed with forward along -Z; converting mirrors Z, and that
//! mirror lives here and nowhere else.

use bevy::prelude::*;

/// Rigid placement (no scale) in the simulation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub translation: Vec3,
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    pub const IDENTITY: Self = Self {
        translation: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// Pose from a translation and a heading in degrees (positive turns right).
    pub fn from_yaw_degrees(translation: Vec3, yaw_degrees: f32) -> Self {
        Self::new(translation, Quat::from_rotation_y(yaw_degrees.to_radians()))
    }

    /// Coordinate along the forward axis.
    pub fn forward_coordinate(&self) -> f64 {
        f64::from(self.translation.z)
    }

    /// `self` followed by `local`, i.e. `local` expressed in `self`'s space.
    pub fn compose(&self, local: &Pose) -> Pose {
        Pose {
            translation: self.translation + self.rotation * local.translation,
            rotation: (self.rotation * local.rotation).normalize(),
        }
    }

    pub fn inverse(&self) -> Pose {
        let rotation = self.rotation.inverse();
        Pose {
            translation: -(rotation * self.translation),
            rotation,
        }
    }

    pub fn inverse_transform_point(&self, point: Vec3) -> Vec3 {
        self.rotation.inverse() * (point - self.translation)
    }

    pub fn inverse_transform_vector(&self, vector: Vec3) -> Vec3 {
        self.rotation.inverse() * vector
    }

    pub fn to_world_transform(&self) -> Transform {
        Transform::from_translation(to_world_translation(self.translation))
            .with_rotation(to_world_rotation(self.rotation))
    }
}

pub fn to_world_translation(sim: Vec3) -> Vec3 {
    Vec3::new(sim.x, sim.y, -sim.z)
}

/// World position of a point whose forward coordinate is held in `f64`.
pub fn to_world_position(lateral: f32, height: f32, forward: f64) -> Vec3 {
    Vec3::new(lateral, height, -(forward as f32))
}

/// Conjugates a simulation rotation by the Z mirror.
pub fn to_world_rotation(sim: Quat) -> Quat {
    Quat::from_xyzw(-sim.x, -sim.y, sim.z, sim.w)
}
