//! Locomotion domain: the ground probe contract.

use bevy::prelude::*;

/// Surface categories a probe may be restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const GROUND: Self = Self(1 << 0);

    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

/// Nearest-obstruction query along a ray. Implementations may be a physics
/// raycast, a heightmap lookup or anything else honouring the contract:
/// return the distance from `origin` to the first surface on `layers` hit
/// along `direction` within `max_distance`, or `None`.
pub trait GroundProbe {
    fn cast(
        &self,
        origin: Vec3,
        direction: Dir3,
        max_distance: f32,
        layers: LayerMask,
    ) -> Option<f32>;
}

/// One probe result as consumed by a locomotion step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GroundSample {
    pub distance: Option<f32>,
}

impl GroundSample {
    pub const MISS: Self = Self { distance: None };

    pub fn hit(distance: f32) -> Self {
        Self {
            distance: Some(distance),
        }
    }

    /// Distance with a miss reported as infinite.
    pub fn distance_or_infinity(&self) -> f32 {
        self.distance.unwrap_or(f32::INFINITY)
    }
}

/// A probe that never hits anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoGround;

impl GroundProbe for NoGround {
    fn cast(&self, _: Vec3, _: Dir3, _: f32, _: LayerMask) -> Option<f32> {
        None
    }
}
