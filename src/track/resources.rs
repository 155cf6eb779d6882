//! Track domain: generation tuning and entity bookkeeping.

use std::collections::HashMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core::Pose;
use crate::track::SegmentId;

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrackTuning {
    /// Pool capacity; also the number of segments seeded at startup.
    pub max_active_segments: usize,
    /// Spawn when the last endpoint is closer than this ahead of the actor.
    pub spawn_ahead_distance: f32,
    /// Where the first segment's entry is placed.
    pub origin: [f32; 3],
    pub origin_yaw_degrees: f32,
}

impl Default for TrackTuning {
    fn default() -> Self {
        Self {
            max_active_segments: 7,
            spawn_ahead_distance: 50.0,
            origin: [0.0, 0.0, 0.0],
            origin_yaw_degrees: 0.0,
        }
    }
}

impl TrackTuning {
    pub fn origin(&self) -> Pose {
        Pose::from_yaw_degrees(Vec3::from_array(self.origin), self.origin_yaw_degrees)
    }
}

/// Entities mirroring resident segments, keyed by segment id.
#[derive(Resource, Debug, Default)]
pub struct SegmentEntities {
    pub by_id: HashMap<SegmentId, Entity>,
}

/// Shared render handles, one pair per catalog variant.
#[derive(Resource, Debug, Default)]
pub struct SegmentVisuals {
    pub meshes: Vec<Handle<Mesh>>,
    pub materials: Vec<Handle<StandardMaterial>>,
}
