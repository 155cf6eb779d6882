//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::animation::AnimationTriggerNames;
use crate::core::Pose;
use crate::input::GestureTuning;
use crate::locomotion::LocomotionTuning;
use crate::pace::PaceTuning;
use crate::track::TrackTuning;

// ============================================================================
// Common wrapper for RON files with schema_version and items
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub items: Vec<T>,
}

// ============================================================================
// Runner configuration (runner.ron) - single struct, not a list
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RunnerConfig {
    pub schema_version: u32,
    /// Fixed track seed for replaying a run; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub locomotion: LocomotionTuning,
    #[serde(default)]
    pub gestures: GestureTuning,
    #[serde(default)]
    pub track: TrackTuning,
    #[serde(default)]
    pub animation: AnimationTriggerNames,
    #[serde(default)]
    pub pace: PaceTuning,
}

// ============================================================================
// Track segments (segments.ron)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SegmentDef {
    pub id: String,
    pub length: f32,
    pub width: f32,
    /// Defaults to the variant's local origin.
    #[serde(default)]
    pub entry: PoseDef,
    /// Where the next segment attaches. Required; `None` is an authoring error.
    #[serde(default)]
    pub exit_anchor: Option<PoseDef>,
    #[serde(default = "default_tint")]
    pub tint: (f32, f32, f32),
}

fn default_tint() -> (f32, f32, f32) {
    (0.45, 0.45, 0.5)
}

/// Authoring form of a pose: translation plus heading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
pub struct PoseDef {
    pub translation: (f32, f32, f32),
    #[serde(default)]
    pub yaw_degrees: f32,
}

impl PoseDef {
    pub fn to_pose(&self) -> Pose {
        let (x, y, z) = self.translation;
        Pose::from_yaw_degrees(Vec3::new(x, y, z), self.yaw_degrees)
    }
}
