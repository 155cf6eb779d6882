//! Track domain: the validated catalog of placeable segment variants.

use std::collections::HashSet;

use bevy::prelude::*;
use thiserror::Error;

use crate::content::SegmentDef;
use crate::core::Pose;

/// Authoring or configuration problems that stop track generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackConfigError {
    #[error("segment catalog is empty")]
    EmptyCatalog,
    #[error("segment '{id}' has no exit anchor")]
    MissingExitAnchor { id: String },
    #[error("segment '{id}' has invalid dimensions {length}x{width}")]
    InvalidDimensions { id: String, length: f32, width: f32 },
    #[error("segment id '{id}' is defined more than once")]
    DuplicateVariant { id: String },
    #[error("max_active_segments must be at least 1")]
    PoolTooSmall,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentVariant {
    pub id: String,
    /// Extent along the variant's local forward axis.
    pub length: f32,
    pub width: f32,
    /// Local pose that must coincide with the previous exit anchor.
    pub entry: Pose,
    /// Local pose where the next segment begins.
    pub exit_anchor: Pose,
    pub tint: Color,
}

/// Resolved at load time so spawning never has to search for an anchor.
#[derive(Resource, Debug, Clone)]
pub struct SegmentCatalog {
    variants: Vec<SegmentVariant>,
}

impl SegmentCatalog {
    pub fn from_defs(defs: &[SegmentDef]) -> Result<Self, Vec<TrackConfigError>> {
        if defs.is_empty() {
            return Err(vec![TrackConfigError::EmptyCatalog]);
        }

        let mut errors = Vec::new();
        let mut seen = HashSet::new();
        let mut variants = Vec::with_capacity(defs.len());

        for def in defs {
            if !seen.insert(def.id.as_str()) {
                errors.push(TrackConfigError::DuplicateVariant { id: def.id.clone() });
            }

            if !(def.length > 0.0 && def.width > 0.0) {
                errors.push(TrackConfigError::InvalidDimensions {
                    id: def.id.clone(),
                    length: def.length,
                    width: def.width,
                });
            }

            let Some(exit_anchor) = &def.exit_anchor else {
                errors.push(TrackConfigError::MissingExitAnchor { id: def.id.clone() });
                continue;
            };

            let (r, g, b) = def.tint;
            variants.push(SegmentVariant {
                id: def.id.clone(),
                length: def.length,
                width: def.width,
                entry: def.entry.to_pose(),
                exit_anchor: exit_anchor.to_pose(),
                tint: Color::srgb(r, g, b),
            });
        }

        if errors.is_empty() {
            Ok(Self { variants })
        } else {
            Err(errors)
        }
    }

    pub fn variants(&self) -> &[SegmentVariant] {
        &self.variants
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
