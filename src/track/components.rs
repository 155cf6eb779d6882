//! Track domain: segment entity components.

use bevy::prelude::*;

use crate::track::SegmentId;

/// Root entity of a placed segment.
#[derive(Component, Debug)]
pub struct TrackPiece {
    pub id: SegmentId,
}
