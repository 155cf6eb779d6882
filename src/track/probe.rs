//! Track domain: ground probing against resident segment surfaces.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::locomotion::{GroundProbe, LayerMask};
use crate::track::TrackSegment;

/// Hit distances are reported on a grid of this many steps per unit, so a
/// probe resting at a tuned offset reads that offset exactly.
const DISTANCE_STEPS_PER_UNIT: f32 = 100_000.0;

/// Each segment's walkable surface is the rectangle `|x| <= width / 2`,
/// `0 <= z <= length` on its local `y = 0` plane.
pub struct TrackGroundProbe<'a> {
    segments: &'a VecDeque<TrackSegment>,
}

impl<'a> TrackGroundProbe<'a> {
    pub fn new(segments: &'a VecDeque<TrackSegment>) -> Self {
        Self { segments }
    }
}

impl GroundProbe for TrackGroundProbe<'_> {
    fn cast(
        &self,
        origin: Vec3,
        direction: Dir3,
        max_distance: f32,
        layers: LayerMask,
    ) -> Option<f32> {
        if !layers.intersects(LayerMask::GROUND) {
            return None;
        }

        self.segments
            .iter()
            .filter_map(|segment| surface_hit(segment, origin, direction, max_distance))
            .min_by(f32::total_cmp)
            .map(snap_distance)
    }
}

fn snap_distance(distance: f32) -> f32 {
    (distance * DISTANCE_STEPS_PER_UNIT).round() / DISTANCE_STEPS_PER_UNIT
}

fn surface_hit(
    segment: &TrackSegment,
    origin: Vec3,
    direction: Dir3,
    max_distance: f32,
) -> Option<f32> {
    let local_origin = segment.world.inverse_transform_point(origin);
    let local_direction = segment.world.inverse_transform_vector(*direction);

    // Surfaces are one-sided: only rays travelling downward hit them
    if local_direction.y >= -f32::EPSILON {
        return None;
    }

    let distance = -local_origin.y / local_direction.y;
    if !(0.0..=max_distance).contains(&distance) {
        return None;
    }

    let point = local_origin + local_direction * distance;
    let half_width = segment.width * 0.5;
    let on_surface = point.x.abs() <= half_width && (0.0..=segment.length).contains(&point.z);

    on_surface.then_some(distance)
}
