//! Track domain: procedural segment chaining, pooling and plugin wiring.

mod catalog;
mod components;
mod generator;
mod probe;
mod resources;
mod systems;


pub use catalog::{SegmentCatalog, SegmentVariant, TrackConfigError};
pub use components::TrackPiece;
pub use generator::{SegmentId, TrackEvent, TrackGenerator, TrackSegment};
pub use probe::TrackGroundProbe;
pub use resources::{SegmentEntities, SegmentVisuals, TrackTuning};

use bevy::prelude::*;

use crate::core::TickSet;
use crate::track::systems::{setup_track, step_track};

pub struct TrackPlugin;

impl Plugin for TrackPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrackTuning>()
            .add_systems(Startup, setup_track)
            .add_systems(
                Update,
                step_track
                    .in_set(TickSet::Track)
                    .run_if(resource_exists::<TrackGenerator>),
            );
    }
}
