//! Animation domain: maps locomotion signals onto named animator triggers.

mod components;
mod resources;
mod systems;


pub use components::{AnimationSink, AnimatorTriggers};
pub use resources::AnimationTriggerNames;

use bevy::prelude::*;

use crate::animation::systems::{apply_animation_triggers, consume_animation_triggers};
use crate::core::TickSet;

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AnimationTriggerNames>().add_systems(
            Update,
            (apply_animation_triggers, consume_animation_triggers)
                .chain()
                .in_set(TickSet::Effects),
        );
    }
}
