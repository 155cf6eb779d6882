//! Pace domain: a time-scale ramp independent of locomotion and track state.

mod ramp;
mod systems;

#[cfg(test)]
mod tests;

pub use ramp::{PaceRamp, PaceReset, PaceTuning};

use bevy::prelude::*;

use crate::core::TickSet;
use crate::pace::systems::{setup_pace, update_pace};

pub struct PacePlugin;

impl Plugin for PacePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PaceTuning>()
            .add_message::<PaceReset>()
            .add_systems(Startup, setup_pace)
            .add_systems(
                Update,
                update_pace
                    .in_set(TickSet::Effects)
                    .run_if(resource_exists::<PaceRamp>),
            );
    }
}
