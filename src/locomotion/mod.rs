//! Locomotion domain: runner state machine, ground probing and plugin wiring.

mod actor;
mod components;
mod events;
mod hitbox;
mod probe;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use actor::{ActorLocomotion, ActorState, Tick};
pub use components::{ActiveHitbox, Runner, RunnerModel};
pub use events::LocomotionSignal;
pub use hitbox::{HitboxKind, HitboxState, HitboxSwitch};
pub use probe::{GroundProbe, GroundSample, LayerMask, NoGround};
pub use resources::{LaneTable, LocomotionTuning};

use bevy::prelude::*;

use crate::core::TickSet;
use crate::locomotion::systems::{
    follow_runner, spawn_runner, step_runner, sync_runner_transform,
};

pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .add_message::<LocomotionSignal>()
            .add_systems(Startup, spawn_runner)
            .add_systems(
                Update,
                (step_runner, sync_runner_transform, follow_runner)
                    .chain()
                    .in_set(TickSet::Locomotion),
            );
    }
}
