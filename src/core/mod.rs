//! Core domain: run configuration, tick ordering, and the simulation frame.

mod frame;
mod resources;

#[cfg(test)]
mod tests;

pub use frame::{Pose, to_world_position, to_world_rotation, to_world_translation};
pub use resources::RunConfig;

use bevy::prelude::*;

/// Per-frame ordering of the simulation. Later sets read state written by
/// earlier ones in the same tick.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickSet {
    /// Raw input to intents
    Input,
    /// Intents, ground probe, vertical/lateral/yaw integration, forward advance
    Locomotion,
    /// Distance-triggered spawning and eviction
    Track,
    /// Animation triggers, pacing, other fire-and-forget consumers
    Effects,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunConfig>()
            .configure_sets(
                Update,
                (
                    TickSet::Input,
                    TickSet::Locomotion,
                    TickSet::Track,
                    TickSet::Effects,
                )
                    .chain(),
            )
            .add_systems(Startup, (log_run_config, setup_camera));
    }
}

fn log_run_config(run_config: Res<RunConfig>) {
    info!("Starting run (seed: {})", run_config.seed);
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 5.0, 9.0).looking_at(Vec3::new(0.0, 1.0, -6.0), Vec3::Y),
        FollowCamera {
            offset: Vec3::new(0.0, 5.0, 9.0),
        },
    ));

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 2.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

/// Camera rig that trails the runner along the forward axis only.
#[derive(Component, Debug)]
pub struct FollowCamera {
    pub offset: Vec3,
}
