//! Locomotion domain: runner spawn, per-tick step and transform sync.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::animation::AnimatorTriggers;
use crate::core::{FollowCamera, to_world_position, to_world_rotation};
use crate::input::Intent;
use crate::locomotion::{
    ActiveHitbox, ActorLocomotion, HitboxState, LocomotionSignal, LocomotionTuning, NoGround,
    Runner, RunnerModel, Tick,
};
use crate::track::{TrackGenerator, TrackGroundProbe};

const MODEL_HEIGHT: f32 = 1.8;

pub(crate) fn spawn_runner(
    mut commands: Commands,
    tuning: Res<LocomotionTuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let lanes = tuning.lane_table();
    let locomotion = ActorLocomotion::new(lanes);
    let state = locomotion.state();
    let position = to_world_position(state.lateral_offset, state.height, state.forward_distance);
    let hitbox = ActiveHitbox::from_kind(state.hitbox.active_hitbox(), &tuning);

    info!(
        "Spawning runner: lanes=[{:.2}, {:.2}, {:.2}], forward_speed={}, jump_height={:.2}",
        lanes.offset(0),
        lanes.offset(1),
        lanes.offset(2),
        tuning.forward_speed,
        tuning.jump_height()
    );

    commands.spawn((
        Runner,
        locomotion,
        hitbox,
        AnimatorTriggers::default(),
        Transform::from_translation(position),
        Visibility::default(),
        children![(
            RunnerModel,
            Mesh3d(meshes.add(Capsule3d::new(0.4, MODEL_HEIGHT - 0.8))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.9, 0.55, 0.2),
                ..default()
            })),
            Transform::from_xyz(0.0, MODEL_HEIGHT * 0.5, 0.0),
        )],
    ));
}

pub(crate) fn step_runner(
    time: Res<Time>,
    tuning: Res<LocomotionTuning>,
    track: Option<Res<TrackGenerator>>,
    mut intents: MessageReader<Intent>,
    mut signals: MessageWriter<LocomotionSignal>,
    mut query: Query<&mut ActorLocomotion, With<Runner>>,
) {
    let tick = Tick {
        dt: time.delta_secs(),
        now: time.elapsed_secs_f64(),
    };
    let intents: Vec<Intent> = intents.read().copied().collect();

    for mut locomotion in &mut query {
        let ground = match track.as_deref() {
            Some(generator) => {
                locomotion.sample_ground(&TrackGroundProbe::new(generator.segments()), &tuning)
            }
            None => locomotion.sample_ground(&NoGround, &tuning),
        };

        for signal in locomotion.step(&tuning, tick, &intents, ground) {
            signals.write(signal);
        }
    }
}

pub(crate) fn sync_runner_transform(
    tuning: Res<LocomotionTuning>,
    mut runners: Query<(&ActorLocomotion, &mut Transform, &mut ActiveHitbox), With<Runner>>,
    mut models: Query<(&ChildOf, &mut Transform), (With<RunnerModel>, Without<Runner>)>,
) {
    for (locomotion, mut transform, mut hitbox) in &mut runners {
        let state = locomotion.state();
        transform.translation =
            to_world_position(state.lateral_offset, state.height, state.forward_distance);

        let active = state.hitbox.active_hitbox();
        if hitbox.kind != active {
            *hitbox = ActiveHitbox::from_kind(active, &tuning);
            debug!(
                "Active hitbox: {:?}, half extents {}",
                hitbox.kind, hitbox.half_extents
            );
        }
    }

    for (child_of, mut transform) in &mut models {
        let Ok((locomotion, _, _)) = runners.get(child_of.parent()) else {
            continue;
        };

        let yaw = Quat::from_rotation_y(locomotion.state().current_yaw_degrees.to_radians());
        transform.rotation = to_world_rotation(yaw);

        // Stays crouched through the reactivation gap
        let squash = if locomotion.state().hitbox.state() == HitboxState::Sliding {
            0.45
        } else {
            1.0
        };
        transform.scale = Vec3::new(1.0, squash, 1.0);
        transform.translation.y = MODEL_HEIGHT * 0.5 * squash;
    }
}

pub(crate) fn follow_runner(
    runners: Query<&Transform, With<Runner>>,
    mut cameras: Query<(&mut Transform, &FollowCamera), Without<Runner>>,
) {
    let Some(runner) = runners.iter().next() else {
        return;
    };

    for (mut transform, follow) in &mut cameras {
        transform.translation.z = runner.translation.z + follow.offset.z;
    }
}
