//! Developer hotkeys for inspecting a run (feature `dev-tools`).
//!
//! - F1: log the runner's state as JSON
//! - F2: reset the pace ramp
//! - F3: log track pool occupancy

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;
use serde::Serialize;

use crate::animation::AnimatorTriggers;
use crate::core::{RunConfig, TickSet};
use crate::locomotion::{ActorLocomotion, ActorState, Runner};
use crate::pace::{PaceRamp, PaceReset};
use crate::track::{TrackGenerator, TrackPiece};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (dump_runner_state, reset_pace, log_track_pool).in_set(TickSet::Effects),
        );
    }
}

/// What F1 prints.
#[derive(Debug, Serialize)]
pub struct RunnerSnapshot<'a> {
    pub seed: u64,
    pub elapsed_secs: f64,
    pub pace: Option<f32>,
    pub pending_triggers: Vec<&'a str>,
    pub clip: Option<&'a str>,
    pub actor: &'a ActorState,
}

fn dump_runner_state(
    keyboard: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    run_config: Res<RunConfig>,
    pace: Option<Res<PaceRamp>>,
    runners: Query<(&ActorLocomotion, &AnimatorTriggers), With<Runner>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    for (locomotion, triggers) in &runners {
        let snapshot = RunnerSnapshot {
            seed: run_config.seed,
            elapsed_secs: time.elapsed_secs_f64(),
            pace: pace.as_deref().map(PaceRamp::multiplier),
            pending_triggers: triggers.pending().collect(),
            clip: triggers.clip(),
            actor: locomotion.state(),
        };

        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => info!("Runner state:\n{}", json),
            Err(e) => warn!("Failed to serialize runner state: {}", e),
        }
    }
}

fn reset_pace(keyboard: Res<ButtonInput<KeyCode>>, mut resets: MessageWriter<PaceReset>) {
    if keyboard.just_pressed(KeyCode::F2) {
        resets.write(PaceReset);
    }
}

fn log_track_pool(
    keyboard: Res<ButtonInput<KeyCode>>,
    track: Option<Res<TrackGenerator>>,
    pieces: Query<&TrackPiece>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    let Some(generator) = track else {
        info!("Track pool: no generator (catalog failed to load)");
        return;
    };

    let segments = generator.segments();
    let spans: Vec<String> = segments
        .iter()
        .map(|segment| {
            format!(
                "#{} {:.1}..{:.1}",
                segment.id.0,
                segment.world.forward_coordinate(),
                segment.exit_anchor.forward_coordinate()
            )
        })
        .collect();
    let mut mirrored: Vec<u64> = pieces.iter().map(|piece| piece.id.0).collect();
    mirrored.sort_unstable();
    info!(
        "Track pool: {}/{} segments {:?}, entities {:?}, endpoint z={:.2}",
        segments.len(),
        generator.max_active_segments(),
        spans,
        mirrored,
        generator.last_endpoint().forward_coordinate()
    );
}
