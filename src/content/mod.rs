//! Content domain: RON-driven tuning and the segment catalog.

mod data;
mod loader;
mod validation;


pub use data::{DataFile, PoseDef, RunnerConfig, SegmentDef};
pub use loader::{ContentLoadError, load_data_file, load_single_file, parse_ron};
pub use validation::{ValidationError, validate_runner_config};

use std::path::Path;

use bevy::prelude::*;

use crate::core::RunConfig;
use crate::track::SegmentCatalog;

pub const DATA_DIR: &str = "assets/data";
pub const RUNNER_FILE: &str = "runner.ron";
pub const SEGMENTS_FILE: &str = "segments.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

fn load_content(mut commands: Commands) {
    let base = Path::new(DATA_DIR);

    let config = load_runner_config(&base.join(RUNNER_FILE));
    info!(
        "Runner tuning: forward {:.1}/s, jump height {:.2}, {} segments ahead",
        config.locomotion.forward_speed,
        config.locomotion.jump_height(),
        config.track.max_active_segments
    );
    if let Some(seed) = config.seed {
        info!("Using seed {} from {}", seed, RUNNER_FILE);
        commands.insert_resource(RunConfig { seed });
    }
    commands.insert_resource(config.locomotion);
    commands.insert_resource(config.gestures);
    commands.insert_resource(config.track);
    commands.insert_resource(config.animation);
    commands.insert_resource(config.pace);

    match load_segment_catalog(&base.join(SEGMENTS_FILE)) {
        Some(catalog) => {
            info!("Loaded {} segment variants", catalog.len());
            commands.insert_resource(catalog);
        }
        None => error!("No usable segment catalog; the track will not be generated"),
    }
}

/// Read runner.ron, falling back to defaults when it is missing or invalid.
pub fn load_runner_config(path: &Path) -> RunnerConfig {
    let config = match load_single_file::<RunnerConfig>(path) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}; using default tuning", e);
            return RunnerConfig::default();
        }
    };

    let errors = validate_runner_config(&config);
    if errors.is_empty() {
        return config;
    }

    for e in &errors {
        error!("Runner config error: {}", e);
    }
    warn!(
        "{} invalid value(s) in {}; using default tuning",
        errors.len(),
        path.display()
    );
    RunnerConfig::default()
}

/// Read segments.ron into a validated catalog. Any problem yields `None`.
pub fn load_segment_catalog(path: &Path) -> Option<SegmentCatalog> {
    let defs = match load_data_file::<SegmentDef>(path) {
        Ok(defs) => defs,
        Err(e) => {
            error!("{}", e);
            return None;
        }
    };

    match SegmentCatalog::from_defs(&defs) {
        Ok(catalog) => Some(catalog),
        Err(errors) => {
            for e in &errors {
                error!("Segment catalog error: {}", e);
            }
            None
        }
    }
}
