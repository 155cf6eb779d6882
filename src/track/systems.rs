//! Track domain: generator setup, per-tick stepping and entity mirroring.

use bevy::prelude::*;

use crate::core::{RunConfig, to_world_translation};
use crate::locomotion::{ActorLocomotion, Runner};
use crate::track::{
    SegmentCatalog, SegmentEntities, SegmentVisuals, TrackEvent, TrackGenerator, TrackPiece,
    TrackTuning,
};

const SURFACE_THICKNESS: f32 = 0.2;

pub(crate) fn setup_track(
    mut commands: Commands,
    catalog: Option<Res<SegmentCatalog>>,
    tuning: Res<TrackTuning>,
    run_config: Res<RunConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Some(catalog) = catalog else {
        error!("Track generation halted: no valid segment catalog");
        return;
    };

    let (generator, events) = match TrackGenerator::new(catalog.clone(), &tuning, run_config.seed)
    {
        Ok(result) => result,
        Err(e) => {
            error!("Track generation halted: {}", e);
            return;
        }
    };

    let mut visuals = SegmentVisuals::default();
    for variant in catalog.variants() {
        visuals.meshes.push(meshes.add(Cuboid::new(
            variant.width,
            SURFACE_THICKNESS,
            variant.length,
        )));
        visuals.materials.push(materials.add(StandardMaterial {
            base_color: variant.tint,
            ..default()
        }));
    }

    let mut entities = SegmentEntities::default();
    apply_track_events(&mut commands, &mut entities, &visuals, &generator, events);

    info!(
        "Track ready: {} variants, {} segments seeded, endpoint z={:.2}",
        catalog.len(),
        generator.segments().len(),
        generator.last_endpoint().forward_coordinate()
    );

    commands.insert_resource(generator);
    commands.insert_resource(entities);
    commands.insert_resource(visuals);
}

pub(crate) fn step_track(
    mut commands: Commands,
    mut generator: ResMut<TrackGenerator>,
    mut entities: ResMut<SegmentEntities>,
    visuals: Res<SegmentVisuals>,
    runners: Query<&ActorLocomotion, With<Runner>>,
) {
    let Some(runner) = runners.iter().next() else {
        return;
    };

    let events = generator.step(runner.state().forward_distance);
    apply_track_events(&mut commands, &mut entities, &visuals, &generator, events);
}

fn apply_track_events(
    commands: &mut Commands,
    entities: &mut SegmentEntities,
    visuals: &SegmentVisuals,
    generator: &TrackGenerator,
    events: Vec<TrackEvent>,
) {
    for event in events {
        match event {
            TrackEvent::Spawned(id) => {
                let Some(segment) = generator.segment(id) else {
                    continue;
                };

                let surface_center =
                    Vec3::new(0.0, -SURFACE_THICKNESS * 0.5, segment.length * 0.5);
                let mut piece = commands.spawn((
                    TrackPiece { id },
                    segment.world.to_world_transform(),
                    Visibility::default(),
                ));

                if let (Some(mesh), Some(material)) = (
                    visuals.meshes.get(segment.variant),
                    visuals.materials.get(segment.variant),
                ) {
                    piece.with_child((
                        Mesh3d(mesh.clone()),
                        MeshMaterial3d(material.clone()),
                        Transform::from_translation(to_world_translation(surface_center)),
                    ));
                }

                entities.by_id.insert(id, piece.id());
            }
            TrackEvent::Evicted(segment) => {
                if let Some(entity) = entities.by_id.remove(&segment.id) {
                    commands.entity(entity).despawn();
                }
            }
        }
    }
}
