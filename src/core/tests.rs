//! Core domain: tests for the simulation frame.

use approx::assert_relative_eq;
use bevy::prelude::*;

use super::{Pose, to_world_position, to_world_rotation, to_world_translation};

#[test]
fn test_forward_maps_to_negative_world_z() {
    let world = to_world_translation(Vec3::new(2.0, 1.0, 10.0));
    assert_eq!(world, Vec3::new(2.0, 1.0, -10.0));
}

#[test]
fn test_wide_forward_coordinate_narrows_on_conversion() {
    let world = to_world_position(-2.0, 0.5, 1_000_000.25);
    assert_eq!(world, Vec3::new(-2.0, 0.5, -1_000_000.25));
}

#[test]
fn test_positive_yaw_turns_toward_world_right() {
    let sim = Quat::from_rotation_y(30f32.to_radians());
    let heading = to_world_rotation(sim) * Vec3::NEG_Z;

    // Bevy's camera-right for a -Z forward is +X
    assert!(heading.x > 0.0);
    assert!(heading.z < 0.0);
}

#[test]
fn test_compose_then_inverse_is_identity() {
    let a = Pose::from_yaw_degrees(Vec3::new(1.0, 0.0, 5.0), 45.0);
    let round_trip = a.compose(&a.inverse());

    assert_relative_eq!(round_trip.translation.length(), 0.0, epsilon = 1e-5);
    assert!(round_trip.rotation.angle_between(Quat::IDENTITY) < 1e-4);
}

#[test]
fn test_compose_places_local_offset_in_parent_heading() {
    let parent = Pose::from_yaw_degrees(Vec3::new(0.0, 0.0, 10.0), 90.0);
    let child = parent.compose(&Pose::new(Vec3::new(0.0, 0.0, 20.0), Quat::IDENTITY));

    // Heading +90 degrees points forward along +X
    assert_relative_eq!(child.translation.x, 20.0, epsilon = 1e-4);
    assert_relative_eq!(child.translation.z, 10.0, epsilon = 1e-4);
}

#[test]
fn test_inverse_transform_point() {
    let pose = Pose::from_yaw_degrees(Vec3::new(0.0, 0.0, 10.0), 0.0);
    let local = pose.inverse_transform_point(Vec3::new(1.0, 2.0, 15.0));
    assert_eq!(local, Vec3::new(1.0, 2.0, 5.0));
}
