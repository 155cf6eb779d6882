//! Range checks for tuning values loaded from runner.ron.

use thiserror::Error;

use super::data::*;

/// A tuning value outside the range the simulation accepts.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{section}.{field} = {value} is invalid: {expected}")]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

/// Helper macro for checking a value against a predicate
macro_rules! check_range {
    ($errors:expr, $section:expr, $field:expr, $value:expr, $ok:expr, $expected:expr) => {
        let value = $value;
        if !value.is_finite() || !$ok(value) {
            $errors.push(ValidationError {
                section: $section,
                field: $field,
                value,
                expected: $expected,
            });
        }
    };
}

/// Validate every section of a runner configuration.
/// Returns a list of validation errors, empty if all values are usable.
pub fn validate_runner_config(config: &RunnerConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let non_negative = |v: f32| v >= 0.0;
    let positive = |v: f32| v > 0.0;

    // Locomotion
    let loco = &config.locomotion;
    check_range!(
        errors,
        "locomotion",
        "forward_speed",
        loco.forward_speed,
        non_negative,
        ">= 0"
    );
    check_range!(
        errors,
        "locomotion",
        "lateral_speed",
        loco.lateral_speed,
        positive,
        "> 0"
    );
    check_range!(
        errors,
        "locomotion",
        "left_lane_x",
        loco.left_lane_x,
        |v: f32| v < 0.0,
        "< 0"
    );
    check_range!(
        errors,
        "locomotion",
        "right_lane_x",
        loco.right_lane_x,
        positive,
        "> 0"
    );
    check_range!(
        errors,
        "locomotion",
        "yaw_angle",
        loco.yaw_angle,
        non_negative,
        ">= 0"
    );
    check_range!(
        errors,
        "locomotion",
        "yaw_speed",
        loco.yaw_speed,
        non_negative,
        ">= 0"
    );
    check_range!(
        errors,
        "locomotion",
        "return_yaw_speed",
        loco.return_yaw_speed,
        non_negative,
        ">= 0"
    );
    check_range!(
        errors,
        "locomotion",
        "jump_force",
        loco.jump_force,
        non_negative,
        ">= 0"
    );
    check_range!(
        errors,
        "locomotion",
        "gravity",
        loco.gravity,
        |v: f32| v < 0.0,
        "< 0"
    );
    check_range!(
        errors,
        "locomotion",
        "ground_check_distance",
        loco.ground_check_distance,
        non_negative,
        ">= 0"
    );
    check_range!(
        errors,
        "locomotion",
        "jump_cooldown",
        loco.jump_cooldown,
        non_negative,
        ">= 0"
    );
    check_range!(
        errors,
        "locomotion",
        "sliding_collider_duration",
        loco.sliding_collider_duration,
        non_negative,
        ">= 0"
    );
    check_range!(
        errors,
        "locomotion",
        "running_collider_reactivate_delay",
        loco.running_collider_reactivate_delay,
        non_negative,
        ">= 0"
    );

    // Gestures
    check_range!(
        errors,
        "gestures",
        "swipe_threshold_fraction",
        config.gestures.swipe_threshold_fraction,
        |v: f32| (0.05..=0.5).contains(&v),
        "between 0.05 and 0.5"
    );

    // Track
    let track = &config.track;
    check_range!(
        errors,
        "track",
        "max_active_segments",
        track.max_active_segments as f32,
        |v: f32| v >= 1.0,
        ">= 1"
    );
    check_range!(
        errors,
        "track",
        "spawn_ahead_distance",
        track.spawn_ahead_distance,
        non_negative,
        ">= 0"
    );

    // Pace
    let pace = &config.pace;
    check_range!(errors, "pace", "initial", pace.initial, positive, "> 0");
    check_range!(errors, "pace", "step", pace.step, non_negative, ">= 0");
    check_range!(errors, "pace", "interval", pace.interval, positive, "> 0");
    check_range!(
        errors,
        "pace",
        "max",
        pace.max,
        |v: f32| v >= pace.initial,
        ">= pace.initial"
    );

    errors
}
