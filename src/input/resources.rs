//! Input domain: gesture tuning and key bindings.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::input::{Intent, LaneDirection};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GestureTuning {
    pub enable_swipe: bool,
    /// Fraction of the viewport width/height a drag must cover.
    pub swipe_threshold_fraction: f32,
    /// Viewport size assumed when no primary window exists.
    pub fallback_viewport: [f32; 2],
}

impl Default for GestureTuning {
    fn default() -> Self {
        Self {
            enable_swipe: true,
            swipe_threshold_fraction: 0.2,
            fallback_viewport: [1280.0, 720.0],
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub lane_left: Vec<KeyCode>,
    pub lane_right: Vec<KeyCode>,
    pub jump: Vec<KeyCode>,
    pub slide: Vec<KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            lane_left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            lane_right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            jump: vec![KeyCode::KeyW, KeyCode::ArrowUp],
            slide: vec![KeyCode::KeyS, KeyCode::ArrowDown],
        }
    }
}

impl KeyBindings {
    /// Intents for keys pressed this frame. Left wins over right when both
    /// are pressed on the same frame.
    pub fn intents(&self, keyboard: &ButtonInput<KeyCode>) -> Vec<Intent> {
        let mut intents = Vec::new();

        if keyboard.any_just_pressed(self.lane_left.iter().copied()) {
            intents.push(Intent::ChangeLane(LaneDirection::Left));
        } else if keyboard.any_just_pressed(self.lane_right.iter().copied()) {
            intents.push(Intent::ChangeLane(LaneDirection::Right));
        }

        if keyboard.any_just_pressed(self.jump.iter().copied()) {
            intents.push(Intent::Jump);
        }

        if keyboard.any_just_pressed(self.slide.iter().copied()) {
            intents.push(Intent::Slide);
        }

        intents
    }
}
