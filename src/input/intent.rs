//! Input domain: discrete intents consumed by locomotion.

use bevy::ecs::message::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneDirection {
    Left,
    Right,
}

impl LaneDirection {
    pub fn sign(self) -> i8 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }

    pub fn from_sign(value: f32) -> Self {
        if value > 0.0 { Self::Right } else { Self::Left }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    ChangeLane(LaneDirection),
    Jump,
    Slide,
}

impl Message for Intent {}
