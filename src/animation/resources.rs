//! Animation domain: configurable trigger names.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationTriggerNames {
    pub jump: String,
    pub dash: String,
    pub run: String,
}

impl Default for AnimationTriggerNames {
    fn default() -> Self {
        Self {
            jump: "Jump".to_string(),
            dash: "Dash".to_string(),
            run: "Run".to_string(),
        }
    }
}
