//! Input domain: keys and swipes to intents, plugin wiring.

mod gesture;
mod intent;
mod resources;
mod systems;


pub use gesture::{GestureRecognizer, PointerEvent, PointerPhase, SwipeThresholds};
pub use intent::{Intent, LaneDirection};
pub use resources::{GestureTuning, KeyBindings};

use bevy::prelude::*;

use crate::core::TickSet;
use crate::input::systems::{read_intents, setup_gesture_recognizer};

pub struct GesturePlugin;

impl Plugin for GesturePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GestureTuning>()
            .init_resource::<KeyBindings>()
            .add_message::<Intent>()
            .add_systems(Startup, setup_gesture_recognizer)
            .add_systems(
                Update,
                read_intents
                    .in_set(TickSet::Input)
                    .run_if(resource_exists::<GestureRecognizer>),
            );
    }
}
