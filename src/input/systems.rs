//! Input domain: sampling keyboard, touch and mouse into intents.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::input::{
    GestureRecognizer, GestureTuning, Intent, KeyBindings, PointerEvent, PointerPhase,
    SwipeThresholds,
};

/// Pointer id used for left-mouse drags so they never collide with touch ids.
const MOUSE_POINTER: u64 = u64::MAX;

/// Thresholds are fixed from the window size at startup.
pub(crate) fn setup_gesture_recognizer(
    mut commands: Commands,
    tuning: Res<GestureTuning>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let viewport = match windows.single() {
        Ok(window) => Vec2::new(window.width(), window.height()),
        Err(_) => {
            warn!(
                "No primary window, sizing swipe thresholds from fallback viewport {:?}",
                tuning.fallback_viewport
            );
            Vec2::from_array(tuning.fallback_viewport)
        }
    };

    let recognizer = GestureRecognizer::new(SwipeThresholds::from_viewport(
        viewport,
        tuning.swipe_threshold_fraction,
    ));
    info!("Swipe thresholds: {:?}", recognizer.thresholds());
    commands.insert_resource(recognizer);
}

pub(crate) fn read_intents(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    bindings: Res<KeyBindings>,
    tuning: Res<GestureTuning>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut touches: MessageReader<TouchInput>,
    mut recognizer: ResMut<GestureRecognizer>,
    mut intents: MessageWriter<Intent>,
) {
    intents.write_batch(bindings.intents(&keyboard));

    if !tuning.enable_swipe {
        touches.clear();
        return;
    }

    for touch in touches.read() {
        let phase = match touch.phase {
            TouchPhase::Started => PointerPhase::Began,
            TouchPhase::Moved => PointerPhase::Moved,
            TouchPhase::Ended => PointerPhase::Ended,
            TouchPhase::Canceled => PointerPhase::Canceled,
        };
        let event = PointerEvent {
            pointer: touch.id,
            phase,
            position: flip_y(touch.position),
        };
        if let Some(intent) = recognizer.pointer(event) {
            intents.write(intent);
        }
    }

    let cursor = windows
        .single()
        .ok()
        .and_then(|window| window.cursor_position());
    if let Some(event) = mouse_pointer_event(&mouse, cursor) {
        if let Some(intent) = recognizer.pointer(event) {
            intents.write(intent);
        }
    }
}

fn mouse_pointer_event(
    mouse: &ButtonInput<MouseButton>,
    cursor: Option<Vec2>,
) -> Option<PointerEvent> {
    let phase = if mouse.just_pressed(MouseButton::Left) {
        PointerPhase::Began
    } else if mouse.just_released(MouseButton::Left) {
        PointerPhase::Ended
    } else if mouse.pressed(MouseButton::Left) {
        PointerPhase::Moved
    } else {
        return None;
    };

    // Releasing outside the window still has to end the gesture
    let position = match (cursor, phase) {
        (Some(position), _) => flip_y(position),
        (None, PointerPhase::Ended) => Vec2::ZERO,
        (None, _) => return None,
    };

    Some(PointerEvent {
        pointer: MOUSE_POINTER,
        phase,
        position,
    })
}

/// Window coordinates grow downward; gestures are classified with +Y up.
fn flip_y(position: Vec2) -> Vec2 {
    Vec2::new(position.x, -position.y)
}
