//! Animation domain: signal fan-out to animator components.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::animation::{AnimationSink, AnimationTriggerNames, AnimatorTriggers};
use crate::locomotion::{LocomotionSignal, Runner};

pub(crate) fn apply_animation_triggers(
    names: Res<AnimationTriggerNames>,
    mut signals: MessageReader<LocomotionSignal>,
    mut animators: Query<&mut AnimatorTriggers, With<Runner>>,
) {
    for signal in signals.read() {
        trace!("Animation signal: {:?}", signal);
        for mut triggers in &mut animators {
            triggers.apply_signal(signal, &names);
        }
    }
}

/// Stands in for clip playback: one transition per animator per tick.
pub(crate) fn consume_animation_triggers(mut animators: Query<&mut AnimatorTriggers>) {
    for mut triggers in &mut animators {
        if let Some(clip) = triggers.consume() {
            debug!("Animator entered clip: {}", clip);
        }
    }
}
