//! Animation domain: the trigger sink and its component form.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::animation::AnimationTriggerNames;
use crate::locomotion::LocomotionSignal;

/// Fire-and-forget receiver for animator triggers. Nothing reads back
/// whether a clip actually played.
pub trait AnimationSink {
    fn trigger(&mut self, name: &str);
    fn reset_trigger(&mut self, name: &str);

    /// Jump sets "Jump", a slide sets "Dash", landing clears "Jump" and sets "Run".
    fn apply_signal(&mut self, signal: &LocomotionSignal, names: &AnimationTriggerNames) {
        match signal {
            LocomotionSignal::JumpStarted => self.trigger(&names.jump),
            LocomotionSignal::SlideStarted => self.trigger(&names.dash),
            LocomotionSignal::Landed => {
                self.reset_trigger(&names.jump);
                self.trigger(&names.run);
            }
            LocomotionSignal::SlideEnded
            | LocomotionSignal::RunningResumed
            | LocomotionSignal::LaneChanged { .. } => {}
        }
    }
}

/// Trigger parameters and the current clip of a stand-in animator. A trigger
/// stays pending until the animator plays it or it is reset.
#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct AnimatorTriggers {
    /// Oldest first, no duplicates.
    pending: VecDeque<String>,
    /// `None` until the first trigger is played.
    clip: Option<String>,
}

impl AnimatorTriggers {
    pub fn pending(&self) -> impl Iterator<Item = &str> {
        self.pending.iter().map(String::as_str)
    }

    pub fn clip(&self) -> Option<&str> {
        self.clip.as_deref()
    }

    /// Plays the oldest pending trigger, making it the current clip.
    pub fn consume(&mut self) -> Option<&str> {
        let next = self.pending.pop_front()?;
        self.clip = Some(next);
        self.clip.as_deref()
    }
}

impl AnimationSink for AnimatorTriggers {
    fn trigger(&mut self, name: &str) {
        if !self.pending.iter().any(|pending| pending == name) {
            self.pending.push_back(name.to_string());
        }
    }

    fn reset_trigger(&mut self, name: &str) {
        self.pending.retain(|pending| pending != name);
    }
}
