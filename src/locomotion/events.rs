//! Locomotion domain: signals emitted by a locomotion step.

use bevy::ecs::message::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocomotionSignal {
    JumpStarted,
    /// Ground contact after being airborne; once per contact.
    Landed,
    SlideStarted,
    SlideEnded,
    RunningResumed,
    /// Only when the lane index actually moved.
    LaneChanged { from: usize, to: usize },
}

impl Message for LocomotionSignal {}
