//! Locomotion domain: timed switching between the running and sliding hitboxes.
//!
//! A slide opens a chain of two deferred transitions: the sliding hitbox is
//! dropped after `sliding_collider_duration`, then the running hitbox returns
//! after `running_collider_reactivate_delay`. At most one chain is pending;
//! a new slide cancels whatever is left of the old one.

use bevy::prelude::*;
use serde::Serialize;

use crate::locomotion::{LocomotionSignal, LocomotionTuning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum HitboxState {
    #[default]
    Running,
    Sliding,
}

/// Which collision shape is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HitboxKind {
    Running,
    Sliding,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
enum PendingSwitch {
    EndSlide { remaining: f32 },
    ResumeRunning { remaining: f32 },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HitboxSwitch {
    state: HitboxState,
    pending: Option<PendingSwitch>,
}

impl HitboxSwitch {
    pub fn state(&self) -> HitboxState {
        self.state
    }

    /// `None` while between the slide window closing and running resuming.
    pub fn active_hitbox(&self) -> Option<HitboxKind> {
        match (self.state, self.pending) {
            (HitboxState::Running, _) => Some(HitboxKind::Running),
            (HitboxState::Sliding, Some(PendingSwitch::ResumeRunning { .. })) => None,
            (HitboxState::Sliding, _) => Some(HitboxKind::Sliding),
        }
    }

    /// Starts (or restarts) the slide chain.
    pub fn trigger_slide(
        &mut self,
        tuning: &LocomotionTuning,
        signals: &mut Vec<LocomotionSignal>,
    ) {
        if let Some(pending) = self.pending.take() {
            debug!("Slide re-triggered, cancelling {:?}", pending);
        }

        self.state = HitboxState::Sliding;
        self.pending = Some(PendingSwitch::EndSlide {
            remaining: tuning.sliding_collider_duration,
        });
        signals.push(LocomotionSignal::SlideStarted);
    }

    /// Advances the pending chain by `dt`, firing every transition whose time
    /// has come. Overshoot carries into the next transition.
    pub fn advance(
        &mut self,
        dt: f32,
        tuning: &LocomotionTuning,
        signals: &mut Vec<LocomotionSignal>,
    ) {
        let mut budget = dt;

        while let Some(pending) = self.pending {
            match pending {
                PendingSwitch::EndSlide { remaining } => {
                    if budget < remaining {
                        self.pending = Some(PendingSwitch::EndSlide {
                            remaining: remaining - budget,
                        });
                        return;
                    }
                    budget -= remaining;
                    self.pending = Some(PendingSwitch::ResumeRunning {
                        remaining: tuning.running_collider_reactivate_delay,
                    });
                    debug!("Sliding hitbox disabled");
                    signals.push(LocomotionSignal::SlideEnded);
                }
                PendingSwitch::ResumeRunning { remaining } => {
                    if budget < remaining {
                        self.pending = Some(PendingSwitch::ResumeRunning {
                            remaining: remaining - budget,
                        });
                        return;
                    }
                    budget -= remaining;
                    self.pending = None;
                    self.state = HitboxState::Running;
                    debug!("Running hitbox re-enabled");
                    signals.push(LocomotionSignal::RunningResumed);
                }
            }
        }
    }
}
