//! Input domain: swipe classification over a single pointer stream.

use bevy::prelude::*;

use crate::input::{Intent, LaneDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Began,
    Moved,
    Ended,
    Canceled,
}

/// Pointer sample in screen space with +Y pointing up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer: u64,
    pub phase: PointerPhase,
    pub position: Vec2,
}

/// Minimum travel in pixels before a drag counts as a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    pub horizontal: f32,
    pub vertical: f32,
}

impl SwipeThresholds {
    pub fn from_viewport(viewport: Vec2, fraction: f32) -> Self {
        Self {
            horizontal: viewport.x * fraction,
            vertical: viewport.y * fraction,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum GesturePhase {
    #[default]
    Idle,
    Tracking { pointer: u64, origin: Vec2 },
}

/// Turns one pointer's drags into intents. Only the pointer that began the
/// current gesture is followed; other pointers are ignored until it lifts.
#[derive(Resource, Debug, Clone)]
pub struct GestureRecognizer {
    thresholds: SwipeThresholds,
    phase: GesturePhase,
}

impl GestureRecognizer {
    pub fn new(thresholds: SwipeThresholds) -> Self {
        Self {
            thresholds,
            phase: GesturePhase::Idle,
        }
    }

    pub fn thresholds(&self) -> SwipeThresholds {
        self.thresholds
    }

    pub fn pointer(&mut self, event: PointerEvent) -> Option<Intent> {
        match (event.phase, self.phase) {
            (PointerPhase::Began, GesturePhase::Idle) => {
                self.phase = GesturePhase::Tracking {
                    pointer: event.pointer,
                    origin: event.position,
                };
                None
            }
            (PointerPhase::Began, GesturePhase::Tracking { pointer, .. })
                if pointer == event.pointer =>
            {
                self.phase = GesturePhase::Tracking {
                    pointer,
                    origin: event.position,
                };
                None
            }
            (PointerPhase::Moved, GesturePhase::Tracking { pointer, origin })
                if pointer == event.pointer =>
            {
                let intent = self.classify(event.position - origin);
                if intent.is_some() {
                    self.phase = GesturePhase::Idle;
                }
                intent
            }
            (
                PointerPhase::Ended | PointerPhase::Canceled,
                GesturePhase::Tracking { pointer, .. },
            ) if pointer == event.pointer => {
                self.phase = GesturePhase::Idle;
                None
            }
            _ => None,
        }
    }

    fn classify(&self, delta: Vec2) -> Option<Intent> {
        if delta.y.abs() > self.thresholds.vertical && delta.y.abs() > delta.x.abs() {
            return Some(if delta.y > 0.0 {
                Intent::Jump
            } else {
                Intent::Slide
            });
        }

        if delta.x.abs() > self.thresholds.horizontal {
            return Some(Intent::ChangeLane(LaneDirection::from_sign(delta.x)));
        }

        None
    }
}
