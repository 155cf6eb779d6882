//! Pace domain: the multiplier and its tuning.

use bevy::ecs::message::Message;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PaceTuning {
    pub initial: f32,
    /// Added every `interval` seconds.
    pub step: f32,
    /// Seconds of real time between steps.
    pub interval: f32,
    pub max: f32,
}

impl Default for PaceTuning {
    fn default() -> Self {
        Self {
            initial: 1.0,
            step: 0.05,
            interval: 10.0,
            max: 1.5,
        }
    }
}

/// Restart the ramp from its initial multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaceReset;

impl Message for PaceReset {}

/// Monotonic multiplier: rises by `step` each `interval`, capped at `max`.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PaceRamp {
    tuning: PaceTuning,
    multiplier: f32,
    elapsed: f32,
}

impl PaceRamp {
    pub fn new(tuning: PaceTuning) -> Self {
        Self {
            multiplier: tuning.initial,
            elapsed: 0.0,
            tuning,
        }
    }

    pub fn multiplier(&self) -> f32 {
        self.multiplier
    }

    /// Advances by `dt` seconds of real time. Returns true when the
    /// multiplier changed.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.multiplier >= self.tuning.max || self.tuning.interval <= 0.0 {
            return false;
        }

        self.elapsed += dt;
        let before = self.multiplier;
        while self.elapsed >= self.tuning.interval && self.multiplier < self.tuning.max {
            self.elapsed -= self.tuning.interval;
            self.multiplier = (self.multiplier + self.tuning.step).min(self.tuning.max);
        }

        self.multiplier != before
    }

    pub fn reset(&mut self) {
        self.multiplier = self.tuning.initial;
        self.elapsed = 0.0;
    }
}
