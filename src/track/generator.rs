//! Track domain: distance-triggered segment spawning over a bounded FIFO.
//!
//! Segments are chained in world space: each new piece is placed so its entry
//! pose sits exactly on the previous piece's exit anchor, and nothing is
//! parented, so placements stay independent. The actor only ever moves
//! forward, so the oldest segment is always the one to evict.

use std::collections::VecDeque;

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::Pose;
use crate::track::{SegmentCatalog, TrackConfigError, TrackTuning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub u64);

/// One placed piece of track.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSegment {
    pub id: SegmentId,
    /// Index into the catalog.
    pub variant: usize,
    /// Placement of the variant's local origin.
    pub world: Pose,
    /// World pose where the following segment begins.
    pub exit_anchor: Pose,
    pub length: f32,
    pub width: f32,
}

/// Pool mutations produced by a spawn.
#[derive(Debug, Clone, PartialEq)]
pub enum TrackEvent {
    Spawned(SegmentId),
    Evicted(TrackSegment),
}

#[derive(Resource, Debug)]
pub struct TrackGenerator {
    catalog: SegmentCatalog,
    max_active_segments: usize,
    spawn_ahead_distance: f32,
    pool: VecDeque<TrackSegment>,
    last_endpoint: Pose,
    next_id: u64,
    rng: ChaCha8Rng,
}

impl TrackGenerator {
    /// Builds the generator and seeds a full window of segments from `origin`.
    /// Returns the spawn events of that initial window.
    pub fn new(
        catalog: SegmentCatalog,
        tuning: &TrackTuning,
        seed: u64,
    ) -> Result<(Self, Vec<TrackEvent>), TrackConfigError> {
        if tuning.max_active_segments == 0 {
            return Err(TrackConfigError::PoolTooSmall);
        }
        if catalog.is_empty() {
            return Err(TrackConfigError::EmptyCatalog);
        }

        let mut generator = Self {
            catalog,
            max_active_segments: tuning.max_active_segments,
            spawn_ahead_distance: tuning.spawn_ahead_distance,
            pool: VecDeque::with_capacity(tuning.max_active_segments + 1),
            last_endpoint: tuning.origin(),
            next_id: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        };

        let mut events = Vec::new();
        for _ in 0..generator.max_active_segments {
            events.extend(generator.spawn());
        }

        Ok((generator, events))
    }

    pub fn segments(&self) -> &VecDeque<TrackSegment> {
        &self.pool
    }

    pub fn segment(&self, id: SegmentId) -> Option<&TrackSegment> {
        self.pool.iter().find(|segment| segment.id == id)
    }

    pub fn last_endpoint(&self) -> Pose {
        self.last_endpoint
    }

    pub fn max_active_segments(&self) -> usize {
        self.max_active_segments
    }

    /// Spawns at most one segment if the actor is within `spawn_ahead_distance`
    /// of the current endpoint.
    pub fn step(&mut self, actor_forward: f64) -> Vec<TrackEvent> {
        let gap = self.last_endpoint.forward_coordinate() - actor_forward;
        if gap < f64::from(self.spawn_ahead_distance) {
            self.spawn()
        } else {
            Vec::new()
        }
    }

    /// Places a uniformly chosen variant at the current endpoint, advances the
    /// endpoint to its exit anchor and evicts the oldest segment if the pool
    /// overflows.
    pub fn spawn(&mut self) -> Vec<TrackEvent> {
        let index = self.rng.random_range(0..self.catalog.len());
        let variant = &self.catalog.variants()[index];

        let world = self.last_endpoint.compose(&variant.entry.inverse());
        let exit_anchor = world.compose(&variant.exit_anchor);

        let id = SegmentId(self.next_id);
        self.next_id += 1;

        self.pool.push_back(TrackSegment {
            id,
            variant: index,
            world,
            exit_anchor,
            length: variant.length,
            width: variant.width,
        });
        self.last_endpoint = exit_anchor;

        debug!(
            "Spawned segment {:?} ('{}') at z={:.2}, next endpoint z={:.2}",
            id,
            variant.id,
            world.forward_coordinate(),
            exit_anchor.forward_coordinate()
        );

        let mut events = vec![TrackEvent::Spawned(id)];
        if self.pool.len() > self.max_active_segments {
            if let Some(oldest) = self.pool.pop_front() {
                debug!("Evicted segment {:?}", oldest.id);
                events.push(TrackEvent::Evicted(oldest));
            }
        }
        events
    }
}
