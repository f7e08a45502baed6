//! Session state and core simulation types
//!
//! Everything one aim-training session mutates lives here, owned by a single
//! `SessionState` so several sessions can run side by side.

use std::ops::Index;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::point::Point2D;
use super::target::Target;
use super::tick::{TickEvents, tick};
use crate::consts::*;

/// Pointer and mode state fed by input events
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct InputState {
    /// Pointer held down (and not yet consumed in single-shot mode)
    pub dragging: bool,
    /// Last pointer position in playfield coordinates
    pub pointer: Point2D,
    /// Held drags keep scoring every tick instead of resolving once
    pub tracking_mode: bool,
}

impl InputState {
    /// Pointer pressed at `pos`
    pub fn press(&mut self, pos: Point2D) {
        self.dragging = true;
        self.pointer = pos;
    }

    /// Pointer moved to `pos`; only followed while a tracking drag is held
    pub fn pointer_moved(&mut self, pos: Point2D) {
        if self.dragging && self.tracking_mode {
            self.pointer = pos;
        }
    }

    /// Pointer released
    pub fn release(&mut self) {
        self.dragging = false;
    }

    pub fn set_tracking_mode(&mut self, enabled: bool) {
        self.tracking_mode = enabled;
    }
}

/// Running statistics for one session
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub score: f64,
    /// Sum of hit distances from target centers
    pub total_error: f64,
    pub hit_count: u32,
    pub miss_count: u32,
    /// Includes the initial set of targets
    pub targets_created: u32,
}

impl SessionStats {
    /// Mean hit distance from center, `None` before the first hit
    pub fn average_error(&self) -> Option<f64> {
        (self.hit_count > 0).then(|| self.total_error / self.hit_count as f64)
    }

    /// Fraction of decisions that were hits, `None` before any decision
    pub fn accuracy(&self) -> Option<f64> {
        let attempts = self.hit_count + self.miss_count;
        (attempts > 0).then(|| self.hit_count as f64 / attempts as f64)
    }
}

/// Fixed-size set of target slots
///
/// Slots are replaced in place; the number of targets never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetSet {
    slots: [Target; TARGET_COUNT],
}

impl TargetSet {
    /// Fill every slot with a freshly spawned target
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        Self {
            slots: std::array::from_fn(|_| Target::spawn(&mut *rng)),
        }
    }

    pub fn from_slots(slots: [Target; TARGET_COUNT]) -> Self {
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, slot: usize) -> Option<&Target> {
        self.slots.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Target> {
        self.slots.get_mut(slot)
    }

    /// Overwrite a slot, returning the target it held
    pub fn replace(&mut self, slot: usize, target: Target) -> Target {
        std::mem::replace(&mut self.slots[slot], target)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Target> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Target> {
        self.slots.iter_mut()
    }
}

impl Index<usize> for TargetSet {
    type Output = Target;

    fn index(&self, slot: usize) -> &Target {
        &self.slots[slot]
    }
}

impl<'a> IntoIterator for &'a TargetSet {
    type Item = &'a Target;
    type IntoIter = std::slice::Iter<'a, Target>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

/// Read-only view handed to display layers
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub stats: SessionStats,
    pub average_error: Option<f64>,
    pub accuracy: Option<f64>,
    pub tracking_mode: bool,
    pub targets: Vec<Target>,
}

/// Complete session state
///
/// Generic over the random source so tests can inject their own; the game
/// uses a seeded `Pcg32`.
#[derive(Debug, Clone)]
pub struct SessionState<R = Pcg32> {
    pub targets: TargetSet,
    pub input: InputState,
    pub stats: SessionStats,
    rng: R,
}

impl SessionState<Pcg32> {
    /// Create a new session with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_rng(Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> SessionState<R> {
    /// Create a new session drawing targets from `rng`
    pub fn with_rng(mut rng: R) -> Self {
        let targets = TargetSet::spawn(&mut rng);
        Self {
            targets,
            input: InputState::default(),
            stats: SessionStats {
                targets_created: TARGET_COUNT as u32,
                ..Default::default()
            },
            rng,
        }
    }

    /// Start a fresh session: zeroed stats and newly spawned targets.
    ///
    /// Input state (tracking mode, a held pointer) carries over.
    pub fn reset(&mut self) {
        self.targets = TargetSet::spawn(&mut self.rng);
        self.stats = SessionStats {
            targets_created: TARGET_COUNT as u32,
            ..Default::default()
        };
        log::info!("Session reset ({} targets)", TARGET_COUNT);
    }

    /// Advance one fixed timestep
    pub fn tick(&mut self) -> TickEvents {
        tick(&mut self.targets, &mut self.input, &mut self.stats, &mut self.rng)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            stats: self.stats.clone(),
            average_error: self.stats.average_error(),
            accuracy: self.stats.accuracy(),
            tracking_mode: self.input.tracking_mode,
            targets: self.targets.iter().copied().collect(),
        }
    }
}
