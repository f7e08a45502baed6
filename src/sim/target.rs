//! Bouncing circular targets
//!
//! A target moves one velocity step per tick and reflects off the playfield
//! edges. Reflection is checked after the move; any overshoot is pulled back
//! onto the boundary so the target always ends a step fully inside.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::point::{Point2D, add, distance_squared};
use crate::consts::*;

/// A bouncing target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub pos: Point2D,
    /// Playfield units per tick
    pub vel: Point2D,
    /// Fixed for the lifetime of the target
    pub radius: f32,
}

impl Target {
    pub fn new(pos: Point2D, vel: Point2D, radius: f32) -> Self {
        Self { pos, vel, radius }
    }

    /// Spawn a target fully inside the playfield.
    ///
    /// Both velocity components are positive, so every fresh target heads
    /// down-right until its first bounce.
    pub fn spawn<R: Rng>(rng: &mut R) -> Self {
        let radius: f32 = rng.random_range(TARGET_RADIUS_MIN..TARGET_RADIUS_MAX);
        let vel = Vec2::new(
            rng.random_range(TARGET_SPEED_MIN..TARGET_SPEED_MAX),
            rng.random_range(TARGET_SPEED_MIN..TARGET_SPEED_MAX),
        );
        let pos = Vec2::new(
            rng.random_range(radius..PLAYFIELD_WIDTH - radius),
            rng.random_range(radius..PLAYFIELD_HEIGHT - radius),
        );
        Self { pos, vel, radius }
    }

    /// Advance one tick and bounce off the playfield edges
    pub fn step(&mut self) {
        self.pos = add(self.pos, self.vel);
        let r = self.radius;
        (self.pos.x, self.vel.x) = reflect_axis(self.pos.x, self.vel.x, r, PLAYFIELD_WIDTH);
        (self.pos.y, self.vel.y) = reflect_axis(self.pos.y, self.vel.y, r, PLAYFIELD_HEIGHT);
    }

    /// Squared distance from the target center to a point
    #[inline]
    pub fn offset_squared(&self, point: Point2D) -> f32 {
        distance_squared(self.pos, point)
    }

    /// Whether a point lies inside or on the target edge
    #[inline]
    pub fn contains(&self, point: Point2D) -> bool {
        self.offset_squared(point) <= self.radius * self.radius
    }

    /// Whether the target lies fully inside the playfield
    pub fn in_bounds(&self) -> bool {
        let r = self.radius;
        (r..=PLAYFIELD_WIDTH - r).contains(&self.pos.x)
            && (r..=PLAYFIELD_HEIGHT - r).contains(&self.pos.y)
    }
}

/// Reflect one axis against `[radius, extent - radius]`
#[inline]
fn reflect_axis(pos: f32, vel: f32, radius: f32, extent: f32) -> (f32, f32) {
    let max = extent - radius;
    if pos > max {
        (max, -vel)
    } else if pos < radius {
        (radius, -vel)
    } else {
        (pos, vel)
    }
}
