//! Playfield points and vectors
//!
//! Positions and velocities share one representation. Hit testing works on
//! squared distances so the hot path never takes a square root.

use glam::Vec2;

/// A position or velocity in playfield coordinates
pub type Point2D = Vec2;

/// Component-wise sum of two points
#[inline]
pub fn add(a: Point2D, b: Point2D) -> Point2D {
    a + b
}

/// Squared Euclidean distance between two points
#[inline]
pub fn distance_squared(a: Point2D, b: Point2D) -> f32 {
    let d = a - b;
    d.x * d.x + d.y * d.y
}
