//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};
use crate::sim::Target;

/// Segments used for target circles
pub const CIRCLE_SEGMENTS: u32 = 48;

/// Number of colored bands in a target
pub const BULLSEYE_BANDS: u32 = 5;

/// Outline width as a fraction of the target radius
const OUTLINE_FRACTION: f32 = 0.04;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a bullseye target.
///
/// Bands are painted outer to inner as stacked filled circles, alternating
/// red and white, on top of a dark outline disc.
pub fn bullseye(target: &Target) -> Vec<Vertex> {
    let bands = BULLSEYE_BANDS;
    let mut vertices = Vec::with_capacity(((bands + 1) * CIRCLE_SEGMENTS * 3) as usize);

    vertices.extend(circle(
        target.pos,
        target.radius,
        colors::TARGET_OUTLINE,
        CIRCLE_SEGMENTS,
    ));

    let inner = target.radius * (1.0 - OUTLINE_FRACTION);
    for band in 0..bands {
        let radius = inner * (bands - band) as f32 / bands as f32;
        let color = if band % 2 == 0 {
            colors::TARGET_RED
        } else {
            colors::TARGET_WHITE
        };
        vertices.extend(circle(target.pos, radius, color, CIRCLE_SEGMENTS));
    }

    vertices
}
