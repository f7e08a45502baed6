//! WebGPU rendering module
//!
//! Targets are drawn as triangle-fan bullseyes; vertices are built in
//! playfield coordinates and mapped to clip space on upload.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::{RenderState, playfield_to_ndc, scene_vertices};
pub use vertex::Vertex;
