//! Platform abstraction layer
//!
//! Browser pointer events arrive in element-local pixels; the simulation
//! wants playfield coordinates. This module owns that translation and the
//! mapping from raw events onto `InputState`.

pub mod input;

pub use input::{PointerEvent, element_to_playfield};
