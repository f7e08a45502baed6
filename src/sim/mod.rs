//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected RNG only
//! - Stable iteration order (by target slot)
//! - No rendering or platform dependencies

pub mod point;
pub mod state;
pub mod target;
pub mod tick;
pub mod timestep;

pub use point::{Point2D, add, distance_squared};
pub use state::{InputState, SessionSnapshot, SessionState, SessionStats, TargetSet};
pub use target::Target;
pub use tick::{TickEvents, tick};
pub use timestep::FixedTimestep;
