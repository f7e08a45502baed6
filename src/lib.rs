//! Aim Trainer - bouncing-target click practice
//!
//! Core modules:
//! - `sim`: Deterministic simulation (targets, input, scoring, fixed timestep)
//! - `hud`: Statistic labels shown next to the playfield
//! - `platform`: Pointer event translation from browser coordinates
//! - `renderer`: WebGPU rendering pipeline

pub mod hud;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use hud::HudText;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (logical pixels, y grows downward)
    pub const PLAYFIELD_WIDTH: f32 = 1920.0;
    pub const PLAYFIELD_HEIGHT: f32 = 1080.0;

    /// Number of live targets (slots never grow or shrink)
    pub const TARGET_COUNT: usize = 3;

    /// Target radius range, half-open
    pub const TARGET_RADIUS_MIN: f32 = 50.0;
    pub const TARGET_RADIUS_MAX: f32 = 100.0;
    /// Per-axis spawn speed range (playfield units per tick), half-open
    pub const TARGET_SPEED_MIN: f32 = 1.0;
    pub const TARGET_SPEED_MAX: f32 = 10.0;

    /// Points per squared unit of distance inside the target radius
    pub const SCORE_SCALE: f64 = 0.0001;

    /// Fixed simulation timestep in milliseconds (60 Hz)
    pub const STEP_MS: f64 = 1000.0 / 60.0;
    /// Maximum catch-up ticks per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}
