//! Parrot Jump - An endless vertical platform-hopping arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, platforms, scoring)
//! - `config`: Startup constants with validation
//! - `highscores`: In-memory session leaderboard
//!
//! Rendering, input devices and audio live in whatever shell drives the
//! engine; this crate only advances state and exposes snapshots.

pub mod config;
pub mod error;
pub mod highscores;
pub mod sim;

pub use config::SimConfig;
pub use error::ConfigError;
pub use highscores::HighScores;
pub use sim::{GameEvent, GamePhase, Simulation, Snapshot};

/// Default game constants
pub mod consts {
    /// Visible window size (pixels)
    pub const VIEW_WIDTH: f32 = 400.0;
    pub const VIEW_HEIGHT: f32 = 600.0;

    /// Avatar is a square of this edge length
    pub const AVATAR_SIZE: f32 = 30.0;

    /// Platform defaults (shared by every platform)
    pub const PLATFORM_WIDTH: f32 = 60.0;
    pub const PLATFORM_HEIGHT: f32 = 15.0;
    /// Vertical spacing between consecutive platforms
    pub const PLATFORM_GAP: f32 = VIEW_HEIGHT / 6.0;
    /// Horizontal platform motion (pixels/tick)
    pub const DRIFT_SPEED: f32 = 2.0;

    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 0.6;
    /// Upward velocity set on jump (negative = up)
    pub const JUMP_IMPULSE: f32 = -15.0;

    /// Points per stage advance
    pub const SCORE_THRESHOLD: u64 = 10;
    /// Number of cosmetic stages (backgrounds)
    pub const STAGE_COUNT: u32 = 6;
    /// Steady-state active platform count
    pub const MIN_PLATFORMS: usize = 5;

    /// Fixed simulation rate
    pub const TICK_HZ: u32 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Re-sampling attempts before the spawn sampler falls back
    pub const SPAWN_ATTEMPTS: u32 = 64;
}

/// True if two horizontal spans of equal `width` starting at `a` and `b` overlap
#[inline]
pub fn spans_overlap(a: f32, b: f32, width: f32) -> bool {
    (a - b).abs() < width
}
