//! Error types for engine configuration.
//!
//! The simulation itself never fails mid-run: jumps while airborne are
//! no-ops and game over is a phase, not an error. Everything here is
//! rejected at startup.

use std::io;

/// A configuration that cannot produce a fair, non-soft-locking run.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("view width {view_width} must be at least 3x platform width {platform_width}")]
    ViewTooNarrow { view_width: f32, platform_width: f32 },

    #[error("avatar size {avatar_size} must be positive and fit in view width {view_width}")]
    AvatarSize { avatar_size: f32, view_width: f32 },

    #[error("platform gap {gap} must be at least the avatar size {avatar_size}")]
    GapTooSmall { gap: f32, avatar_size: f32 },

    #[error("drift speed {speed} must be within [0, {max}]")]
    DriftSpeed { speed: f32, max: f32 },

    #[error("gravity must be positive, got {0}")]
    Gravity(f32),

    #[error("jump impulse must be negative (upward), got {0}")]
    JumpImpulse(f32),

    #[error("{0} must be non-zero")]
    Zero(&'static str),

    #[error("platform height must be positive, got {0}")]
    PlatformHeight(f32),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
