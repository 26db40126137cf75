//! Simulation constants
//!
//! Loaded once at startup and validated before any run is created.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Startup constants for the engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === View ===
    pub view_width: f32,
    pub view_height: f32,

    // === Entities ===
    pub avatar_size: f32,
    pub platform_width: f32,
    pub platform_height: f32,

    // === Physics (per tick) ===
    /// Downward acceleration added to velocity each tick
    pub gravity: f32,
    /// Velocity set on jump (negative = upward)
    pub jump_impulse: f32,
    /// Horizontal platform motion
    pub drift_speed: f32,

    // === Platforms ===
    /// Vertical spacing at spawn
    pub platform_gap: f32,
    /// Steady-state active platform count
    pub min_platforms: usize,
    /// Bounded re-sampling for non-overlapping spawn positions
    pub spawn_attempts: u32,

    // === Scoring ===
    /// Points per stage advance
    pub score_threshold: u64,
    /// Number of cosmetic stages
    pub stage_count: u32,

    // === Clock ===
    pub tick_hz: u32,
    pub max_substeps: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,

            avatar_size: AVATAR_SIZE,
            platform_width: PLATFORM_WIDTH,
            platform_height: PLATFORM_HEIGHT,

            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            drift_speed: DRIFT_SPEED,

            platform_gap: PLATFORM_GAP,
            min_platforms: MIN_PLATFORMS,
            spawn_attempts: SPAWN_ATTEMPTS,

            score_threshold: SCORE_THRESHOLD,
            stage_count: STAGE_COUNT,

            tick_hz: TICK_HZ,
            max_substeps: MAX_SUBSTEPS,
        }
    }
}

impl SimConfig {
    /// Reject configurations that could soft-lock or break invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.platform_width <= 0.0 || self.view_width < 3.0 * self.platform_width {
            return Err(ConfigError::ViewTooNarrow {
                view_width: self.view_width,
                platform_width: self.platform_width,
            });
        }
        if self.platform_height <= 0.0 {
            return Err(ConfigError::PlatformHeight(self.platform_height));
        }
        if self.avatar_size <= 0.0 || self.avatar_size >= self.view_width {
            return Err(ConfigError::AvatarSize {
                avatar_size: self.avatar_size,
                view_width: self.view_width,
            });
        }
        if self.platform_gap < self.avatar_size {
            return Err(ConfigError::GapTooSmall {
                gap: self.platform_gap,
                avatar_size: self.avatar_size,
            });
        }
        if !(0.0..=self.max_platform_x()).contains(&self.drift_speed) {
            return Err(ConfigError::DriftSpeed {
                speed: self.drift_speed,
                max: self.max_platform_x(),
            });
        }
        if self.gravity <= 0.0 {
            return Err(ConfigError::Gravity(self.gravity));
        }
        if self.jump_impulse >= 0.0 {
            return Err(ConfigError::JumpImpulse(self.jump_impulse));
        }
        if self.view_height <= 0.0 {
            return Err(ConfigError::Zero("view_height"));
        }
        if self.min_platforms == 0 {
            return Err(ConfigError::Zero("min_platforms"));
        }
        if self.spawn_attempts == 0 {
            return Err(ConfigError::Zero("spawn_attempts"));
        }
        if self.score_threshold == 0 {
            return Err(ConfigError::Zero("score_threshold"));
        }
        if self.stage_count == 0 {
            return Err(ConfigError::Zero("stage_count"));
        }
        if self.tick_hz == 0 {
            return Err(ConfigError::Zero("tick_hz"));
        }
        if self.max_substeps == 0 {
            return Err(ConfigError::Zero("max_substeps"));
        }
        Ok(())
    }

    /// Parse and validate a JSON config (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Fixed timestep in seconds
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_hz as f32
    }

    /// Rightmost legal left edge for a platform
    pub fn max_platform_x(&self) -> f32 {
        self.view_width - self.platform_width
    }

    /// Horizontally centered platform left edge
    pub fn center_platform_x(&self) -> f32 {
        self.max_platform_x() / 2.0
    }

    /// Horizontally centered avatar left edge
    pub fn avatar_start_x(&self) -> f32 {
        (self.view_width - self.avatar_size) / 2.0
    }

    /// Fixed on-screen top of the avatar; its feet rest on the lowest platform at start
    pub fn avatar_y(&self) -> f32 {
        self.view_height - self.platform_gap - self.avatar_size
    }
}
