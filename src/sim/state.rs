//! Game state and core simulation types
//!
//! Everything a run mutates lives in [`GameState`]; it is owned by the
//! [`Simulation`](super::Simulation) and only touched inside a tick.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::platforms::PlatformSet;
use crate::config::SimConfig;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for `start()`; ticks are no-ops
    Ready,
    /// Active gameplay
    Playing,
    /// Run ended; only `restart()` leaves this phase
    GameOver,
}

/// Avatar motion state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Motion {
    /// Under gravity, jumps ignored
    Airborne,
    /// Resting on a platform, may jump
    Grounded,
}

/// Presentation hooks emitted during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    /// First settle on a platform since the last jump
    Landed { platform_id: u32 },
    Scored { score: u64 },
    StageAdvanced { stage: u32 },
    PlatformSpawned { platform_id: u32 },
    GameOver { score: u64 },
}

/// The player avatar. Its on-screen y is fixed; the world scrolls instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Avatar {
    /// Left edge
    pub x: f32,
    /// Top edge (constant for the whole run)
    pub y: f32,
    pub size: f32,
    /// Vertical velocity (positive = falling)
    pub vel: f32,
    pub motion: Motion,
}

impl Avatar {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            x: config.avatar_start_x(),
            y: config.avatar_y(),
            size: config.avatar_size,
            vel: 0.0,
            motion: Motion::Grounded,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.size
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.size
    }

    pub fn is_grounded(&self) -> bool {
        self.motion == Motion::Grounded
    }

    /// Center the avatar over a platform whose left edge is `platform_x`
    pub fn snap_to(&mut self, platform_x: f32, platform_width: f32) {
        self.x = platform_x + platform_width / 2.0 - self.size / 2.0;
    }
}

/// A drifting platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    /// Stable identity; never reused within a run
    pub id: u32,
    /// Left edge (x) and world-space top (y, fixed at creation)
    pub pos: Vec2,
    /// Drift direction, +1 right / -1 left
    pub direction: f32,
}

impl Platform {
    /// Top edge on screen under a given scroll offset
    #[inline]
    pub fn screen_y(&self, scroll_offset: f32) -> f32 {
        self.pos.y + scroll_offset
    }
}

/// Complete run state (deterministic given seed and inputs)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only source of randomness in a run
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub avatar: Avatar,
    pub platforms: PlatformSet,
    /// Cumulative vertical offset applied to every platform
    pub scroll_offset: f32,
    pub score: u64,
    /// Cosmetic stage (background) index
    pub stage: u32,
    /// Identity of the most recently landed platform
    pub last_landed: Option<u32>,
    /// Platform the avatar settled on since its last jump; settle bounces
    /// back onto it don't re-fire `Landed`
    pub resting_on: Option<u32>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh run with the avatar standing on the lowest platform
    pub fn new(seed: u64, config: &SimConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let platforms = PlatformSet::initialize(config.min_platforms, config, &mut rng);
        let last_landed = platforms.lowest().map(|p| p.id);

        Self {
            seed,
            rng,
            phase: GamePhase::Ready,
            avatar: Avatar::new(config),
            platforms,
            scroll_offset: 0.0,
            score: 0,
            stage: 0,
            last_landed,
            resting_on: last_landed,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
