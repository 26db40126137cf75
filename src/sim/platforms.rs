//! Platform set: procedural spawning, horizontal drift and recycling
//!
//! Platforms are kept sorted by id. Every spawn lands strictly above the
//! current highest platform, so id order is also bottom-to-top order.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Platform;
use crate::config::SimConfig;
use crate::spans_overlap;

/// Ordered collection of active platforms
#[derive(Debug, Clone, Default)]
pub struct PlatformSet {
    platforms: Vec<Platform>,
    next_id: u32,
}

impl PlatformSet {
    /// Stack `count` platforms at uniform spacing from the bottom of the view upward.
    ///
    /// The lowest platform is centered so the avatar starts standing on it;
    /// every other platform is placed clear of the one immediately below.
    pub fn initialize(count: usize, config: &SimConfig, rng: &mut Pcg32) -> Self {
        let mut set = Self {
            platforms: Vec::with_capacity(count),
            next_id: 1,
        };

        let mut below_x: Option<f32> = None;
        for i in 0..count {
            let y = config.view_height - (i as f32 + 1.0) * config.platform_gap;
            let x = match below_x {
                None => config.center_platform_x(),
                Some(bx) => sample_clear_x(rng, config, Some(bx)),
            };
            set.push(Vec2::new(x, y), random_direction(rng));
            below_x = Some(x);
        }

        set
    }

    fn push(&mut self, pos: Vec2, direction: f32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.platforms.push(Platform { id, pos, direction });
        id
    }

    /// Move every platform by its drift, reflecting off both view edges
    pub fn advance_drift(&mut self, config: &SimConfig) {
        for platform in &mut self.platforms {
            let (x, direction) = drift_step(platform.pos.x, platform.direction, config);
            platform.pos.x = x;
            platform.direction = direction;
        }
    }

    /// Remove platforms scrolled below the view and spawn one replacement above
    /// the ladder for each. Returns the ids of spawned platforms.
    pub fn recycle(&mut self, scroll_offset: f32, config: &SimConfig, rng: &mut Pcg32) -> Vec<u32> {
        // Measured before removal so the ladder continues even if everything scrolled away
        let Some(top) = self.highest().map(|p| p.pos) else {
            return Vec::new();
        };

        let before = self.platforms.len();
        self.platforms
            .retain(|p| p.screen_y(scroll_offset) < config.view_height);
        let removed = before - self.platforms.len();

        let mut spawned = Vec::with_capacity(removed);
        let mut top = top;
        for _ in 0..removed {
            let x = sample_clear_x(rng, config, Some(top.x));
            let pos = Vec2::new(x, top.y - config.platform_gap);
            let id = self.push(pos, random_direction(rng));
            log::debug!("Spawned platform {} at ({:.1}, {:.1})", id, pos.x, pos.y);
            spawned.push(id);
            top = pos;
        }

        spawned
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Platform> {
        self.platforms.iter()
    }

    pub fn as_slice(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn get(&self, id: u32) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }

    /// Platform with the smallest world y (top of the ladder)
    pub fn highest(&self) -> Option<&Platform> {
        self.platforms.iter().min_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    }

    /// Platform with the largest world y (bottom of the ladder)
    pub fn lowest(&self) -> Option<&Platform> {
        self.platforms.iter().max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    }
}

/// One drift step for a single platform. If the move would leave
/// `[0, max_platform_x]`, the direction flips and the move is recomputed
/// from the original position.
pub fn drift_step(x: f32, direction: f32, config: &SimConfig) -> (f32, f32) {
    let max_x = config.max_platform_x();
    let moved = x + direction * config.drift_speed;
    if moved < 0.0 || moved > max_x {
        let flipped = -direction;
        (x + flipped * config.drift_speed, flipped)
    } else {
        (moved, direction)
    }
}

/// Sample a left edge in `[0, max_platform_x]` that does not overlap `below_x`.
///
/// Bounded re-sampling; the fallback picks whichever view edge is farther
/// from the neighbor, which is always clear when the view is at least three
/// platforms wide.
pub fn sample_clear_x(rng: &mut Pcg32, config: &SimConfig, below_x: Option<f32>) -> f32 {
    let max_x = config.max_platform_x();
    let width = config.platform_width;

    for _ in 0..config.spawn_attempts {
        let x = rng.random_range(0.0..=max_x);
        if below_x.is_none_or(|bx| !spans_overlap(x, bx, width)) {
            return x;
        }
    }

    let bx = below_x.unwrap_or(0.0);
    let fallback = if bx >= width { 0.0 } else { max_x };
    log::warn!(
        "Spawn sampler exhausted {} attempts, placing at x={}",
        config.spawn_attempts,
        fallback
    );
    fallback
}

fn random_direction(rng: &mut Pcg32) -> f32 {
    if rng.random_bool(0.5) { 1.0 } else { -1.0 }
}
