//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically. Order per
//! tick: jump input, integration (with support check), platform drift,
//! recycling, scoring, terminal check.

use super::autopilot;
use super::physics;
use super::scoring;
use super::state::{GameEvent, GamePhase, GameState};
use crate::config::SimConfig;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump requested since the last tick (click/tap/space)
    pub jump: bool,
    /// Idle/demo mode - autopilot decides when to jump
    pub idle_mode: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, config: &SimConfig) {
    state.events.clear();

    // Don't tick before start or after game over
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    let jump = input.jump || (input.idle_mode && autopilot::wants_jump(state, config));
    if jump && physics::try_jump(&mut state.avatar, config) {
        state.resting_on = None;
        state.events.push(GameEvent::Jumped);
    }

    let support = physics::integrate(
        &mut state.avatar,
        &mut state.scroll_offset,
        state.platforms.as_slice(),
        config,
    );
    // Keeping the previous offset can leave the avatar hovering a few pixels
    // above the platform, so it drops and re-lands before settling
    if let Some(platform_id) = support.platform_id()
        && state.resting_on != Some(platform_id)
    {
        state.resting_on = Some(platform_id);
        state.events.push(GameEvent::Landed { platform_id });
    }

    state.platforms.advance_drift(config);

    let spawned = state
        .platforms
        .recycle(state.scroll_offset, config, &mut state.rng);
    state.events.extend(
        spawned
            .into_iter()
            .map(|platform_id| GameEvent::PlatformSpawned { platform_id }),
    );
    debug_assert!(state.platforms.len() >= config.min_platforms);

    scoring::update(state, support, config);

    if state.scroll_offset < -config.view_height {
        state.phase = GamePhase::GameOver;
        state.events.push(GameEvent::GameOver { score: state.score });
        log::info!(
            "Game over after {} ticks with score {}",
            state.time_ticks,
            state.score
        );
    }
}
