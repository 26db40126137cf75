//! Score and cosmetic stage progression

use super::collision::Support;
use super::state::{GameEvent, GameState};
use crate::config::SimConfig;

/// Award a point for landing on a platform other than the last one landed on.
/// Resting on the same platform never re-scores.
pub fn update(state: &mut GameState, support: Support, config: &SimConfig) {
    let Some(platform_id) = support.platform_id() else {
        return;
    };
    if state.last_landed == Some(platform_id) {
        return;
    }

    state.last_landed = Some(platform_id);
    state.score += 1;
    state.events.push(GameEvent::Scored { score: state.score });

    if state.score.is_multiple_of(config.score_threshold) {
        state.stage = (state.stage + 1) % config.stage_count;
        log::debug!("Stage advanced to {} at score {}", state.stage, state.score);
        state
            .events
            .push(GameEvent::StageAdvanced { stage: state.stage });
    }
}
