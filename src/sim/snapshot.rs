//! Read-only per-tick view for rendering shells

use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};
use crate::config::SimConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarView {
    pub x: f32,
    pub y: f32,
    pub size: f32,
}

/// A platform with the scroll offset already applied
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformView {
    pub id: u32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub avatar: AvatarView,
    pub platforms: Vec<PlatformView>,
    pub score: u64,
    pub high_score: u64,
    pub stage_index: u32,
    pub phase: GamePhase,
    pub is_game_over: bool,
    pub ticks: u64,
}

impl Snapshot {
    pub fn capture(state: &GameState, high_score: u64, config: &SimConfig) -> Self {
        Self {
            avatar: AvatarView {
                x: state.avatar.x,
                y: state.avatar.y,
                size: state.avatar.size,
            },
            platforms: state
                .platforms
                .iter()
                .map(|p| PlatformView {
                    id: p.id,
                    x: p.pos.x,
                    y: p.screen_y(state.scroll_offset),
                    width: config.platform_width,
                    height: config.platform_height,
                })
                .collect(),
            score: state.score,
            high_score,
            stage_index: state.stage,
            phase: state.phase,
            is_game_over: state.is_game_over(),
            ticks: state.time_ticks,
        }
    }
}
