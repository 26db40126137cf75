//! Idle/demo mode player
//!
//! Forward-simulates a single jump with the same integration and drift
//! rules the tick uses, and only jumps when the next platform up will be
//! under the avatar on the landing tick.

use super::platforms::drift_step;
use super::state::{Avatar, GameState};
use crate::config::SimConfig;

/// Upper bound on ticks simulated for one jump arc
const MAX_LOOKAHEAD: u32 = 240;

/// Decide whether to jump this tick
pub fn wants_jump(state: &GameState, config: &SimConfig) -> bool {
    let avatar = &state.avatar;
    if !avatar.is_grounded() {
        return false;
    }

    let feet = avatar.bottom();
    let offset = state.scroll_offset;

    // Nearest platform whose band is entirely above the feet
    let Some(target) = state
        .platforms
        .iter()
        .filter(|p| p.screen_y(offset) < feet - config.platform_height)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
    else {
        return false;
    };

    let Some(landing) = landing_tick(avatar, target.pos.y, offset, config) else {
        return false;
    };

    // Collision on tick t sees the platform after t-1 drift steps
    let (mut x, mut direction) = (target.pos.x, target.direction);
    for _ in 1..landing {
        (x, direction) = drift_step(x, direction, config);
    }

    avatar.x < x + config.platform_width && avatar.right() > x
}

/// Tick (1-based) on which a jump started now would land on a platform at
/// world y `platform_y`, ignoring horizontal alignment.
fn landing_tick(avatar: &Avatar, platform_y: f32, offset: f32, config: &SimConfig) -> Option<u32> {
    let feet = avatar.bottom();
    let mut vel = config.jump_impulse;
    let mut offset = offset;

    for t in 1..=MAX_LOOKAHEAD {
        let descending = vel >= 0.0;
        vel += config.gravity;
        offset -= vel;

        let top = platform_y + offset;
        if descending {
            if top <= feet && feet <= top + config.platform_height {
                return Some(t);
            }
            if top + config.platform_height < feet {
                // Fell past the band without touching it
                return None;
            }
        }
    }
    None
}
