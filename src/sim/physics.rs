//! Fixed-step vertical integration
//!
//! The avatar never moves vertically on screen. Gravity feeds its velocity
//! and the velocity drives the world scroll offset instead.

use super::collision::{Support, resolve};
use super::state::{Avatar, Motion, Platform};
use crate::config::SimConfig;

/// Apply a jump if grounded. Airborne requests are ignored, not queued.
pub fn try_jump(avatar: &mut Avatar, config: &SimConfig) -> bool {
    if !avatar.is_grounded() {
        return false;
    }
    avatar.vel = config.jump_impulse;
    avatar.motion = Motion::Airborne;
    true
}

/// Advance velocity and scroll offset by one tick.
///
/// The candidate offset is tested for support first; on support the
/// previous offset is kept, velocity resets and the avatar centers over
/// the platform. Returns the support found under the candidate offset.
pub fn integrate(
    avatar: &mut Avatar,
    scroll_offset: &mut f32,
    platforms: &[Platform],
    config: &SimConfig,
) -> Support {
    let vel = avatar.vel + config.gravity;
    let candidate = *scroll_offset - vel;

    let support = resolve(avatar, platforms, candidate, config);

    match support {
        Support::SupportedBy { platform_x, .. } => {
            avatar.vel = 0.0;
            avatar.motion = Motion::Grounded;
            avatar.snap_to(platform_x, config.platform_width);
        }
        Support::None => {
            avatar.vel = vel;
            avatar.motion = Motion::Airborne;
            *scroll_offset = candidate;
        }
    }

    support
}
