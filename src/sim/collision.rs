//! Support detection between the avatar and the platform set
//!
//! A platform supports the avatar when, under a candidate scroll offset,
//! the avatar's feet lie inside the platform's thickness band, the two
//! horizontal spans overlap, and the avatar is not ascending.

use super::state::{Avatar, Platform};
use crate::config::SimConfig;

/// Result of a support check
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Support {
    None,
    SupportedBy {
        platform_id: u32,
        /// Platform left edge at the moment of contact
        platform_x: f32,
    },
}

impl Support {
    pub fn is_supported(&self) -> bool {
        matches!(self, Support::SupportedBy { .. })
    }

    pub fn platform_id(&self) -> Option<u32> {
        match self {
            Support::SupportedBy { platform_id, .. } => Some(*platform_id),
            Support::None => None,
        }
    }
}

/// Check a single platform against the avatar
pub fn supports(avatar: &Avatar, platform: &Platform, scroll_offset: f32, config: &SimConfig) -> bool {
    if avatar.vel < 0.0 {
        return false;
    }

    let top = platform.screen_y(scroll_offset);
    let bottom = top + config.platform_height;
    let feet = avatar.bottom();
    let left = platform.pos.x;
    let right = left + config.platform_width;

    top <= feet && feet <= bottom && avatar.x < right && avatar.right() > left
}

/// Find the supporting platform under `candidate_offset`.
///
/// Platforms are iterated in id order (bottom-to-top), so if several
/// qualify the lowest wins.
pub fn resolve(
    avatar: &Avatar,
    platforms: &[Platform],
    candidate_offset: f32,
    config: &SimConfig,
) -> Support {
    platforms
        .iter()
        .find(|p| supports(avatar, p, candidate_offset, config))
        .map_or(Support::None, |p| Support::SupportedBy {
            platform_id: p.id,
            platform_x: p.pos.x,
        })
}
