//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (platforms by id, bottom-to-top)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod physics;
pub mod platforms;
pub mod scoring;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use clock::Simulation;
pub use collision::{Support, resolve};
pub use physics::{integrate, try_jump};
pub use platforms::{PlatformSet, drift_step, sample_clear_x};
pub use snapshot::{AvatarView, PlatformView, Snapshot};
pub use state::{Avatar, GameEvent, GamePhase, GameState, Motion, Platform};
pub use tick::{TickInput, tick};
