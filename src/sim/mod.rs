//! Fixed-tick simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed timestep only, movement in pixels per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod platform;
pub mod player;
pub mod state;
pub mod tick;

pub use collision::{Rect, lands_on};
pub use platform::{Platform, advance, prune, spawn};
pub use player::{Contact, Motion, Player};
pub use state::{GameSession, SessionConfig, SessionPhase};
pub use tick::{TickInput, TickOutcome, score_passed, tick};
