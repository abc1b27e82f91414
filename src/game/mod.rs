//! Bug-squash mini-game core
//!
//! All gameplay logic lives here. This module must stay platform-free:
//! - Plain numeric positions, stepped once per animation frame
//! - Seeded RNG only
//! - No DOM or rendering dependencies

pub mod konami;
pub mod motion;
pub mod state;
pub mod tick;

pub use konami::{KONAMI_SEQUENCE, MatchResult, SequenceMatcher};
pub use motion::step;
pub use state::{Bug, GameSession, PlayArea};
pub use tick::tick;
