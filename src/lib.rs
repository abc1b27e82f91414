//! ClickFix.cloud - interactive site front-end
//!
//! Core modules:
//! - `game`: The bug-squash easter-egg mini-game (matcher, motion, session)
//! - `ui`: Pure UI state helpers (carousel, scroll progress, timings)
//! - `settings`: Site preferences persisted to LocalStorage
//! - `audio`: Web Audio click-sound synthesis
//! - `contact`: Contact-form submission to the EmailJS relay

pub mod audio;
pub mod contact;
pub mod game;
pub mod settings;
pub mod ui;

pub use game::{GameSession, MatchResult, SequenceMatcher};
pub use settings::Settings;

use glam::Vec2;

/// Site configuration constants
pub mod consts {
    /// Number of bugs alive at any instant while the game runs
    pub const SPAWN_COUNT: usize = 10;
    /// Rendered bug size in pixels (square)
    pub const BUG_SIZE: f32 = 40.0;

    /// Spawn speed range, pixels per animation frame
    pub const BUG_MIN_SPEED: f32 = 0.5;
    pub const BUG_MAX_SPEED: f32 = 2.0;

    /// Delay between a Konami match and game start (ms)
    pub const GAME_START_DELAY_MS: i32 = 1000;
    /// Konami banner auto-hide delay (ms)
    pub const BANNER_HIDE_MS: i32 = 7000;
    /// Contact-form status message auto-hide delay (ms)
    pub const FORM_MESSAGE_HIDE_MS: i32 = 5000;

    /// Fixed header height compensated when smooth-scrolling to anchors (px)
    pub const ANCHOR_SCROLL_OFFSET: f64 = 80.0;
}

/// Velocity vector from a heading angle and speed magnitude
#[inline]
pub fn velocity_from_angle(angle: f32, speed: f32) -> Vec2 {
    Vec2::new(angle.cos() * speed, angle.sin() * speed)
}
