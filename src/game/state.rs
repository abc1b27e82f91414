//! Game session state and entity types
//!
//! The session exclusively owns every live bug. Score, entities and the RNG
//! live here as instance fields - nothing about a run is global or persisted.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::velocity_from_angle;

/// One squashable target
#[derive(Debug, Clone)]
pub struct Bug {
    pub id: u32,
    /// Top-left corner in play-area pixels
    pub pos: Vec2,
    /// Pixels per animation frame
    pub vel: Vec2,
}

/// The bounded region bugs move within
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayArea {
    pub width: f32,
    pub height: f32,
}

impl PlayArea {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// One run of the bug-squash game, from start to stop
#[derive(Debug)]
pub struct GameSession {
    pub score: u32,
    pub active: bool,
    pub bugs: Vec<Bug>,
    pub area: PlayArea,
    rng: Pcg32,
    next_id: u32,
}

impl GameSession {
    /// Create an idle session (no bugs until [`start`](Self::start))
    pub fn new(seed: u64, area: PlayArea) -> Self {
        Self {
            score: 0,
            active: false,
            bugs: Vec::with_capacity(SPAWN_COUNT),
            area,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Begin a run: score zeroed, any previous bugs discarded, a fresh batch
    /// of [`SPAWN_COUNT`] spawned. Safe to call mid-session - the state is
    /// reset cleanly rather than accumulating duplicates.
    pub fn start(&mut self) {
        self.score = 0;
        self.bugs.clear();
        self.active = true;
        for _ in 0..SPAWN_COUNT {
            self.spawn_bug();
        }
        log::info!("bug game started ({} bugs)", self.bugs.len());
    }

    /// End the run and destroy all bugs. The tick loop becomes a no-op, so
    /// no further motion is computed for any of them.
    pub fn stop(&mut self) {
        self.active = false;
        self.bugs.clear();
        log::info!("bug game stopped (final score {})", self.score);
    }

    /// Squash the named bug: remove it, bump the score, and spawn exactly one
    /// replacement so the population stays at [`SPAWN_COUNT`].
    ///
    /// An unknown id is a no-op returning `false` - a squashed bug's click
    /// handler must not fire twice.
    pub fn squash(&mut self, id: u32) -> bool {
        let Some(idx) = self.bugs.iter().position(|b| b.id == id) else {
            return false;
        };
        self.bugs.swap_remove(idx);
        self.score += 1;
        self.spawn_bug();
        true
    }

    /// Replace the play-area bounds (e.g. on window resize)
    pub fn set_area(&mut self, area: PlayArea) {
        self.area = area;
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one bug at a uniform position with a uniform heading and a
    /// speed drawn from the fixed range.
    fn spawn_bug(&mut self) {
        let x = self.rng.random_range(0.0..(self.area.width - BUG_SIZE).max(1.0));
        let y = self.rng.random_range(0.0..(self.area.height - BUG_SIZE).max(1.0));
        let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
        let speed = self.rng.random_range(BUG_MIN_SPEED..BUG_MAX_SPEED);

        let id = self.next_entity_id();
        self.bugs.push(Bug {
            id,
            pos: Vec2::new(x, y),
            vel: velocity_from_angle(angle, speed),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::new(42, PlayArea::new(800.0, 600.0))
    }

    #[test]
    fn test_new_session_is_idle() {
        let s = session();
        assert!(!s.active);
        assert_eq!(s.score, 0);
        assert!(s.bugs.is_empty());
    }

    #[test]
    fn test_start_spawns_exact_batch() {
        let mut s = session();
        s.start();
        assert!(s.active);
        assert_eq!(s.score, 0);
        assert_eq!(s.bugs.len(), SPAWN_COUNT);
    }

    #[test]
    fn test_start_mid_session_resets_cleanly() {
        let mut s = session();
        s.start();
        let first = s.bugs[0].id;
        assert!(s.squash(first));
        assert_eq!(s.score, 1);

        s.start();
        assert_eq!(s.score, 0);
        assert_eq!(s.bugs.len(), SPAWN_COUNT);
    }

    #[test]
    fn test_spawned_bugs_within_bounds_and_speed_range() {
        let mut s = session();
        s.start();
        for bug in &s.bugs {
            assert!(bug.pos.x >= 0.0 && bug.pos.x <= s.area.width - BUG_SIZE);
            assert!(bug.pos.y >= 0.0 && bug.pos.y <= s.area.height - BUG_SIZE);
            let speed = bug.vel.length();
            assert!((BUG_MIN_SPEED..BUG_MAX_SPEED).contains(&speed));
        }
    }

    #[test]
    fn test_squash_increments_score_and_holds_population() {
        let mut s = session();
        s.start();
        let id = s.bugs[3].id;

        assert_eq!(s.bugs.len(), SPAWN_COUNT);
        assert!(s.squash(id));
        assert_eq!(s.score, 1);
        assert_eq!(s.bugs.len(), SPAWN_COUNT);
        assert!(s.bugs.iter().all(|b| b.id != id));
    }

    #[test]
    fn test_double_squash_is_a_noop() {
        let mut s = session();
        s.start();
        let id = s.bugs[0].id;
        assert!(s.squash(id));

        let score = s.score;
        let count = s.bugs.len();
        assert!(!s.squash(id));
        assert_eq!(s.score, score);
        assert_eq!(s.bugs.len(), count);
    }

    #[test]
    fn test_squash_unknown_id_is_a_noop() {
        let mut s = session();
        s.start();
        assert!(!s.squash(9999));
        assert_eq!(s.score, 0);
        assert_eq!(s.bugs.len(), SPAWN_COUNT);
    }

    #[test]
    fn test_stop_destroys_all_bugs() {
        let mut s = session();
        s.start();
        s.stop();
        assert!(!s.active);
        assert!(s.bugs.is_empty());
    }

    #[test]
    fn test_replacement_gets_fresh_id() {
        let mut s = session();
        s.start();
        let id = s.bugs[0].id;
        s.squash(id);
        let newest = s.bugs.iter().map(|b| b.id).max().unwrap();
        assert!(newest > SPAWN_COUNT as u32);
    }
}
