//! Per-frame game loop
//!
//! One loop owned by the session steps every live bug, instead of each bug
//! re-scheduling its own callback. Stopping the session stops all motion in
//! one place, so there is no per-entity callback to forget to cancel.

use super::motion;
use super::state::GameSession;

/// Advance every live bug by one animation frame. No-op while the session
/// is inactive.
pub fn tick(session: &mut GameSession) {
    if !session.active {
        return;
    }
    let area = session.area;
    for bug in &mut session.bugs {
        motion::step(bug, &area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::state::PlayArea;

    #[test]
    fn test_tick_moves_every_bug() {
        let mut s = GameSession::new(7, PlayArea::new(800.0, 600.0));
        s.start();
        let before: Vec<_> = s.bugs.iter().map(|b| b.pos).collect();
        tick(&mut s);
        for (bug, old) in s.bugs.iter().zip(before) {
            assert_ne!(bug.pos, old, "bug {} did not move", bug.id);
        }
    }

    #[test]
    fn test_tick_after_stop_mutates_nothing() {
        let mut s = GameSession::new(7, PlayArea::new(800.0, 600.0));
        s.start();
        s.stop();
        tick(&mut s);
        assert!(s.bugs.is_empty());
        assert!(!s.active);
    }

    #[test]
    fn test_tick_on_idle_session_is_a_noop() {
        let mut s = GameSession::new(7, PlayArea::new(800.0, 600.0));
        tick(&mut s);
        assert!(s.bugs.is_empty());
    }

    #[test]
    fn test_population_constant_across_ticks_and_squashes() {
        let mut s = GameSession::new(7, PlayArea::new(800.0, 600.0));
        s.start();
        for i in 0..200 {
            tick(&mut s);
            if i % 10 == 0 {
                let id = s.bugs[0].id;
                assert_eq!(s.bugs.len(), crate::consts::SPAWN_COUNT);
                s.squash(id);
                assert_eq!(s.bugs.len(), crate::consts::SPAWN_COUNT);
            }
        }
        assert_eq!(s.score, 20);
    }
}
