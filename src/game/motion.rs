//! Per-bug motion with reflective boundary bounce
//!
//! Each axis is handled independently: if the pre-step coordinate already
//! sits at or beyond a wall, that axis's velocity is negated before the
//! position update. A bug can therefore read one frame at/past the wall
//! before heading back in - that lax bounce is the intended behavior, not
//! a clamping bug to fix.

use super::state::{Bug, PlayArea};
use crate::consts::BUG_SIZE;

/// Advance one bug by one animation frame
pub fn step(bug: &mut Bug, area: &PlayArea) {
    if bug.pos.x <= 0.0 || bug.pos.x >= area.width - BUG_SIZE {
        bug.vel.x = -bug.vel.x;
    }
    if bug.pos.y <= 0.0 || bug.pos.y >= area.height - BUG_SIZE {
        bug.vel.y = -bug.vel.y;
    }
    bug.pos += bug.vel;
}
