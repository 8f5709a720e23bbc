//! Wall contact detection
//!
//! A wall is touched when the ball's extent crosses it: `pos + r > max` or
//! `pos - r < 0`, tested per axis. Touching exactly (`pos + r == max`) does not
//! count.

use glam::Vec2;

use super::state::Arena;

/// Which axes are in contact with a wall
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Left or right wall
    pub x: bool,
    /// Top or bottom wall
    pub y: bool,
}

impl WallContact {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

#[inline]
fn crosses(pos: f32, radius: f32, max: f32) -> bool {
    pos + radius > max || pos - radius < 0.0
}

/// Check a ball of `radius` centered at `pos` against the arena walls
pub fn wall_contact(pos: Vec2, radius: f32, arena: &Arena) -> WallContact {
    let extent = arena.extent();
    WallContact {
        x: crosses(pos.x, radius, extent.x),
        y: crosses(pos.y, radius, extent.y),
    }
}
