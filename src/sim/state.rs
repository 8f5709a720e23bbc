//! Ball and arena state
//!
//! The ball's radius and color are fixed at construction; only position and
//! velocity change, and only through [`super::tick`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::*;

/// The rectangular region the ball bounces in, in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: u32,
    pub height: u32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
        }
    }
}

impl Arena {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Arena size as a float vector (right and bottom wall coordinates)
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Center point, halved with integer division
    pub fn center(&self) -> Vec2 {
        Vec2::new((self.width / 2) as f32, (self.height / 2) as f32)
    }
}

/// The ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    /// Displacement per frame
    pub vel: Vec2,
    radius: f32,
    color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Color) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Ball resting at the arena center with the given velocity
    pub fn centered(arena: &Arena, vel: Vec2, radius: f32, color: Color) -> Self {
        Self::new(arena.center(), vel, radius, color)
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::centered(
            &Arena::default(),
            Vec2::from_array(BALL_VELOCITY),
            BALL_RADIUS,
            Color::RED,
        )
    }
}
