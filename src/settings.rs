//! Run configuration
//!
//! Every field has a default matching the classic 800x600 red-ball bounce, so
//! an empty JSON object is a valid settings file.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::consts::*;
use crate::error::{BounceError, Result};
use crate::sim::{Arena, Ball};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Canvas ===
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Color the canvas clears to
    pub background: Color,

    // === Ball ===
    pub ball_radius: f32,
    /// Initial per-frame displacement `[dx, dy]`
    pub ball_velocity: Vec2,
    pub ball_color: Color,

    // === Driver ===
    /// Target frames per second (native host only)
    pub frame_rate: u32,
    /// Stop after this many frames; run until killed when unset
    pub max_frames: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            background: Color::WHITE,

            ball_radius: BALL_RADIUS,
            ball_velocity: Vec2::from_array(BALL_VELOCITY),
            ball_color: Color::RED,

            frame_rate: FRAME_RATE,
            max_frames: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(BounceError::InvalidSettings(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        // Largest surface the WebGL2-level device limits allow
        let max = wgpu::Limits::downlevel_webgl2_defaults().max_texture_dimension_2d;
        if self.width > max || self.height > max {
            return Err(BounceError::InvalidSettings(format!(
                "canvas must be at most {max}x{max}, got {}x{}",
                self.width, self.height
            )));
        }
        if !self.ball_radius.is_finite() || self.ball_radius <= 0.0 {
            return Err(BounceError::InvalidSettings(format!(
                "ball_radius must be positive, got {}",
                self.ball_radius
            )));
        }
        if !self.ball_velocity.is_finite() {
            return Err(BounceError::InvalidSettings(format!(
                "ball_velocity must be finite, got {}",
                self.ball_velocity
            )));
        }
        if self.ball_velocity.x == 0.0 || self.ball_velocity.y == 0.0 {
            return Err(BounceError::InvalidSettings(format!(
                "ball_velocity must be diagonal (both components nonzero), got {}",
                self.ball_velocity
            )));
        }
        if self.frame_rate == 0 {
            return Err(BounceError::InvalidSettings(
                "frame_rate must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.width, self.height)
    }

    /// The ball at the canvas center with the configured velocity
    pub fn ball(&self) -> Ball {
        Ball::centered(
            &self.arena(),
            self.ball_velocity,
            self.ball_radius,
            self.ball_color,
        )
    }
}
