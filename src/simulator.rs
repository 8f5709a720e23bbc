//! The bouncing-ball frame callback
//!
//! Each frame: step the sim, clear, draw the ball, present.

use crate::canvas::Canvas;
use crate::driver::FrameHandler;
use crate::settings::Settings;
use crate::sim::{Arena, Ball, tick};

/// Owns the ball; the host owns the canvas
#[derive(Debug, Clone)]
pub struct BounceSimulator {
    ball: Ball,
    arena: Arena,
    frame: u64,
    bounces: u64,
}

impl BounceSimulator {
    pub fn new(ball: Ball, arena: Arena) -> Self {
        Self {
            ball,
            arena,
            frame: 0,
            bounces: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.ball(), settings.arena())
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    /// Frames simulated so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Frames in which at least one wall was hit
    pub fn bounces(&self) -> u64 {
        self.bounces
    }

    /// Advance one frame and draw it
    pub fn update(&mut self, canvas: &mut dyn Canvas) {
        let contact = tick(&mut self.ball, &self.arena);
        self.frame += 1;
        if contact.any() {
            self.bounces += 1;
            log::trace!(
                "frame {}: wall hit (x: {}, y: {}) at {:?}, vel now {:?}",
                self.frame,
                contact.x,
                contact.y,
                self.ball.pos,
                self.ball.vel
            );
        }

        canvas.clear();
        canvas.circle(self.ball.pos, self.ball.radius(), self.ball.color());
        if let Err(e) = canvas.update() {
            log::warn!("Frame {} not presented: {}", self.frame, e);
        }
    }
}

impl Default for BounceSimulator {
    fn default() -> Self {
        Self::new(Ball::default(), Arena::default())
    }
}

impl FrameHandler for BounceSimulator {
    fn on_frame(&mut self, canvas: &mut dyn Canvas) {
        self.update(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, PixelCanvas, RecordingCanvas};
    use crate::color::Color;
    use crate::driver::Host;
    use crate::error::{BounceError, Result};
    use glam::Vec2;
    use proptest::prelude::*;

    /// Canvas whose present always fails
    struct LostSurface(RecordingCanvas);

    impl Canvas for LostSurface {
        fn size(&self) -> (u32, u32) {
            self.0.size()
        }
        fn clear(&mut self) {
            self.0.clear()
        }
        fn circle(&mut self, center: Vec2, radius: f32, fill: Color) {
            self.0.circle(center, radius, fill)
        }
        fn update(&mut self) -> Result<()> {
            Err(BounceError::Surface(wgpu::SurfaceError::Lost))
        }
    }

    #[test]
    fn test_frame_draws_clear_circle_update() {
        let mut sim = BounceSimulator::default();
        let mut canvas = RecordingCanvas::new(800, 600);

        sim.update(&mut canvas);

        assert_eq!(
            canvas.take(),
            vec![
                DrawCommand::Clear,
                DrawCommand::Circle {
                    center: Vec2::new(405.0, 305.0),
                    radius: 20.0,
                    fill: Color::RED,
                },
                DrawCommand::Update,
            ]
        );
        assert_eq!(sim.frame(), 1);
        assert_eq!(sim.bounces(), 0);
    }

    #[test]
    fn test_draws_post_move_position_on_bounce() {
        let ball = Ball::new(Vec2::new(785.0, 300.0), Vec2::new(5.0, 5.0), 20.0, Color::RED);
        let mut sim = BounceSimulator::new(ball, Arena::new(800, 600));
        let mut canvas = RecordingCanvas::new(800, 600);

        sim.update(&mut canvas);

        assert_eq!(sim.ball().vel, Vec2::new(-5.0, 5.0));
        assert_eq!(sim.bounces(), 1);
        let drawn: Vec<_> = canvas.visible_circles().cloned().collect();
        assert_eq!(
            drawn,
            vec![DrawCommand::Circle {
                center: Vec2::new(790.0, 305.0),
                radius: 20.0,
                fill: Color::RED,
            }]
        );
    }

    #[test]
    fn test_failed_present_is_not_fatal() {
        let mut sim = BounceSimulator::default();
        let mut canvas = LostSurface(RecordingCanvas::new(800, 600));

        sim.update(&mut canvas);
        sim.update(&mut canvas);

        assert_eq!(sim.frame(), 2);
        assert_eq!(sim.ball().pos, Vec2::new(410.0, 310.0));
    }

    #[test]
    fn test_hosted_on_pixel_canvas() {
        let mut host = Host::new(PixelCanvas::new(800, 600, Color::WHITE).unwrap(), 60);
        host.animate(BounceSimulator::default());

        for _ in 0..3 {
            host.step();
        }

        // Ball center after three frames is (415, 315)
        let canvas = host.canvas();
        assert_eq!(canvas.frames_presented(), 3);
        assert_eq!(canvas.pixel(415, 315), Some([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(405, 305), Some([255, 0, 0, 255]));
        assert_eq!(canvas.pixel(390, 290), Some([255, 255, 255, 255]));
    }

    proptest! {
        #[test]
        fn prop_update_never_panics(
            x in -1.0e6f32..1.0e6,
            y in -1.0e6f32..1.0e6,
            dx in -1.0e4f32..1.0e4,
            dy in -1.0e4f32..1.0e4,
        ) {
            let ball = Ball::new(Vec2::new(x, y), Vec2::new(dx, dy), 20.0, Color::RED);
            let mut sim = BounceSimulator::new(ball, Arena::new(64, 48));
            let mut canvas = PixelCanvas::new(64, 48, Color::WHITE).unwrap();

            for _ in 0..4 {
                sim.update(&mut canvas);
            }

            prop_assert_eq!(sim.frame(), 4);
            prop_assert_eq!(canvas.frames_presented(), 4);
        }
    }
}
