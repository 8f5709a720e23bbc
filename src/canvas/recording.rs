//! Canvas that records draw calls instead of rasterizing them

use glam::Vec2;

use super::Canvas;
use crate::color::Color;
use crate::error::Result;

/// A single recorded call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        fill: Color,
    },
    Update,
}

/// Headless canvas keeping every call since the last [`RecordingCanvas::take`]
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
    frames_presented: u64,
}

impl RecordingCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            frames_presented: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain the recorded commands
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of `update` calls so far
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    /// Circles drawn since the most recent clear
    pub fn visible_circles(&self) -> impl Iterator<Item = &DrawCommand> {
        let start = self
            .commands
            .iter()
            .rposition(|c| *c == DrawCommand::Clear)
            .map_or(0, |i| i + 1);
        self.commands[start..]
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn circle(&mut self, center: Vec2, radius: f32, fill: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            fill,
        });
    }

    fn update(&mut self) -> Result<()> {
        self.commands.push(DrawCommand::Update);
        self.frames_presented += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut canvas = RecordingCanvas::new(800, 600);
        canvas.clear();
        canvas.circle(Vec2::new(1.0, 2.0), 3.0, Color::RED);
        canvas.update().unwrap();

        assert_eq!(canvas.size(), (800, 600));
        assert_eq!(canvas.frames_presented(), 1);
        assert_eq!(
            canvas.take(),
            vec![
                DrawCommand::Clear,
                DrawCommand::Circle {
                    center: Vec2::new(1.0, 2.0),
                    radius: 3.0,
                    fill: Color::RED,
                },
                DrawCommand::Update,
            ]
        );
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn test_clear_hides_earlier_circles() {
        let mut canvas = RecordingCanvas::new(100, 100);
        canvas.circle(Vec2::new(10.0, 10.0), 5.0, Color::RED);
        canvas.circle(Vec2::new(20.0, 20.0), 5.0, Color::RED);
        assert_eq!(canvas.visible_circles().count(), 2);

        canvas.clear();
        assert_eq!(canvas.visible_circles().count(), 0);

        canvas.circle(Vec2::new(30.0, 30.0), 5.0, Color::BLACK);
        assert_eq!(canvas.visible_circles().count(), 1);
    }
}
