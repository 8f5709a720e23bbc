//! Drawing surfaces
//!
//! A [`Canvas`] is the only thing the simulator draws through. Its size is
//! fixed when it is created.

pub mod raster;
pub mod recording;

pub use raster::PixelCanvas;
pub use recording::{DrawCommand, RecordingCanvas};

use glam::Vec2;

use crate::color::Color;
use crate::error::Result;

/// A fixed-size drawing surface with clear / draw / flush primitives
pub trait Canvas {
    /// Width and height in pixels
    fn size(&self) -> (u32, u32);

    /// Erase everything drawn since the last clear
    fn clear(&mut self);

    /// Draw a filled circle; parts outside the canvas are clipped
    fn circle(&mut self, center: Vec2, radius: f32, fill: Color);

    /// Flush the current drawing to the visible surface
    fn update(&mut self) -> Result<()>;
}
