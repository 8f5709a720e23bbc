//! Software framebuffer canvas
//!
//! Draws into a back buffer; `update` copies it to the front buffer, which is
//! what readers see. A pixel belongs to a circle when its center lies inside
//! the circle.

use glam::Vec2;

use super::Canvas;
use crate::color::Color;
use crate::error::{BounceError, Result};

#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    background: [u8; 4],
    back: Vec<[u8; 4]>,
    front: Vec<[u8; 4]>,
    frames_presented: u64,
}

impl PixelCanvas {
    /// Allocate front and back buffers cleared to `background`
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self> {
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|len| {
                len.checked_mul(size_of::<[u8; 4]>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or_else(|| {
                BounceError::InvalidSettings(format!("canvas {width}x{height} is too large"))
            })?;
        let background = background.to_rgba8();
        Ok(Self {
            width,
            height,
            background,
            back: vec![background; len],
            front: vec![background; len],
            frames_presented: 0,
        })
    }

    /// Presented pixel at (x, y), or None outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        self.index(x, y).map(|i| self.front[i])
    }

    /// Presented frame, row-major RGBA
    pub fn frame(&self) -> &[[u8; 4]] {
        &self.front
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    /// Clip a [lo, hi] float span to pixel indices [0, max)
    fn span(lo: f32, hi: f32, max: u32) -> std::ops::Range<u32> {
        let start = lo.floor().clamp(0.0, max as f32) as u32;
        let end = hi.ceil().clamp(0.0, max as f32) as u32;
        start..end
    }
}

/// Source-over blend of `src` onto `dst`
fn blend(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    let a = src[3] as u32;
    if a == 255 {
        return src;
    }
    let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a)) / 255) as u8;
    [
        mix(src[0], dst[0]),
        mix(src[1], dst[1]),
        mix(src[2], dst[2]),
        (a + dst[3] as u32 * (255 - a) / 255) as u8,
    ]
}

impl Canvas for PixelCanvas {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.back.fill(self.background);
    }

    fn circle(&mut self, center: Vec2, radius: f32, fill: Color) {
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return;
        }
        let rgba = fill.to_rgba8();
        let r2 = radius * radius;

        for y in Self::span(center.y - radius, center.y + radius, self.height) {
            let dy = y as f32 + 0.5 - center.y;
            for x in Self::span(center.x - radius, center.x + radius, self.width) {
                let dx = x as f32 + 0.5 - center.x;
                if dx * dx + dy * dy <= r2 {
                    let i = y as usize * self.width as usize + x as usize;
                    self.back[i] = blend(self.back[i], rgba);
                }
            }
        }
    }

    fn update(&mut self) -> Result<()> {
        self.front.copy_from_slice(&self.back);
        self.frames_presented += 1;
        Ok(())
    }
}
