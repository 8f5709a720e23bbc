//! [`Canvas`] backed by the WebGPU pipeline
//!
//! Draw calls only collect triangles; `update` uploads them and presents.

use glam::Vec2;

use super::pipeline::RenderState;
use super::shapes::{circle, pixel_to_ndc};
use super::vertex::Vertex;
use crate::canvas::Canvas;
use crate::color::Color;
use crate::consts::CIRCLE_SEGMENTS;
use crate::error::Result;

pub struct GpuCanvas {
    state: RenderState,
    background: Color,
    /// Triangles drawn since the last clear, already in NDC
    vertices: Vec<Vertex>,
}

impl GpuCanvas {
    pub fn new(state: RenderState, background: Color) -> Self {
        Self {
            state,
            background,
            vertices: Vec::new(),
        }
    }
}

impl Canvas for GpuCanvas {
    fn size(&self) -> (u32, u32) {
        self.state.size
    }

    fn clear(&mut self) {
        self.vertices.clear();
    }

    fn circle(&mut self, center: Vec2, radius: f32, fill: Color) {
        let size = self.state.size;
        self.vertices.extend(
            circle(center, radius, fill.to_array(), CIRCLE_SEGMENTS)
                .into_iter()
                .map(|v| {
                    let ndc = pixel_to_ndc(Vec2::from_array(v.position), size);
                    Vertex::new(ndc.x, ndc.y, v.color)
                }),
        );
    }

    fn update(&mut self) -> Result<()> {
        self.state.render(&self.vertices, self.background)
    }
}
