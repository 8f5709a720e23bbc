//! Shape tessellation for the GPU canvas

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Map canvas pixels (origin top-left, y down) to NDC (origin center, y up)
#[inline]
pub fn pixel_to_ndc(p: Vec2, size: (u32, u32)) -> Vec2 {
    let (w, h) = (size.0 as f32, size.1 as f32);
    Vec2::new(p.x / w * 2.0 - 1.0, 1.0 - p.y / h * 2.0)
}

/// Filled circle as a triangle list, in canvas pixel coordinates
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}
